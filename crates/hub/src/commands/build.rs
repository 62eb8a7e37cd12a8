//! `hub build` command implementation.

use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use hub_code::Theme;
use hub_pipeline::{Compiler, Document};
use hub_versions::{ReleaseTags, VersionResolver, VersionSet, ALL_BOOKS};

use crate::error::CliError;
use crate::output::Output;

/// Arguments for the build command.
#[derive(Args)]
pub(crate) struct BuildArgs {
    /// Workspace root containing the docs checkouts (default: current directory).
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Output directory for page artifacts (default: <root>/.hub/build/).
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Documentation edition to compile.
    #[arg(long, value_enum, default_value = "default")]
    edition: Edition,

    /// Compile only this book (checkout directory name).
    #[arg(long)]
    book: Option<String>,

    /// Enable verbose logging.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum, PartialEq, Eq)]
pub(crate) enum Edition {
    Default,
    Nightly,
    Beta4,
}

impl From<Edition> for VersionSet {
    fn from(edition: Edition) -> Self {
        match edition {
            Edition::Default => Self::Default,
            Edition::Nightly => Self::Nightly,
            Edition::Beta4 => Self::Beta4,
        }
    }
}

impl BuildArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();
        let version_set = VersionSet::from(self.edition);

        let checkout = self.root.join(version_set.docs_root());
        if !checkout.is_dir() {
            return Err(CliError::Validation(format!(
                "docs checkout not found: {}",
                checkout.display()
            )));
        }

        let output_dir = self
            .output_dir
            .unwrap_or_else(|| self.root.join(".hub/build"));

        output.info(&format!("Source: {}", checkout.display()));
        output.info(&format!("Output: {}", output_dir.display()));

        // Missing manifests degrade source-link pinning, nothing else.
        let tags = match VersionResolver::new(&self.root).resolve_all(version_set) {
            Ok(tags) => tags,
            Err(err) => {
                output.warning(&format!(
                    "release tags unavailable, master links stay unpinned: {err}"
                ));
                ReleaseTags::default()
            }
        };

        let mut compiler = Compiler::new(&self.root, tags);
        let mut pages = 0_usize;
        let mut failures = 0_usize;

        for book in ALL_BOOKS {
            if let Some(only) = &self.book
                && book.repo_dir() != only
            {
                continue;
            }
            let docs_dir = checkout.join(book.repo_dir()).join(book.doc_root());
            if !docs_dir.is_dir() {
                output.warning(&format!(
                    "{}: no docs at {}, skipping",
                    book.repo_dir(),
                    docs_dir.display()
                ));
                continue;
            }

            let mut sources = Vec::new();
            collect_markdown(&docs_dir, &mut sources)?;
            sources.sort();

            for source in sources {
                let origin_path = origin_path(&checkout, &source);
                match compile_one(
                    &mut compiler,
                    &source,
                    &origin_path,
                    version_set,
                    &output_dir,
                ) {
                    Ok(()) => pages += 1,
                    // A content defect aborts its document, never the build.
                    Err(err) => {
                        output.error(&format!("{err}"));
                        failures += 1;
                    }
                }
            }
            output.info(&format!("{}: done", book.repo_dir()));
        }

        if failures > 0 {
            return Err(CliError::Validation(format!(
                "{failures} document(s) failed to compile"
            )));
        }
        output.success(&format!(
            "Compiled {pages} page(s) to {}",
            output_dir.display()
        ));
        Ok(())
    }
}

/// Compile one source file for both themes and write its artifacts.
fn compile_one(
    compiler: &mut Compiler,
    source: &Path,
    origin_path: &str,
    version_set: VersionSet,
    output_dir: &Path,
) -> Result<(), CliError> {
    let raw_content = std::fs::read_to_string(source)?;
    let document = Document::new(raw_content, origin_path, version_set);

    for theme in [Theme::Light, Theme::Dark] {
        let page = compiler.compile(&document, theme)?;
        let artifact = output_dir
            .join(theme.name())
            .join(Path::new(origin_path).with_extension("json"));
        if let Some(parent) = artifact.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&artifact, serde_json::to_string_pretty(&page)?)?;
    }
    Ok(())
}

/// Origin path of a source file, relative to the checkout root, with
/// forward slashes.
fn origin_path(checkout: &Path, source: &Path) -> String {
    source
        .strip_prefix(checkout)
        .unwrap_or(source)
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Recursively collect markdown files under a directory.
fn collect_markdown(dir: &Path, into: &mut Vec<PathBuf>) -> std::io::Result<()> {
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_dir() {
            collect_markdown(&path, into)?;
        } else if path.extension().is_some_and(|ext| ext == "md") {
            into.push(path);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_collect_markdown_recurses() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("nested")).unwrap();
        std::fs::write(dir.path().join("index.md"), "# hi").unwrap();
        std::fs::write(dir.path().join("nested/page.md"), "# hi").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "skip").unwrap();

        let mut sources = Vec::new();
        collect_markdown(dir.path(), &mut sources).unwrap();
        sources.sort();
        assert_eq!(sources.len(), 2);
    }

    #[test]
    fn test_origin_path_is_checkout_relative() {
        let origin = origin_path(
            Path::new("/work/docs"),
            Path::new("/work/docs/sway/docs/book/src/index.md"),
        );
        assert_eq!(origin, "sway/docs/book/src/index.md");
    }

    #[test]
    fn test_edition_maps_to_version_set() {
        assert_eq!(VersionSet::from(Edition::Beta4), VersionSet::Beta4);
    }
}
