//! Individual tree passes, composed per book by the compiler.

pub(crate) mod graphql;
pub(crate) mod imports;
pub(crate) mod media;
pub(crate) mod placeholders;
