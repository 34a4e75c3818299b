//! Post module
//!
//! The immutable post supplied by the caller and the renderings of its
//! publication date.

pub mod date;
pub mod model;

pub use date::{format_absolute, format_iso, format_relative, PublishedDate};
pub use model::{parse_published_at, Author, ContentLine, Post};
