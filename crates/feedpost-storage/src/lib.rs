//! feedpost-storage - Storage library for feedpost
//!
//! This crate provides a JSON file implementation of `CommentStore` so a
//! post's thread can outlive the process.

mod thread_store;

pub use thread_store::{ThreadDir, JsonCommentStore, ThreadFile, CURRENT_SCHEMA_VERSION};
