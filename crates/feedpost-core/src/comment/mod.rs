//! Comment system module
//!
//! Handles the comment model and the stores that hold a post's thread.

pub mod model;
pub mod store;

pub use model::Comment;
pub use store::{CommentStore, MemoryCommentStore};
