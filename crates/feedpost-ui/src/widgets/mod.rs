//! Widgets for the post view

pub mod avatar;
pub mod comment_item;

pub use avatar::{initials, Avatar};
pub use comment_item::{CommentItem, COMMENT_ITEM_HEIGHT};
