//! Post view module
//!
//! The stateful view model and the render model it produces.

pub mod post_view;
pub mod render;

pub use post_view::{is_missing_comment, PostView};
pub use render::{
    BodyLine, CommentView, FormView, HeaderView, PostRender, TimeView, LINK_PLACEHOLDER_HREF,
};
