//! feedpost-core - Core library for feedpost
//!
//! This crate provides the post data model, the comment store abstraction,
//! draft validation, Portuguese date rendering and the `PostView` view model
//! that front ends draw from.

pub mod error;
pub mod types;
pub mod config;
pub mod post;
pub mod comment;
pub mod draft;
pub mod view;

pub use error::{FeedError, Result};
pub use types::*;
