//! feedpost-ui - TUI library for feedpost
//!
//! This crate provides the terminal front end for a post view.
//!
//! # Overview
//!
//! The TUI provides:
//! - Header with avatar, author and publication time
//! - Post body with paragraphs and links
//! - Comment form with required-field feedback
//! - Comment list with per-item deletion
//!
//! # Example
//!
//! ```ignore
//! use feedpost_core::view::PostView;
//! use feedpost_ui::App;
//!
//! let mut app = App::new(PostView::new(post), &config)?;
//! app.run()?;
//! ```

pub mod app;
pub mod input;
pub mod theme;
pub mod widgets;

pub use app::{App, AppMode, AppState, Focus};
pub use input::{Action, InputHandler};
pub use theme::Theme;
