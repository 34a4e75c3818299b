//! Comment data models

use crate::post::format_relative;
use crate::types::CommentId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment in a post's thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Comment text
    pub content: String,
    /// Display name of whoever wrote it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    /// When the comment was created
    pub created_at: DateTime<Utc>,
}

impl Comment {
    /// Create a comment with a fresh id, stamped now
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: CommentId::new(),
            content: content.into(),
            author: None,
            created_at: Utc::now(),
        }
    }

    /// Set the display name
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// How long ago the comment was written, relative to `now`
    pub fn created_relative(&self, now: &DateTime<Utc>) -> String {
        format_relative(&self.created_at.fixed_offset(), now)
    }
}
