//! Render model
//!
//! Plain data describing what a post view shows. Front ends draw these
//! without looking at the view's internals.

use crate::post::ContentLine;
use crate::types::{CommentId, PostId};
use serde::Serialize;

/// Target of link lines; the data model carries no URL
pub const LINK_PLACEHOLDER_HREF: &str = "#";

/// Heading of the comment form
pub const FORM_LABEL: &str = "Deixe seu feedback";

/// Placeholder of the comment text area
pub const FORM_PLACEHOLDER: &str = "Deixe um comentário";

/// Label of the submit button
pub const SUBMIT_LABEL: &str = "Publicar";

/// Everything a post view shows at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PostRender {
    pub id: PostId,
    pub header: HeaderView,
    pub body: Vec<BodyLine>,
    pub form: FormView,
    pub comments: Vec<CommentView>,
}

/// Author block and time element
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeaderView {
    pub avatar_url: String,
    pub author_name: String,
    pub author_role: String,
    pub time: TimeView,
}

/// Publication time as shown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeView {
    /// Visible text, relative to the render clock
    pub text: String,
    /// Hover/accessible title, absolute
    pub title: String,
    /// Machine-readable timestamp
    pub datetime: String,
}

/// One rendered body line
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BodyLine {
    /// Plain text block
    Text { text: String },
    /// Hyperlink displaying `text`
    Anchor { text: String, href: String },
}

impl BodyLine {
    /// Render one content line; unsupported kinds render nothing
    pub fn from_content(line: &ContentLine) -> Option<Self> {
        match line {
            ContentLine::Paragraph(text) => Some(BodyLine::Text { text: text.clone() }),
            ContentLine::Link(text) => Some(BodyLine::Anchor {
                text: text.clone(),
                href: LINK_PLACEHOLDER_HREF.to_string(),
            }),
            ContentLine::Unsupported { .. } => None,
        }
    }

    /// Displayed text
    pub fn text(&self) -> &str {
        match self {
            BodyLine::Text { text } | BodyLine::Anchor { text, .. } => text,
        }
    }
}

/// Comment form state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub label: String,
    pub placeholder: String,
    pub value: String,
    pub submit_label: String,
    pub submit_enabled: bool,
    pub error_message: Option<String>,
}

/// One comment as listed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommentView {
    pub id: CommentId,
    pub content: String,
    pub author: Option<String>,
    pub created: String,
}
