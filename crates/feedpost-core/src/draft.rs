//! Comment draft and its validation state

use crate::error::{FeedError, Result};

/// In-progress comment text
///
/// The only rule is that the text is required: an empty draft cannot be
/// submitted. A rejected attempt leaves a message on the draft that stays
/// until the text is edited again.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Draft {
    text: String,
    error_message: Option<String>,
}

impl Draft {
    /// Create an empty, valid draft
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the text, clearing any validation message
    pub fn edit(&mut self, value: impl Into<String>) {
        self.error_message = None;
        self.text = value.into();
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Check if the text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Submitting is allowed iff the text is non-empty
    pub fn can_submit(&self) -> bool {
        !self.is_empty()
    }

    /// No validation message is pending
    pub fn is_valid(&self) -> bool {
        self.error_message.is_none()
    }

    /// Pending validation message
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// Record a failed required-field check
    pub fn reject_empty(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Check the required-field rule without changing state
    pub fn check_required(&self) -> Result<()> {
        if self.is_empty() {
            return Err(FeedError::Validation(
                "Comment content cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Take the text out, leaving an empty valid draft
    pub fn take(&mut self) -> String {
        self.error_message = None;
        std::mem::take(&mut self.text)
    }
}
