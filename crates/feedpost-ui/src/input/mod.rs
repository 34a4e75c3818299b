//! Input handling
//!
//! Translates key events into [`Action`]s. Which keys mean what depends on
//! the mode and on whether the form or the comment list has focus.

use crate::app::{AppMode, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use feedpost_core::types::CommentId;

/// Something the user asked for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Type a character into the draft
    Insert(char),
    /// Insert a line break into the draft
    Newline,
    /// Delete the character before the cursor
    Backspace,
    /// Move the draft cursor
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
    /// Submit the comment form
    Submit,
    /// Switch focus between form and comment list
    ToggleFocus,
    /// Move the comment selection
    SelectNext,
    SelectPrev,
    /// Delete the selected comment
    DeleteSelected,
    /// Delete a specific comment
    DeleteComment(CommentId),
    /// Show key help
    Help,
    /// Close key help
    CloseHelp,
    /// Leave the application
    Quit,
    /// Nothing to do
    None,
}

/// Input handler
pub struct InputHandler;

impl InputHandler {
    /// Create a new input handler
    pub fn new() -> Self {
        Self
    }

    /// Map a key event to an action
    pub fn map(&self, key: KeyEvent, mode: AppMode, focus: Focus) -> Action {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }

        match mode {
            AppMode::Help => Action::CloseHelp,
            AppMode::Normal => match focus {
                Focus::Form => Self::map_form(key),
                Focus::Comments => Self::map_comments(key),
            },
        }
    }

    fn map_form(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => Action::Newline,
            KeyCode::Enter => Action::Submit,
            KeyCode::Tab | KeyCode::Esc => Action::ToggleFocus,
            KeyCode::Backspace => Action::Backspace,
            KeyCode::Left => Action::CursorLeft,
            KeyCode::Right => Action::CursorRight,
            KeyCode::Home => Action::CursorHome,
            KeyCode::End => Action::CursorEnd,
            KeyCode::Char(c) => Action::Insert(c),
            _ => Action::None,
        }
    }

    fn map_comments(key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
            KeyCode::Char('?') => Action::Help,
            KeyCode::Tab | KeyCode::Char('i') | KeyCode::Char('c') => Action::ToggleFocus,
            KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
            KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
            KeyCode::Char('x') | KeyCode::Delete => Action::DeleteSelected,
            _ => Action::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
