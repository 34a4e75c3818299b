//! Application state and action handling

use crate::input::Action;
use feedpost_core::comment::CommentStore;
use feedpost_core::error::FeedError;
use feedpost_core::view::PostView;
use tracing::warn;

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppMode {
    /// Normal interaction
    #[default]
    Normal,
    /// Key help overlay
    Help,
}

/// Which part of the view receives keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The comment form
    #[default]
    Form,
    /// The comment list
    Comments,
}

/// Application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Focused area
    pub focus: Focus,
    /// Selected comment index
    pub selected: usize,
    /// Draft cursor position, in characters
    pub editor_cursor: usize,
    /// Status message
    pub message: Option<String>,
    /// Should quit
    pub should_quit: bool,
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Set status message
    pub fn set_message(&mut self, msg: impl Into<String>) {
        self.message = Some(msg.into());
    }

    /// Clear status message
    pub fn clear_message(&mut self) {
        self.message = None;
    }

    /// Apply one action to the view
    pub fn apply<S: CommentStore>(&mut self, view: &mut PostView<S>, action: Action) {
        if action != Action::None {
            self.clear_message();
        }

        match action {
            Action::Insert(c) => self.insert_char(view, c),
            Action::Newline => self.insert_char(view, '\n'),
            Action::Backspace => self.backspace(view),
            Action::CursorLeft => {
                self.editor_cursor = self.editor_cursor.saturating_sub(1);
            }
            Action::CursorRight => {
                self.editor_cursor = (self.editor_cursor + 1).min(view.draft().len());
            }
            Action::CursorHome => self.editor_cursor = 0,
            Action::CursorEnd => self.editor_cursor = view.draft().len(),
            Action::Submit => self.submit(view),
            Action::ToggleFocus => {
                self.focus = match self.focus {
                    Focus::Form => Focus::Comments,
                    Focus::Comments => Focus::Form,
                };
                self.clamp_selection(view.comments().len());
            }
            Action::SelectNext => {
                self.selected += 1;
                self.clamp_selection(view.comments().len());
            }
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
            }
            Action::DeleteSelected => match view.comments().get(self.selected) {
                Some(comment) => {
                    let id = comment.id.clone();
                    self.apply(view, Action::DeleteComment(id));
                }
                None => self.set_message("Nenhum comentário selecionado"),
            },
            Action::DeleteComment(id) => match view.delete_comment(&id) {
                Ok(_) => {
                    self.clamp_selection(view.comments().len());
                    self.set_message("Comentário apagado");
                }
                Err(e) => {
                    warn!("Delete failed: {}", e);
                    self.set_message(format!("Falha ao apagar: {}", e));
                }
            },
            Action::Help => self.mode = AppMode::Help,
            Action::CloseHelp => self.mode = AppMode::Normal,
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn insert_char<S: CommentStore>(&mut self, view: &mut PostView<S>, c: char) {
        let mut text = view.draft().text().to_string();
        let byte_pos = char_to_byte_pos(&text, self.editor_cursor);
        text.insert(byte_pos, c);
        view.edit_draft(text);
        self.editor_cursor += 1;
    }

    fn backspace<S: CommentStore>(&mut self, view: &mut PostView<S>) {
        if self.editor_cursor == 0 {
            return;
        }
        self.editor_cursor -= 1;
        let mut text = view.draft().text().to_string();
        let byte_pos = char_to_byte_pos(&text, self.editor_cursor);
        if byte_pos < text.len() {
            text.remove(byte_pos);
        }
        view.edit_draft(text);
    }

    fn submit<S: CommentStore>(&mut self, view: &mut PostView<S>) {
        match view.submit_comment() {
            Ok(_) => {
                self.editor_cursor = 0;
                self.selected = view.comments().len().saturating_sub(1);
                self.set_message("Comentário publicado");
            }
            // The draft carries the message; the form shows it
            Err(FeedError::Validation(_)) => {}
            Err(e) => {
                warn!("Submit failed: {}", e);
                self.set_message(format!("Falha ao publicar: {}", e));
            }
        }
    }

    fn clamp_selection(&mut self, len: usize) {
        self.selected = self.selected.min(len.saturating_sub(1));
    }
}

/// Convert character position to byte position
fn char_to_byte_pos(text: &str, char_pos: usize) -> usize {
    text.char_indices()
        .nth(char_pos)
        .map(|(i, _)| i)
        .unwrap_or(text.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use feedpost_core::post::{Author, ContentLine, Post};
    use feedpost_core::types::PostId;
    use pretty_assertions::assert_eq;

    fn test_view() -> PostView {
        PostView::new(Post {
            id: PostId(1),
            author: Author {
                name: "Diego Fernandes".to_string(),
                role: "CTO @Rocketseat".to_string(),
                avatar_url: "https://github.com/diego3g.png".to_string(),
            },
            published_at: chrono::DateTime::parse_from_rfc3339("2024-01-10T15:30:00-03:00")
                .unwrap(),
            content: vec![ContentLine::Paragraph("Oi".to_string())],
        })
    }

    fn type_text(state: &mut AppState, view: &mut PostView, text: &str) {
        for c in text.chars() {
            state.apply(view, Action::Insert(c));
        }
    }

    fn contents(view: &PostView) -> Vec<String> {
        view.comments().iter().map(|c| c.content.clone()).collect()
    }

    #[test]
    fn test_app_state_new() {
        let state = AppState::new();
        assert_eq!(state.mode, AppMode::Normal);
        assert_eq!(state.focus, Focus::Form);
        assert!(!state.should_quit);
    }

    #[test]
    fn test_app_state_message() {
        let mut state = AppState::new();
        assert!(state.message.is_none());
        state.set_message("Test");
        assert_eq!(state.message, Some("Test".to_string()));
        state.clear_message();
        assert!(state.message.is_none());
    }

    #[test]
    fn test_typing_edits_draft() {
        let mut state = AppState::new();
        let mut view = test_view();
        type_text(&mut state, &mut view, "olá");
        assert_eq!(view.draft().text(), "olá");
        assert_eq!(state.editor_cursor, 3);

        state.apply(&mut view, Action::CursorLeft);
        state.apply(&mut view, Action::Backspace);
        assert_eq!(view.draft().text(), "oá");
        assert_eq!(state.editor_cursor, 1);

        state.apply(&mut view, Action::CursorHome);
        state.apply(&mut view, Action::Insert('V'));
        assert_eq!(view.draft().text(), "Voá");
    }

    #[test]
    fn test_submit_appends_comment() {
        let mut state = AppState::new();
        let mut view = test_view();
        type_text(&mut state, &mut view, "Muito bom");
        state.apply(&mut view, Action::Submit);

        assert_eq!(contents(&view), vec!["Post muito bacana, heim?!", "Muito bom"]);
        assert!(view.draft().is_empty());
        assert_eq!(state.editor_cursor, 0);
        assert_eq!(state.selected, 1);
        assert_eq!(state.message.as_deref(), Some("Comentário publicado"));
    }

    #[test]
    fn test_empty_submit_then_typing_clears_error() {
        let mut state = AppState::new();
        let mut view = test_view();
        state.apply(&mut view, Action::Submit);
        assert_eq!(view.comments().len(), 1);
        assert_eq!(view.draft().error_message(), Some("Esse campo é obrigatório!"));

        state.apply(&mut view, Action::Insert('a'));
        assert!(view.draft().error_message().is_none());
    }

    #[test]
    fn test_delete_selected_removes_only_that_comment() {
        let mut state = AppState::new();
        let mut view = test_view();
        type_text(&mut state, &mut view, "igual");
        state.apply(&mut view, Action::Submit);
        type_text(&mut state, &mut view, "igual");
        state.apply(&mut view, Action::Submit);

        state.apply(&mut view, Action::ToggleFocus);
        state.apply(&mut view, Action::SelectPrev);
        assert_eq!(state.selected, 1);
        let kept = view.comments()[2].id.clone();

        state.apply(&mut view, Action::DeleteSelected);
        assert_eq!(contents(&view), vec!["Post muito bacana, heim?!", "igual"]);
        assert_eq!(view.comments()[1].id, kept);
        assert_eq!(state.message.as_deref(), Some("Comentário apagado"));
    }

    #[test]
    fn test_delete_last_clamps_selection() {
        let mut state = AppState::new();
        let mut view = test_view();
        state.apply(&mut view, Action::ToggleFocus);
        state.apply(&mut view, Action::DeleteSelected);
        assert!(view.comments().is_empty());
        assert_eq!(state.selected, 0);

        state.apply(&mut view, Action::DeleteSelected);
        assert_eq!(state.message.as_deref(), Some("Nenhum comentário selecionado"));
    }

    #[test]
    fn test_selection_bounds() {
        let mut state = AppState::new();
        let mut view = test_view();
        state.apply(&mut view, Action::SelectNext);
        state.apply(&mut view, Action::SelectNext);
        assert_eq!(state.selected, 0);
        state.apply(&mut view, Action::SelectPrev);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn test_help_and_quit() {
        let mut state = AppState::new();
        let mut view = test_view();
        state.apply(&mut view, Action::Help);
        assert_eq!(state.mode, AppMode::Help);
        state.apply(&mut view, Action::CloseHelp);
        assert_eq!(state.mode, AppMode::Normal);
        state.apply(&mut view, Action::Quit);
        assert!(state.should_quit);
    }

    #[test]
    fn test_char_to_byte_pos() {
        assert_eq!(char_to_byte_pos("olá", 2), 2);
        assert_eq!(char_to_byte_pos("olá", 3), 4);
        assert_eq!(char_to_byte_pos("", 5), 0);
    }
}
