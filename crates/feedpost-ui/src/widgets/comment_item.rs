//! Comment item widget

use crate::theme::Theme;
use feedpost_core::view::CommentView;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

/// Rows one item takes, borders included
pub const COMMENT_ITEM_HEIGHT: u16 = 4;

/// One comment in the list
pub struct CommentItem<'a> {
    comment: &'a CommentView,
    selected: bool,
    theme: &'a Theme,
}

impl<'a> CommentItem<'a> {
    pub fn new(comment: &'a CommentView, theme: &'a Theme) -> Self {
        Self {
            comment,
            selected: false,
            theme,
        }
    }

    /// Highlight as the current selection
    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for CommentItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.selected {
            self.theme.focus_border
        } else {
            self.theme.unfocus_border
        };

        let mut title = vec![Span::styled(
            format!(" {} ", self.comment.author.as_deref().unwrap_or("Anônimo")),
            Style::default().fg(self.theme.author).add_modifier(Modifier::BOLD),
        )];
        title.push(Span::styled(
            format!("{} ", self.comment.created),
            Style::default().fg(self.theme.muted),
        ));

        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color))
            .title(Line::from(title));
        if self.selected {
            block = block.title_bottom(
                Line::from(Span::styled(" x apagar ", Style::default().fg(self.theme.error)))
                    .right_aligned(),
            );
        }

        Paragraph::new(self.comment.content.as_str())
            .wrap(Wrap { trim: false })
            .block(block)
            .render(area, buf);
    }
}
