//! Render functions
//!
//! Draw a [`PostRender`] into a frame. Nothing here touches the view model;
//! the caller renders it against the current clock first.

use super::state::{AppMode, AppState, Focus};
use crate::theme::Theme;
use crate::widgets::{Avatar, CommentItem, COMMENT_ITEM_HEIGHT};
use feedpost_core::view::{BodyLine, FormView, HeaderView, PostRender};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap};

/// Rows of the draft text area, borders included
const TEXTAREA_HEIGHT: u16 = 5;

/// Draw the whole screen
pub fn draw(frame: &mut Frame, post: &PostRender, state: &AppState, theme: &Theme, show_hint: bool) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(1)])
        .split(area);

    render_post(frame, chunks[0], post, state, theme, show_hint);
    render_status_bar(frame, chunks[1], post, state, theme);

    if state.mode == AppMode::Help {
        render_help(frame, area);
    }
}

fn render_post(
    frame: &mut Frame,
    area: Rect,
    post: &PostRender,
    state: &AppState,
    theme: &Theme,
    show_hint: bool,
) {
    let article = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.unfocus_border))
        .title(format!(" Post #{} ", post.id));
    let inner = article.inner(area);
    frame.render_widget(article, area);

    let form_height = 1 + TEXTAREA_HEIGHT + 1 + 1 + u16::from(show_hint);

    // Wrapped height, leaving the header, form and one comment their rows
    let body = body_paragraph(&post.body, theme);
    let body_room = inner
        .height
        .saturating_sub(3 + form_height + COMMENT_ITEM_HEIGHT);
    let body_height = u16::try_from(body.line_count(inner.width))
        .unwrap_or(u16::MAX)
        .min(body_room);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(body_height),
            Constraint::Length(form_height),
            Constraint::Min(COMMENT_ITEM_HEIGHT),
        ])
        .split(inner);

    render_header(frame, chunks[0], &post.header, theme);
    frame.render_widget(body, chunks[1]);
    render_form(frame, chunks[2], &post.form, state, theme, show_hint);
    render_comments(frame, chunks[3], post, state, theme);
}

fn render_header(frame: &mut Frame, area: Rect, header: &HeaderView, theme: &Theme) {
    let time_width = header
        .time
        .text
        .chars()
        .count()
        .max(header.time.title.chars().count()) as u16
        + 1;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(6),
            Constraint::Min(10),
            Constraint::Length(time_width),
        ])
        .split(area);

    frame.render_widget(
        Avatar::new(&header.avatar_url, &header.author_name)
            .border_style(Style::default().fg(theme.focus_border)),
        chunks[0],
    );

    let author = vec![
        Line::from(Span::styled(
            header.author_name.as_str(),
            Style::default().fg(theme.author).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            header.author_role.as_str(),
            Style::default().fg(theme.muted),
        )),
    ];
    frame.render_widget(
        Paragraph::new(author).block(Block::default().padding(Padding::horizontal(1))),
        chunks[1],
    );

    // No hover in a terminal: the title goes under the relative text
    let time = vec![
        Line::from(Span::styled(
            header.time.text.as_str(),
            Style::default().fg(theme.muted),
        )),
        Line::from(Span::styled(
            header.time.title.as_str(),
            Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
        )),
    ];
    frame.render_widget(
        Paragraph::new(time).alignment(Alignment::Right),
        chunks[2],
    );
}

/// Body lines wrapped to the article width, ruled off from the form
fn body_paragraph<'a>(body: &'a [BodyLine], theme: &Theme) -> Paragraph<'a> {
    let lines: Vec<Line> = body
        .iter()
        .map(|line| match line {
            BodyLine::Text { text } => Line::raw(text.as_str()),
            BodyLine::Anchor { text, .. } => Line::from(Span::styled(
                text.as_str(),
                Style::default()
                    .fg(theme.link)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )),
        })
        .collect();

    Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.unfocus_border)),
    )
}

fn render_form(
    frame: &mut Frame,
    area: Rect,
    form: &FormView,
    state: &AppState,
    theme: &Theme,
    show_hint: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(TEXTAREA_HEIGHT),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(u16::from(show_hint)),
        ])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            form.label.as_str(),
            Style::default().fg(theme.author).add_modifier(Modifier::BOLD),
        )),
        chunks[0],
    );

    let focused = state.focus == Focus::Form && state.mode == AppMode::Normal;
    let border_color = if form.error_message.is_some() {
        theme.error
    } else if focused {
        theme.focus_border
    } else {
        theme.unfocus_border
    };
    let textarea = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = textarea.inner(chunks[1]);

    let content = if form.value.is_empty() {
        Paragraph::new(Span::styled(
            form.placeholder.as_str(),
            Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
        ))
    } else {
        Paragraph::new(form.value.as_str())
    };
    frame.render_widget(content.block(textarea), chunks[1]);

    if focused {
        let (row, col) = cursor_row_col(&form.value, state.editor_cursor);
        let x = inner
            .x
            .saturating_add(col)
            .min(inner.x + inner.width.saturating_sub(1));
        let y = inner
            .y
            .saturating_add(row)
            .min(inner.y + inner.height.saturating_sub(1));
        frame.set_cursor_position((x, y));
    }

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                format!("⚠ {}", error),
                Style::default().fg(theme.error),
            )),
            chunks[2],
        );
    }

    let button_style = if form.submit_enabled {
        Style::default()
            .bg(theme.button)
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.muted).add_modifier(Modifier::DIM)
    };
    frame.render_widget(
        Paragraph::new(Span::styled(format!(" {} ", form.submit_label), button_style)),
        chunks[3],
    );

    if show_hint {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Enter publica · Alt-Enter nova linha · Tab alterna foco · ? ajuda",
                Style::default().fg(theme.muted).add_modifier(Modifier::DIM),
            )),
            chunks[4],
        );
    }
}

fn render_comments(frame: &mut Frame, area: Rect, post: &PostRender, state: &AppState, theme: &Theme) {
    if post.comments.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled(
                "Nenhum comentário ainda",
                Style::default().fg(theme.muted).add_modifier(Modifier::ITALIC),
            )),
            area,
        );
        return;
    }

    let visible = (area.height / COMMENT_ITEM_HEIGHT).max(1) as usize;
    let start = if state.selected >= visible {
        state.selected + 1 - visible
    } else {
        0
    };
    let list_focused = state.focus == Focus::Comments;

    for (row, (index, comment)) in post
        .comments
        .iter()
        .enumerate()
        .skip(start)
        .take(visible)
        .enumerate()
    {
        let y = area.y + row as u16 * COMMENT_ITEM_HEIGHT;
        let height = COMMENT_ITEM_HEIGHT.min(area.y + area.height - y);
        let item_area = Rect::new(area.x, y, area.width, height);
        frame.render_widget(
            CommentItem::new(comment, theme).selected(list_focused && index == state.selected),
            item_area,
        );
    }
}

fn render_status_bar(frame: &mut Frame, area: Rect, post: &PostRender, state: &AppState, theme: &Theme) {
    let focus = match (state.mode, state.focus) {
        (AppMode::Help, _) => "AJUDA",
        (AppMode::Normal, Focus::Form) => "FORMULÁRIO",
        (AppMode::Normal, Focus::Comments) => "COMENTÁRIOS",
    };

    let text = state.message.clone().unwrap_or_else(|| {
        format!(" {} | {} comentários | post #{} ", focus, post.comments.len(), post.id)
    });

    frame.render_widget(
        Paragraph::new(text).style(Style::default().bg(theme.status_bg).fg(Color::White)),
        area,
    );
}

fn render_help(frame: &mut Frame, area: Rect) {
    let text = vec![
        Line::from(Span::styled("feedpost", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled("Formulário", Style::default().fg(Color::Yellow))),
        Line::from("  Enter       Publicar comentário"),
        Line::from("  Alt-Enter   Nova linha"),
        Line::from("  Tab/Esc     Ir para a lista"),
        Line::from(""),
        Line::from(Span::styled("Comentários", Style::default().fg(Color::Yellow))),
        Line::from("  j/k         Selecionar próximo/anterior"),
        Line::from("  x/Del       Apagar selecionado"),
        Line::from("  Tab/i       Voltar ao formulário"),
        Line::from(""),
        Line::from(Span::styled("Outros", Style::default().fg(Color::Yellow))),
        Line::from("  q/Esc       Sair (na lista)"),
        Line::from("  Ctrl-C      Sair"),
        Line::from("  ?           Mostrar esta ajuda"),
        Line::from(""),
        Line::from(Span::styled("Pressione qualquer tecla", Style::default().fg(Color::DarkGray))),
    ];

    let help_area = centered_rect(50, 70, area);
    frame.render_widget(Clear, help_area);
    frame.render_widget(
        Paragraph::new(text).block(
            Block::default()
                .title("Ajuda")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        ),
        help_area,
    );
}

/// Row and column of the cursor inside a possibly multi-line draft
fn cursor_row_col(text: &str, cursor: usize) -> (u16, u16) {
    let before: String = text.chars().take(cursor).collect();
    let row = before.matches('\n').count();
    let col = before.rsplit('\n').next().map(|l| l.chars().count()).unwrap_or(0);
    (row as u16, col as u16)
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup[1])[1]
}
