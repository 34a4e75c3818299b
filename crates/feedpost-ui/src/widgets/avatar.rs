//! Avatar widget
//!
//! A terminal cannot show the image behind `src`, so the avatar is drawn as
//! a bordered box holding the author's initials.

use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// Author picture placeholder
pub struct Avatar<'a> {
    src: &'a str,
    name: &'a str,
    border: Style,
}

impl<'a> Avatar<'a> {
    /// Avatar for `src`, labelled with the initials of `name`
    pub fn new(src: &'a str, name: &'a str) -> Self {
        Self {
            src,
            name,
            border: Style::default(),
        }
    }

    /// Border style
    pub fn border_style(mut self, style: Style) -> Self {
        self.border = style;
        self
    }

    /// Image URL this avatar stands for
    pub fn src(&self) -> &str {
        self.src
    }
}

impl Widget for Avatar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.border);
        let inner = block.inner(area);
        block.render(area, buf);

        Paragraph::new(initials(self.name))
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD))
            .render(inner, buf);
    }
}

/// First letters of the first and last words, uppercased
pub fn initials(name: &str) -> String {
    let words: Vec<&str> = name.split_whitespace().collect();
    let first = |w: &str| w.chars().next().map(|c| c.to_uppercase().to_string());

    match words.as_slice() {
        [] => "?".to_string(),
        [only] => first(*only).unwrap_or_default(),
        [head, .., last] => {
            format!(
                "{}{}",
                first(*head).unwrap_or_default(),
                first(*last).unwrap_or_default()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initials() {
        assert_eq!(initials("Diego Fernandes"), "DF");
        assert_eq!(initials("maria da silva"), "MS");
        assert_eq!(initials("Ana"), "A");
        assert_eq!(initials("   "), "?");
        assert_eq!(initials("élio ramos"), "ÉR");
    }

    #[test]
    fn test_render_avatar() {
        let area = Rect::new(0, 0, 6, 3);
        let mut buf = Buffer::empty(area);
        Avatar::new("https://github.com/diego3g.png", "Diego Fernandes").render(area, &mut buf);

        let middle: String = (0..6u16).map(|x| buf[(x, 1u16)].symbol().to_string()).collect();
        assert!(middle.contains("DF"));
    }

    #[test]
    fn test_avatar_keeps_src() {
        let avatar = Avatar::new("https://example.com/a.png", "A");
        assert_eq!(avatar.src(), "https://example.com/a.png");
    }
}
