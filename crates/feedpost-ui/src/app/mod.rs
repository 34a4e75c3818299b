//! Application loop and terminal handling

mod render;
mod state;

pub use render::draw;
pub use state::{AppMode, AppState, Focus};

use crate::input::InputHandler;
use crate::theme::Theme;
use anyhow::Result;
use chrono::Utc;
use crossterm::{
    event::{self, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use feedpost_core::comment::{CommentStore, MemoryCommentStore};
use feedpost_core::config::UiConfig;
use feedpost_core::view::PostView;
use ratatui::prelude::*;
use std::io::{self, Stdout};
use std::time::Duration;

/// Main application
pub struct App<S: CommentStore = MemoryCommentStore> {
    /// Application state
    pub state: AppState,
    /// The post being viewed
    view: PostView<S>,
    /// Terminal
    terminal: Terminal<CrosstermBackend<Stdout>>,
    input: InputHandler,
    theme: Theme,
    tick_rate: Duration,
    show_hint: bool,
}

impl<S: CommentStore> App<S> {
    /// Create a new app over the given view
    pub fn new(view: PostView<S>, config: &UiConfig) -> Result<Self> {
        // Restore the terminal before the panic message is printed
        let original_hook = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            original_hook(panic_info);
        }));

        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            state: AppState::new(),
            view,
            terminal,
            input: InputHandler::new(),
            theme: Theme::from_name(&config.theme),
            tick_rate: Duration::from_millis(config.tick_rate_ms),
            show_hint: config.show_help_hint,
        })
    }

    /// Run the main application loop
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.draw()?;

            // Redraw on every tick so relative times stay current
            if event::poll(self.tick_rate)? {
                if let event::Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        let action = self.input.map(key, self.state.mode, self.state.focus);
                        self.state.apply(&mut self.view, action);
                    }
                }
            }

            if self.state.should_quit {
                break;
            }
        }

        Ok(())
    }

    /// Draw the UI
    fn draw(&mut self) -> Result<()> {
        let render = self.view.render(&Utc::now());
        let state = &self.state;
        let theme = &self.theme;
        let show_hint = self.show_hint;

        self.terminal
            .draw(|frame| draw(frame, &render, state, theme, show_hint))?;
        Ok(())
    }

    /// The post view
    pub fn view(&self) -> &PostView<S> {
        &self.view
    }
}

impl<S: CommentStore> Drop for App<S> {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}
