use crate::app::{App, AppResult};
use crate::event::EventHandler;
use crate::ui;
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use std::io;
use std::panic;

/// Owns the terminal for the lifetime of the form.
///
/// Mouse capture stays off so the summary popup can be selected and copied.
#[derive(Debug)]
pub struct Tui<B: Backend> {
    terminal: Terminal<B>,
    pub events: EventHandler,
}

fn restore_terminal() -> AppResult<()> {
    terminal::disable_raw_mode()?;
    ratatui::crossterm::execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

impl<B: Backend> Tui<B> {
    pub fn new(terminal: Terminal<B>, events: EventHandler) -> Self {
        Self { terminal, events }
    }

    pub fn init(&mut self) -> AppResult<()> {
        terminal::enable_raw_mode()?;
        ratatui::crossterm::execute!(io::stdout(), EnterAlternateScreen)?;

        let panic_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic| {
            restore_terminal().expect("failed to reset the terminal");
            panic_hook(panic);
        }));

        self.terminal.hide_cursor()?;
        self.terminal.clear()?;
        Ok(())
    }

    pub fn draw(&mut self, app: &mut App) -> AppResult<()> {
        self.terminal.draw(|frame| ui::render(app, frame))?;
        Ok(())
    }

    pub fn exit(&mut self) -> AppResult<()> {
        restore_terminal()?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}
