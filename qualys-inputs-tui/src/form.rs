use crossterm::event::{KeyCode, KeyEvent};
use log::{debug, info, warn};
use qualys_inputs_common::{Branch, FormState, LinuxField, SystemType};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Line,
    widgets::{Block, BorderType, Borders, Padding},
};
use tui_big_text::{BigText, PixelSize};

use crate::{
    app::AppResult,
    entries::Entries,
    event::Event,
    notification::{Notification, NotificationLevel},
    selector::{NB_SYSTEM_TYPES, SystemSelector},
};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum FocusedBlock {
    SystemSelector,
    Entries,
    Submit,
}

/// The data-entry form: system type selector, entries of the selected
/// system type and the submit button.
#[derive(Debug)]
pub struct Form {
    state: FormState,
    pub focused_block: FocusedBlock,
    pub selector: SystemSelector,
    pub entries: Entries,
}

impl Form {
    pub fn new(system: SystemType) -> Self {
        Self {
            state: FormState::with_selected(system),
            focused_block: FocusedBlock::SystemSelector,
            selector: SystemSelector::new(system),
            entries: Entries::new(),
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_editing(&self) -> bool {
        self.entries.is_editing()
    }

    fn current_value(&self) -> String {
        let row = self.entries.row();
        let value = match self.state.selected().branch() {
            Branch::Linux => self
                .state
                .linux_rows()
                .get(row)
                .map(|entry| entry.field(self.entries.column).to_string()),
            Branch::Ip(system) => self.state.ip_rows(system).get(row).cloned(),
        };
        value.unwrap_or_default()
    }

    fn write_current_value(&mut self, value: String) {
        let row = self.entries.row();
        match self.state.selected().branch() {
            Branch::Linux => self
                .state
                .update_linux_row(row, self.entries.column, value),
            Branch::Ip(system) => self.state.update_ip_row(system, row, value),
        }
    }

    fn select_system(&mut self, system: SystemType) {
        if self.state.selected() == system {
            return;
        }
        info!("Selected system {system}");
        self.state.select_system(system);
        self.entries.select_row(0);
        self.entries.column = LinuxField::Hostname;
    }

    fn add_row(&mut self) {
        match self.state.selected().branch() {
            Branch::Linux => self.state.add_linux_row(),
            Branch::Ip(system) => self.state.add_ip_row(system),
        }
        let len = self.state.current_len();
        debug!("{} now has {len} entries", self.state.selected());
        self.entries.select_row(len - 1);
    }

    fn delete_row(&mut self, sender: kanal::Sender<Event>) -> AppResult<()> {
        let row = self.entries.row();
        let deleted = match self.state.selected().branch() {
            Branch::Linux => self.state.delete_linux_row(row),
            Branch::Ip(system) => self.state.delete_ip_row(system, row),
        };

        if deleted {
            debug!("Deleted entry {} of {}", row + 1, self.state.selected());
            self.entries.clamp(self.state.current_len());
        } else {
            Notification::send(
                "Can not delete the only entry",
                NotificationLevel::Warning,
                sender,
            )?;
        }
        Ok(())
    }

    /// Summary of the selected system type, or an error notification when an
    /// entry is missing or invalid.
    pub fn submit(&self, sender: kanal::Sender<Event>) -> AppResult<Option<String>> {
        match self.state.submit() {
            Ok(summary) => {
                info!("Submitted {}", self.state.selected());
                Ok(Some(summary))
            }
            Err(e) => {
                warn!("Submit refused for {}: {e}", self.state.selected());
                Notification::send(e.to_string(), NotificationLevel::Error, sender)?;
                Ok(None)
            }
        }
    }

    /// Returns the summary when the key submitted the form.
    pub fn handle_keys(
        &mut self,
        key_event: KeyEvent,
        sender: kanal::Sender<Event>,
    ) -> AppResult<Option<String>> {
        if self.entries.is_editing() {
            match key_event.code {
                KeyCode::Esc | KeyCode::Enter => self.entries.stop_editing(),
                _ => {
                    if let Some(value) = self.entries.handle_input(key_event) {
                        self.write_current_value(value);
                    }
                }
            }
            return Ok(None);
        }

        match key_event.code {
            KeyCode::Tab => {
                self.focused_block = match self.focused_block {
                    FocusedBlock::SystemSelector => FocusedBlock::Entries,
                    FocusedBlock::Entries => FocusedBlock::Submit,
                    FocusedBlock::Submit => FocusedBlock::SystemSelector,
                };
                return Ok(None);
            }

            KeyCode::BackTab => {
                self.focused_block = match self.focused_block {
                    FocusedBlock::SystemSelector => FocusedBlock::Submit,
                    FocusedBlock::Entries => FocusedBlock::SystemSelector,
                    FocusedBlock::Submit => FocusedBlock::Entries,
                };
                return Ok(None);
            }

            KeyCode::Char('s') => return self.submit(sender),

            _ => {}
        }

        match self.focused_block {
            FocusedBlock::SystemSelector => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => self.selector.scroll_down(),
                KeyCode::Char('k') | KeyCode::Up => self.selector.scroll_up(),
                KeyCode::Char(' ') | KeyCode::Enter => {
                    self.select_system(self.selector.highlighted());
                }
                _ => {}
            },

            FocusedBlock::Entries => match key_event.code {
                KeyCode::Char('j') | KeyCode::Down => {
                    self.entries.scroll_down(self.state.current_len())
                }
                KeyCode::Char('k') | KeyCode::Up => self.entries.scroll_up(),
                KeyCode::Char('h') | KeyCode::Left => self.entries.column = LinuxField::Hostname,
                KeyCode::Char('l') | KeyCode::Right => {
                    if self.state.selected() == SystemType::Linux {
                        self.entries.column = LinuxField::Ip;
                    }
                }
                KeyCode::Char('i') | KeyCode::Enter => {
                    let value = self.current_value();
                    self.entries.start_editing(&value);
                }
                KeyCode::Char('a') => self.add_row(),
                KeyCode::Char('d') => self.delete_row(sender)?,
                _ => {}
            },

            FocusedBlock::Submit => {
                if key_event.code == KeyCode::Enter {
                    return self.submit(sender);
                }
            }
        }

        Ok(None)
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let container = Block::default()
            .title(" Qualys Inputs ")
            .title_style(Style::default().bold().fg(Color::Green))
            .title_alignment(Alignment::Center)
            .padding(Padding::horizontal(1))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Green));

        let inner = container.inner(area);
        frame.render_widget(container, area);

        let (selector_block, entries_block, submit_block, hint_block) = {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(NB_SYSTEM_TYPES + 2),
                    Constraint::Fill(1),
                    Constraint::Length(4),
                    Constraint::Length(1),
                ])
                .flex(Flex::SpaceAround)
                .split(inner);
            (chunks[0], chunks[1], chunks[2], chunks[3])
        };

        self.selector.render(
            frame,
            selector_block,
            self.state.selected(),
            self.focused_block == FocusedBlock::SystemSelector,
        );

        self.entries.render(
            frame,
            entries_block,
            &self.state,
            self.focused_block == FocusedBlock::Entries,
        );

        let submit_style = if !self.state.is_current_selection_valid() {
            Style::default().dark_gray()
        } else if self.focused_block == FocusedBlock::Submit {
            Style::default().white().bold()
        } else {
            Style::default().green()
        };

        let submit = BigText::builder()
            .pixel_size(PixelSize::Sextant)
            .style(submit_style)
            .lines(vec![format!("SUBMIT {}", self.state.selected()).into()])
            .centered()
            .build();

        frame.render_widget(submit, submit_block);

        let hint = if self.entries.is_editing() {
            "Esc/Enter: stop editing"
        } else {
            match self.focused_block {
                FocusedBlock::SystemSelector => "Tab: next  j/k: move  Space: select  ?: help",
                FocusedBlock::Entries => {
                    "Tab: next  i: edit  a: add  d: delete  s: submit  ?: help"
                }
                FocusedBlock::Submit => "Tab: next  Enter: submit  ?: help",
            }
        };
        frame.render_widget(Line::from(hint).dark_gray().centered(), hint_block);
    }
}
