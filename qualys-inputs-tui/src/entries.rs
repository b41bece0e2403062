use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use qualys_inputs_common::{Branch, FormState, LinuxField, ip_field_error};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Margin, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Cell, Padding, Row, Table, TableState},
};
use tui_input::{Input, InputRequest};

const HOSTNAME_PLACEHOLDER: &str = "e.g. server-01";
const IP_PLACEHOLDER: &str = "e.g. 10.0.0.12";

/// Cursor over the entries of the selected system type, plus the field
/// being edited.
#[derive(Debug)]
pub struct Entries {
    pub state: TableState,
    pub column: LinuxField,
    input: Option<Input>,
}

impl Default for Entries {
    fn default() -> Self {
        Self::new()
    }
}

fn input_request(key_event: KeyEvent) -> Option<InputRequest> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    match key_event.code {
        KeyCode::Char('u') if ctrl => Some(InputRequest::DeleteLine),
        KeyCode::Char('w') if ctrl => Some(InputRequest::DeletePrevWord),
        KeyCode::Char('a') if ctrl => Some(InputRequest::GoToStart),
        KeyCode::Char('e') if ctrl => Some(InputRequest::GoToEnd),
        KeyCode::Char(c) if !ctrl => Some(InputRequest::InsertChar(c)),
        KeyCode::Backspace => Some(InputRequest::DeletePrevChar),
        KeyCode::Delete => Some(InputRequest::DeleteNextChar),
        KeyCode::Left => Some(InputRequest::GoToPrevChar),
        KeyCode::Right => Some(InputRequest::GoToNextChar),
        KeyCode::Home => Some(InputRequest::GoToStart),
        KeyCode::End => Some(InputRequest::GoToEnd),
        _ => None,
    }
}

impl Entries {
    pub fn new() -> Self {
        Self {
            state: TableState::default().with_selected(0),
            column: LinuxField::Hostname,
            input: None,
        }
    }

    pub fn row(&self) -> usize {
        self.state.selected().unwrap_or_default()
    }

    pub fn select_row(&mut self, row: usize) {
        self.state.select(Some(row));
    }

    /// Keeps the cursor on an existing row after the list shrank or the
    /// system type changed.
    pub fn clamp(&mut self, len: usize) {
        if self.row() >= len {
            self.state.select(Some(len.saturating_sub(1)));
        }
    }

    pub fn scroll_down(&mut self, len: usize) {
        let i = (self.row() + 1).min(len.saturating_sub(1));
        self.state.select(Some(i));
    }

    pub fn scroll_up(&mut self) {
        self.state.select(Some(self.row().saturating_sub(1)));
    }

    pub fn is_editing(&self) -> bool {
        self.input.is_some()
    }

    pub fn start_editing(&mut self, value: &str) {
        self.input = Some(Input::new(value.to_string()));
    }

    pub fn stop_editing(&mut self) {
        self.input = None;
    }

    /// Feeds a key to the field being edited and returns its new value when
    /// the text changed.
    pub fn handle_input(&mut self, key_event: KeyEvent) -> Option<String> {
        let input = self.input.as_mut()?;
        let request = input_request(key_event)?;

        match input.handle(request) {
            Some(changed) if changed.value => Some(input.value().to_string()),
            _ => None,
        }
    }

    fn editing_cell(input: &Input) -> Line<'static> {
        let value = input.value();
        let cursor = input.cursor();

        let before: String = value.chars().take(cursor).collect();
        let under: String = value.chars().skip(cursor).take(1).collect();
        let after: String = value.chars().skip(cursor + 1).collect();

        Line::from(vec![
            Span::from(before),
            Span::styled(
                if under.is_empty() { " ".to_string() } else { under },
                Style::new().add_modifier(Modifier::REVERSED),
            ),
            Span::from(after),
        ])
    }

    fn cell(
        &self,
        value: &str,
        placeholder: &'static str,
        is_cursor: bool,
        is_focused: bool,
    ) -> Cell<'static> {
        if is_cursor {
            if let Some(input) = &self.input {
                return Cell::from(Self::editing_cell(input)).bg(Color::Gray).fg(Color::Black);
            }
        }

        let cell = if value.is_empty() {
            Cell::from(placeholder).fg(Color::DarkGray)
        } else {
            Cell::from(value.to_string())
        };

        if is_cursor && is_focused {
            cell.bg(Color::Gray).fg(Color::Black)
        } else {
            cell
        }
    }

    fn error_cell(ip: &str) -> Cell<'static> {
        Cell::from(ip_field_error(ip).unwrap_or_default()).red()
    }

    pub fn render(&mut self, frame: &mut Frame, block: Rect, form: &FormState, is_focused: bool) {
        let row_index = self.row();

        let (header, widths, rows): (Row, Vec<Constraint>, Vec<Row>) = match form.selected().branch()
        {
            Branch::Linux => {
                let rows = form
                    .linux_rows()
                    .iter()
                    .enumerate()
                    .map(|(i, entry)| {
                        let is_row = i == row_index;
                        Row::new(vec![
                            Cell::from((i + 1).to_string()),
                            self.cell(
                                &entry.hostname,
                                HOSTNAME_PLACEHOLDER,
                                is_row && self.column == LinuxField::Hostname,
                                is_focused,
                            ),
                            self.cell(
                                &entry.ip,
                                IP_PLACEHOLDER,
                                is_row && self.column == LinuxField::Ip,
                                is_focused,
                            ),
                            Self::error_cell(&entry.ip),
                        ])
                    })
                    .collect();

                (
                    Row::new(vec!["#", "Hostname", "IP address", ""]),
                    vec![
                        Constraint::Length(3),
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                        Constraint::Length(38),
                    ],
                    rows,
                )
            }
            Branch::Ip(system) => {
                let rows = form
                    .ip_rows(system)
                    .iter()
                    .enumerate()
                    .map(|(i, ip)| {
                        Row::new(vec![
                            Cell::from((i + 1).to_string()),
                            self.cell(ip, IP_PLACEHOLDER, i == row_index, is_focused),
                            Self::error_cell(ip),
                        ])
                    })
                    .collect();

                (
                    Row::new(vec!["#", "IP address", ""]),
                    vec![
                        Constraint::Length(3),
                        Constraint::Fill(1),
                        Constraint::Length(38),
                    ],
                    rows,
                )
            }
        };

        let table = Table::new(rows, widths)
            .header(header.style(Style::new().bold().blue()).bottom_margin(1))
            .column_spacing(2)
            .flex(Flex::Start)
            .row_highlight_style(if is_focused {
                Style::new().bg(Color::DarkGray)
            } else {
                Style::new()
            });

        frame.render_widget(
            Block::default()
                .title(format!(" {} ", form.selected()))
                .title_style(Style::default().bold().fg(Color::Green))
                .title_alignment(Alignment::Center)
                .padding(Padding::top(1))
                .borders(Borders::ALL)
                .border_type(if is_focused {
                    BorderType::Thick
                } else {
                    BorderType::default()
                })
                .border_style(Style::default().fg(Color::Green)),
            block,
        );

        frame.render_stateful_widget(
            table,
            block.inner(Margin {
                horizontal: 2,
                vertical: 2,
            }),
            &mut self.state,
        );
    }
}
