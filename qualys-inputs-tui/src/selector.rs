use qualys_inputs_common::SystemType;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Color, Style, Stylize},
    widgets::{Block, BorderType, Borders, Row, Table, TableState},
};
use strum::IntoEnumIterator;

pub const NB_SYSTEM_TYPES: u16 = 4;

#[derive(Debug)]
pub struct SystemSelector {
    pub state: TableState,
}

impl SystemSelector {
    pub fn new(selected: SystemType) -> Self {
        let index = SystemType::iter()
            .position(|system| system == selected)
            .unwrap_or_default();

        Self {
            state: TableState::default().with_selected(index),
        }
    }

    /// The system type under the cursor, not necessarily the selected one.
    pub fn highlighted(&self) -> SystemType {
        self.state
            .selected()
            .and_then(|i| SystemType::iter().nth(i))
            .unwrap_or_default()
    }

    pub fn scroll_down(&mut self) {
        let i = match self.state.selected() {
            Some(i) => (i + 1).min(NB_SYSTEM_TYPES as usize - 1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn scroll_up(&mut self) {
        let i = match self.state.selected() {
            Some(i) => i.saturating_sub(1),
            None => 0,
        };
        self.state.select(Some(i));
    }

    pub fn render(&mut self, frame: &mut Frame, block: Rect, selected: SystemType, is_focused: bool) {
        let area = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Fill(1),
                Constraint::Length(40),
                Constraint::Fill(1),
            ])
            .flex(Flex::Center)
            .split(block)[1];

        let widths = [Constraint::Length(3), Constraint::Fill(1)];

        let systems = SystemType::iter().map(|system| {
            if system == selected {
                Row::new(vec!["(•)".to_string(), system.to_string()]).bold()
            } else {
                Row::new(vec!["( )".to_string(), system.to_string()])
            }
        });

        let table = Table::new(systems, widths).column_spacing(2).row_highlight_style(
            if is_focused {
                Style::new().bg(Color::DarkGray)
            } else {
                Style::new()
            },
        );

        frame.render_widget(
            Block::new()
                .title(" Select System ")
                .title_style(Style::default().bold().fg(Color::Green))
                .title_alignment(Alignment::Center)
                .borders(Borders::LEFT)
                .border_type(if is_focused {
                    BorderType::Thick
                } else {
                    BorderType::default()
                })
                .border_style(Style::default().fg(Color::Green)),
            area,
        );

        frame.render_stateful_widget(
            table,
            area.inner(Margin {
                horizontal: 4,
                vertical: 1,
            }),
            &mut self.state,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_selected_system() {
        let selector = SystemSelector::new(SystemType::Ascott);
        assert_eq!(selector.highlighted(), SystemType::Ascott);
    }

    #[test]
    fn test_cursor_is_bounded() {
        let mut selector = SystemSelector::new(SystemType::Linux);
        selector.scroll_up();
        assert_eq!(selector.highlighted(), SystemType::Linux);

        for _ in 0..10 {
            selector.scroll_down();
        }
        assert_eq!(selector.highlighted(), SystemType::Sql);
    }
}
