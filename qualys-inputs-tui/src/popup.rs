use qualys_inputs_common::FormState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::Text,
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::AppResult;

fn centered_rect(height: u16, width: u16, r: Rect) -> Rect {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(height),
            Constraint::Fill(1),
        ])
        .flex(Flex::SpaceBetween)
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Fill(1),
            Constraint::Length(width),
            Constraint::Fill(1),
        ])
        .flex(Flex::SpaceBetween)
        .split(layout[1])[1]
}

/// Values of the submitted system type.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    text: String,
    scroll: u16,
}

impl Summary {
    pub fn new(text: String) -> Self {
        Self { text, scroll: 0 }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn scroll_down(&mut self) {
        let max = self.text.lines().count().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn render(&self, frame: &mut Frame) {
        let text = Text::from(self.text.as_str());
        let height = (text.height() as u16 + 6).min(frame.area().height);
        let width = (text.width() as u16 + 8).clamp(40, frame.area().width.max(40));

        let block = centered_rect(height, width, frame.area());

        let paragraph = Paragraph::new(text)
            .scroll((self.scroll, 0))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .padding(Padding::uniform(1))
                    .title(" Values ")
                    .title_style(Style::default().bold().fg(Color::Green))
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::Green)),
            );

        frame.render_widget(Clear, block);
        frame.render_widget(paragraph, block);
    }
}

/// Pretty JSON snapshot of the whole form, every system type included.
#[derive(Debug, Clone, PartialEq)]
pub struct DebugDump {
    json: String,
    scroll: u16,
}

impl DebugDump {
    pub fn new(state: &FormState) -> AppResult<Self> {
        let json = serde_json::to_string_pretty(state)?;
        Ok(Self { json, scroll: 0 })
    }

    pub fn json(&self) -> &str {
        &self.json
    }

    pub fn scroll_down(&mut self) {
        let max = self.json.lines().count().saturating_sub(1) as u16;
        self.scroll = self.scroll.saturating_add(1).min(max);
    }

    pub fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub fn render(&self, frame: &mut Frame) {
        let area = frame.area();
        let block = centered_rect(
            area.height.saturating_sub(4),
            area.width.saturating_sub(8).min(80),
            area,
        );

        let paragraph = Paragraph::new(self.json.as_str())
            .scroll((self.scroll, 0))
            .block(
                Block::default()
                    .padding(Padding::horizontal(2))
                    .title(" Debug values ")
                    .title_style(Style::default().bold().yellow())
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(Color::Yellow)),
            );

        frame.render_widget(Clear, block);
        frame.render_widget(paragraph, block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use qualys_inputs_common::IpSystem;

    #[test]
    fn test_debug_dump_contains_every_system() {
        let mut state = FormState::new();
        state.update_ip_row(IpSystem::Ascott, 0, "10.1.1.1");
        let dump = DebugDump::new(&state).unwrap();

        assert!(dump.json().contains("\"linuxRows\""));
        assert!(dump.json().contains("\"DC\""));
        assert!(dump.json().contains("\"10.1.1.1\""));
        assert!(dump.json().contains("\"SQL\""));
    }

    #[test]
    fn test_summary_scroll_is_bounded() {
        let mut summary = Summary::new("a\nb\nc".to_string());
        for _ in 0..10 {
            summary.scroll_down();
        }
        assert_eq!(summary.scroll, 2);
        for _ in 0..10 {
            summary.scroll_up();
        }
        assert_eq!(summary.scroll, 0);
    }
}
