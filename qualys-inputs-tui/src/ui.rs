use ratatui::Frame;

use crate::app::{ActivePopup, App};

pub fn render(app: &mut App, frame: &mut Frame) {
    app.render(frame);

    match &app.active_popup {
        Some(ActivePopup::Help) => app.help.render(frame),
        Some(ActivePopup::Summary(summary)) => summary.render(frame),
        Some(ActivePopup::Debug(dump)) => dump.render(frame),
        None => {}
    }

    for (index, notification) in app.notifications.iter().enumerate() {
        notification.render(index, frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{Notification, NotificationLevel};
    use qualys_inputs_common::SystemType;
    use ratatui::{
        Terminal,
        backend::TestBackend,
        crossterm::event::{KeyCode, KeyEvent},
        style::Color,
    };

    fn screen(app: &mut App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    fn is_big_text_glyph(symbol: &str) -> bool {
        symbol
            .chars()
            .any(|c| ('\u{1FB00}'..='\u{1FB3B}').contains(&c) || "█▌▐▀▄".contains(c))
    }

    fn submit_colors(app: &mut App) -> Vec<Color> {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .filter(|cell| is_big_text_glyph(cell.symbol()))
            .map(|cell| cell.fg)
            .collect()
    }

    #[test]
    fn test_renders_form() {
        let (sender, _receiver) = kanal::unbounded();
        let mut app = App::new(SystemType::Linux, sender);

        let screen = screen(&mut app);
        assert!(screen.contains("Qualys Inputs"));
        assert!(screen.contains("Select System"));
        assert!(screen.contains("Hostname"));
        assert!(screen.contains("e.g. server-01"));
    }

    #[test]
    fn test_renders_inline_error() {
        let (sender, _receiver) = kanal::unbounded();
        let mut app = App::new(SystemType::Sql, sender);
        let keys = [KeyCode::Tab, KeyCode::Char('i')]
            .into_iter()
            .chain("1.2x".chars().map(KeyCode::Char));
        for code in keys {
            app.form
                .handle_keys(KeyEvent::from(code), app.notification_sender.clone())
                .unwrap();
        }

        let screen = screen(&mut app);
        assert!(screen.contains("Invalid IPv4 address (e.g. 10.0.0.1)"));
    }

    #[test]
    fn test_submit_dimmed_until_valid() {
        let (sender, _receiver) = kanal::unbounded();
        let mut app = App::new(SystemType::Sql, sender);

        let colors = submit_colors(&mut app);
        assert!(!colors.is_empty());
        assert!(colors.iter().all(|color| *color == Color::DarkGray));

        let keys = [KeyCode::Tab, KeyCode::Char('i')]
            .into_iter()
            .chain("10.0.0.1".chars().map(KeyCode::Char))
            .chain([KeyCode::Esc]);
        for code in keys {
            app.form
                .handle_keys(KeyEvent::from(code), app.notification_sender.clone())
                .unwrap();
        }
        assert!(app.form.state().is_current_selection_valid());

        let colors = submit_colors(&mut app);
        assert!(!colors.is_empty());
        assert!(colors.iter().all(|color| *color != Color::DarkGray));
    }

    #[test]
    fn test_renders_popups_and_notifications() {
        let (sender, _receiver) = kanal::unbounded();
        let mut app = App::new(SystemType::Linux, sender);
        app.active_popup = Some(ActivePopup::Help);
        app.notifications.push(Notification {
            message: "Can not delete the only entry".to_string(),
            level: NotificationLevel::Warning,
            ttl: 1,
        });

        let screen = screen(&mut app);
        assert!(screen.contains("Help"));
        assert!(screen.contains("Can not delete the only entry"));

        app.tick();
        assert!(app.notifications.is_empty());
    }
}
