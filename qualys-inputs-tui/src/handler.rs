use crate::{
    app::{ActivePopup, App, AppResult},
    event::Event,
    popup::Summary,
};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

fn handle_popup_keys(key_event: KeyEvent, app: &mut App) {
    let Some(popup) = &mut app.active_popup else {
        return;
    };

    match key_event.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.active_popup = None,

        KeyCode::Char('?') if matches!(popup, ActivePopup::Help) => app.active_popup = None,

        KeyCode::Char('j') | KeyCode::Down => match popup {
            ActivePopup::Help => app.help.scroll_down(),
            ActivePopup::Summary(summary) => summary.scroll_down(),
            ActivePopup::Debug(dump) => dump.scroll_down(),
        },

        KeyCode::Char('k') | KeyCode::Up => match popup {
            ActivePopup::Help => app.help.scroll_up(),
            ActivePopup::Summary(summary) => summary.scroll_up(),
            ActivePopup::Debug(dump) => dump.scroll_up(),
        },

        _ => {}
    }
}

pub fn handle_key_events(
    key_event: KeyEvent,
    app: &mut App,
    sender: kanal::Sender<Event>,
) -> AppResult<()> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && matches!(key_event.code, KeyCode::Char('c') | KeyCode::Char('C')) {
        app.quit();
        return Ok(());
    }

    if app.active_popup.is_some() {
        handle_popup_keys(key_event, app);
        return Ok(());
    }

    if app.form.is_editing() {
        app.form
            .handle_keys(key_event, app.notification_sender.clone())?;
        return Ok(());
    }

    match key_event.code {
        KeyCode::Char('q') => app.quit(),

        KeyCode::Char('?') => app.active_popup = Some(ActivePopup::Help),

        KeyCode::Char('r') if ctrl => sender.send(Event::Reset)?,

        KeyCode::Char('d') if ctrl => app.show_debug_dump()?,

        _ => {
            if let Some(summary) = app
                .form
                .handle_keys(key_event, app.notification_sender.clone())?
            {
                app.active_popup = Some(ActivePopup::Summary(Summary::new(summary)));
            }
        }
    }

    Ok(())
}
