#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

use std::io;

use log::info;
use qualys_inputs_tui::{
    app::{App, AppResult, TICK_RATE},
    cli,
    event::{Event, EventHandler},
    handler::handle_key_events,
    tui::Tui,
};
use ratatui::{Terminal, backend::CrosstermBackend};

fn main() -> AppResult<()> {
    env_logger::init();

    let cli_args = cli::cli().get_matches();
    let system = cli::selected_system(&cli_args);

    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    let events = EventHandler::new(TICK_RATE);

    let mut app = App::new(system, events.sender.clone());

    let mut tui = Tui::new(terminal, events);
    tui.init()?;

    info!("Starting with {system} selected");

    while app.running {
        tui.draw(&mut app)?;
        match tui.events.next()? {
            Event::Tick => app.tick(),
            Event::Key(key_event) => {
                handle_key_events(key_event, &mut app, tui.events.sender.clone())?
            }
            Event::Notification(notification) => {
                app.notifications.push(notification);
            }
            Event::Reset => {
                info!("Resetting the form");
                app = App::new(system, tui.events.sender.clone());
            }
            _ => {}
        }
    }

    tui.exit()?;
    Ok(())
}
