use qualys_inputs_common::SystemType;
use ratatui::Frame;
use std::error;

use crate::{
    event::Event,
    form::Form,
    help::Help,
    notification::Notification,
    popup::{DebugDump, Summary},
};

pub type AppResult<T> = std::result::Result<T, Box<dyn error::Error>>;

pub const TICK_RATE: u64 = 40;

#[derive(Debug)]
pub enum ActivePopup {
    Help,
    Summary(Summary),
    Debug(DebugDump),
}

#[derive(Debug)]
pub struct App {
    pub running: bool,
    pub help: Help,
    pub form: Form,
    pub notifications: Vec<Notification>,
    pub active_popup: Option<ActivePopup>,
    pub notification_sender: kanal::Sender<Event>,
}

impl App {
    pub fn new(system: SystemType, notification_sender: kanal::Sender<Event>) -> Self {
        Self {
            running: true,
            help: Help::new(),
            form: Form::new(system),
            notifications: Vec::new(),
            active_popup: None,
            notification_sender,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.form.render(frame, frame.area());
    }

    pub fn show_debug_dump(&mut self) -> AppResult<()> {
        let dump = DebugDump::new(self.form.state())?;
        self.active_popup = Some(ActivePopup::Debug(dump));
        Ok(())
    }

    pub fn tick(&mut self) {
        self.notifications.iter_mut().for_each(|n| n.ttl -= 1);
        self.notifications.retain(|n| n.ttl > 0);
    }

    pub fn quit(&mut self) {
        self.running = false;
    }
}
