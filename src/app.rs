use crate::config::Configuration;
use crate::event_managment::event::{AppEvent, Event, EventHandler};
use ratatui::{
    DefaultTerminal,
    crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers},
};

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    /// Resolved startup configuration, unchanged after construction.
    pub config: Configuration,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Constructs the single [`App`] instance for this invocation.
    pub fn new(config: Configuration) -> Self {
        Self {
            running: true,
            config,
            events: EventHandler::new(),
        }
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        tracing::debug!("entering event loop");
        while self.running {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            match self.events.next().await? {
                Event::Tick => self.tick(),
                Event::Crossterm(event) => {
                    if let CrosstermEvent::Key(key_event) = event {
                        self.handle_key_events(key_event)?;
                    }
                }
                Event::App(app_event) => self.apply_app_state(app_event),
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> color_eyre::Result<()> {
        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(Event::App(AppEvent::Quit)),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(Event::App(AppEvent::Quit))
            }
            _ => {}
        }
        Ok(())
    }

    pub fn apply_app_state(&mut self, app_state: AppEvent) {
        match app_state {
            AppEvent::Quit => self.quit(),
        }
    }

    /// Handles the tick event of the terminal.
    ///
    /// The shell has no fixed-rate state updates yet.
    pub fn tick(&self) {}

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        tracing::debug!("quit requested");
        self.running = false;
    }
}
