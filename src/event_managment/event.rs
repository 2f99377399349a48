use color_eyre::eyre::OptionExt;
use futures::{FutureExt, StreamExt};
use ratatui::crossterm::event::Event as CrosstermEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// The frequency at which tick events are emitted.
const TICK_RATE: f64 = 30.0;

/// Main event enum for the application
#[derive(Clone, Debug)]
pub enum Event {
    /// Regular interval event for animations and polling
    Tick,
    /// Terminal events from crossterm
    Crossterm(CrosstermEvent),
    /// Custom application-level events
    App(AppEvent),
}

/// High-level application events
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
}

/// Handles event processing and distribution
#[derive(Debug)]
pub struct EventHandler {
    /// Channel for sending events
    pub sender: mpsc::UnboundedSender<Event>,
    /// Channel for receiving events
    receiver: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Creates a new EventHandler with a channel for communication
    /// and spawns a background task to generate events
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let actor = EventTask::new(sender.clone());
        tokio::spawn(async { actor.run().await });
        Self { sender, receiver }
    }

    /// Waits for and returns the next event from the channel
    ///
    /// Returns an error if the event source disconnects
    pub async fn next(&mut self) -> color_eyre::Result<Event> {
        self.receiver
            .recv()
            .await
            .ok_or_eyre("Failed to receive event")
    }

    /// Queues an event to be processed in the next iteration of the event loop
    ///
    /// Useful for internal event generation within the application
    pub fn send(&mut self, event: Event) {
        // Ignore the result as the receiver cannot be dropped while this struct exists
        let _ = self.sender.send(event);
    }
}

/// Generates tick and terminal events for the application
struct EventTask {
    /// Channel for sending events to the main application
    sender: mpsc::UnboundedSender<Event>,
}

impl EventTask {
    /// Creates a new event task with the provided sender channel
    fn new(sender: mpsc::UnboundedSender<Event>) -> Self {
        Self { sender }
    }

    /// Runs the event task.
    ///
    /// This function emits tick events at a fixed rate and polls for crossterm events in between.
    async fn run(self) -> color_eyre::Result<()> {
        let tick_rate = Duration::from_secs_f64(1.0 / TICK_RATE);
        let mut reader = crossterm::event::EventStream::new();
        let mut tick = tokio::time::interval(tick_rate);
        loop {
            let tick_delay = tick.tick();
            let crossterm_event = reader.next().fuse();
            tokio::select! {
              // Exit if the receiver channel is closed
              _ = self.sender.closed() => {
                break;
              }
              // Send a tick event at regular intervals
              _ = tick_delay => {
                self.send(Event::Tick);
              }
              // Forward terminal input events
              Some(Ok(evt)) = crossterm_event => {
                self.send(Event::Crossterm(evt));
              }
            };
        }
        Ok(())
    }

    /// Sends an event to the receiver.
    ///
    /// This is internal to the event task and should not be confused with
    /// the public EventHandler::send method.
    fn send(&self, event: Event) {
        // Ignores the result because shutting down the app drops the receiver, which causes the send
        // operation to fail. This is expected behavior and should not panic.
        let _ = self.sender.send(event);
    }
}
