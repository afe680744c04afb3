//! Access request, device binding and message display.
//!
//! `Idle -> Requesting -> {Bound, Failed}`. Once `Bound`, every message
//! only replaces the displayed text. `Failed` is terminal.

use std::fmt;

use crate::{
    display::DisplaySink,
    midi::{self, Access, Event, Host},
};

pub const FAILURE_TEXT: &str = "Failed to access MIDI devices.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Idle,
    Requesting,
    Bound,
    Failed,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            State::Idle => "Idle",
            State::Requesting => "Requesting",
            State::Bound => "Bound",
            State::Failed => "Failed",
        })
    }
}

/// Renders messages and failures to the display.
pub struct MessageHandler<S> {
    sink: S,
}

impl<S: DisplaySink> MessageHandler<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn handle(&mut self, event: &Event) {
        self.sink.set_text(midi::msg::render(event));
    }

    pub fn fail(&mut self) {
        self.sink.set_text(FAILURE_TEXT.to_string());
    }
}

pub struct Monitor<H: Host, S> {
    host: H,
    // Keeps the callbacks alive.
    access: Option<H::Access>,
    handler: MessageHandler<S>,
    state: State,
}

impl<H: Host, S: DisplaySink> Monitor<H, S> {
    pub fn new(host: H, sink: S) -> Self {
        Self {
            host,
            access: None,
            handler: MessageHandler::new(sink),
            state: State::Idle,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Requests access to the MIDI inputs and binds `on_message` to all of them.
    ///
    /// On failure, the display shows [`FAILURE_TEXT`] whatever the cause.
    pub fn start<F>(&mut self, on_message: F) -> Result<(), midi::AccessError>
    where
        F: Fn(Event) + Clone + Send + 'static,
    {
        if self.state != State::Idle {
            log::warn!("Monitor already started, state: {}", self.state);
            return Ok(());
        }

        self.state = State::Requesting;
        log::debug!("Requesting MIDI access");

        match self.host.request_access() {
            Ok(mut access) => {
                midi::bind_all(&mut access, on_message);
                self.access = Some(access);
                self.state = State::Bound;

                Ok(())
            }
            Err(err) => {
                self.handler.fail();
                self.state = State::Failed;

                Err(err)
            }
        }
    }

    pub fn handle(&mut self, event: &Event) {
        if self.state == State::Bound {
            self.handler.handle(event);
        } else {
            log::warn!("Ignoring MIDI message in state {}", self.state);
        }
    }

    pub fn input_count(&self) -> usize {
        self.access
            .as_ref()
            .map_or(0, |access| access.inputs().len())
    }
}
