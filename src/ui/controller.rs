use anyhow::Context;
use crossbeam_channel as channel;
use std::ops::ControlFlow;

use crate::{
    display::DisplaySink,
    midi::{self, Host},
    monitor::Monitor,
};

#[derive(Debug)]
pub enum Request {
    Shutdown,
}

pub struct Spawner<H, S> {
    pub host: H,
    pub sink: S,
}

impl<H, S> Spawner<H, S>
where
    H: Host + Send + 'static,
    S: DisplaySink + Send + 'static,
{
    pub fn spawn(self) -> anyhow::Result<Handle> {
        let (req_tx, req_rx) = channel::unbounded();

        let thread = std::thread::Builder::new()
            .name("midi-controller".into())
            .spawn(move || Controller::start(self.host, self.sink).run_loop(req_rx))
            .context("Failed to spawn the Controller thread")?;

        Ok(Handle {
            req_tx,
            thread: Some(thread),
        })
    }
}

/// UI side of a running Controller thread.
pub struct Handle {
    req_tx: channel::Sender<Request>,
    thread: Option<std::thread::JoinHandle<()>>,
}

impl Handle {
    pub fn is_running(&self) -> bool {
        self.thread.is_some()
    }

    /// Requests the Controller to stop and waits for it.
    pub fn shutdown(&mut self) {
        if let Some(thread) = self.thread.take() {
            log::debug!("Shutting down");
            if let Err(err) = self.req_tx.send(Request::Shutdown) {
                log::error!("Couldn't request Controller shutdown: {err}");
            } else if thread.join().is_err() {
                log::error!("Controller thread panicked");
            }
        }
    }
}

/// Owns the MIDI access and is the only writer of the display.
pub struct Controller<H: Host, S> {
    monitor: Monitor<H, S>,
    midi_rx: channel::Receiver<midi::Event>,
    // Keeps the MIDI channel open even if no inputs could be bound.
    _midi_tx: channel::Sender<midi::Event>,
}

impl<H: Host, S: DisplaySink> Controller<H, S> {
    pub fn start(host: H, sink: S) -> Self {
        let (midi_tx, midi_rx) = channel::unbounded();

        let mut monitor = Monitor::new(host, sink);
        let midi_tx_clone = midi_tx.clone();
        let res = monitor
            .start(move |event| {
                if let Err(err) = midi_tx_clone.send(event) {
                    log::error!("Dropping MIDI message: {err}");
                }
            })
            .context("Failed to start MIDI monitor");

        match res {
            Ok(()) => log::info!(
                "MIDI Controller {} to {} input(s)",
                monitor.state(),
                monitor.input_count(),
            ),
            Err(err) => log::error!("{err:#}"),
        }

        Self {
            monitor,
            midi_rx,
            _midi_tx: midi_tx,
        }
    }

    fn handle(&mut self, request: Request) -> ControlFlow<(), ()> {
        match request {
            Request::Shutdown => ControlFlow::Break(()),
        }
    }

    pub fn run_loop(mut self, req_rx: channel::Receiver<Request>) {
        let midi_rx = self.midi_rx.clone();

        loop {
            channel::select! {
                recv(req_rx) -> request => {
                    match request {
                        Ok(request) => {
                            if self.handle(request).is_break() {
                                break;
                            }
                        }
                        Err(err) => {
                            log::error!("Error UI request channel: {err}");
                            break;
                        }
                    }
                }
                recv(midi_rx) -> event => {
                    match event {
                        Ok(event) => self.monitor.handle(&event),
                        Err(err) => {
                            log::error!("Error MIDI message channel: {err}");
                            break;
                        }
                    }
                }
            }
        }

        for event in midi_rx.try_iter() {
            self.monitor.handle(&event);
        }

        log::debug!("Shutting down MIDI Controller loop");
    }
}
