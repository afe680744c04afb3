use std::sync::Arc;

use super::{io, Event, Inputs};

/// Message handler stored in an input's callback slot.
pub type Callback = Box<dyn FnMut(Event) + Send + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum AccessError {
    #[error("MIDI initialization failed")]
    Init(#[from] midir::InitError),

    #[error("Couldn't enumerate MIDI inputs")]
    PortInfo(#[from] midir::PortInfoError),

    #[cfg(test)]
    #[error("MIDI access unavailable")]
    Unavailable,
}

/// The host's MIDI capability.
pub trait Host {
    type Access: Access;

    /// Requests permission to observe the MIDI inputs.
    fn request_access(&self) -> Result<Self::Access, AccessError>;
}

/// A granted access to the MIDI inputs.
pub trait Access {
    /// Names of the inputs which could be enumerated.
    fn inputs(&self) -> Vec<Arc<str>>;

    /// Sets the callback slot of the input named `input`,
    /// replacing any previous callback.
    fn set_on_message(&mut self, input: &str, callback: Callback) -> Result<(), io::Error>;
}

/// Sets a callback forwarding to `on_message` on every enumerable input.
///
/// Inputs which fail to connect are skipped.
/// Returns the number of inputs actually bound.
pub fn bind_all<A, F>(access: &mut A, on_message: F) -> usize
where
    A: Access,
    F: Fn(Event) + Clone + Send + 'static,
{
    let mut bound = 0;
    for input in access.inputs() {
        let on_message = on_message.clone();
        match access.set_on_message(&input, Box::new(move |event| on_message(event))) {
            Ok(()) => bound += 1,
            Err(err) => log::error!("Skipping input {input}: {err}"),
        }
    }

    log::info!("Listening to {bound} MIDI input(s)");

    bound
}

/// `Host` backed by `midir`.
pub struct MidirHost {
    client_name: Arc<str>,
}

impl MidirHost {
    pub fn new(client_name: &str) -> Self {
        Self {
            client_name: client_name.into(),
        }
    }
}

impl Host for MidirHost {
    type Access = MidirAccess;

    fn request_access(&self) -> Result<MidirAccess, AccessError> {
        let midi_input = midir::MidiInput::new(&format!("{} enumerate", self.client_name))?;

        let mut inputs = Inputs::new(self.client_name.clone());
        inputs.update_from(&midi_input)?;

        Ok(MidirAccess { inputs })
    }
}

pub struct MidirAccess {
    inputs: Inputs,
}

impl Access for MidirAccess {
    fn inputs(&self) -> Vec<Arc<str>> {
        self.inputs.list().cloned().collect()
    }

    fn set_on_message(&mut self, input: &str, callback: Callback) -> Result<(), io::Error> {
        self.inputs.connect(input, callback)
    }
}


#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::test_host::FakeHost;
    use super::*;

    #[test]
    fn binds_every_input() {
        let host = FakeHost::with_inputs(&["Keys", "Pads"]);
        let mut access = host.request_access().unwrap();

        let received = Arc::new(Mutex::new(Vec::new()));
        let received_clone = received.clone();
        let bound = bind_all(&mut access, move |event| {
            received_clone.lock().unwrap().push(event)
        });

        assert_eq!(bound, 2);
        assert_eq!(host.bound(), vec![Arc::from("Keys"), Arc::from("Pads")]);

        host.send("Pads", Event::new(1f64, &[0xb0, 1, 64]));
        host.send("Keys", Event::new(2f64, &[0x90, 60, 100]));

        let received = received.lock().unwrap();
        assert_eq!(
            *received,
            vec![
                Event::new(1f64, &[0xb0, 1, 64]),
                Event::new(2f64, &[0x90, 60, 100]),
            ]
        );
    }

    #[test]
    fn skips_failing_input() {
        let mut host = FakeHost::with_inputs(&["Broken", "Keys"]);
        host.failing.push("Broken".into());
        let mut access = host.request_access().unwrap();

        assert_eq!(bind_all(&mut access, |_| ()), 1);
        assert_eq!(host.bound(), vec![Arc::from("Keys")]);
    }

    #[test]
    fn no_inputs() {
        let host = FakeHost::default();
        let mut access = host.request_access().unwrap();

        assert_eq!(bind_all(&mut access, |_| ()), 0);
        assert!(host.bound().is_empty());
    }

    #[test]
    fn rebinding_replaces_callback() {
        let host = FakeHost::with_inputs(&["Keys"]);
        let mut access = host.request_access().unwrap();

        let first = Arc::new(Mutex::new(0));
        let first_clone = first.clone();
        bind_all(&mut access, move |_| *first_clone.lock().unwrap() += 1);

        let second = Arc::new(Mutex::new(0));
        let second_clone = second.clone();
        bind_all(&mut access, move |_| *second_clone.lock().unwrap() += 1);

        host.send("Keys", Event::new(0f64, &[0xfe]));

        assert_eq!(*first.lock().unwrap(), 0);
        assert_eq!(*second.lock().unwrap(), 1);
    }
}
