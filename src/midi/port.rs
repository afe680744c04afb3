use std::{collections::BTreeMap, sync::Arc};

use super::{io, Event, MidiIn};

/// An input device and its callback slot.
pub struct Input {
    port: midir::MidiInputPort,
    midi_in: MidiIn,
}

impl Input {
    fn new(port: midir::MidiInputPort) -> Self {
        Self {
            port,
            midi_in: MidiIn::None,
        }
    }
}

/// The input devices enumerated when access was granted.
pub struct Inputs {
    map: BTreeMap<Arc<str>, Input>,
    client_name: Arc<str>,
}

impl Inputs {
    pub fn new(client_name: Arc<str>) -> Self {
        Self {
            map: BTreeMap::new(),
            client_name,
        }
    }

    pub fn list(&self) -> impl Iterator<Item = &Arc<str>> {
        self.map.keys()
    }

    pub fn update_from(&mut self, midi_input: &midir::MidiInput) -> Result<(), midir::PortInfoError> {
        self.map.clear();

        for port in midi_input.ports() {
            let name = midi_input.port_name(&port)?;
            if name.starts_with(self.client_name.as_ref()) {
                continue;
            }

            #[cfg(feature = "jack")]
            let name = name.strip_prefix("Midi-Bridge:").unwrap_or(&name);

            self.map.insert(name.into(), Input::new(port));
        }

        log::debug!("Found {} MIDI input(s)", self.map.len());

        Ok(())
    }

    pub fn connect<C>(&mut self, port_name: &str, callback: C) -> Result<(), io::Error>
    where
        C: FnMut(Event) + Send + 'static,
    {
        let client_name = self.client_name.clone();
        let input = self
            .map
            .get_mut(port_name)
            .ok_or_else(|| io::Error::Connection(port_name.to_string()))?;

        if matches!(input.midi_in, MidiIn::None) {
            input.midi_in = MidiIn::new(&format!("{client_name} {port_name}"))?;
        }

        let app_port_name = format!("{client_name} Input");
        input
            .midi_in
            .connect(port_name, &input.port, &app_port_name, callback)
    }
}
