use super::Event;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Error connecting to {0}")]
    Connection(String),

    #[error("Midi initialization failed")]
    Init(#[from] midir::InitError),
}

/// The callback slot of an input device.
///
/// Each `midir` connection consumes its `MidiInput`, so the slot keeps
/// the input around while no callback is set.
#[derive(Default)]
pub enum MidiIn {
    Connected(midir::MidiInputConnection<()>),
    Disconnected(midir::MidiInput),
    #[default]
    None,
}

impl MidiIn {
    pub fn new(client_name: &str) -> Result<Self, Error> {
        let mut midi_input = midir::MidiInput::new(client_name)?;
        midi_input.ignore(midir::Ignore::Sysex);

        Ok(Self::Disconnected(midi_input))
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }

    /// Sets `callback` as the message handler for `port`.
    ///
    /// A previously set callback is replaced.
    pub fn connect<C>(
        &mut self,
        port_name: &str,
        port: &midir::MidiInputPort,
        client_port_name: &str,
        mut callback: C,
    ) -> Result<(), Error>
    where
        C: FnMut(Event) + Send + 'static,
    {
        self.disconnect();
        match std::mem::take(self) {
            Self::Disconnected(midi_input) => {
                match midi_input.connect(
                    port,
                    client_port_name,
                    move |ts, buf, _| callback(Event::from_midir(ts, buf)),
                    (),
                ) {
                    Ok(conn) => {
                        log::info!("Connected Input to {port_name}");
                        *self = Self::Connected(conn);
                    }
                    Err(err) => {
                        *self = Self::Disconnected(err.into_inner());
                        let err = Error::Connection(port_name.to_string());
                        log::error!("{err}");
                        return Err(err);
                    }
                }
            }
            Self::None => {
                let err = Error::Connection(port_name.to_string());
                log::error!("{err}: no MIDI client");
                return Err(err);
            }
            Self::Connected(_) => unreachable!(),
        }

        Ok(())
    }

    pub fn disconnect(&mut self) {
        if self.is_connected() {
            if let Self::Connected(conn) = std::mem::take(self) {
                let (midi_input, _) = conn.close();
                *self = Self::Disconnected(midi_input);
                log::debug!("Disconnected Input");
            }
        }
    }
}
