use eframe::egui;
use std::sync::{Arc, Mutex, MutexGuard};

pub const WAITING_TEXT: &str = "Waiting for MIDI messages...";

/// Destination of the text shown to the user.
pub trait DisplaySink {
    /// Replaces the whole displayed text.
    fn set_text(&mut self, text: String);
}

/// The text region shared between the controller, which writes it,
/// and the UI, which renders it.
#[derive(Clone)]
pub struct DisplayText {
    text: Arc<Mutex<String>>,
    egui_ctx: Option<egui::Context>,
}

impl DisplayText {
    pub fn new(egui_ctx: Option<egui::Context>) -> Self {
        Self {
            text: Arc::new(Mutex::new(WAITING_TEXT.to_string())),
            egui_ctx,
        }
    }

    pub fn text(&self) -> MutexGuard<'_, String> {
        self.text.lock().unwrap()
    }
}

impl DisplaySink for DisplayText {
    fn set_text(&mut self, text: String) {
        *self.text.lock().unwrap() = text;

        if let Some(ref egui_ctx) = self.egui_ctx {
            egui_ctx.request_repaint();
        }
    }
}

#[cfg(test)]
pub(crate) mod test_sink {
    use std::sync::{Arc, Mutex};

    /// Keeps track of every text written to the display.
    #[derive(Clone, Default)]
    pub struct RecordingSink {
        pub writes: Arc<Mutex<Vec<String>>>,
    }

    impl RecordingSink {
        pub fn last(&self) -> Option<String> {
            self.writes.lock().unwrap().last().cloned()
        }

        pub fn count(&self) -> usize {
            self.writes.lock().unwrap().len()
        }
    }

    impl super::DisplaySink for RecordingSink {
        fn set_text(&mut self, text: String) {
            self.writes.lock().unwrap().push(text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn last_write_wins() {
        let mut display = DisplayText::new(None);
        assert_eq!(*display.text(), WAITING_TEXT);

        let reader = display.clone();
        display.set_text("first".to_string());
        display.set_text("second".to_string());

        assert_eq!(*reader.text(), "second");
    }
}
