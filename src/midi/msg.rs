use std::fmt::Write;

use crate::bytes;

/// A MIDI message as delivered by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct Event {
    /// Milliseconds on the backend's monotonic clock.
    pub ts: f64,
    pub buffer: Vec<u8>,
}

impl Event {
    pub fn new(ts: f64, buffer: &[u8]) -> Self {
        Self {
            ts,
            buffer: buffer.to_vec(),
        }
    }

    /// Builds an `Event` from a `midir` timestamp, which is expressed in µs.
    pub fn from_midir(ts_us: u64, buffer: &[u8]) -> Self {
        Self::new(ts_us as f64 / 1_000f64, buffer)
    }
}

/// Formats `ts` with 2 decimals, rounding ties away from zero.
///
/// `{:.2}` rounds ties to even, which would show `0.62` for `0.625`.
fn format_ts(ts: f64) -> String {
    let scaled = ts * 100f64;
    // Exact ties are multiples of 1/8, for which `scaled` is exact.
    if (ts * 8f64).fract() == 0f64 && scaled.fract().abs() == 0.5 {
        format!("{:.2}", scaled.round() / 100f64)
    } else {
        format!("{ts:.2}")
    }
}

/// Renders the header line followed by one line per byte.
pub fn render(event: &Event) -> String {
    let mut text = format!("MIDI Message (timestamp {}):\n", format_ts(event.ts));
    for byte in event.buffer.iter() {
        // Writing to a String can't fail
        let _ = writeln!(text, "{}", bytes::format_byte(*byte));
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_on() {
        let event = Event::new(123.456, &[144, 60, 127]);
        assert_eq!(
            render(&event),
            "MIDI Message (timestamp 123.46):\n\
             Bin: 10010000  Dec: 144  Hex: 0x90\n\
             Bin: 00111100  Dec: 60  Hex: 0x3C\n\
             Bin: 01111111  Dec: 127  Hex: 0x7F\n",
        );
    }

    #[test]
    fn empty_buffer() {
        assert_eq!(
            render(&Event::new(0f64, &[])),
            "MIDI Message (timestamp 0.00):\n"
        );
    }

    #[test]
    fn timestamp_ties_round_up() {
        let event = Event::from_midir(1_234_125, &[0xf8]);
        assert!(render(&event).starts_with("MIDI Message (timestamp 1234.13):\n"));

        let event = Event::from_midir(625, &[0xf8]);
        assert!(render(&event).starts_with("MIDI Message (timestamp 0.63):\n"));

        assert_eq!(format_ts(0.125), "0.13");
        assert_eq!(format_ts(2.5), "2.50");
        // not a tie once stored as f64
        assert_eq!(format_ts(1.005), "1.00");
        assert_eq!(format_ts(1_234.567), "1234.57");
    }

    #[test]
    fn midir_timestamp() {
        let event = Event::from_midir(1_234_567, &[0xf8]);
        assert_eq!(event.ts, 1_234.567);
        assert!(render(&event).starts_with("MIDI Message (timestamp 1234.57):\n"));
    }
}
