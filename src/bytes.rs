//! Textual representations of a single MIDI byte.

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
#[error("Invalid byte value {0}, expected 0..=255")]
pub struct InvalidByteError(pub i64);

/// Formats `byte` as `Bin: xxxxxxxx  Dec: n  Hex: 0xXX`.
pub fn format_byte(byte: u8) -> String {
    format!("Bin: {byte:08b}  Dec: {byte}  Hex: 0x{byte:02X}")
}

/// Same as [`format_byte`] for values which are not known to fit in a byte.
pub fn try_format_value(value: i64) -> Result<String, InvalidByteError> {
    u8::try_from(value)
        .map(format_byte)
        .map_err(|_| InvalidByteError(value))
}
