pub mod bytes;
pub use bytes::{format_byte, InvalidByteError};

pub mod display;
pub use display::{DisplaySink, DisplayText};

pub mod midi;

pub mod monitor;
pub use monitor::{Monitor, State};

pub mod ui;
