pub mod access;
pub use access::{bind_all, Access, AccessError, Host, MidirHost};

pub mod io;
pub use io::MidiIn;

pub mod msg;
pub use msg::Event;

pub mod port;
pub use port::Inputs;
