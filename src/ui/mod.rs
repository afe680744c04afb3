pub mod app;
pub use app::App;

pub mod controller;
pub use controller::{Controller, Handle, Request};
