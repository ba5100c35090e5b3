//! Desktop viewer for a punch card and the woven swatch it produces.

pub mod app;
pub mod config;
pub mod layout;
pub mod snapshot;
pub mod swatch;
mod ui;

pub use app::{Command, WeaveApp};
pub use config::Config;
