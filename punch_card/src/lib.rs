//! Punch card model: a fixed grid of bits that can be toggled, cleared,
//! encoded from text and repeated to the right.
//!
//! The crate has no UI dependency; the viewer in `weave_display` owns a
//! [`PunchCard`] and drives it from input events.

pub mod encode;
pub mod error;
pub mod export;
pub mod grid;
pub mod presets;

pub use error::{ExportError, GridError};
pub use grid::{DEFAULT_COLS, DEFAULT_ROWS, PunchCard};
pub use presets::{PRESETS, Preset, apply_preset};
