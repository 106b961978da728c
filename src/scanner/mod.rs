//! Scanner view state and its two renderings (scanner, archive)
//!
//! `ViewController` walks idle → file-selected → processing → result-ready.
//! The display mode is tracked alongside but never resets the phase.

mod controller;
mod render;
mod state;

pub use controller::{PendingScan, ViewController, READ_FAILURE_MESSAGE};
pub use render::{
    format_confidence, render_archive, render_scanner, ArchiveView, ScannerView, APP_NAME,
};
pub use state::{DisplayMode, ScanError, ScanPhase, ScannerSnapshot};
