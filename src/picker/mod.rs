//! Interactive bookmark picker
//!
//! A single-screen TUI: query input on top, the filtered bookmark list
//! below, driven by ratatui for widgets and crossterm for events. The
//! session logic (selection state machine, confirm side effects) lives
//! apart from the terminal plumbing so it can be tested headlessly.

mod actions;
mod error;
mod events;
mod session;
mod state;
mod theme;
pub mod widgets;

pub use actions::{BLANK_TAB, Launcher, PickerOutcome, SystemLauncher};
pub use error::PickerError;
pub use session::Picker;
pub use state::{
    CopiedFlash, InteractionMode, MessageLevel, Phase, PickerState, Selection, StatusMessage,
};
pub use theme::Theme;
