//! Picker error types

use thiserror::Error;

/// Errors that can occur while running the picker
///
/// Clipboard and tab-open failures are deliberately absent: those are
/// best-effort side effects and never fail the session.
#[derive(Debug, Error)]
pub enum PickerError {
    /// Terminal setup, rendering, or event polling failed
    #[error("Terminal error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for picker operations
pub type Result<T> = std::result::Result<T, PickerError>;
