//! Confirm side effects: opening addresses and clipboard copy
//!
//! All side effects are fire-and-forget. A failed open or copy produces
//! at most a status message; it never becomes an error state of the
//! picker itself.

use super::state::{CopiedFlash, MessageLevel, PickerState};
use crate::bookmarks::BookmarkEntry;
use std::time::{Duration, Instant};

/// Address opened when a privileged entry was copied: the browser gets a
/// fresh tab for the user to paste into.
pub const BLANK_TAB: &str = "about:blank";

/// Host-environment side effects behind a seam, so the confirm logic can
/// be exercised without a browser or a real clipboard
pub trait Launcher {
    /// Request the default browser open `address` in a new tab
    fn open_address(&mut self, address: &str) -> bool;
    /// Request a blank new tab
    fn open_blank_tab(&mut self) -> bool;
    /// Write `text` to the system clipboard
    fn copy(&mut self, text: &str) -> bool;
}

/// Production launcher: `open` for tabs, arboard for the clipboard
#[derive(Debug, Default)]
pub struct SystemLauncher;

impl Launcher for SystemLauncher {
    fn open_address(&mut self, address: &str) -> bool {
        open::that_detached(address).is_ok()
    }

    fn open_blank_tab(&mut self) -> bool {
        open::that_detached(BLANK_TAB).is_ok()
    }

    fn copy(&mut self, text: &str) -> bool {
        arboard::Clipboard::new()
            .and_then(|mut clipboard| clipboard.set_text(text.to_owned()))
            .is_ok()
    }
}

/// What the picker session ended with
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    /// A web entry was opened in the browser
    Opened(BookmarkEntry),
    /// A privileged entry was copied to the clipboard
    Copied(BookmarkEntry),
    /// The user closed the picker without confirming
    Aborted,
}

/// Confirm the current highlight.
///
/// Web entries are opened directly and the picker exits. Privileged
/// entries are copied first; the clipboard write completes synchronously
/// before the blank-tab request is scheduled, so the write always lands
/// before the tab opens. The blank tab itself is deferred by `flash` to
/// keep the copied indicator visible.
///
/// Returns `None` when there is no selection (no-op).
pub(crate) fn confirm_current(
    state: &mut PickerState,
    launcher: &mut dyn Launcher,
    flash: Duration,
) -> Option<PickerOutcome> {
    let entry = state.current_entry()?.clone();

    if entry.is_privileged() {
        if launcher.copy(&entry.address) {
            state.add_message(
                MessageLevel::Success,
                format!("Copied {}, paste it into the new tab", entry.address),
            );
        } else {
            state.add_message(MessageLevel::Error, "Clipboard write failed".to_string());
        }

        let selection_idx = state.selection.index()?;
        let entry_idx = *state.filtered.get(selection_idx)?;
        state.copied = Some(CopiedFlash {
            entry: entry_idx,
            at: Instant::now(),
        });
        state.pending_blank_open = Some(Instant::now() + flash);
        Some(PickerOutcome::Copied(entry))
    } else {
        launcher.open_address(&entry.address);
        state.should_exit = true;
        Some(PickerOutcome::Opened(entry))
    }
}

/// Fire the deferred blank-tab request once its deadline has passed
pub(crate) fn service_pending_open(state: &mut PickerState, launcher: &mut dyn Launcher) {
    if let Some(at) = state.pending_blank_open
        && Instant::now() >= at
    {
        launcher.open_blank_tab();
        state.pending_blank_open = None;
        state.should_exit = true;
    }
}
