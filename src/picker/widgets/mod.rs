//! Ratatui widgets for the picker

mod entry_list;
mod help_bar;
mod search_bar;
mod status_bar;

pub use entry_list::EntryList;
pub use help_bar::{HelpBar, KeyHint};
pub use search_bar::SearchBar;
pub use status_bar::StatusBar;
