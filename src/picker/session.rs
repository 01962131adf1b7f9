//! Picker session: terminal lifecycle and the event loop
//!
//! One session owns the terminal, spawns the one-shot bookmark load in
//! the background, and runs the poll/render loop until the user confirms
//! an entry or closes the picker.

use super::actions::{self, Launcher, PickerOutcome, SystemLauncher};
use super::error::Result;
use super::events::{self, EventResult};
use super::state::{Phase, PickerState};
use super::theme::Theme;
use super::widgets::{EntryList, HelpBar, KeyHint, SearchBar, StatusBar};
use crate::bookmarks::{BookmarkEntry, BookmarkSource, BookmarksError, flatten};
use crate::config::MarkqConfig;
use crate::search::EntryMatcher;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stdout};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::Duration;

/// Event loop tick
const TICK: Duration = Duration::from_millis(50);

type LoadResult = std::result::Result<Vec<BookmarkEntry>, BookmarksError>;

/// Interactive bookmark picker
pub struct Picker<L: Launcher> {
    launcher: L,
    matcher: EntryMatcher,
    theme: Theme,
    internal_schemes: Vec<String>,
    flash: Duration,
    hints: Vec<KeyHint>,
}

impl Picker<SystemLauncher> {
    /// Create a picker backed by the real browser opener and clipboard
    #[must_use]
    pub fn new(config: &MarkqConfig) -> Self {
        Self::with_launcher(config, SystemLauncher)
    }
}

impl<L: Launcher> Picker<L> {
    /// Create a picker with a custom launcher
    #[must_use]
    pub fn with_launcher(config: &MarkqConfig, launcher: L) -> Self {
        Self {
            launcher,
            matcher: EntryMatcher::new(config.search.clone()),
            theme: Theme::default(),
            internal_schemes: config.internal_schemes.clone(),
            flash: Duration::from_millis(config.copied_flash_ms),
            hints: HelpBar::default_hints(),
        }
    }

    /// Run the picker to completion
    ///
    /// The bookmark load runs on a background thread; the picker stays in
    /// its loading state until the forest arrives. Load failures degrade
    /// to the empty state, never to an error screen.
    ///
    /// # Errors
    ///
    /// Returns `PickerError` if the terminal cannot be driven.
    pub fn run(mut self, source: impl BookmarkSource) -> Result<PickerOutcome> {
        let (tx, rx) = mpsc::channel::<LoadResult>();
        let schemes = self.internal_schemes.clone();
        thread::spawn(move || {
            let result = source.load().map(|forest| flatten(&forest, &schemes));
            let _ = tx.send(result);
        });

        let mut terminal = Self::setup_terminal()?;
        let result = self.run_loop(&mut terminal, &rx);

        // Cleanup always, even on error
        if let Err(e) = Self::cleanup_terminal() {
            eprintln!("Warning: terminal cleanup failed: {e}");
        }

        result
    }

    /// Setup terminal for the TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after the TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
        Ok(())
    }

    fn run_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stdout>>,
        rx: &Receiver<LoadResult>,
    ) -> Result<PickerOutcome> {
        let mut state = PickerState::new();
        let mut outcome = PickerOutcome::Aborted;

        loop {
            if state.phase == Phase::Loading {
                match rx.try_recv() {
                    Ok(Ok(entries)) => state.set_entries(entries),
                    Ok(Err(err)) => {
                        // "No data", not an error dialog
                        state.set_entries(Vec::new());
                        state.add_message(super::state::MessageLevel::Info, err.to_string());
                    }
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => state.set_entries(Vec::new()),
                }
            }

            actions::service_pending_open(&mut state, &mut self.launcher);

            terminal.draw(|frame| self.render(frame, &mut state))?;

            if state.should_exit {
                break;
            }

            if state.pending_blank_open.is_some() {
                // The copied flash is up; only its timer may end the session
                events::drain(TICK)?;
            } else {
                match events::poll_and_handle(&mut state, TICK)? {
                    EventResult::Confirm => {
                        if let Some(o) =
                            actions::confirm_current(&mut state, &mut self.launcher, self.flash)
                        {
                            outcome = o;
                        }
                    }
                    EventResult::Abort => state.abort(),
                    EventResult::QueryChanged => {
                        let filtered = self.matcher.filter(&state.entries, &state.query);
                        state.set_filtered(filtered);
                    }
                    EventResult::Continue | EventResult::Ignored => {}
                }
            }

            state.cleanup_messages();
        }

        if state.aborted {
            Ok(PickerOutcome::Aborted)
        } else {
            Ok(outcome)
        }
    }

    /// Render one frame
    fn render(&self, frame: &mut Frame, state: &mut PickerState) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(3),    // Entry list
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        frame.render_widget(
            SearchBar::new(&state.query, state.query_cursor, &self.theme),
            main_layout[0],
        );

        // Record the list geometry for scrolling and pointer hit-testing
        let list_area = main_layout[1];
        state.visible_height = list_area.height.saturating_sub(2) as usize;
        state.list_top = list_area.y + 1;
        frame.render_widget(EntryList::new(state, &self.theme, self.flash), list_area);

        let messages = state.active_messages();
        frame.render_widget(
            StatusBar::new(&messages, &self.theme, state.mode),
            main_layout[2],
        );

        frame.render_widget(HelpBar::new(&self.hints, &self.theme), main_layout[3]);
    }
}
