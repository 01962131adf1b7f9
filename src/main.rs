use clap::Parser;
use markq::MarkqError;
use markq::bookmarks::{BookmarkSource, ChromiumSource, flatten};
use markq::cli::{Cli, Commands};
use markq::config::MarkqConfig;
use markq::picker::{Picker, PickerOutcome};
use markq::search::EntryMatcher;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), MarkqError> {
    let cli = Cli::parse();
    let config = MarkqConfig::load()?;

    let store_path = cli.bookmarks.or_else(|| config.bookmarks_file.clone());
    let source = ChromiumSource::new(store_path);

    match cli.command {
        None | Some(Commands::Open) => run_picker(&config, source),
        Some(Commands::List { query }) => list_bookmarks(&config, source, query.as_deref()),
    }
}

/// Run the interactive picker and report what it ended with
fn run_picker(config: &MarkqConfig, source: ChromiumSource) -> Result<(), MarkqError> {
    match Picker::new(config).run(source)? {
        PickerOutcome::Opened(_) | PickerOutcome::Aborted => {}
        PickerOutcome::Copied(entry) => {
            println!("Copied {} to the clipboard.", entry.address);
            println!("Paste it into the address bar of the new tab.");
        }
    }
    Ok(())
}

/// Print matching bookmarks, one per line, without entering the picker
fn list_bookmarks(
    config: &MarkqConfig,
    source: ChromiumSource,
    query: Option<&str>,
) -> Result<(), MarkqError> {
    // A missing or unreadable store is "no bookmarks", same as the picker
    let entries = match source.load() {
        Ok(forest) => flatten(&forest, &config.internal_schemes),
        Err(_) => Vec::new(),
    };

    let mut matcher = EntryMatcher::new(config.search.clone());
    let filtered = matcher.filter(&entries, query.unwrap_or(""));

    if filtered.is_empty() {
        println!("No bookmarks found.");
        return Ok(());
    }

    for idx in filtered {
        if let Some(entry) = entries.get(idx as usize) {
            println!("{}\t{}", entry.display_title(), entry.address);
        }
    }

    Ok(())
}
