//! `find` subcommand: load a snapshot, apply criteria, print the ranking.

use std::fs::File;
use std::io::{BufReader, Write};
use std::path::{Path, PathBuf};

use clap::Args;
use eventseek_core::{CategoryFilter, DateWindow, Event, EventCard, FilterCriteria, pipeline};

use crate::CliError;

/// CLI arguments for the `find` subcommand.
#[derive(Debug, Args)]
#[command(long_about = "Filter an event snapshot by text, category, date \
                        window, and proximity to a named location, then \
                        print the survivors ranked by distance.")]
pub(crate) struct FindArgs {
    /// Path to the event snapshot JSON (an array of events).
    #[arg(long, value_name = "path")]
    pub(crate) events: PathBuf,
    /// Case-insensitive text filter over title, venue, and address.
    #[arg(long, value_name = "text", default_value = "")]
    pub(crate) search: String,
    /// Category id, or "all".
    #[arg(long, value_name = "id", default_value = "all")]
    pub(crate) category: CategoryFilter,
    /// Date window: all, today, next7days, or next30days.
    #[arg(long, value_name = "window", default_value = "all")]
    pub(crate) dates: DateWindow,
    /// Location id to centre the 50 km radius on (e.g. SF).
    #[arg(long, value_name = "location")]
    pub(crate) near: Option<String>,
    /// Emit the ranked events as JSON instead of cards.
    #[arg(long)]
    pub(crate) json: bool,
}

impl FindArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            search_text: self.search.clone(),
            category: self.category,
            date_window: self.dates,
            focal_location: self.near.clone(),
        }
    }
}

pub(crate) fn run(args: &FindArgs, out: &mut impl Write) -> Result<(), CliError> {
    let events = load_snapshot(&args.events)?;
    let ranked = pipeline::rank(&events, &args.criteria());
    log::debug!(
        "{} of {} events survived filtering",
        ranked.len(),
        events.len()
    );

    if args.json {
        serde_json::to_writer_pretty(&mut *out, &ranked.events).map_err(CliError::SerializeOutput)?;
        writeln!(out).map_err(CliError::WriteOutput)?;
        return Ok(());
    }
    print_cards(&ranked.events, out)
}

fn load_snapshot(path: &Path) -> Result<Vec<Event>, CliError> {
    let file = File::open(path).map_err(|source| CliError::OpenSnapshot {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseSnapshot {
        path: path.to_path_buf(),
        source,
    })
}

fn print_cards(events: &[Event], out: &mut impl Write) -> Result<(), CliError> {
    if events.is_empty() {
        return writeln!(out, "No events found for the selected filters.")
            .map_err(CliError::WriteOutput);
    }

    writeln!(out, "{} event(s)\n", events.len()).map_err(CliError::WriteOutput)?;
    for card in events.iter().map(EventCard::from) {
        let badges = match &card.ticket_badge {
            Some(badge) => format!("[{}] [{badge}]", card.category_label),
            None => format!("[{}]", card.category_label),
        };
        writeln!(
            out,
            "{}\n  {} at {}, {}\n  {}\n  {}\n",
            card.title, card.starts_at, card.venue_name, card.venue_address, badges, card.url
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}
