//! Command-line front end for the Eventseek engine.
//!
//! `eventseek find` loads an event snapshot from JSON, applies the filter
//! criteria given as flags, and prints the ranked result. `locations` and
//! `categories` dump the static reference tables the filters draw from.

#![forbid(unsafe_code)]

mod error;
mod find;

pub use error::CliError;

use std::io::Write;

use clap::{Parser, Subcommand};
use eventseek_core::{category, locations};

#[derive(Debug, Parser)]
#[command(
    name = "eventseek",
    about = "Discover events near a chosen location",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Filter and rank an event snapshot.
    Find(find::FindArgs),
    /// List the known regions and their named locations.
    Locations {
        /// Restrict the listing to one region code (e.g. CA).
        #[arg(long, value_name = "code")]
        region: Option<String>,
    },
    /// List the category filter options.
    Categories,
}

/// Parse arguments from the process environment and dispatch.
///
/// # Errors
/// Returns a [`CliError`] when the selected command fails; argument errors
/// and help output are handled by clap before this function runs any
/// command.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match cli.command {
        Command::Find(args) => find::run(&args, &mut out),
        Command::Locations { region } => print_locations(region.as_deref(), &mut out),
        Command::Categories => print_categories(&mut out),
    }
}

fn print_locations(region: Option<&str>, out: &mut impl Write) -> Result<(), CliError> {
    let listing: Vec<&locations::NamedLocation> = match region {
        Some(code) => {
            if !locations::region_exists(code) {
                return Err(CliError::UnknownRegion { code: code.into() });
            }
            locations::in_region(code).collect()
        }
        None => locations::all().iter().collect(),
    };
    for location in listing {
        writeln!(
            out,
            "{:<4} {:<14} {}  ({:.4}, {:.4})",
            location.id, location.label, location.region, location.position.y, location.position.x
        )
        .map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

fn print_categories(out: &mut impl Write) -> Result<(), CliError> {
    for option in category::OPTIONS {
        writeln!(out, "{:<8} {}", option.value, option.label).map_err(CliError::WriteOutput)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn captured(run_with: impl Fn(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut buffer = Vec::new();
        run_with(&mut buffer).expect("command succeeds");
        String::from_utf8(buffer).expect("utf-8 output")
    }

    #[test]
    fn locations_lists_the_whole_table_by_default() {
        let output = captured(|out| print_locations(None, out));
        assert_eq!(output.lines().count(), locations::all().len());
        assert!(output.contains("San Francisco"));
        assert!(output.contains("Reno"));
    }

    #[test]
    fn locations_can_be_restricted_to_a_region() {
        let output = captured(|out| print_locations(Some("NV"), out));
        assert_eq!(output.lines().count(), 2);
        assert!(output.contains("Las Vegas"));
        assert!(!output.contains("Chicago"));
    }

    #[test]
    fn unknown_region_is_an_error() {
        let mut buffer = Vec::new();
        let err = print_locations(Some("ZZ"), &mut buffer).unwrap_err();
        assert!(matches!(err, CliError::UnknownRegion { code } if code == "ZZ"));
    }

    #[test]
    fn categories_include_the_sentinel() {
        let output = captured(|out| print_categories(out));
        assert!(output.starts_with("all"));
        assert!(output.contains("Food & Drink"));
    }
}
