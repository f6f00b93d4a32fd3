use agenda::ordering::SortKey;
use agenda::time::Period;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Parser, Debug)]
#[command(name = "agenda", bin_name = "agenda", version)]
#[command(about = "Command-line appointment book", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Data directory (defaults to $AGENDA_HOME, then the platform data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Verbose output (repeat for more)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an appointment
    #[command(visible_alias = "create", alias = "n")]
    Add {
        /// Client name
        name: String,

        /// Date (YYYY-MM-DD)
        #[arg(value_parser = parse_date)]
        date: NaiveDate,

        /// Hour, 1-12
        #[arg(value_parser = clap::value_parser!(u32).range(1..=12))]
        hour: u32,

        /// Minute, 0-59
        #[arg(value_parser = clap::value_parser!(u32).range(0..=59))]
        minute: u32,

        /// AM or PM
        period: Period,
    },

    /// List appointments in their current order
    #[command(alias = "ls")]
    List,

    /// Sort appointments by date or name (the new order is saved)
    Sort {
        /// Sort key: date or name
        by: SortKey,
    },

    /// Update an appointment; omitted fields keep their current value
    #[command(alias = "e")]
    Update {
        /// Index (e.g. 3) or id of the appointment
        selector: String,

        #[arg(long)]
        name: Option<String>,

        /// New date (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        date: Option<NaiveDate>,

        /// New hour, 1-12
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
        hour: Option<u32>,

        /// New minute, 0-59
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=59))]
        minute: Option<u32>,

        /// New period, AM or PM
        #[arg(long)]
        period: Option<Period>,
    },

    /// Delete an appointment
    #[command(alias = "rm")]
    Delete {
        /// Index (e.g. 3) or id of the appointment
        selector: String,
    },

    /// Find an appointment by client name (sorts the book by name)
    Search {
        #[arg(required = true, num_args = 1..)]
        term: Vec<String>,
    },

    /// Show one appointment in full
    #[command(alias = "v")]
    View {
        /// Index (e.g. 3) or id of the appointment
        selector: String,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (data-file, clock)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|e| format!("invalid date {:?} (expected YYYY-MM-DD): {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_add() {
        let cli =
            Cli::try_parse_from(["agenda", "add", "Alice", "2025-01-10", "2", "30", "pm"]).unwrap();
        match cli.command {
            Some(Commands::Add {
                name,
                date,
                hour,
                minute,
                period,
            }) => {
                assert_eq!(name, "Alice");
                assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 10).unwrap());
                assert_eq!((hour, minute, period), (2, 30, Period::Pm));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_out_of_range_clock_values() {
        let parse = |args: [&str; 4]| {
            let mut argv = vec!["agenda", "add", "A"];
            argv.extend(args);
            Cli::try_parse_from(argv)
        };
        assert!(parse(["2025-01-10", "13", "0", "am"]).is_err());
        assert!(parse(["2025-01-10", "1", "60", "am"]).is_err());
        assert!(parse(["10/01/2025", "1", "0", "am"]).is_err());
        assert!(parse(["2025-01-10", "1", "0", "noon"]).is_err());
    }

    #[test]
    fn parses_partial_update_and_globals() {
        let cli = Cli::try_parse_from([
            "agenda", "-vv", "update", "2", "--period", "a.m.", "--dir", "/tmp/x",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.dir, Some(PathBuf::from("/tmp/x")));
        match cli.command {
            Some(Commands::Update {
                selector,
                name,
                period,
                ..
            }) => {
                assert_eq!(selector, "2");
                assert_eq!(name, None);
                assert_eq!(period, Some(Period::Am));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn parses_sort_key() {
        let cli = Cli::try_parse_from(["agenda", "sort", "name"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Sort { by: SortKey::Name })
        ));
        assert!(Cli::try_parse_from(["agenda", "sort", "size"]).is_err());
    }
}
