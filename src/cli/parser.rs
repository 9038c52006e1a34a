use clap::{Parser, Subcommand};

/// Command-line interface definition for workhours
/// CLI application to track daily work hours in a local JSON file
#[derive(Parser)]
#[command(
    name = "workhours",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple work-hours CLI: track clock-in/clock-out times and compare against a weekly target",
    long_about = None
)]
pub struct Cli {
    /// Override data file path (useful for tests or custom locations)
    #[arg(global = true, long = "file")]
    pub file: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration and data file
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        #[arg(long = "path", help = "Print the configuration file location")]
        path: bool,
    },

    /// Register clock-in/clock-out times for a date
    Add {
        /// Date of the record (YYYY-MM-DD)
        date: String,

        /// Clock-in time (HH:MM)
        #[arg(long = "in", help = "Clock-in time (HH:MM)")]
        entry: Option<String>,

        /// Clock-out time (HH:MM)
        #[arg(long = "out", help = "Clock-out time (HH:MM)")]
        exit: Option<String>,

        /// Free-text notes for the day
        #[arg(long = "notes", help = "Notes for the day")]
        notes: Option<String>,
    },

    /// Delete the record for a date
    Del {
        /// Date of the record to delete (YYYY-MM-DD)
        date: String,
    },

    /// List stored records with computed hours
    List {
        #[arg(long, short, help = "Filter by year/month/day or a custom range")]
        period: Option<String>,

        #[arg(long = "today", help = "Show only today's record")]
        now: bool,
    },

    /// Weekly summary with 40h target comparison
    Week {
        /// First day of the 7-day window (defaults to Monday of the current week)
        #[arg(long = "start", help = "First day of the 7-day window (YYYY-MM-DD)")]
        start: Option<String>,
    },

    /// Yearly summary
    Year {
        /// Target year (defaults to the current year)
        year: Option<i32>,
    },
}
