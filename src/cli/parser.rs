use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for itinera
/// CLI application to manage multi-city tour bookings with SQLite
#[derive(Parser)]
#[command(
    name = "itinera",
    version = env!("CARGO_PKG_VERSION"),
    about = "Manage multi-city tour bookings: contiguous itinerary segments, cascading date edits, and a weekly calendar view",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or check)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (migrations, integrity checks, etc.)
    Db {
        #[arg(long = "migrate", help = "Run pending database migrations")]
        migrate: bool,

        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Manage destination cities
    City {
        #[arg(long = "add", value_name = "NAME", help = "Add a city")]
        add: Option<String>,

        #[arg(long = "country", requires = "add", help = "Country of the added city")]
        country: Option<String>,

        #[arg(long = "list", help = "List cities")]
        list: bool,
    },

    /// Manage hotels
    Hotel {
        #[arg(long = "add", value_name = "NAME", help = "Add a hotel")]
        add: Option<String>,

        #[arg(long = "city", value_name = "CITY_ID", help = "City of the hotel")]
        city: Option<i64>,

        #[arg(long = "list", help = "List hotels (optionally filtered by --city)")]
        list: bool,
    },

    /// Manage guides
    Guide {
        #[arg(long = "add", value_name = "NAME", help = "Add a guide")]
        add: Option<String>,

        #[arg(long = "list", help = "List guides")]
        list: bool,
    },

    /// Create a booking with its first itinerary segment
    Add {
        /// Client name
        client: String,

        #[arg(long = "city", value_name = "CITY_ID", help = "Destination city")]
        city: i64,

        /// Arrival date (YYYY-MM-DD); omit for a stay continuing from
        /// an unrepresented prior period
        #[arg(long = "from", help = "Arrival date (YYYY-MM-DD)")]
        from: Option<String>,

        /// Departure date, exclusive (YYYY-MM-DD); omit for open-ended
        #[arg(long = "to", help = "Departure date, exclusive (YYYY-MM-DD)")]
        to: Option<String>,

        #[arg(long = "currency", help = "ISO-4217 currency code (default from config)")]
        currency: Option<String>,
    },

    /// List bookings and their segments
    List {
        #[arg(long = "booking", help = "Show only one booking")]
        booking: Option<i64>,
    },

    /// Delete a booking and all its segments
    Del {
        /// Booking id
        booking: i64,
    },

    /// Split a segment in two: insert a new leg after an existing one
    Split {
        /// Booking id
        booking: i64,

        #[arg(long = "after", help = "Ordinal of the segment to split after")]
        after: usize,

        #[arg(long = "at", value_name = "DATE", help = "Boundary date of the new leg (YYYY-MM-DD)")]
        at: String,
    },

    /// Move a segment's end date; the next segment's start follows
    SetEnd {
        /// Booking id
        booking: i64,

        /// Segment ordinal
        ordinal: usize,

        /// New end date (YYYY-MM-DD)
        date: String,
    },

    /// Edit the non-date fields of a segment
    Edit {
        /// Booking id
        booking: i64,

        /// Segment ordinal
        ordinal: usize,

        #[arg(long = "meal", help = "Meal plan (e.g. BB, HB, FB)")]
        meal: Option<String>,

        #[arg(long = "no-meal", conflicts_with = "meal", help = "Clear the meal plan")]
        no_meal: bool,

        #[arg(long = "currency", help = "ISO-4217 currency code")]
        currency: Option<String>,

        #[arg(long = "price", help = "Target price")]
        price: Option<f64>,

        #[arg(long = "no-price", conflicts_with = "price", help = "Clear the target price")]
        no_price: bool,

        #[arg(long = "add-hotel", value_name = "HOTEL_ID", help = "Attach a hotel")]
        add_hotel: Vec<i64>,

        #[arg(long = "remove-hotel", value_name = "HOTEL_ID", help = "Detach a hotel")]
        remove_hotel: Vec<i64>,
    },

    /// Assign a guide to one segment
    Assign {
        /// Booking id
        booking: i64,

        /// Segment ordinal
        ordinal: usize,

        #[arg(long = "guide", value_name = "GUIDE_ID", help = "Guide to assign")]
        guide: Option<i64>,

        #[arg(long = "clear", conflicts_with = "guide", help = "Remove the current assignment")]
        clear: bool,
    },

    /// Show the weekly calendar view of all bookings
    Calendar {
        #[arg(long = "date", help = "Pivot date (YYYY-MM-DD, default today)")]
        date: Option<String>,

        #[arg(long = "next", conflicts_with = "prev", help = "Show the following week")]
        next: bool,

        #[arg(long = "prev", help = "Show the previous week")]
        prev: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },

    /// Export itinerary data
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(
            long,
            value_name = "RANGE",
            help = "Filter export by year/month/day or a custom range"
        )]
        range: Option<String>,

        #[arg(long = "booking", help = "Restrict export to one booking")]
        booking: Option<i64>,

        #[arg(long, short = 'f')]
        force: bool,
    },
}
