use crate::export::ExportFormat;
use crate::store::Sheet;
use clap::{Parser, Subcommand, ValueEnum};

/// Command-line interface definition for sitesupervisor
/// Field installation log and material stock ledger on SQLite
#[derive(Parser)]
#[command(
    name = "sitesupervisor",
    version = env!("CARGO_PKG_VERSION"),
    about = "A site supervision CLI: log meter installations, track material stock and survey assets",
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

/// Ordering of the stock table.
#[derive(Clone, Copy, Debug, PartialEq, ValueEnum)]
pub enum StockSort {
    Name,
    Qty,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
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

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Log a meter installation (box, cable and lugs consumed)
    Install {
        #[arg(long, help = "Installation date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(long = "meter-type", help = "Meter type, e.g. \"1 Phase\"")]
        meter_type: String,

        #[arg(long)]
        site: String,

        #[arg(long = "dtr", help = "DTR / asset code of the installation point")]
        dtr_code: String,

        #[arg(long)]
        worker: String,

        #[arg(long, default_value_t = 0.0, help = "Cable used (m)")]
        cable: f64,

        #[arg(long, default_value_t = 0.0, help = "Lugs used")]
        lugs: f64,

        #[arg(long, allow_negative_numbers = true, help = "GPS latitude")]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true, help = "GPS longitude")]
        lon: Option<f64>,
    },

    /// Record material received into stock
    Inward {
        #[arg(long)]
        material: String,

        #[arg(long)]
        qty: f64,

        #[arg(long, help = "Receipt date (YYYY-MM-DD), default today")]
        date: Option<String>,
    },

    /// Manage the worker roster
    Worker {
        #[arg(long, value_name = "NAME", help = "Add a worker to the roster")]
        add: Option<String>,

        #[arg(long, help = "List the roster")]
        list: bool,
    },

    /// List the rows of a table
    List {
        #[arg(value_enum)]
        table: Sheet,

        #[arg(long, help = "Only these workers (repeatable)")]
        worker: Vec<String>,

        #[arg(long, help = "Only these materials (repeatable)")]
        material: Vec<String>,

        #[arg(long, help = "Only these sites (repeatable)")]
        site: Vec<String>,

        #[arg(long, help = "Case-insensitive text search")]
        search: Option<String>,

        #[arg(long, help = "One line per installation (work-logs only)")]
        grouped: bool,
    },

    /// Delete rows by id, or a whole installation group
    Del {
        #[arg(value_enum)]
        table: Sheet,

        #[arg(long = "id", help = "Row id to delete (repeatable)")]
        ids: Vec<String>,

        #[arg(
            long,
            conflicts_with = "ids",
            requires_all = ["date", "dtr", "worker"],
            help = "Delete one whole installation, chosen by --date, --dtr and --worker (work-logs only)"
        )]
        group: bool,

        #[arg(long, requires = "group", help = "Installation date of the group")]
        date: Option<String>,

        #[arg(long, requires = "group", help = "DTR code of the group")]
        dtr: Option<String>,

        #[arg(long, requires = "group", help = "Worker of the group")]
        worker: Option<String>,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Change cells of one row
    Edit {
        #[arg(value_enum)]
        table: Sheet,

        #[arg(long)]
        id: String,

        #[arg(long = "set", value_name = "COLUMN=VALUE", required = true)]
        set: Vec<String>,
    },

    /// Show material stock on hand and low-stock alerts
    Stock {
        #[arg(long, value_enum, default_value = "qty")]
        sort: StockSort,

        #[arg(long, help = "Only materials containing this text")]
        filter: Option<String>,
    },

    /// Stock tickers, installation counts and alerts at a glance
    Dashboard,

    /// Log a surveyed asset, print the survey report or share an entry
    Survey {
        #[arg(long, help = "Asset name")]
        name: Option<String>,

        #[arg(long, help = "Asset code (matches the DTR code of installations)")]
        code: Option<String>,

        #[arg(long, allow_negative_numbers = true)]
        lat: Option<f64>,

        #[arg(long, allow_negative_numbers = true)]
        lon: Option<f64>,

        #[arg(long = "switch-type")]
        switch_type: Option<String>,

        #[arg(long)]
        lineman: Option<String>,

        #[arg(long, help = "Survey date (YYYY-MM-DD), default today")]
        date: Option<String>,

        #[arg(
            long,
            value_name = "FILE",
            conflicts_with_all = ["name", "share"],
            help = "Write a PDF report of every survey entry"
        )]
        report: Option<String>,

        #[arg(long, short = 'f', requires = "report")]
        force: bool,

        #[arg(
            long,
            value_name = "ID",
            conflicts_with = "name",
            help = "Print a chat share link for one entry"
        )]
        share: Option<String>,
    },

    /// Show or extend the lookup lists
    Settings {
        #[arg(long, help = "Print sites, meter types, materials and workers")]
        print: bool,

        #[arg(long, value_name = "SITE", help = "Append a site")]
        site: Option<String>,

        #[arg(long = "meter-type", value_name = "TYPE", help = "Append a meter type")]
        meter_type: Option<String>,

        #[arg(long, value_name = "MATERIAL", help = "Append a material")]
        material: Option<String>,
    },

    /// Export a table
    Export {
        #[arg(value_enum)]
        table: Sheet,

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

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Create a backup copy of the database
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,
    },
}
