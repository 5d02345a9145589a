use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for stamplog
#[derive(Parser)]
#[command(
    name = "stamplog",
    version = env!("CARGO_PKG_VERSION"),
    about = "Stamp in and out of work sessions; entries are kept in a local SQLite log",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or a second log)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Use this configuration file instead of the default one
    #[arg(global = true, long = "config")]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the configuration file and create the database
    Init {
        #[arg(long, short = 'f', help = "Overwrite an existing configuration file")]
        force: bool,
    },

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration values")]
        check: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(long = "editor", help = "Editor to use with --edit")]
        editor: Option<String>,
    },

    /// Toggle the current status: stamp in if out, stamp out if in
    Stamp {
        /// Category code (defaults depend on the direction)
        #[arg(long, short = 'c')]
        code: Option<String>,

        /// Comment for this stamp (defaults depend on the direction and time)
        #[arg(long, short = 'm')]
        comment: Option<String>,
    },

    /// Print the current status
    Status,

    /// Show a single entry (the latest by default)
    Show {
        id: Option<i64>,

        #[arg(long, conflicts_with = "next", help = "Show the entry before ID")]
        prev: bool,

        #[arg(long, help = "Show the entry after ID")]
        next: bool,
    },

    /// Edit an entry: "ID, Timestamp, Status, Code, Comment"
    Edit {
        id: i64,

        /// New values; omit to print the current line
        line: Option<String>,
    },

    /// Delete an entry by ID
    Del {
        id: i64,

        #[arg(long, short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries by local time range or raw filter
    List {
        #[arg(long, help = "Start, local time: YYYY-MM-DD HH:MM[:SS]")]
        from: Option<String>,

        #[arg(long, help = "End, local time: YYYY-MM-DD HH:MM[:SS]")]
        to: Option<String>,

        #[arg(
            long = "where",
            conflicts_with_all = ["from", "to"],
            help = "Raw SQL WHERE expression, executed unsanitized"
        )]
        where_expr: Option<String>,

        #[arg(long, conflicts_with_all = ["from", "to", "where_expr"], help = "Entries of the current month")]
        month: bool,
    },

    /// Export entries to CSV or JSON
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: <from>_<to>.<ext> in export_dir)")]
        file: Option<String>,

        #[arg(long)]
        from: Option<String>,

        #[arg(long)]
        to: Option<String>,

        #[arg(
            long = "where",
            conflicts_with_all = ["from", "to"],
            help = "Raw SQL WHERE expression, executed unsanitized"
        )]
        where_expr: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Copy the database to a file
    Backup {
        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long)]
        compress: bool,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Database maintenance
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the database using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },
}
