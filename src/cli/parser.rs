use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rollcall
#[derive(Parser)]
#[command(
    name = "rollcall",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple attendance CLI: record QR scans, flag duplicates, export CSV",
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

    /// Manage the configuration file (view or edit)
    Config {
        /// Print the current configuration file to stdout
        #[arg(long = "print", help = "Print the current configuration")]
        print_config: bool,

        /// Edit the configuration file with your preferred editor
        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        /// Specify the editor to use (overrides $EDITOR/$VISUAL).
        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Print the internal operations log
    Log {
        /// Print rows from the internal `log` table
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record one scanned payload
    ///
    /// The payload is either a JSON object such as {"id":"A1","name":"Bob"}
    /// or a plain ID.
    Scan {
        /// Scanned content (JSON or plain ID)
        payload: String,

        /// Attendee name (overrides a name in the payload)
        #[arg(long)]
        name: Option<String>,
    },

    /// Interactive scanning session
    ///
    /// Without --decoder, IDs are typed one per line (":list", ":clear",
    /// ":quit" are available). With --decoder, payloads are read from the
    /// camera decoder command configured in `decoder_command`.
    Session {
        /// Read from the camera decoder instead of the keyboard
        #[arg(long)]
        decoder: bool,

        /// Decoder command line (overrides `decoder_command`)
        #[arg(long = "decoder-cmd", value_name = "CMD", requires = "decoder")]
        decoder_cmd: Option<String>,
    },

    /// Show the scanned IDs, newest first
    List,

    /// Remove all scanned IDs
    Clear {
        /// Do not ask for confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Export the scanned IDs
    Export {
        /// Export format
        #[arg(long, value_enum, value_name = "FORMAT", default_value = "csv")]
        format: ExportFormat,

        /// Output file path (default: attendance_YYYY-MM-DD_HH-MM.<ext> in the current directory)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Overwrite output file without confirmation
        #[arg(long, short = 'f')]
        force: bool,
    },
}
