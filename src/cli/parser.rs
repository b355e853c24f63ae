use clap::{Parser, Subcommand};

/// Command-line interface definition for PearlKite
/// Telegram bot and CLI for the kite session log
#[derive(Parser)]
#[command(
    name = "pearlkite",
    version = env!("CARGO_PKG_VERSION"),
    about = "Register kite sessions from Telegram or the terminal into a flat append-only log",
    long_about = None
)]
pub struct Cli {
    /// Override the event log path (useful for tests or a custom location)
    #[arg(global = true, long = "events", value_name = "PATH")]
    pub events: Option<String>,

    /// Read the configuration from this file instead of ~/.pearlkite/pearlkite.conf
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the configuration file and the event log
    Init,

    /// Show or edit the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
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

    /// Register a kite session: кайт="core 13.5" from=10:00 to=12:00
    Add {
        /// Parameters, in any order (кайт=…, from=…, to=…)
        #[arg(required = true, num_args = 1..)]
        params: Vec<String>,

        #[arg(long = "name", help = "Reporter name (default: $USER)")]
        name: Option<String>,

        #[arg(long = "chat", default_value = "local", help = "Chat id stored with the record")]
        chat: String,

        #[arg(long = "user", default_value_t = 0, help = "User id stored with the record")]
        user: i64,
    },

    /// Show the most recent sessions
    List {
        /// How many records to show (default 10, at most 50)
        #[arg(allow_hyphen_values = true)]
        count: Option<String>,
    },

    /// Run the Telegram bot (token from BOT_PearlKiteBot or BOT_TOKEN)
    Serve,
}
