use clap::{Args as ClapArgs, Parser, Subcommand};
use shopboard_core::config::{
    DEFAULT_API_BASE_URL, DEFAULT_BOARD_TITLE, DEFAULT_REFRESH_INTERVAL, DEFAULT_ROTATION_INTERVAL,
};

/// Waiting-room kiosk for the workshop board
///
/// Shopboard polls the shop's card board, orders vehicles by repair stage and
/// pages through them on the terminal. Board credentials are read from
/// TRELLO_API_KEY, TRELLO_TOKEN and TRELLO_BOARD_ID on every refresh.
#[derive(Parser)]
#[command(version, about, name = "shopboard")]
pub struct Args {
    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Title shown above the board when it loads
    #[arg(long, global = true, env = "SHOPBOARD_TITLE", default_value = DEFAULT_BOARD_TITLE)]
    pub title: String,

    /// Root URL of the board API
    #[arg(
        long,
        global = true,
        env = "SHOPBOARD_API_BASE_URL",
        default_value = DEFAULT_API_BASE_URL,
        hide = true
    )]
    pub api_base_url: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Shopboard CLI
///
/// - `run`: the full-screen kiosk loop (default when no command is given)
/// - `snapshot`: refresh once, print the first page and exit
#[derive(Subcommand)]
pub enum Commands {
    /// Run the kiosk, refreshing and rotating pages until interrupted
    Run(RunArgs),
    /// Refresh once and print the first page
    Snapshot {
        /// Print the page as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Run(RunArgs::default())
    }
}

/// Timing options for the kiosk loop
#[derive(ClapArgs)]
pub struct RunArgs {
    /// Seconds between board refreshes
    #[arg(long, default_value_t = DEFAULT_REFRESH_INTERVAL.as_secs())]
    pub refresh_secs: u64,

    /// Seconds between page flips
    #[arg(long, default_value_t = DEFAULT_ROTATION_INTERVAL.as_secs())]
    pub rotate_secs: u64,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            refresh_secs: DEFAULT_REFRESH_INTERVAL.as_secs(),
            rotate_secs: DEFAULT_ROTATION_INTERVAL.as_secs(),
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_args_are_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_no_command_defaults_to_run() {
        let args = Args::try_parse_from(["shopboard"]).unwrap();
        assert!(args.command.is_none());
        match args.command.unwrap_or_default() {
            Commands::Run(run) => {
                assert_eq!(run.refresh_secs, 30);
                assert_eq!(run.rotate_secs, 10);
            }
            Commands::Snapshot { .. } => panic!("expected run"),
        }
    }

    #[test]
    fn test_snapshot_json_flag() {
        let args = Args::try_parse_from(["shopboard", "--no-color", "snapshot", "--json"]).unwrap();
        assert!(args.no_color);
        assert!(matches!(args.command, Some(Commands::Snapshot { json: true })));
    }
}
