//! Scorekeeper CLI - drives one game stored on disk, one operation per call.
//!
//! Every invocation restores the saved game, applies a single operation,
//! saves, and prints the resulting view as JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Args as ClapArgs, Parser, Subcommand};
use scorekeeper::domain::{view, PlayerId};
use scorekeeper::{
    AppError, FileStore, GameSession, Operation, Outcome, RawConfiguration, StorageConfig,
};
use tracing::info;

mod telemetry;

#[derive(Parser)]
#[command(name = "scorekeeper")]
#[command(about = "Score keeper for estimation whist")]
struct Cli {
    /// Directory holding game.json and config.json (overrides SCOREKEEPER_STATE_DIR)
    #[arg(long, global = true)]
    state_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current view without changing anything
    Status,
    /// Edit the configuration (only before a game starts)
    Configure(ConfigArgs),
    /// Start a game, optionally overriding configuration fields
    Start(ConfigArgs),
    /// Record the bid of the player on turn
    Bid { value: u8 },
    /// Record the winner of the current trick (0-based player index)
    Trick { player: PlayerId },
    /// Undo the last action
    Undo,
    /// Move on to the next round from the summary
    Next,
    /// End the game now and show the summary
    Quit,
    /// Discard the finished game and return to configuration
    New,
}

#[derive(ClapArgs)]
struct ConfigArgs {
    /// Number of players (2-8)
    #[arg(long)]
    players: Option<i64>,

    /// Cards dealt in the first and last round
    #[arg(long)]
    hand_size: Option<i64>,

    /// Trump of the first round: clubs, diamonds, hearts, spades, nt
    #[arg(long)]
    trump: Option<String>,

    /// Comma-separated player names in seat order
    #[arg(long, value_delimiter = ',')]
    names: Option<Vec<String>>,

    /// Seat of the first dealer (0-based)
    #[arg(long)]
    dealer: Option<i64>,
}

impl From<ConfigArgs> for RawConfiguration {
    fn from(args: ConfigArgs) -> Self {
        RawConfiguration {
            player_count: args.players,
            starting_hand_size: args.hand_size,
            trump_start: args.trump,
            player_names: args.names,
            first_dealer: args.dealer,
        }
    }
}

impl Command {
    fn into_operation(self) -> Option<Operation> {
        match self {
            Command::Status => None,
            Command::Configure(args) => Some(Operation::UpdateConfig(args.into())),
            Command::Start(args) => Some(Operation::StartGame(args.into())),
            Command::Bid { value } => Some(Operation::SelectBid(value)),
            Command::Trick { player } => Some(Operation::RecordTrickWinner(player)),
            Command::Undo => Some(Operation::Undo),
            Command::Next => Some(Operation::NextRound),
            Command::Quit => Some(Operation::QuitGame),
            Command::New => Some(Operation::NewGame),
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let storage = match cli.state_dir {
        Some(dir) => StorageConfig::new(dir),
        None => StorageConfig::from_env(),
    };
    if storage.state_dir().as_os_str().is_empty() {
        return Err(AppError::config("State directory must not be empty"));
    }
    info!(state_dir = %storage.state_dir().display(), "Using state directory");

    let mut session = GameSession::restore(FileStore::new(&storage));
    let outcome = match cli.command.into_operation() {
        Some(op) => session.dispatch(op),
        None => Outcome::Applied,
    };

    println!("{}", serde_json::to_string_pretty(&view(session.state()))?);

    match outcome {
        Outcome::Applied => Ok(()),
        Outcome::Rejected(e) => Err(e.into()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("❌ {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
