//! Swiss tournament command-line tool.
//!
//! Provisions the schema and drives registration, reporting, standings and
//! pairings against a PostgreSQL database.

use std::sync::Arc;

use anyhow::{Context, Result};
use log::{debug, info};
use pico_args::Arguments;
use st_cli::commands::{Command, error_message, execute, parse_command};
use st_cli::config::CliConfig;
use swiss_tournament::{Database, TournamentManager};

const HELP: &str = "\
Manage a Swiss-system tournament

USAGE:
  st_cli [OPTIONS] <COMMAND> [ARGS]

COMMANDS:
  migrate                  Create or update the players/matches schema
  register NAME...         Register a player (names may contain spaces)
  report WINNER LOSER      Record a match result by player ID
  count                    Print the number of registered players
  standings                Print players ranked by wins
  pairings                 Print next-round pairings
  players                  List registered players
  matches                  List recorded matches
  clear-matches            Delete all matches
  clear-players            Delete all players (matches must be cleared first)
  reset                    Delete all matches, then all players

OPTIONS:
  --db-url     URL         Database connection string
                           [default: env DATABASE_URL or postgres://postgres@localhost/tournament]

FLAGS:
  --json                   Emit JSON for standings, pairings, players and matches
  -h, --help               Print help information

ENVIRONMENT:
  DATABASE_URL             PostgreSQL connection string
  DB_MAX_CONNECTIONS       Pool size (default: 5)
  RUST_LOG                 Log filter (default: info)
";

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        std::process::exit(0);
    }

    let json = pargs.contains("--json");
    let database_url: Option<String> = pargs
        .opt_value_from_str("--db-url")
        .context("Invalid --db-url")?;

    let free: Vec<String> = pargs
        .finish()
        .into_iter()
        .map(|arg| arg.into_string())
        .collect::<Result<_, _>>()
        .map_err(|arg| anyhow::anyhow!("Argument is not valid UTF-8: {:?}", arg))?;
    let command = parse_command(&free)?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = CliConfig::from_env(database_url, json)?;

    let db = Database::new(&config.database)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;
    info!("Database connected successfully");

    let result = if command == Command::Migrate {
        db.migrate().await.map(|()| String::new()).map_err(anyhow::Error::from)
    } else {
        let manager = TournamentManager::new(Arc::new(db.tournament_repository()));
        execute(&command, &manager, config.json).await
    };
    db.close().await;

    match result {
        Ok(rendered) => {
            if !rendered.is_empty() {
                println!("{rendered}");
            }
            Ok(())
        }
        Err(e) => {
            debug!("{command:?} failed: {e:?}");
            anyhow::bail!(error_message(&e))
        }
    }
}
