//! Subcommand parsing and execution.

use anyhow::Result;
use swiss_tournament::{PlayerId, TournamentError, TournamentManager};
use thiserror::Error;

use crate::output;

/// A single CLI invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Apply schema migrations
    Migrate,
    /// Register a player under the given name
    Register { name: String },
    /// Record a match result
    Report { winner: PlayerId, loser: PlayerId },
    /// Print the player count
    Count,
    /// Print current standings
    Standings,
    /// Print next-round pairings
    Pairings,
    /// List registered players
    Players,
    /// List the match log
    Matches,
    ClearMatches,
    ClearPlayers,
    /// Clear matches, then players
    Reset,
}

/// Errors that can occur during command parsing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("No command given. Run with --help to see available commands")]
    MissingCommand,

    #[error("'{command}' requires {argument}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
    },

    #[error("Invalid player ID '{0}'. Must be an integer (e.g., 'report 1 2')")]
    InvalidPlayerId(String),

    #[error("Unexpected arguments for '{command}': {extra}")]
    UnexpectedArguments { command: &'static str, extra: String },

    #[error("Unrecognized command '{0}'. Run with --help to see available commands")]
    UnrecognizedCommand(String),
}

fn parse_player_id(value: &str) -> Result<PlayerId, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::InvalidPlayerId(value.to_string()))
}

fn no_arguments(
    command: &'static str,
    rest: &[String],
    parsed: Command,
) -> Result<Command, ParseError> {
    if rest.is_empty() {
        Ok(parsed)
    } else {
        Err(ParseError::UnexpectedArguments {
            command,
            extra: rest.join(" "),
        })
    }
}

/// Parse the free (non-flag) arguments into a [`Command`].
///
/// # Examples
///
/// ```
/// use st_cli::commands::{parse_command, Command};
///
/// let args: Vec<String> = vec!["report".into(), "3".into(), "7".into()];
/// assert_eq!(parse_command(&args), Ok(Command::Report { winner: 3, loser: 7 }));
///
/// // Names may contain spaces
/// let args: Vec<String> = vec!["register".into(), "Ada".into(), "Lovelace".into()];
/// assert_eq!(
///     parse_command(&args),
///     Ok(Command::Register { name: "Ada Lovelace".to_string() })
/// );
/// ```
pub fn parse_command(args: &[String]) -> Result<Command, ParseError> {
    let (command, rest) = args.split_first().ok_or(ParseError::MissingCommand)?;

    match command.as_str() {
        "migrate" => no_arguments("migrate", rest, Command::Migrate),
        "register" => {
            let name = rest.join(" ");
            if name.trim().is_empty() {
                return Err(ParseError::MissingArgument {
                    command: "register",
                    argument: "a player name",
                });
            }
            Ok(Command::Register { name })
        }
        "report" => match rest {
            [winner, loser] => Ok(Command::Report {
                winner: parse_player_id(winner)?,
                loser: parse_player_id(loser)?,
            }),
            [_, _, extra @ ..] => Err(ParseError::UnexpectedArguments {
                command: "report",
                extra: extra.join(" "),
            }),
            _ => Err(ParseError::MissingArgument {
                command: "report",
                argument: "a winner ID and a loser ID",
            }),
        },
        "count" => no_arguments("count", rest, Command::Count),
        "standings" => no_arguments("standings", rest, Command::Standings),
        "pairings" => no_arguments("pairings", rest, Command::Pairings),
        "players" => no_arguments("players", rest, Command::Players),
        "matches" => no_arguments("matches", rest, Command::Matches),
        "clear-matches" => no_arguments("clear-matches", rest, Command::ClearMatches),
        "clear-players" => no_arguments("clear-players", rest, Command::ClearPlayers),
        "reset" => no_arguments("reset", rest, Command::Reset),
        other => Err(ParseError::UnrecognizedCommand(other.to_string())),
    }
}

/// Run a store command and render its result.
///
/// `Command::Migrate` needs the database handle itself and is handled by the
/// caller; here it renders nothing.
pub async fn execute(
    command: &Command,
    manager: &TournamentManager,
    json: bool,
) -> Result<String> {
    let rendered = match command {
        Command::Migrate => String::new(),
        Command::Register { name } => {
            let id = manager.register_player(name).await?;
            format!("Registered '{}' with ID {}", name, id)
        }
        Command::Report { winner, loser } => {
            let recorded = manager.report_match(*winner, *loser).await?;
            format!(
                "Recorded match {}: {} beat {}",
                recorded.id, recorded.winner_id, recorded.loser_id
            )
        }
        Command::Count => manager.count_players().await?.to_string(),
        Command::Standings => {
            let standings = manager.standings().await?;
            if json {
                serde_json::to_string_pretty(&standings)?
            } else {
                output::standings_table(&standings)
            }
        }
        Command::Pairings => {
            let pairings = manager.pairings().await?;
            if json {
                serde_json::to_string_pretty(&pairings)?
            } else {
                output::pairings_table(&pairings)
            }
        }
        Command::Players => {
            let players = manager.players().await?;
            if json {
                serde_json::to_string_pretty(&players)?
            } else {
                output::players_table(&players)
            }
        }
        Command::Matches => {
            let matches = manager.matches().await?;
            if json {
                serde_json::to_string_pretty(&matches)?
            } else {
                output::matches_table(&matches)
            }
        }
        Command::ClearMatches => {
            format!("Removed {} match(es)", manager.clear_matches().await?)
        }
        Command::ClearPlayers => {
            format!("Removed {} player(s)", manager.clear_players().await?)
        }
        Command::Reset => {
            let (matches, players) = manager.reset().await?;
            format!("Removed {} match(es) and {} player(s)", matches, players)
        }
    };

    Ok(rendered)
}

/// Message shown to the user when a command fails
///
/// Tournament errors go through [`TournamentError::client_message`], so
/// storage failures do not print SQL or connection details.
pub fn error_message(err: &anyhow::Error) -> String {
    match err.downcast_ref::<TournamentError>() {
        Some(e) => e.client_message(),
        None => err.to_string(),
    }
}
