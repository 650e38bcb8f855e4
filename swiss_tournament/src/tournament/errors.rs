//! Tournament error types.

use std::time::Duration;

use thiserror::Error;

use super::models::PlayerId;
use crate::db::timeouts::TimeoutError;

/// Tournament errors
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Winner and loser are the same player
    #[error("Player {0} cannot be reported against themselves")]
    SelfMatch(PlayerId),

    /// Match references a player that is not registered
    #[error("Unknown player in match report: winner {winner}, loser {loser}")]
    UnknownPlayer { winner: PlayerId, loser: PlayerId },

    /// Players cannot be cleared while matches still reference them
    #[error("Players are still referenced by recorded matches; clear matches first")]
    MatchesRemain,

    /// Pairing requires an even number of players
    #[error("Invalid tournament state: cannot pair an odd number of players ({0})")]
    OddPlayerCount(usize),

    /// Database operation exceeded its deadline
    #[error("Database operation timed out after {0:?}")]
    Timeout(Duration),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

impl TournamentError {
    /// Get a client-safe error message
    ///
    /// Storage errors are collapsed so that SQL details and connection strings
    /// are not echoed back to callers.
    pub fn client_message(&self) -> String {
        match self {
            TournamentError::Database(_) | TournamentError::Migration(_) => {
                "Internal storage error".to_string()
            }
            _ => self.to_string(),
        }
    }
}

impl From<TimeoutError> for TournamentError {
    fn from(err: TimeoutError) -> Self {
        match err {
            TimeoutError::Timeout(duration) => TournamentError::Timeout(duration),
            TimeoutError::Database(e) => TournamentError::Database(e),
        }
    }
}

/// Result type for tournament operations
pub type TournamentResult<T> = Result<T, TournamentError>;
