//! Tournament data models for Swiss-system play.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Player ID type (assigned by the store)
pub type PlayerId = i64;

/// Match ID type
pub type MatchId = i64;

/// Registered player
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Player ID
    pub id: PlayerId,
    /// Full name (not unique)
    pub name: String,
    /// Registration timestamp
    pub registered_at: DateTime<Utc>,
}

/// Recorded match result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Match ID
    pub id: MatchId,
    /// Player credited with the win
    pub winner_id: PlayerId,
    /// Player credited with the loss
    pub loser_id: PlayerId,
    /// When the result was reported
    pub played_at: DateTime<Utc>,
}

impl Match {
    /// Whether the given player took part in this match
    pub fn involves(&self, player_id: PlayerId) -> bool {
        self.winner_id == player_id || self.loser_id == player_id
    }
}

/// A player's record derived from the match log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Standing {
    /// Player ID
    pub id: PlayerId,
    /// Full name
    pub name: String,
    /// Matches won
    pub wins: u32,
    /// Matches played (won or lost)
    pub matches: u32,
}

impl Standing {
    /// Standing for a player with no recorded matches
    pub fn new(id: PlayerId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            wins: 0,
            matches: 0,
        }
    }
}

/// Head-to-head assignment for the next round
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pairing {
    pub player1_id: PlayerId,
    pub player1_name: String,
    pub player2_id: PlayerId,
    pub player2_name: String,
}

impl Pairing {
    /// Pair two adjacent standings
    pub fn between(first: &Standing, second: &Standing) -> Self {
        Self {
            player1_id: first.id,
            player1_name: first.name.clone(),
            player2_id: second.id,
            player2_name: second.name.clone(),
        }
    }
}
