//! In-memory implementation of [`TournamentRepository`].
//!
//! Mirrors the PostgreSQL schema constraints: IDs come from monotonically
//! increasing sequences that are not reset by clears, matches must reference
//! registered players, and players cannot be cleared while matches reference
//! them. Each store is isolated, which makes it the default backend for tests.

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::Mutex;
use std::sync::Arc;

use super::repository::TournamentRepository;
use crate::tournament::standings::tally;
use crate::tournament::{
    Match, MatchId, Player, PlayerId, Standing, TournamentError, TournamentResult,
};

#[derive(Debug)]
struct Tables {
    players: Vec<Player>,
    matches: Vec<Match>,
    next_player_id: PlayerId,
    next_match_id: MatchId,
}

impl Default for Tables {
    fn default() -> Self {
        Self {
            players: Vec::new(),
            matches: Vec::new(),
            next_player_id: 1,
            next_match_id: 1,
        }
    }
}

impl Tables {
    fn has_player(&self, id: PlayerId) -> bool {
        self.players.iter().any(|p| p.id == id)
    }
}

/// Ephemeral tournament store
///
/// Clones share the same underlying tables.
#[derive(Debug, Clone, Default)]
pub struct MemoryTournamentRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryTournamentRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TournamentRepository for MemoryTournamentRepository {
    async fn clear_matches(&self) -> TournamentResult<u64> {
        let mut tables = self.tables.lock();
        let removed = tables.matches.len() as u64;
        tables.matches.clear();
        Ok(removed)
    }

    async fn clear_players(&self) -> TournamentResult<u64> {
        let mut tables = self.tables.lock();
        if !tables.matches.is_empty() {
            return Err(TournamentError::MatchesRemain);
        }
        let removed = tables.players.len() as u64;
        tables.players.clear();
        Ok(removed)
    }

    async fn count_players(&self) -> TournamentResult<usize> {
        Ok(self.tables.lock().players.len())
    }

    async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let mut tables = self.tables.lock();
        let id = tables.next_player_id;
        tables.next_player_id += 1;

        tables.players.push(Player {
            id,
            name: name.to_string(),
            registered_at: Utc::now(),
        });

        Ok(id)
    }

    async fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<Match> {
        // PostgreSQL evaluates the CHECK constraint before the foreign keys
        if winner_id == loser_id {
            return Err(TournamentError::SelfMatch(winner_id));
        }

        let mut tables = self.tables.lock();
        if !tables.has_player(winner_id) || !tables.has_player(loser_id) {
            return Err(TournamentError::UnknownPlayer {
                winner: winner_id,
                loser: loser_id,
            });
        }

        let id = tables.next_match_id;
        tables.next_match_id += 1;

        let recorded = Match {
            id,
            winner_id,
            loser_id,
            played_at: Utc::now(),
        };
        tables.matches.push(recorded.clone());

        Ok(recorded)
    }

    async fn standings(&self) -> TournamentResult<Vec<Standing>> {
        let tables = self.tables.lock();
        Ok(tally(&tables.players, &tables.matches))
    }

    async fn players(&self) -> TournamentResult<Vec<Player>> {
        Ok(self.tables.lock().players.clone())
    }

    async fn matches(&self) -> TournamentResult<Vec<Match>> {
        Ok(self.tables.lock().matches.clone())
    }
}
