//! Tournament manager exposing the Swiss-system store operations.

use std::sync::Arc;

use super::errors::{TournamentError, TournamentResult};
use super::models::{Match, Pairing, Player, PlayerId, Standing};
use super::pairing::swiss_pairings;
use crate::db::repository::TournamentRepository;

/// Tournament manager
///
/// Assumes a single writer at a time; nothing here serialises concurrent
/// callers, and a standings snapshot may be stale by the time it is used.
#[derive(Clone)]
pub struct TournamentManager {
    repository: Arc<dyn TournamentRepository>,
}

impl TournamentManager {
    /// Create a new tournament manager over the given store
    pub fn new(repository: Arc<dyn TournamentRepository>) -> Self {
        Self { repository }
    }

    /// Remove all match records. Players are untouched.
    pub async fn clear_matches(&self) -> TournamentResult<u64> {
        let removed = self.repository.clear_matches().await?;
        log::info!("Cleared {} match(es)", removed);
        Ok(removed)
    }

    /// Remove all player records
    ///
    /// # Errors
    ///
    /// * `TournamentError::MatchesRemain` - matches must be cleared first
    pub async fn clear_players(&self) -> TournamentResult<u64> {
        let removed = self.repository.clear_players().await?;
        log::info!("Cleared {} player(s)", removed);
        Ok(removed)
    }

    /// Clear matches, then players
    pub async fn reset(&self) -> TournamentResult<(u64, u64)> {
        let matches = self.clear_matches().await?;
        let players = self.clear_players().await?;
        Ok((matches, players))
    }

    /// Number of registered players
    pub async fn count_players(&self) -> TournamentResult<usize> {
        self.repository.count_players().await
    }

    /// Register a player and return the store-assigned ID
    ///
    /// Names need not be unique.
    pub async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let id = self.repository.register_player(name).await?;
        log::info!("Registered player {} '{}'", id, name);
        Ok(id)
    }

    /// Record the outcome of a single match
    ///
    /// # Errors
    ///
    /// * `TournamentError::SelfMatch` - winner and loser are the same player
    /// * `TournamentError::UnknownPlayer` - either ID is not registered
    pub async fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<Match> {
        if winner_id == loser_id {
            return Err(TournamentError::SelfMatch(winner_id));
        }

        let recorded = self.repository.report_match(winner_id, loser_id).await?;
        log::info!(
            "Recorded match {}: {} beat {}",
            recorded.id,
            winner_id,
            loser_id
        );
        Ok(recorded)
    }

    /// Players ranked by wins (descending); ties ordered by player ID
    pub async fn standings(&self) -> TournamentResult<Vec<Standing>> {
        let standings = self.repository.standings().await?;
        log::debug!("Computed standings for {} player(s)", standings.len());
        Ok(standings)
    }

    /// Pairings for the next round from the current standings
    ///
    /// # Errors
    ///
    /// * `TournamentError::OddPlayerCount` - no bye rule exists, so every
    ///   player must have an opponent
    pub async fn pairings(&self) -> TournamentResult<Vec<Pairing>> {
        let standings = self.standings().await?;
        let pairings = swiss_pairings(&standings).inspect_err(|e| log::warn!("{}", e))?;
        log::debug!("Generated {} pairing(s)", pairings.len());
        Ok(pairings)
    }

    /// All registered players ordered by ID
    pub async fn players(&self) -> TournamentResult<Vec<Player>> {
        self.repository.players().await
    }

    /// Full match log ordered by ID
    pub async fn matches(&self) -> TournamentResult<Vec<Match>> {
        self.repository.matches().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryTournamentRepository;

    fn manager() -> TournamentManager {
        TournamentManager::new(Arc::new(MemoryTournamentRepository::new()))
    }

    #[tokio::test]
    async fn test_count_after_registration() {
        let mgr = manager();
        assert_eq!(mgr.count_players().await.unwrap(), 0);

        for name in ["Ada", "Bo", "Cy"] {
            mgr.register_player(name).await.unwrap();
        }
        assert_eq!(mgr.count_players().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn test_self_match_is_rejected_before_storage() {
        let mgr = manager();
        let ada = mgr.register_player("Ada").await.unwrap();

        let err = mgr.report_match(ada, ada).await.unwrap_err();
        assert!(matches!(err, TournamentError::SelfMatch(_)));
        assert!(mgr.matches().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_unknown_player_propagates() {
        let mgr = manager();
        let ada = mgr.register_player("Ada").await.unwrap();

        let err = mgr.report_match(42, ada).await.unwrap_err();
        assert!(matches!(err, TournamentError::UnknownPlayer { winner: 42, .. }));
    }

    #[tokio::test]
    async fn test_pairings_with_odd_count() {
        let mgr = manager();
        for name in ["Ada", "Bo", "Cy"] {
            mgr.register_player(name).await.unwrap();
        }

        let err = mgr.pairings().await.unwrap_err();
        assert!(matches!(err, TournamentError::OddPlayerCount(3)));
    }

    #[tokio::test]
    async fn test_pairings_follow_standings() {
        let mgr = manager();
        let ada = mgr.register_player("Ada").await.unwrap();
        let bo = mgr.register_player("Bo").await.unwrap();
        let cy = mgr.register_player("Cy").await.unwrap();
        let di = mgr.register_player("Di").await.unwrap();

        mgr.report_match(di, cy).await.unwrap();
        mgr.report_match(bo, ada).await.unwrap();

        let pairings = mgr.pairings().await.unwrap();
        assert_eq!(pairings.len(), 2);
        assert_eq!((pairings[0].player1_id, pairings[0].player2_id), (bo, di));
        assert_eq!((pairings[1].player1_id, pairings[1].player2_id), (ada, cy));
    }

    #[tokio::test]
    async fn test_reset_clears_everything() {
        let mgr = manager();
        let ada = mgr.register_player("Ada").await.unwrap();
        let bo = mgr.register_player("Bo").await.unwrap();
        mgr.report_match(ada, bo).await.unwrap();

        assert_eq!(mgr.reset().await.unwrap(), (1, 2));
        assert_eq!(mgr.count_players().await.unwrap(), 0);
        assert!(mgr.standings().await.unwrap().is_empty());
    }
}
