//! Repository trait definitions for testability and dependency injection.
//!
//! [`TournamentRepository`] is the storage seam for players and matches. The
//! PostgreSQL implementation lives here; an in-memory implementation with the
//! same constraints lives in [`super::memory`].

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use super::timeouts::{with_default_timeout, with_transaction_timeout};
use crate::tournament::{Match, Player, PlayerId, Standing, TournamentError, TournamentResult};

/// Trait for tournament storage operations
#[async_trait]
pub trait TournamentRepository: Send + Sync {
    /// Delete every match, returning the number removed
    async fn clear_matches(&self) -> TournamentResult<u64>;

    /// Delete every player, returning the number removed
    ///
    /// Does not cascade: fails with `TournamentError::MatchesRemain` while
    /// any match still references a player.
    async fn clear_players(&self) -> TournamentResult<u64>;

    /// Number of registered players
    async fn count_players(&self) -> TournamentResult<usize>;

    /// Register a player; the store assigns the ID
    async fn register_player(&self, name: &str) -> TournamentResult<PlayerId>;

    /// Record a single match result
    ///
    /// Distinct players are enforced by the store and reported as
    /// `TournamentError::SelfMatch`, which takes precedence over player
    /// existence (`TournamentError::UnknownPlayer`).
    async fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<Match>;

    /// Players with win and match counts derived from the match log, ranked
    /// by wins (descending) then ID
    async fn standings(&self) -> TournamentResult<Vec<Standing>>;

    /// All players ordered by ID
    async fn players(&self) -> TournamentResult<Vec<Player>>;

    /// Full match log ordered by ID
    async fn matches(&self) -> TournamentResult<Vec<Match>>;
}

/// Default PostgreSQL implementation of `TournamentRepository`
///
/// Mutations run in a transaction scoped to the call. Returning early drops
/// the transaction, which rolls it back and hands the connection back to the
/// pool.
#[derive(Clone)]
pub struct PgTournamentRepository {
    pool: PgPool,
}

impl PgTournamentRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn player_from_row(row: &PgRow) -> Player {
    Player {
        id: row.get("id"),
        name: row.get("name"),
        registered_at: row.get::<chrono::NaiveDateTime, _>("registered_at").and_utc(),
    }
}

fn match_from_row(row: &PgRow) -> Match {
    Match {
        id: row.get("id"),
        winner_id: row.get("winner_id"),
        loser_id: row.get("loser_id"),
        played_at: row.get::<chrono::NaiveDateTime, _>("played_at").and_utc(),
    }
}

/// Narrow a `COUNT(*)` column to the width `Standing` carries
fn count_from_row(count: i64) -> TournamentResult<u32> {
    u32::try_from(count).map_err(|e| TournamentError::Database(sqlx::Error::Decode(Box::new(e))))
}

#[async_trait]
impl TournamentRepository for PgTournamentRepository {
    async fn clear_matches(&self) -> TournamentResult<u64> {
        let mut tx = with_transaction_timeout(self.pool.begin()).await?;

        let result = with_default_timeout(sqlx::query("DELETE FROM matches").execute(&mut *tx))
            .await?;

        with_transaction_timeout(tx.commit()).await?;
        Ok(result.rows_affected())
    }

    async fn clear_players(&self) -> TournamentResult<u64> {
        let mut tx = with_transaction_timeout(self.pool.begin()).await?;

        let result = with_default_timeout(sqlx::query("DELETE FROM players").execute(&mut *tx))
            .await
            .map_err(|e| {
                if e.is_foreign_key_violation() {
                    TournamentError::MatchesRemain
                } else {
                    e.into()
                }
            })?;

        with_transaction_timeout(tx.commit()).await?;
        Ok(result.rows_affected())
    }

    async fn count_players(&self) -> TournamentResult<usize> {
        let row = with_default_timeout(
            sqlx::query("SELECT COUNT(*) AS count FROM players").fetch_one(&self.pool),
        )
        .await?;

        let count: i64 = row.get("count");
        Ok(count as usize)
    }

    async fn register_player(&self, name: &str) -> TournamentResult<PlayerId> {
        let mut tx = with_transaction_timeout(self.pool.begin()).await?;

        let row = with_default_timeout(
            sqlx::query("INSERT INTO players (name) VALUES ($1) RETURNING id")
                .bind(name)
                .fetch_one(&mut *tx),
        )
        .await?;

        with_transaction_timeout(tx.commit()).await?;
        Ok(row.get("id"))
    }

    async fn report_match(
        &self,
        winner_id: PlayerId,
        loser_id: PlayerId,
    ) -> TournamentResult<Match> {
        let mut tx = with_transaction_timeout(self.pool.begin()).await?;

        let row = with_default_timeout(
            sqlx::query(
                r#"
                INSERT INTO matches (winner_id, loser_id)
                VALUES ($1, $2)
                RETURNING id, winner_id, loser_id, played_at
                "#,
            )
            .bind(winner_id)
            .bind(loser_id)
            .fetch_one(&mut *tx),
        )
        .await
        .map_err(|e| {
            if e.is_check_violation() {
                TournamentError::SelfMatch(winner_id)
            } else if e.is_foreign_key_violation() {
                TournamentError::UnknownPlayer {
                    winner: winner_id,
                    loser: loser_id,
                }
            } else {
                e.into()
            }
        })?;

        with_transaction_timeout(tx.commit()).await?;
        Ok(match_from_row(&row))
    }

    async fn standings(&self) -> TournamentResult<Vec<Standing>> {
        let rows = with_default_timeout(
            sqlx::query(
                r#"
                SELECT p.id, p.name,
                       COUNT(m.id) FILTER (WHERE m.winner_id = p.id) AS wins,
                       COUNT(m.id) AS matches
                FROM players p
                LEFT JOIN matches m ON m.winner_id = p.id OR m.loser_id = p.id
                GROUP BY p.id, p.name
                ORDER BY wins DESC, p.id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        rows.iter()
            .map(|row| {
                Ok(Standing {
                    id: row.get("id"),
                    name: row.get("name"),
                    wins: count_from_row(row.get("wins"))?,
                    matches: count_from_row(row.get("matches"))?,
                })
            })
            .collect()
    }

    async fn players(&self) -> TournamentResult<Vec<Player>> {
        let rows = with_default_timeout(
            sqlx::query("SELECT id, name, registered_at FROM players ORDER BY id")
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.iter().map(player_from_row).collect())
    }

    async fn matches(&self) -> TournamentResult<Vec<Match>> {
        let rows = with_default_timeout(
            sqlx::query("SELECT id, winner_id, loser_id, played_at FROM matches ORDER BY id")
                .fetch_all(&self.pool),
        )
        .await?;

        Ok(rows.iter().map(match_from_row).collect())
    }
}
