//! # Swiss Tournament
//!
//! Player registration, match reporting, standings and next-round pairings for
//! a Swiss-system tournament, backed by PostgreSQL through sqlx.
//!
//! ## Architecture
//!
//! - **Repositories** ([`db::TournamentRepository`]): the storage seam. A
//!   PostgreSQL implementation and an in-memory one with the same
//!   constraints.
//! - **Manager** ([`TournamentManager`]): the operations callers use, with
//!   logging and up-front validation.
//! - **Pure functions** ([`tally`], [`swiss_pairings`]): standings from a match
//!   log and pairing of adjacent standings.
//!
//! Standings are always derived from the match log; no win or match counter is
//! stored on the player.
//!
//! ## Example
//!
//! ```
//! use std::sync::Arc;
//! use swiss_tournament::{MemoryTournamentRepository, TournamentManager};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), swiss_tournament::TournamentError> {
//!     let manager = TournamentManager::new(Arc::new(MemoryTournamentRepository::new()));
//!     let a = manager.register_player("A").await?;
//!     let b = manager.register_player("B").await?;
//!     manager.report_match(a, b).await?;
//!
//!     let pairings = manager.pairings().await?;
//!     assert_eq!(pairings.len(), 1);
//!     Ok(())
//! }
//! ```

/// Connection pooling, configuration and repositories.
pub mod db;

/// Tournament models, errors, manager and pairing logic.
pub mod tournament;

pub use db::{Database, DatabaseConfig, MemoryTournamentRepository, PgTournamentRepository};
pub use tournament::{
    Match, Pairing, Player, PlayerId, Standing, TournamentError, TournamentManager,
    TournamentResult, swiss_pairings, tally,
};
