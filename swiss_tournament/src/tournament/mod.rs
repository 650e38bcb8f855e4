//! Tournament module for Swiss-system play.
//!
//! This module provides:
//! - Player registration and bulk clearing
//! - Match result reporting (win/loss only)
//! - Standings derived from the match log
//! - Next-round pairing of adjacent players in the standings
//!
//! ## Example
//!
//! ```no_run
//! use swiss_tournament::db::{Database, DatabaseConfig};
//! use swiss_tournament::tournament::TournamentManager;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let db = Database::new(&DatabaseConfig::development()).await?;
//!     let manager = TournamentManager::new(Arc::new(db.tournament_repository()));
//!
//!     let ada = manager.register_player("Ada Lovelace").await?;
//!     let alan = manager.register_player("Alan Turing").await?;
//!     manager.report_match(ada, alan).await?;
//!
//!     for pairing in manager.pairings().await? {
//!         println!("{} vs {}", pairing.player1_name, pairing.player2_name);
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod manager;
pub mod models;
pub mod pairing;
pub mod standings;

pub use errors::{TournamentError, TournamentResult};
pub use manager::TournamentManager;
pub use models::{Match, MatchId, Pairing, Player, PlayerId, Standing};
pub use pairing::swiss_pairings;
pub use standings::{rank_standings, tally};
