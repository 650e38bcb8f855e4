//! Next-round pairing from ranked standings.

use super::errors::{TournamentError, TournamentResult};
use super::models::{Pairing, Standing};

/// Pair adjacent players in ranked standings: (0, 1), (2, 3), ...
///
/// `standings` must already be ranked (see
/// [`rank_standings`](super::standings::rank_standings)). No byes are
/// assigned, so an odd number of players is rejected.
///
/// # Errors
///
/// * `TournamentError::OddPlayerCount` - standings hold an odd number of players
pub fn swiss_pairings(standings: &[Standing]) -> TournamentResult<Vec<Pairing>> {
    if standings.len() % 2 != 0 {
        return Err(TournamentError::OddPlayerCount(standings.len()));
    }

    Ok(standings
        .chunks_exact(2)
        .map(|pair| Pairing::between(&pair[0], &pair[1]))
        .collect())
}
