//! Standings derived from the match log.

use std::collections::HashMap;

use super::models::{Match, Player, PlayerId, Standing};

/// Sort standings by wins (descending), breaking ties by player ID so that
/// pairings are reproducible.
pub fn rank_standings(standings: &mut [Standing]) {
    standings.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.id.cmp(&b.id)));
}

/// Compute standings for `players` in a single pass over `matches`.
///
/// Matches naming a player outside `players` are skipped; the stores never
/// persist such a match.
pub fn tally(players: &[Player], matches: &[Match]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = players
        .iter()
        .map(|p| Standing::new(p.id, p.name.clone()))
        .collect();

    let index: HashMap<PlayerId, usize> = standings
        .iter()
        .enumerate()
        .map(|(i, s)| (s.id, i))
        .collect();

    for m in matches {
        if let Some(&i) = index.get(&m.winner_id) {
            standings[i].wins += 1;
            standings[i].matches += 1;
        }
        if let Some(&i) = index.get(&m.loser_id) {
            standings[i].matches += 1;
        }
    }

    rank_standings(&mut standings);
    standings
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn player(id: PlayerId, name: &str) -> Player {
        Player {
            id,
            name: name.to_string(),
            registered_at: Utc::now(),
        }
    }

    fn result(id: i64, winner_id: PlayerId, loser_id: PlayerId) -> Match {
        Match {
            id,
            winner_id,
            loser_id,
            played_at: Utc::now(),
        }
    }

    #[test]
    fn test_tally_without_matches() {
        let players = vec![player(2, "Bo"), player(1, "Ada")];
        let standings = tally(&players, &[]);

        assert_eq!(standings.len(), 2);
        // Equal wins fall back to ID order
        assert_eq!(standings[0].id, 1);
        assert_eq!(standings[1].id, 2);
        assert!(standings.iter().all(|s| s.wins == 0 && s.matches == 0));
    }

    #[test]
    fn test_tally_counts_wins_and_appearances() {
        let players = vec![player(1, "A"), player(2, "B"), player(3, "C")];
        let matches = vec![result(1, 1, 2), result(2, 1, 3), result(3, 3, 2)];

        let standings = tally(&players, &matches);
        let by_id = |id| standings.iter().find(|s| s.id == id).unwrap();

        assert_eq!((by_id(1).wins, by_id(1).matches), (2, 2));
        assert_eq!((by_id(2).wins, by_id(2).matches), (0, 2));
        assert_eq!((by_id(3).wins, by_id(3).matches), (1, 2));

        let order: Vec<_> = standings.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![1, 3, 2]);
    }

    #[test]
    fn test_tally_skips_matches_for_unlisted_players() {
        let players = vec![player(1, "A")];
        let standings = tally(&players, &[result(1, 1, 42), result(2, 42, 1)]);

        assert_eq!(standings.len(), 1);
        assert_eq!(standings[0].wins, 1);
        assert_eq!(standings[0].matches, 2);
    }

    #[test]
    fn test_rank_standings_orders_by_wins_then_id() {
        let ranked = |id: PlayerId, wins: u32| Standing {
            wins,
            matches: 2,
            ..Standing::new(id, format!("P{}", id))
        };
        let mut standings = vec![ranked(5, 1), ranked(2, 2), ranked(3, 1), ranked(1, 0)];
        rank_standings(&mut standings);

        let order: Vec<_> = standings.iter().map(|s| s.id).collect();
        assert_eq!(order, vec![2, 3, 5, 1]);
    }
}
