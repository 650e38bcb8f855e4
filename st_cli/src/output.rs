//! Plain-text rendering of store results.

use swiss_tournament::{Match, Pairing, Player, Standing};

pub fn standings_table(standings: &[Standing]) -> String {
    if standings.is_empty() {
        return "No players registered".to_string();
    }

    let mut out = format!(
        "{:>4}  {:>6}  {:<24} {:>4} {:>7}",
        "RANK", "ID", "NAME", "WINS", "MATCHES"
    );
    for (rank, s) in standings.iter().enumerate() {
        out.push_str(&format!(
            "\n{:>4}  {:>6}  {:<24} {:>4} {:>7}",
            rank + 1,
            s.id,
            s.name,
            s.wins,
            s.matches
        ));
    }
    out
}

pub fn pairings_table(pairings: &[Pairing]) -> String {
    if pairings.is_empty() {
        return "No pairings".to_string();
    }

    pairings
        .iter()
        .enumerate()
        .map(|(table, p)| {
            format!(
                "Table {}: {} ({}) vs {} ({})",
                table + 1,
                p.player1_name,
                p.player1_id,
                p.player2_name,
                p.player2_id
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn players_table(players: &[Player]) -> String {
    if players.is_empty() {
        return "No players registered".to_string();
    }

    players
        .iter()
        .map(|p| format!("{:>6}  {}", p.id, p.name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn matches_table(matches: &[Match]) -> String {
    if matches.is_empty() {
        return "No matches recorded".to_string();
    }

    matches
        .iter()
        .map(|m| {
            format!(
                "{:>6}  {} beat {}  ({})",
                m.id,
                m.winner_id,
                m.loser_id,
                m.played_at.format("%Y-%m-%d %H:%M:%S")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
