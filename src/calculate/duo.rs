//! Duo matching and leaderboard ordering over player profiles.

use serde::Serialize;
use tracing::debug;

use crate::models::{Game, PlayerProfile, RankScale, Tier};

/// Options for [`find_duo_matches`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuoOptions {
    /// Maximum number of matches to return (0 = unlimited)
    pub max_results: usize,

    /// Only keep players whose rank is inside the allowed window
    pub strict_range: bool,
}

impl Default for DuoOptions {
    fn default() -> Self {
        Self {
            max_results: 20,
            strict_range: true,
        }
    }
}

/// Find players to duo with, closest rank first and most recently active among equals.
///
/// Profiles without a rank for `game` are never returned. With
/// `strict_range`, only profiles whose rank lies in the allowed window
/// around `my_rank` are kept; otherwise everyone ranked is kept and
/// unknown labels sort to the end.
pub fn find_duo_matches(
    profiles: Vec<PlayerProfile>,
    game: Game,
    my_rank: &str,
    options: &DuoOptions,
) -> Vec<PlayerProfile> {
    let scale = RankScale::for_game(game);
    let allowed = scale.allowed_ranks(my_rank);
    let total = profiles.len();

    let mut candidates: Vec<PlayerProfile> = profiles
        .into_iter()
        .filter(|profile| match profile.rank_for(game) {
            Some(rank) => !options.strict_range || allowed.iter().any(|label| *label == rank),
            None => false,
        })
        .collect();

    // Recency first, proximity sort below is stable
    candidates.sort_by(|a, b| b.last_active.cmp(&a.last_active));

    let mut matches = scale.sort_by_proximity_by(candidates, my_rank, |profile| {
        profile.rank_for(game).unwrap_or_default()
    });

    if options.max_results > 0 {
        matches.truncate(options.max_results);
    }

    debug!(
        "Duo search ({}, {}): {} of {} profiles matched",
        game,
        my_rank,
        matches.len(),
        total
    );
    matches
}

/// One row of a per-game leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeaderboardEntry {
    /// 1-based position
    pub position: usize,
    pub username: String,
    pub rank: Option<String>,
    pub tier: Option<Tier>,
}

/// Order profiles by rank in `game`, highest first.
///
/// Labels not on the scale come after every known rank, and profiles that
/// never linked the game come last. Ties go to the most recently active.
pub fn leaderboard(mut profiles: Vec<PlayerProfile>, game: Game) -> Vec<LeaderboardEntry> {
    let scale = RankScale::for_game(game);
    let standing = |profile: &PlayerProfile| profile.rank_for(game).map(|rank| scale.position(rank));

    profiles.sort_by(|a, b| {
        standing(b)
            .cmp(&standing(a))
            .then_with(|| b.last_active.cmp(&a.last_active))
    });

    profiles
        .into_iter()
        .enumerate()
        .map(|(i, profile)| {
            let tier = profile.rank_for(game).map(|rank| Tier::from_rank(game, Some(rank)));
            LeaderboardEntry {
                position: i + 1,
                rank: profile.rank_for(game).map(str::to_string),
                username: profile.username,
                tier,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    /// Profile last seen `minutes_ago` before the base time.
    fn player(name: &str, minutes_ago: i64) -> PlayerProfile {
        PlayerProfile::new(name.to_string(), base_time() - Duration::minutes(minutes_ago))
    }

    fn names(profiles: &[PlayerProfile]) -> Vec<&str> {
        profiles.iter().map(|p| p.username.as_str()).collect()
    }

    fn pool() -> Vec<PlayerProfile> {
        vec![
            player("far", 1).with_rank(Game::Valorant, "Radiant"),
            player("gold1-old", 50).with_rank(Game::Valorant, "Gold 1"),
            player("league-only", 2).with_rank(Game::League, "Gold II"),
            player("gold3", 10).with_rank(Game::Valorant, "Gold 3"),
            player("gold1-new", 5).with_rank(Game::Valorant, "Gold 1"),
            player("typo", 3).with_rank(Game::Valorant, "gold two"),
            player("plat3", 20).with_rank(Game::Valorant, "Platinum 3"),
        ]
    }

    #[test]
    fn test_find_duo_matches_strict() {
        let matches = find_duo_matches(pool(), Game::Valorant, "Gold 2", &DuoOptions::default());
        assert_eq!(names(&matches), vec!["gold1-new", "gold3", "gold1-old", "plat3"]);
    }

    #[test]
    fn test_find_duo_matches_loose() {
        let options = DuoOptions {
            max_results: 0,
            strict_range: false,
        };
        let matches = find_duo_matches(pool(), Game::Valorant, "Gold 2", &options);
        assert_eq!(
            names(&matches),
            vec!["gold1-new", "gold3", "gold1-old", "plat3", "far", "typo"]
        );
    }

    #[test]
    fn test_find_duo_matches_limit() {
        let options = DuoOptions {
            max_results: 2,
            strict_range: true,
        };
        let matches = find_duo_matches(pool(), Game::Valorant, "Gold 2", &options);
        assert_eq!(names(&matches), vec!["gold1-new", "gold3"]);
    }

    #[test]
    fn test_find_duo_matches_unranked_searcher() {
        // Everyone on the scale is allowed, all at the unknown distance, so recency decides
        let matches = find_duo_matches(pool(), Game::Valorant, "Unranked", &DuoOptions::default());
        assert_eq!(
            names(&matches),
            vec!["far", "gold1-new", "gold3", "plat3", "gold1-old"]
        );
    }

    #[test]
    fn test_find_duo_matches_other_game() {
        let matches = find_duo_matches(pool(), Game::League, "Gold I", &DuoOptions::default());
        assert_eq!(names(&matches), vec!["league-only"]);
    }

    #[test]
    fn test_leaderboard() {
        let board = leaderboard(pool(), Game::Valorant);
        let order: Vec<_> = board.iter().map(|e| e.username.as_str()).collect();
        assert_eq!(
            order,
            vec!["far", "plat3", "gold3", "gold1-new", "gold1-old", "typo", "league-only"]
        );

        assert_eq!(board[0].position, 1);
        assert_eq!(board[0].tier, Some(Tier::S));
        assert_eq!(board[5].rank.as_deref(), Some("gold two"));
        assert_eq!(board[5].tier, Some(Tier::D));
        assert_eq!(board[6].rank, None);
        assert_eq!(board[6].tier, None);
    }

    #[test]
    fn test_leaderboard_empty() {
        assert!(leaderboard(Vec::new(), Game::League).is_empty());
    }
}
