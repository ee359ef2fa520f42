//! Rank and tier calculations.
//!
//! Free-function entry points over the rank scales and tier tables:
//! - Allowed rank windows and range text
//! - Rank distances and proximity sorting
//! - Combined tier and border colour
//! - Duo matching and leaderboard ordering

mod duo;

pub use duo::*;

use crate::models::{Game, HasRank, RankScale, Tier, TierClassification};

/// Ranks a player at `current_rank` may be matched with.
pub fn get_allowed_ranks(game: Game, current_rank: &str) -> Vec<&'static str> {
    RankScale::for_game(game).allowed_ranks(current_rank).to_vec()
}

/// Distance between two ranks, 999 if either is unknown.
pub fn get_rank_distance(game: Game, rank_a: &str, rank_b: &str) -> u32 {
    RankScale::for_game(game).distance(rank_a, rank_b)
}

/// Stable-sort items by how close their rank is to `reference_rank`.
pub fn sort_by_proximity<T: HasRank>(items: Vec<T>, game: Game, reference_rank: &str) -> Vec<T> {
    RankScale::for_game(game).sort_by_proximity(items, reference_rank)
}

/// Human-readable bounds of the allowed window.
pub fn get_rank_range_text(game: Game, current_rank: &str) -> String {
    RankScale::for_game(game).range_text(current_rank)
}

/// Better of the two per-game tiers, `None` when neither rank is present.
pub fn calculate_tier(league_rank: Option<&str>, valorant_rank: Option<&str>) -> Option<Tier> {
    TierClassification::from_ranks(league_rank, valorant_rank).tier
}

/// Border colour for the combined tier, `None` when neither rank is present.
pub fn calculate_tier_border_color(
    league_rank: Option<&str>,
    valorant_rank: Option<&str>,
) -> Option<&'static str> {
    TierClassification::from_ranks(league_rank, valorant_rank).color
}
