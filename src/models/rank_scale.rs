//! Ordered rank scales.
//!
//! Each supported game has a fixed, ascending sequence of rank labels.
//! Lookups never fail: unknown labels fall back to sentinel values so that
//! user-entered rank text can be fed straight in.

use std::cmp::Ordering;

use tracing::debug;

use super::Game;

/// Label used by players who have not been placed yet. Never part of a scale.
pub const UNRANKED: &str = "Unranked";

/// Half-width of the matching window: a window never spans more than
/// `2 * PROXIMITY_RADIUS + 1` labels.
pub const PROXIMITY_RADIUS: usize = 3;

/// Distance reported when either rank is unknown, so it sorts last.
pub const UNKNOWN_RANK_DISTANCE: u32 = 999;

/// Index reported for labels that are not on the scale.
pub const NOT_FOUND: i32 = -1;

const VALORANT_RANKS: &[&str] = &[
    "Iron 1",
    "Iron 2",
    "Iron 3",
    "Bronze 1",
    "Bronze 2",
    "Bronze 3",
    "Silver 1",
    "Silver 2",
    "Silver 3",
    "Gold 1",
    "Gold 2",
    "Gold 3",
    "Platinum 1",
    "Platinum 2",
    "Platinum 3",
    "Diamond 1",
    "Diamond 2",
    "Diamond 3",
    "Ascendant 1",
    "Ascendant 2",
    "Ascendant 3",
    "Immortal 1",
    "Immortal 2",
    "Immortal 3",
    "Radiant",
];

const LEAGUE_RANKS: &[&str] = &[
    "Iron IV",
    "Iron III",
    "Iron II",
    "Iron I",
    "Bronze IV",
    "Bronze III",
    "Bronze II",
    "Bronze I",
    "Silver IV",
    "Silver III",
    "Silver II",
    "Silver I",
    "Gold IV",
    "Gold III",
    "Gold II",
    "Gold I",
    "Platinum IV",
    "Platinum III",
    "Platinum II",
    "Platinum I",
    "Emerald IV",
    "Emerald III",
    "Emerald II",
    "Emerald I",
    "Diamond IV",
    "Diamond III",
    "Diamond II",
    "Diamond I",
    "Master",
    "Grandmaster",
    "Challenger",
];

/// Anything that carries a rank label.
pub trait HasRank {
    fn rank_label(&self) -> &str;
}

impl HasRank for str {
    fn rank_label(&self) -> &str {
        self
    }
}

impl HasRank for String {
    fn rank_label(&self) -> &str {
        self.as_str()
    }
}

impl<T: HasRank + ?Sized> HasRank for &T {
    fn rank_label(&self) -> &str {
        (**self).rank_label()
    }
}

/// The total order of rank labels for one game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankScale {
    game: Game,
    labels: &'static [&'static str],
    /// Labels allowed below the current rank
    below: usize,
    /// Labels allowed above the current rank
    above: usize,
}

impl RankScale {
    /// Get the scale for a game.
    ///
    /// Valorant's window leans one label upward (two below, four above), so
    /// "Gold 2" reaches from "Silver 3" to the top of Platinum. League's is
    /// centred.
    pub fn for_game(game: Game) -> Self {
        let (labels, below, above) = match game {
            Game::Valorant => (VALORANT_RANKS, PROXIMITY_RADIUS - 1, PROXIMITY_RADIUS + 1),
            Game::League => (LEAGUE_RANKS, PROXIMITY_RADIUS, PROXIMITY_RADIUS),
        };
        Self {
            game,
            labels,
            below,
            above,
        }
    }

    pub fn game(&self) -> Game {
        self.game
    }

    /// All labels, lowest first.
    pub fn labels(&self) -> &'static [&'static str] {
        self.labels
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Position of a label on the scale, if present. Matching is exact.
    pub fn position(&self, rank: &str) -> Option<usize> {
        self.labels.iter().position(|label| *label == rank)
    }

    /// Zero-based index of a label, or [`NOT_FOUND`].
    pub fn index_of(&self, rank: &str) -> i32 {
        self.position(rank).map_or(NOT_FOUND, |i| i as i32)
    }

    pub fn contains(&self, rank: &str) -> bool {
        self.position(rank).is_some()
    }

    /// The matching window around `current`, clamped to the scale.
    ///
    /// Unknown labels and [`UNRANKED`] get the whole scale.
    pub fn allowed_ranks(&self, current: &str) -> &'static [&'static str] {
        if current == UNRANKED {
            return self.labels;
        }

        let Some(index) = self.position(current) else {
            debug!("Rank {:?} not on the {} scale, allowing all ranks", current, self.game);
            return self.labels;
        };

        let low = index.saturating_sub(self.below);
        let high = (index + self.above).min(self.labels.len() - 1);
        &self.labels[low..=high]
    }

    /// Absolute index difference, or [`UNKNOWN_RANK_DISTANCE`] if either label is unknown.
    pub fn distance(&self, a: &str, b: &str) -> u32 {
        match (self.position(a), self.position(b)) {
            (Some(a), Some(b)) => a.abs_diff(b) as u32,
            _ => UNKNOWN_RANK_DISTANCE,
        }
    }

    /// Compare two labels by skill. `None` if either is unknown.
    pub fn compare(&self, a: &str, b: &str) -> Option<Ordering> {
        Some(self.position(a)?.cmp(&self.position(b)?))
    }

    /// Stable sort, closest to `reference` first.
    pub fn sort_by_proximity<T: HasRank>(&self, items: Vec<T>, reference: &str) -> Vec<T> {
        self.sort_by_proximity_by(items, reference, |item| item.rank_label())
    }

    /// Like [`sort_by_proximity`](Self::sort_by_proximity) with a key function.
    pub fn sort_by_proximity_by<T, F>(&self, mut items: Vec<T>, reference: &str, rank_of: F) -> Vec<T>
    where
        F: Fn(&T) -> &str,
    {
        // sort_by_key is stable, callers rely on their earlier ordering for ties
        items.sort_by_key(|item| self.distance(rank_of(item), reference));
        items
    }

    /// "min - max" of the allowed window around `current`.
    pub fn range_text(&self, current: &str) -> String {
        match self.allowed_ranks(current) {
            [] => "All Ranks".to_string(),
            [only] => only.to_string(),
            [first, .., last] => format!("{} - {}", first, last),
        }
    }
}
