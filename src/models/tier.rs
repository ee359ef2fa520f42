//! Cross-game tier classification.
//!
//! A raw rank string from either game maps onto the same six-level scale
//! through an ordered keyword table. The first matching rule wins, so more
//! specific keywords ("grandmaster") must come before the words they
//! contain ("master").

use serde::{Deserialize, Serialize};

use super::Game;

/// Tier classification, lowest first so that `Ord` gives skill order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    F,
    D,
    C,
    B,
    A,
    S,
}

impl Tier {
    /// Border/badge colour for this tier.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::S => "#FFD700",
            Tier::A => "#C0C0C0",
            Tier::B => "#9B59B6",
            Tier::C => "#3498DB",
            Tier::D => "#2ECC71",
            Tier::F => "#E74C3C",
        }
    }

    /// Classify a raw rank string for one game. Missing or unrecognised text is F.
    pub fn from_rank(game: Game, rank: Option<&str>) -> Self {
        let Some(rank) = rank else {
            return Tier::F;
        };

        let rank = rank.to_lowercase();
        rules_for(game)
            .iter()
            .find(|rule| rule.matches(&rank))
            .map_or(Tier::F, |rule| rule.tier)
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::S => write!(f, "S"),
            Tier::A => write!(f, "A"),
            Tier::B => write!(f, "B"),
            Tier::C => write!(f, "C"),
            Tier::D => write!(f, "D"),
            Tier::F => write!(f, "F"),
        }
    }
}

/// One keyword rule: any keyword found in the lowercased rank gives `tier`.
#[derive(Debug, Clone, Copy)]
pub struct TierRule {
    pub keywords: &'static [&'static str],
    pub tier: Tier,
}

impl TierRule {
    const fn new(keywords: &'static [&'static str], tier: Tier) -> Self {
        Self { keywords, tier }
    }

    /// `rank` must already be lowercase.
    fn matches(&self, rank: &str) -> bool {
        self.keywords.iter().any(|keyword| rank.contains(*keyword))
    }
}

const LEAGUE_RULES: &[TierRule] = &[
    TierRule::new(&["challenger", "grandmaster"], Tier::S),
    TierRule::new(&["master"], Tier::A),
    TierRule::new(&["diamond"], Tier::B),
    TierRule::new(&["emerald", "platinum"], Tier::C),
    TierRule::new(&["gold", "silver"], Tier::D),
];

const VALORANT_RULES: &[TierRule] = &[
    TierRule::new(&["radiant", "immortal"], Tier::S),
    TierRule::new(&["ascendant"], Tier::A),
    TierRule::new(&["diamond"], Tier::B),
    TierRule::new(&["platinum"], Tier::C),
    TierRule::new(&["gold", "silver"], Tier::D),
];

/// Keyword rules for a game, evaluated top-down.
pub fn rules_for(game: Game) -> &'static [TierRule] {
    match game {
        Game::League => LEAGUE_RULES,
        Game::Valorant => VALORANT_RULES,
    }
}

/// Combined tier for a player who may have linked zero, one or both games.
///
/// `tier` is `None` only when no rank was supplied at all, which means
/// "show no badge". Unrecognised rank text is still classified (as F).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub struct TierClassification {
    pub tier: Option<Tier>,
    pub color: Option<&'static str>,
}

impl TierClassification {
    /// Classify from optional League and Valorant ranks, keeping the better tier.
    pub fn from_ranks(league_rank: Option<&str>, valorant_rank: Option<&str>) -> Self {
        let league = league_rank.map(|rank| Tier::from_rank(Game::League, Some(rank)));
        let valorant = valorant_rank.map(|rank| Tier::from_rank(Game::Valorant, Some(rank)));

        let tier = league.into_iter().chain(valorant).max();
        Self {
            tier,
            color: tier.map(|t| t.color()),
        }
    }

    /// True if a badge should be rendered.
    pub fn has_badge(&self) -> bool {
        self.tier.is_some()
    }
}
