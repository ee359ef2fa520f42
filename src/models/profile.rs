//! Player profile model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{EntityId, Game, ProfileId, TierClassification};

/// A player and the ranks they have linked for each game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Unique identifier (derived from the lowercased username)
    pub id: ProfileId,

    /// Display name
    pub username: String,

    /// Valorant rank label, if the player linked Valorant
    #[serde(default)]
    pub valorant_rank: Option<String>,

    /// League rank label, if the player linked League
    #[serde(default)]
    pub league_rank: Option<String>,

    /// Last time the player was seen online
    pub last_active: DateTime<Utc>,
}

impl PlayerProfile {
    /// Create a new profile with no linked games.
    pub fn new(username: String, last_active: DateTime<Utc>) -> Self {
        let id = EntityId::generate(&["profile", &username.to_lowercase()]);

        Self {
            id,
            username,
            valorant_rank: None,
            league_rank: None,
            last_active,
        }
    }

    pub fn with_rank(mut self, game: Game, rank: impl Into<String>) -> Self {
        match game {
            Game::Valorant => self.valorant_rank = Some(rank.into()),
            Game::League => self.league_rank = Some(rank.into()),
        }
        self
    }

    /// The rank label linked for a game.
    pub fn rank_for(&self, game: Game) -> Option<&str> {
        match game {
            Game::Valorant => self.valorant_rank.as_deref(),
            Game::League => self.league_rank.as_deref(),
        }
    }

    /// Fold a newer copy of this profile in.
    ///
    /// Ranks absent from `update` are kept; username and activity follow `update`.
    pub fn merge(&mut self, update: PlayerProfile) {
        self.username = update.username;
        if update.valorant_rank.is_some() {
            self.valorant_rank = update.valorant_rank;
        }
        if update.league_rank.is_some() {
            self.league_rank = update.league_rank;
        }
        self.last_active = update.last_active;
    }

    /// Best tier across both games, for the profile border.
    pub fn classification(&self) -> TierClassification {
        TierClassification::from_ranks(self.league_rank.as_deref(), self.valorant_rank.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Tier;
    use chrono::TimeZone;

    fn seen() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_profile_creation() {
        let profile = PlayerProfile::new("JettMain".to_string(), seen());

        assert_eq!(profile.username, "JettMain");
        assert_eq!(profile.rank_for(Game::Valorant), None);
        assert_eq!(profile.rank_for(Game::League), None);
        assert_eq!(profile.id.as_str().len(), 16);
    }

    #[test]
    fn test_profile_id_ignores_case() {
        let a = PlayerProfile::new("JettMain".to_string(), seen());
        let b = PlayerProfile::new("jettmain".to_string(), seen());
        assert_eq!(a.id, b.id);
    }

    #[test]
    fn test_profile_ranks() {
        let profile = PlayerProfile::new("duo".to_string(), seen())
            .with_rank(Game::Valorant, "Gold 2")
            .with_rank(Game::League, "Diamond IV");

        assert_eq!(profile.rank_for(Game::Valorant), Some("Gold 2"));
        assert_eq!(profile.rank_for(Game::League), Some("Diamond IV"));
        assert_eq!(profile.classification().tier, Some(Tier::B));
    }

    #[test]
    fn test_profile_merge_keeps_missing_ranks() {
        let mut profile = PlayerProfile::new("duo".to_string(), seen())
            .with_rank(Game::Valorant, "Gold 2")
            .with_rank(Game::League, "Silver I");
        let later = seen() + chrono::Duration::hours(1);

        profile.merge(PlayerProfile::new("Duo".to_string(), later).with_rank(Game::League, "Gold IV"));

        assert_eq!(profile.username, "Duo");
        assert_eq!(profile.rank_for(Game::Valorant), Some("Gold 2"));
        assert_eq!(profile.rank_for(Game::League), Some("Gold IV"));
        assert_eq!(profile.last_active, later);
    }

    #[test]
    fn test_profile_without_ranks_has_no_badge() {
        let profile = PlayerProfile::new("lurker".to_string(), seen());
        assert!(!profile.classification().has_badge());
    }

    #[test]
    fn test_profile_deserialize_missing_ranks() {
        let json = r#"{"id":"0123456789abcdef","username":"x","last_active":"2025-06-15T12:00:00Z"}"#;
        let profile: PlayerProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.valorant_rank, None);
        assert_eq!(profile.last_active, seen());
    }

    #[test]
    fn test_profile_serialization() {
        let profile = PlayerProfile::new("duo".to_string(), seen()).with_rank(Game::League, "Master");
        let json = serde_json::to_string(&profile).unwrap();
        let deserialized: PlayerProfile = serde_json::from_str(&json).unwrap();
        assert_eq!(profile, deserialized);
    }
}
