//! Supported games.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// A game whose competitive ranks we know how to order and classify.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Game {
    Valorant,
    League,
}

impl Game {
    /// All supported games, in display order.
    pub const ALL: [Game; 2] = [Game::Valorant, Game::League];

    /// Human-readable game name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Game::Valorant => "Valorant",
            Game::League => "League of Legends",
        }
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Game::Valorant => write!(f, "valorant"),
            Game::League => write!(f, "league"),
        }
    }
}

/// Returned when a game name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown game: {0} (expected \"valorant\" or \"league\")")]
pub struct ParseGameError(pub String);

impl FromStr for Game {
    type Err = ParseGameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "valorant" | "val" => Ok(Game::Valorant),
            "league" | "lol" | "league of legends" => Ok(Game::League),
            _ => Err(ParseGameError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_game_from_str() {
        assert_eq!("valorant".parse::<Game>(), Ok(Game::Valorant));
        assert_eq!("League".parse::<Game>(), Ok(Game::League));
        assert_eq!(" lol ".parse::<Game>(), Ok(Game::League));
    }

    #[test]
    fn test_game_from_str_unknown() {
        let err = "overwatch".parse::<Game>().unwrap_err();
        assert_eq!(err, ParseGameError("overwatch".to_string()));
        assert!(err.to_string().contains("overwatch"));
    }

    #[test]
    fn test_game_serialization() {
        let json = serde_json::to_string(&Game::League).unwrap();
        assert_eq!(json, "\"league\"");

        let deserialized: Game = serde_json::from_str("\"valorant\"").unwrap();
        assert_eq!(deserialized, Game::Valorant);
    }

    #[test]
    fn test_game_display_round_trips_through_from_str() {
        for game in Game::ALL {
            assert_eq!(game.to_string().parse::<Game>(), Ok(game));
        }
    }
}
