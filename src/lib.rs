//! # Rank Matcher
//!
//! Rank scales, tier classification and duo matching for Valorant and
//! League of Legends.
//!
//! ## Architecture
//!
//! - **models**: Games, rank scales, tiers and player profiles
//! - **calculate**: Rank windows, distances, combined tiers, duo matching
//! - **storage**: JSONL profile store
//! - **config**: Configuration loading and validation
//!
//! ## Example
//!
//! ```
//! use rank_matcher::calculate::{calculate_tier, get_allowed_ranks};
//! use rank_matcher::{Game, Tier};
//!
//! assert_eq!(get_allowed_ranks(Game::Valorant, "Radiant").len(), 3);
//! assert_eq!(calculate_tier(Some("Diamond IV"), Some("Platinum 3")), Some(Tier::B));
//! assert_eq!(calculate_tier(None, None), None);
//! ```

pub mod calculate;
pub mod config;
pub mod models;
pub mod storage;

pub use models::*;
