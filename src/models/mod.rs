//! Core data models: games, rank scales, tiers and player profiles.

mod game;
mod ids;
mod profile;
mod rank_scale;
mod tier;

pub use game::*;
pub use ids::*;
pub use profile::*;
pub use rank_scale::*;
pub use tier::*;
