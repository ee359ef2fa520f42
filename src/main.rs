use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rank_matcher::calculate::{self, find_duo_matches, leaderboard};
use rank_matcher::config::AppConfig;
use rank_matcher::storage::{read_profiles, upsert_profile, StorageConfig};
use rank_matcher::{Game, PlayerProfile, RankScale, TierClassification};

#[derive(Parser)]
#[command(name = "rank-matcher")]
#[command(about = "Rank windows, tiers and duo matching for Valorant and League")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error), overrides config
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Print results as JSON
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the ranks a player can be matched with
    Allowed {
        /// Game: valorant or league (default from config)
        #[arg(long)]
        game: Option<Game>,

        /// Current rank, e.g. "Gold 2"
        #[arg(long)]
        rank: String,
    },

    /// Distance between two ranks (999 if either is unknown)
    Distance {
        #[arg(long)]
        game: Option<Game>,

        rank_a: String,

        rank_b: String,
    },

    /// Print the allowed rank range as text
    Range {
        #[arg(long)]
        game: Option<Game>,

        #[arg(long)]
        rank: String,
    },

    /// Sort ranks by closeness to a reference rank
    Sort {
        #[arg(long)]
        game: Option<Game>,

        /// Reference rank
        #[arg(long)]
        reference: String,

        ranks: Vec<String>,
    },

    /// Combined tier and border colour
    Tier {
        /// League rank
        #[arg(long)]
        league: Option<String>,

        /// Valorant rank
        #[arg(long)]
        valorant: Option<String>,
    },

    /// Find stored players to duo with
    Duos {
        #[arg(long)]
        game: Option<Game>,

        /// Your current rank
        #[arg(long)]
        rank: String,

        /// Max matches (overrides config, 0 = unlimited)
        #[arg(long)]
        limit: Option<usize>,

        /// Include players outside the allowed rank window
        #[arg(long)]
        no_strict: bool,
    },

    /// Stored players ordered by rank
    Leaderboard {
        #[arg(long)]
        game: Option<Game>,

        /// Only show the top N
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Add or update a stored player profile
    AddProfile {
        #[arg(long)]
        username: String,

        #[arg(long)]
        league: Option<String>,

        #[arg(long)]
        valorant: Option<String>,
    },
}

#[derive(Serialize)]
struct RangeOutput<'a> {
    game: Game,
    rank: &'a str,
    allowed: &'a [&'static str],
    text: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config from {:?}", cli.config))?
        .with_overrides(cli.data_dir.clone(), cli.log_level.clone())
        .context("Invalid command-line overrides")?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::debug!("Starting rank-matcher v{}", env!("CARGO_PKG_VERSION"));

    let storage = StorageConfig::new(config.data_dir.clone());
    let default_game = config.duo.default_game;

    match cli.command {
        Commands::Allowed { game, rank } => {
            let game = game.unwrap_or(default_game);
            let allowed = calculate::get_allowed_ranks(game, &rank);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&allowed)?);
            } else {
                for label in allowed {
                    println!("{}", label);
                }
            }
        }

        Commands::Distance {
            game,
            rank_a,
            rank_b,
        } => {
            let game = game.unwrap_or(default_game);
            let distance = calculate::get_rank_distance(game, &rank_a, &rank_b);
            if cli.json {
                println!("{}", serde_json::json!({ "distance": distance }));
            } else {
                println!("{}", distance);
            }
        }

        Commands::Range { game, rank } => {
            let game = game.unwrap_or(default_game);
            let scale = RankScale::for_game(game);
            let output = RangeOutput {
                game,
                rank: &rank,
                allowed: scale.allowed_ranks(&rank),
                text: scale.range_text(&rank),
            };
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", output.text);
            }
        }

        Commands::Sort {
            game,
            reference,
            ranks,
        } => {
            let game = game.unwrap_or(default_game);
            let scale = RankScale::for_game(game);
            let sorted = calculate::sort_by_proximity(ranks, game, &reference);
            if cli.json {
                let rows: Vec<_> = sorted
                    .iter()
                    .map(|rank| {
                        serde_json::json!({
                            "rank": rank,
                            "distance": scale.distance(rank, &reference),
                        })
                    })
                    .collect();
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for rank in &sorted {
                    println!("{:>4}  {}", scale.distance(rank, &reference), rank);
                }
            }
        }

        Commands::Tier { league, valorant } => {
            let result = TierClassification::from_ranks(league.as_deref(), valorant.as_deref());
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                match (result.tier, result.color) {
                    (Some(tier), Some(color)) => println!("{} {}", tier, color),
                    _ => println!("no rank linked"),
                }
            }
        }

        Commands::Duos {
            game,
            rank,
            limit,
            no_strict,
        } => {
            let game = game.unwrap_or(default_game);
            let mut options = config.duo.options();
            if let Some(limit) = limit {
                options.max_results = limit;
            }
            if no_strict {
                options.strict_range = false;
            }

            let profiles = read_profiles(&storage)
                .with_context(|| format!("Failed to read {:?}", storage.profiles_path()))?;
            tracing::info!(
                "Searching {} profiles for {} duos near {}",
                profiles.len(),
                game,
                rank
            );

            let matches = find_duo_matches(profiles, game, &rank, &options);
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&matches)?);
            } else if matches.is_empty() {
                println!(
                    "No players found in {}",
                    RankScale::for_game(game).range_text(&rank)
                );
            } else {
                let scale = RankScale::for_game(game);
                for profile in &matches {
                    let their_rank = profile.rank_for(game).unwrap_or_default();
                    println!(
                        "{:<20} {:<14} distance {:>3}  last seen {}",
                        profile.username,
                        their_rank,
                        scale.distance(their_rank, &rank),
                        profile.last_active.format("%Y-%m-%d %H:%M")
                    );
                }
            }
        }

        Commands::Leaderboard { game, limit } => {
            let game = game.unwrap_or(default_game);
            let profiles = read_profiles(&storage)
                .with_context(|| format!("Failed to read {:?}", storage.profiles_path()))?;

            let mut board = leaderboard(profiles, game);
            if let Some(limit) = limit {
                board.truncate(limit);
            }

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&board)?);
            } else {
                println!("{} leaderboard", game.display_name());
                for entry in &board {
                    println!(
                        "{:>3}. {:<20} {:<14} {}",
                        entry.position,
                        entry.username,
                        entry.rank.as_deref().unwrap_or("-"),
                        entry.tier.map(|t| t.to_string()).unwrap_or_default()
                    );
                }
            }
        }

        Commands::AddProfile {
            username,
            league,
            valorant,
        } => {
            let mut profile = PlayerProfile::new(username, Utc::now());
            if let Some(rank) = league {
                warn_if_off_scale(Game::League, &rank);
                profile = profile.with_rank(Game::League, rank);
            }
            if let Some(rank) = valorant {
                warn_if_off_scale(Game::Valorant, &rank);
                profile = profile.with_rank(Game::Valorant, rank);
            }

            let (profile, replaced) = upsert_profile(&storage, profile)
                .with_context(|| format!("Failed to write {:?}", storage.profiles_path()))?;
            tracing::info!(
                "{} profile {} ({})",
                if replaced { "Updated" } else { "Added" },
                profile.username,
                profile.id
            );

            if cli.json {
                println!("{}", serde_json::to_string_pretty(&profile)?);
            } else {
                println!("{}", profile.id);
            }
        }
    }

    Ok(())
}

/// Off-scale ranks are still stored, they just never match a window.
fn warn_if_off_scale(game: Game, rank: &str) {
    if !RankScale::for_game(game).contains(rank) {
        tracing::warn!(
            "{:?} is not a {} rank, it will sort after known ranks",
            rank,
            game.display_name()
        );
    }
}
