//! Tastevin CLI
//!
//! Operator tooling for the taste-vector engine: inspect the cluster
//! catalogue, check its differentiation, preview seed vectors, run
//! simulated quiz sessions against a local profile store, and inspect or
//! clear stored profiles.

use clap::{Parser, Subcommand};
use directories::ProjectDirs;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::PathBuf;
use std::sync::Arc;
use tastevin_core::diagnostics::{self, DEFAULT_SIMILARITY_THRESHOLD};
use tastevin_core::clusters::{all_clusters, cluster_by_id, compute_cluster_seed_vector};
use tastevin_core::codec;
use tastevin_core::{
    Choice, Dimension, EngineConfig, Interaction, InteractionKind, JsonFileStore, ProfileManager,
    QuizSession, SessionAdvance, TasteVector,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "tastevin", version, about = "Taste vector engine for content discovery")]
struct Cli {
    /// Log level: trace, debug, info, warn, error
    #[arg(long, default_value = "info", env = "TASTEVIN_LOG")]
    log_level: String,

    /// Profile storage directory (defaults to the platform data dir)
    #[arg(long, env = "TASTEVIN_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Engine config file (TOML); missing file means defaults
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the onboarding cluster catalogue
    Clusters,

    /// Report pairwise cluster seed similarity
    Diagnose {
        /// Flag pairs at or above this cosine similarity
        #[arg(long, default_value_t = DEFAULT_SIMILARITY_THRESHOLD)]
        threshold: f32,
    },

    /// Print the seed vector for a cluster selection
    Seed {
        /// Comma-separated cluster ids
        #[arg(long, required = true, value_delimiter = ',')]
        clusters: Vec<String>,
    },

    /// Run a simulated quiz session and persist the resulting profile
    Simulate {
        /// Comma-separated cluster ids to seed from
        #[arg(long, required = true, value_delimiter = ',')]
        clusters: Vec<String>,

        /// RNG seed for reproducible sessions
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Number of random interactions to blend in afterwards
        #[arg(long, default_value_t = 0)]
        interactions: usize,

        /// Reuse an existing profile id instead of creating one
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Show one stored profile, or list all
    Show {
        #[arg(long)]
        id: Option<Uuid>,
    },

    /// Delete one stored profile
    Clear {
        #[arg(long)]
        id: Uuid,
    },
}

fn default_data_dir() -> PathBuf {
    ProjectDirs::from("", "", "tastevin")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".tastevin"))
}

fn print_vector(vector: &TasteVector) {
    for dim in Dimension::all() {
        let value = vector.get(dim);
        if value != 0.0 {
            println!("  {:<12} {:+.3}", dim.to_string(), value);
        }
    }
    let top = vector.top_genres(5);
    if !top.is_empty() {
        let names: Vec<&str> = top.iter().map(|g| g.as_str()).collect();
        println!("  top genres:  {}", names.join(", "));
    }
}

async fn open_manager(cli: &Cli) -> anyhow::Result<ProfileManager> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(EngineConfig::default_path);
    let config = EngineConfig::load(&config_path)?;
    let dir = cli.data_dir.clone().unwrap_or_else(default_data_dir);
    let store = JsonFileStore::open(dir).await?;
    Ok(ProfileManager::new(Arc::new(store), config))
}

/// Walk a full session, answering every pair with a random choice
fn simulate_session(
    config: EngineConfig,
    clusters: Vec<String>,
    rng: &mut StdRng,
) -> anyhow::Result<tastevin_core::QuizOutcome> {
    let mut session = QuizSession::new(config, clusters)?;
    loop {
        let ids: Vec<String> = session
            .current_pairs()
            .iter()
            .map(|p| p.id.to_string())
            .collect();
        for id in ids {
            // A and B dominate; Both/Neither/Skip are occasional.
            let choice = match rng.gen_range(0..10) {
                0..=3 => Choice::A,
                4..=7 => Choice::B,
                8 => Choice::Both,
                _ => Choice::Neither,
            };
            debug!(pair = %id, ?choice, "simulated answer");
            session.submit_answer(&id, choice, chrono::Utc::now())?;
        }
        match session.advance()? {
            SessionAdvance::NextPhase { phase, pairs } => {
                println!("  phase {}: {} pairs", phase, pairs.len());
            }
            SessionAdvance::Complete(outcome) => return Ok(outcome),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::new(format!("tastevin={}", cli.log_level.to_lowercase()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match &cli.command {
        Commands::Clusters => {
            for cluster in all_clusters() {
                println!("{:<24} {}", cluster.id, cluster.label);
                println!("{:<24} {}", "", cluster.blurb);
            }
            Ok(())
        }

        Commands::Diagnose { threshold } => {
            let report = diagnostics::differentiation_report(*threshold)?;
            for pair in &report.pairs {
                let marker = if pair.similarity >= report.threshold {
                    "!!"
                } else {
                    "  "
                };
                println!(
                    "{} {:<24} {:<24} {:.3}",
                    marker, pair.first, pair.second, pair.similarity
                );
            }
            let flagged = report.flagged().count();
            println!();
            println!(
                "{} pair(s) at or above {:.2}",
                flagged, report.threshold
            );
            Ok(())
        }

        Commands::Seed { clusters } => {
            let seed = compute_cluster_seed_vector(clusters)?;
            println!("seed vector for {}:", clusters.join(", "));
            print_vector(&seed);
            Ok(())
        }

        Commands::Simulate {
            clusters,
            rng_seed,
            interactions,
            id,
        } => {
            let manager = open_manager(&cli).await?;
            let mut rng = match rng_seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };

            println!("simulating quiz for {}", clusters.join(", "));
            let outcome = simulate_session(manager.config().clone(), clusters.clone(), &mut rng)?;

            let profile = manager.get_or_create(*id).await?;
            let mut profile = manager
                .complete_quiz(profile.id, outcome, clusters.clone())
                .await?;

            for _ in 0..*interactions {
                let cluster = &all_clusters()[rng.gen_range(0..all_clusters().len())];
                let content = compute_cluster_seed_vector(&[cluster.id])?;
                let kind = match rng.gen_range(0..6) {
                    0 => InteractionKind::Like,
                    1 => InteractionKind::Dislike,
                    2 => InteractionKind::Watched,
                    3 => InteractionKind::Saved,
                    4 => InteractionKind::Removed,
                    _ => InteractionKind::Clicked,
                };
                let interaction =
                    Interaction::new(cluster.id, content, kind, chrono::Utc::now());
                profile = manager.record_interaction(profile.id, interaction).await?;
            }
            if *interactions > 0 {
                profile = manager.recompute(profile.id, chrono::Utc::now()).await?;
                println!("  blended {} interactions and recomputed", interactions);
            }

            println!();
            println!("profile {}", profile.id);
            print_vector(&profile.vector);
            Ok(())
        }

        Commands::Show { id } => {
            let manager = open_manager(&cli).await?;
            match id {
                Some(id) => {
                    let ids = manager.list().await?;
                    if !ids.contains(id) {
                        anyhow::bail!("no profile stored under {}", id);
                    }
                    let profile = manager.get_or_create(Some(*id)).await?;
                    println!("profile {}", profile.id);
                    println!("  schema:      v{}", profile.schema_version);
                    println!("  clusters:    {}", profile.cluster_ids.join(", "));
                    println!("  interactions: {}", profile.interactions.len());
                    println!("  updated:     {}", profile.updated_at.to_rfc3339());
                    print_vector(&profile.vector);
                    println!(
                        "  stored array: {:?}",
                        codec::vector_to_array(&profile.vector)
                            .iter()
                            .map(|v| (v * 1000.0).round() / 1000.0)
                            .collect::<Vec<_>>()
                    );
                }
                None => {
                    let ids = manager.list().await?;
                    if ids.is_empty() {
                        println!("no stored profiles");
                    }
                    for id in ids {
                        println!("{}", id);
                    }
                }
            }
            Ok(())
        }

        Commands::Clear { id } => {
            let manager = open_manager(&cli).await?;
            manager.clear(*id).await?;
            println!("cleared {}", id);
            Ok(())
        }
    }
}
