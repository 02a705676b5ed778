//! repo-galaxy CLI - explore a user's repositories as a 3D galaxy scene.
//!
//! Fetches a user's public repositories from GitHub and either lists them,
//! summarizes them, or emits the positioned, styled scene as JSON for a
//! render shell to consume.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod config;

use config::Config;
use repo_galaxy_core::SortKey;

/// repo-galaxy CLI - repositories as a galaxy.
///
/// Works unauthenticated for public repositories; set GITHUB_TOKEN (env or
/// .env) to raise the rate limit.
#[derive(Parser, Debug)]
#[command(
    name = "galaxy",
    author,
    version,
    about = "repo-galaxy: visualize a user's repositories as a 3D galaxy",
    long_about = None
)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List a user's public repositories.
    Fetch {
        /// GitHub username.
        username: String,
    },

    /// Show aggregate statistics for a user's repositories.
    Stats {
        /// GitHub username.
        username: String,
    },

    /// Emit the filtered, sorted, positioned galaxy scene as JSON.
    Scene {
        /// GitHub username.
        username: String,

        /// Keep only these languages (repeatable). Empty keeps all.
        #[arg(short, long = "language")]
        languages: Vec<String>,

        /// Inclusive lower star bound.
        #[arg(long, default_value_t = 0)]
        min_stars: u64,

        /// Inclusive upper star bound. Omit for no ceiling.
        #[arg(long)]
        max_stars: Option<u64>,

        /// Sort order: stars, name, or updated.
        #[arg(short, long, default_value = "stars")]
        sort: SortKey,

        /// Animation speed multiplier (clamped to 0.5..=3.0).
        #[arg(long, default_value_t = 1.0)]
        speed: f64,

        /// Sample an animation frame at this elapsed time (seconds).
        #[arg(long)]
        frame: Option<f32>,

        /// Write the scene JSON to a file instead of stdout.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Fetch { username } => commands::fetch::execute(&config, &username).await,
        Commands::Stats { username } => commands::stats::execute(&config, &username).await,
        Commands::Scene {
            username,
            languages,
            min_stars,
            max_stars,
            sort,
            speed,
            frame,
            output,
        } => {
            let request = commands::scene::SceneRequest {
                languages,
                min_stars,
                max_stars,
                sort,
                speed,
                frame,
                output,
            };
            commands::scene::execute(&config, &username, request).await
        }
    }
}
