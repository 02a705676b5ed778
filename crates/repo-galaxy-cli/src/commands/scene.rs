//! Scene command: emit the positioned, styled galaxy as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::commands::fetch_or_report;
use crate::config::Config;
use repo_galaxy_core::{FilterConfig, SortKey, StarRange};
use repo_galaxy_scene::{FrameTransform, GalaxySession, LanguagePalette, PositionedSphere};

/// Parsed scene options from the command line.
#[derive(Debug)]
pub struct SceneRequest {
    pub languages: Vec<String>,
    pub min_stars: u64,
    pub max_stars: Option<u64>,
    pub sort: SortKey,
    pub speed: f64,
    pub frame: Option<f32>,
    pub output: Option<PathBuf>,
}

impl SceneRequest {
    fn filter_config(&self) -> FilterConfig {
        let mut config = FilterConfig::default();
        config.star_range = StarRange {
            min: self.min_stars,
            max: self.max_stars,
        };
        config.sort = self.sort;
        config.languages.extend(self.languages.iter().cloned());
        config.set_animation_speed(self.speed);
        config
    }
}

/// The JSON document handed to a render shell.
#[derive(Debug, Serialize)]
struct SceneDocument<'a> {
    username: &'a str,
    total_fetched: usize,
    visible: usize,
    spheres: &'a [PositionedSphere],
    #[serde(skip_serializing_if = "Option::is_none")]
    frame: Option<Vec<FrameTransform>>,
}

/// Build and emit the scene for a user.
pub async fn execute(config: &Config, username: &str, request: SceneRequest) -> Result<()> {
    let Some(records) = fetch_or_report(config, username).await? else {
        return Ok(());
    };

    let mut session = GalaxySession::new(LanguagePalette::embedded());
    let generation = session.begin_search();
    session.install(generation, records);
    session.set_config(request.filter_config());

    let frame = request.frame.map(|t| session.tick(t));

    let document = SceneDocument {
        username,
        total_fetched: session.records().len(),
        visible: session.spheres().len(),
        spheres: session.spheres(),
        frame,
    };

    let json = serde_json::to_string_pretty(&document).context("Failed to serialize scene")?;

    match &request.output {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write scene to {}", path.display()))?;
            info!(path = %path.display(), spheres = document.visible, "Scene written");
            println!(
                "Wrote {} spheres ({} fetched) to {}",
                document.visible,
                document.total_fetched,
                path.display()
            );
        }
        None => println!("{json}"),
    }

    Ok(())
}
