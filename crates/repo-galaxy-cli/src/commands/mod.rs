//! CLI command implementations.

pub mod fetch;
pub mod scene;
pub mod stats;

use anyhow::Result;
use repo_galaxy_core::RepoRecord;
use repo_galaxy_github::{build_client, fetch_user_repos};

use crate::config::Config;

/// Fetch a user's repositories, reporting the empty case to the user.
///
/// Returns `None` when the fetch succeeded but the user has no public
/// repositories; that is a distinct message, not an error.
pub(crate) async fn fetch_or_report(
    config: &Config,
    username: &str,
) -> Result<Option<Vec<RepoRecord>>> {
    let client = build_client(config.github_token.clone())?;
    let records = fetch_user_repos(&client, username).await?;

    if records.is_empty() {
        println!("No public repositories found for \"{username}\"");
        return Ok(None);
    }

    Ok(Some(records))
}

/// Truncate a description for single-line table output.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
