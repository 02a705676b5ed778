//! Fetch command: list a user's public repositories.

use anyhow::Result;

use crate::commands::{fetch_or_report, truncate};
use crate::config::Config;

/// List repositories for a user.
pub async fn execute(config: &Config, username: &str) -> Result<()> {
    let Some(records) = fetch_or_report(config, username).await? else {
        return Ok(());
    };

    println!("\nRepositories for {} ({} found):", username, records.len());
    println!("{:-<78}", "");

    for (i, record) in records.iter().enumerate() {
        println!(
            "{:3}. {:30} {:>7}★ {:12} {}",
            i + 1,
            truncate(&record.name, 30),
            record.stars,
            truncate(&record.language, 12),
            truncate(&record.description, 40)
        );
    }

    Ok(())
}
