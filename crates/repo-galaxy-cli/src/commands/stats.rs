//! Stats command: aggregate statistics for a user's repositories.

use anyhow::Result;

use crate::commands::fetch_or_report;
use crate::config::Config;
use repo_galaxy_core::GalaxyStats;

/// Print the statistics summary for a user.
pub async fn execute(config: &Config, username: &str) -> Result<()> {
    let Some(records) = fetch_or_report(config, username).await? else {
        return Ok(());
    };

    let stats = GalaxyStats::compute(&records);

    println!("\nStatistics for {username}");
    println!("{:-<50}", "");
    println!("Repositories : {}", stats.total_repos);
    println!("Total stars  : {}", stats.total_stars);
    println!("Top language : {}", stats.top_language);

    if let Some(top) = &stats.most_starred {
        println!("Most starred : {} ({}★)", top.name, top.stars);
    }

    let ranked = stats.top_languages(5);
    if !ranked.is_empty() {
        let max = ranked[0].1.max(1);
        println!("\nTop languages:");
        for (language, count) in ranked {
            let bar_width = (count * 30).div_ceil(max);
            println!("  {:15} {:3}  {}", language, count, "#".repeat(bar_width));
        }
    }

    Ok(())
}
