//! Paginated retrieval of a user's public repositories from the GitHub API.
//!
//! This is the only I/O-bound, potentially-failing component of the
//! pipeline. It fetches every page before returning anything; a failure on
//! any page aborts the whole fetch with no partial results. There is no
//! retry or backoff: a rate-limited page loses the pages fetched before it,
//! which is an accepted limitation of the single-user, single-session model.

use chrono::{DateTime, Utc};
use octocrab::models::Repository;
use octocrab::Octocrab;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use repo_galaxy_core::{RepoRecord, NO_DESCRIPTION, UNKNOWN_LANGUAGE};

/// GitHub allows up to 100 items per page.
const PER_PAGE: u8 = 100;

/// Query parameters for the user-repos collection endpoint.
#[derive(Debug, Serialize)]
struct PageParams {
    per_page: u8,
    page: u32,
    sort: &'static str,
}

/// Result type for fetch operations.
pub type FetchResult<T> = Result<T, FetchError>;

/// Errors that can occur while fetching repositories.
///
/// All variants are terminal for the current search attempt; none are
/// retried automatically. An empty successful result is not an error and is
/// reported by the caller as a distinct "no public repositories" condition.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The username was empty or whitespace.
    #[error("invalid username: must be a non-empty string")]
    InvalidUsername,

    /// GitHub returned 404 for the user.
    #[error("user \"{username}\" not found")]
    UserNotFound { username: String },

    /// GitHub returned 403 (rate limit exceeded).
    #[error("GitHub API rate limit exceeded, try again later")]
    RateLimited,

    /// Any other non-2xx response from GitHub.
    #[error("GitHub API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Network-level or client-side failure before a status was received.
    #[error("transport failure talking to GitHub: {0}")]
    Transport(#[source] octocrab::Error),
}

/// Build a GitHub client, authenticated when a token is available.
///
/// Unauthenticated clients work for public repositories at a lower rate
/// limit, so the token is optional.
pub fn build_client(token: Option<String>) -> FetchResult<Octocrab> {
    let mut builder = Octocrab::builder();
    if let Some(token) = token {
        builder = builder.personal_token(token);
    }
    builder.build().map_err(FetchError::Transport)
}

/// Fetch the full list of a user's public repositories.
///
/// Pages are requested strictly sequentially with the server-side
/// "most recently updated first" ordering, until a page comes back empty or
/// shorter than [`PER_PAGE`]. All pages are accumulated before returning.
pub async fn fetch_user_repos(
    client: &Octocrab,
    username: &str,
) -> FetchResult<Vec<RepoRecord>> {
    let username = username.trim();
    if username.is_empty() {
        return Err(FetchError::InvalidUsername);
    }

    info!(username = %username, "Fetching user repositories");

    let route = format!("/users/{username}/repos");
    let mut records = Vec::new();
    let mut page = 1u32;

    loop {
        let params = PageParams {
            per_page: PER_PAGE,
            page,
            sort: "updated",
        };
        let items: Vec<Repository> = client
            .get(&route, Some(&params))
            .await
            .map_err(|e| map_fetch_error(e, username))?;

        let count = items.len();
        debug!(page, count, "Received repository page");

        records.extend(items.into_iter().map(|r| normalize(username, r)));

        if count < PER_PAGE as usize {
            break;
        }
        page += 1;
    }

    info!(username = %username, total = records.len(), "Fetch complete");
    Ok(records)
}

/// Map an octocrab failure onto the fetch error taxonomy.
fn map_fetch_error(err: octocrab::Error, username: &str) -> FetchError {
    match err {
        octocrab::Error::GitHub { source, .. } => {
            classify_status(source.status_code.as_u16(), &source.message, username)
        }
        other => FetchError::Transport(other),
    }
}

/// Map an HTTP status code onto the fetch error taxonomy.
fn classify_status(status: u16, message: &str, username: &str) -> FetchError {
    match status {
        404 => FetchError::UserNotFound {
            username: username.to_string(),
        },
        403 => FetchError::RateLimited,
        status => FetchError::Api {
            status,
            message: message.to_string(),
        },
    }
}

/// Normalize one GitHub repository onto the domain record.
///
/// Sentinel substitution happens here, at the ingestion boundary: by the
/// time a record reaches the filter/layout pipeline its description and
/// language are never absent.
fn normalize(username: &str, repo: Repository) -> RepoRecord {
    let name = repo.name;
    let url = repo
        .html_url
        .map(|u| u.to_string())
        .unwrap_or_else(|| format!("https://github.com/{username}/{name}"));

    RepoRecord {
        id: repo.id.0,
        description: repo
            .description
            .filter(|d| !d.is_empty())
            .unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        stars: repo.stargazers_count.unwrap_or(0) as u64,
        language: repo
            .language
            .as_ref()
            .and_then(|v| v.as_str())
            .filter(|l| !l.is_empty())
            .unwrap_or(UNKNOWN_LANGUAGE)
            .to_string(),
        url,
        updated_at: repo
            .updated_at
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
        forks: repo.forks_count.map(u64::from),
        watchers: repo.watchers_count.map(u64::from),
        topics: repo.topics.unwrap_or_default(),
        name,
    }
}
