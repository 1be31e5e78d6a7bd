use tracing::instrument;

use crate::error::{CricketError, Result};
use crate::model::*;
use crate::scraper;

/// Default upstream origin for listing and scorecard pages.
pub const DEFAULT_BASE_URL: &str = "https://www.cricbuzz.com";

/// The main entry point for reading scores from Cricbuzz.
///
/// `CricbuzzClient` wraps a [`reqwest::Client`] and the upstream origin, and exposes
/// one method per page kind. Each call performs exactly one request.
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> cricket_scores::Result<()> {
/// use cricket_scores::CricbuzzClient;
///
/// let client = CricbuzzClient::new(
///     cricket_scores::DEFAULT_BASE_URL,
///     "cricket-scores/0.1 (+https://github.com/cricket-scores)",
/// )?;
/// let matches = client.get_live_matches().await?;
/// println!("Found {} live matches", matches.len());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CricbuzzClient {
    http: reqwest::Client,
    base_url: String,
}

impl CricbuzzClient {
    /// Create a client that identifies itself with `user_agent`.
    pub fn new(base_url: impl Into<String>, user_agent: &str) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(CricketError::ClientBuild)?;
        Ok(Self::with_client(http, base_url))
    }

    /// Create a client using the provided [`reqwest::Client`].
    ///
    /// Use this when you need to configure proxies, headers, etc.
    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http: client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Upstream origin, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the matches currently in progress, at most [`Feed::Live`]'s cap.
    ///
    /// Fails with [`CricketError::NoMatches`] when the page yields nothing.
    #[instrument(skip(self))]
    pub async fn get_live_matches(&self) -> Result<MatchList> {
        scraper::matchlist::get_matchlist(&self.http, &self.base_url, Feed::Live).await
    }

    /// Fetch recently listed matches, at most [`Feed::Recent`]'s cap.
    #[instrument(skip(self))]
    pub async fn get_recent_matches(&self) -> Result<MatchList> {
        scraper::matchlist::get_matchlist(&self.http, &self.base_url, Feed::Recent).await
    }

    /// Fetch the scorecard summary of a single match.
    #[instrument(skip(self))]
    pub async fn get_match(&self, match_id: &str) -> Result<MatchDetail> {
        scraper::match_detail::get_match(&self.http, &self.base_url, match_id).await
    }
}
