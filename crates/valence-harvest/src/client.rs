//! Search API client: bearer-auth GET with cursor pagination.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use valence_core::config::HarvestConfig;
use valence_core::errors::{HarvestError, ValenceResult};

use crate::pool_files;

/// One post as the search API returns it. Only the fields the pool keeps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawPost {
    pub id_str: String,
    pub created_at: String,
    pub text: String,
}

/// Pagination metadata; `next_results` is a ready-made query string for the
/// next (older) page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub next_results: Option<String>,
}

/// A decoded search response page.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchPage {
    #[serde(default)]
    pub statuses: Vec<RawPost>,
    #[serde(default)]
    pub search_metadata: SearchMetadata,
}

/// Thin wrapper over the HTTP client; knows how to fetch one page.
pub struct SearchClient {
    http: reqwest::Client,
    config: HarvestConfig,
    token: String,
}

impl SearchClient {
    /// Build a client. The bearer token comes from the config or, failing
    /// that, the `VALENCE_SEARCH_TOKEN` environment variable.
    pub fn new(config: HarvestConfig) -> ValenceResult<Self> {
        let token = config
            .token
            .clone()
            .or_else(|| std::env::var("VALENCE_SEARCH_TOKEN").ok())
            .filter(|t| !t.is_empty())
            .ok_or(HarvestError::MissingToken)?;
        Ok(Self {
            http: reqwest::Client::new(),
            config,
            token,
        })
    }

    /// Fetch one page. With no cursor this is the initial query; with a
    /// cursor the service-provided query string is appended verbatim.
    /// Returns the raw body alongside the decoded page so callers can keep
    /// an untouched copy on disk.
    pub async fn fetch_page(&self, cursor: Option<&str>) -> ValenceResult<(String, SearchPage)> {
        let request = match cursor {
            Some(c) => self.http.get(format!("{}{c}", self.config.base_url)),
            None => self.http.get(&self.config.base_url).query(&[
                ("q", self.config.query.as_str()),
                ("result_type", "recent"),
                ("lang", self.config.lang.as_str()),
                ("count", &self.config.page_size.to_string()),
            ]),
        };

        let response = request
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| HarvestError::Http {
                message: e.to_string(),
            })?;

        let status = response.status();
        let body = response.text().await.map_err(|e| HarvestError::Http {
            message: e.to_string(),
        })?;
        if !status.is_success() {
            return Err(HarvestError::Http {
                message: format!("status {status}: {body}"),
            }
            .into());
        }

        let page: SearchPage = serde_json::from_str(&body).map_err(|e| HarvestError::Payload {
            message: e.to_string(),
        })?;
        Ok((body, page))
    }
}

/// Drives the client page by page, writing a raw/pool file pair per page.
pub struct Harvester {
    client: SearchClient,
    out_dir: PathBuf,
}

impl Harvester {
    pub fn new(client: SearchClient, out_dir: &Path) -> Self {
        Self {
            client,
            out_dir: out_dir.to_path_buf(),
        }
    }

    /// Fetch up to `pages` pages antechronologically. Each page lands on
    /// disk before the next is requested, so a failed run keeps everything
    /// fetched so far. Returns the number of posts written to pool files.
    pub async fn run(&self, pages: usize) -> ValenceResult<usize> {
        let mut cursor: Option<String> = None;
        let mut total = 0;

        for seq in 1..=pages {
            let (body, page) = self.client.fetch_page(cursor.as_deref()).await?;
            pool_files::write_raw(&self.out_dir, seq, &body)?;
            pool_files::write_pool(&self.out_dir, seq, &page.statuses)?;
            total += page.statuses.len();
            info!(seq, posts = page.statuses.len(), "page stored");

            match page.search_metadata.next_results {
                Some(next) => cursor = Some(next),
                None => {
                    warn!(seq, "no further results, stopping early");
                    break;
                }
            }
        }

        Ok(total)
    }
}
