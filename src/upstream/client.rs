//! Upstream API Client
//!
//! Thin reqwest adapter over the third-party game-data API. Performs the
//! actual network calls when the response cache misses and normalizes
//! failures into the crate error taxonomy.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{AppError, Result};
use crate::upstream::MetaResource;

/// Header carrying the upstream API key.
const API_KEY_HEADER: &str = "x-nxopen-api-key";

// == Game API Client ==
/// HTTP client for the upstream game-data API.
///
/// Outbound calls carry the configured API key and a bounded timeout; the
/// upstream is a third-party dependency and must not be able to hang a
/// request forever.
#[derive(Debug, Clone)]
pub struct GameApiClient {
    http: Client,
    base_url: String,
    static_url: String,
    api_key: String,
}

impl GameApiClient {
    /// Creates a new client from configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.upstream_timeout))
            .build()
            .map_err(|e| AppError::Internal(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.upstream_base_url.trim_end_matches('/').to_string(),
            static_url: config.upstream_static_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    // == Per-User Endpoints ==

    /// Resolves a user name to its opaque user identifier (OUID).
    ///
    /// The upstream responds with a wrapper object; only the `ouid` field is
    /// returned to callers.
    pub async fn fetch_ouid(&self, user_name: &str) -> Result<Value> {
        let url = format!("{}/id", self.base_url);
        let body = self
            .get_json(&url, &[("user_name", user_name)], "user id lookup")
            .await?;

        body.get("ouid").cloned().ok_or_else(|| {
            AppError::Internal("upstream id response is missing the ouid field".to_string())
        })
    }

    /// Fetches the basic account snapshot for an OUID.
    pub async fn fetch_user_info(&self, ouid: &str) -> Result<Value> {
        let url = format!("{}/user/basic", self.base_url);
        self.get_json(&url, &[("ouid", ouid)], "user info").await
    }

    /// Fetches the per-character game-state snapshot for an OUID.
    pub async fn fetch_user_descendant(&self, ouid: &str) -> Result<Value> {
        let url = format!("{}/user/descendant", self.base_url);
        self.get_json(&url, &[("ouid", ouid)], "user descendant")
            .await
    }

    // == Static Metadata ==

    /// Fetches a full metadata collection dump.
    pub async fn fetch_collection(&self, resource: MetaResource) -> Result<Value> {
        let url = format!("{}/{}", self.static_url, resource.file_name());
        self.get_json(&url, &[], resource.entity_name()).await
    }

    /// Finds a single record in a collection by its ID field.
    ///
    /// The upstream exposes these resources as full collections only, so
    /// "fetch one by ID" is a linear search over the (cached) dump.
    pub fn find_by_id(collection: &Value, resource: MetaResource, id: &str) -> Result<Value> {
        collection
            .as_array()
            .and_then(|records| {
                records.iter().find(|record| {
                    record
                        .get(resource.id_field())
                        .and_then(Value::as_str)
                        .is_some_and(|field| field == id)
                })
            })
            .cloned()
            .ok_or_else(|| AppError::UpstreamNotFound {
                entity: resource.entity_name(),
                id: id.to_string(),
            })
    }

    // == Transport ==

    /// Performs a GET with the API key header and parses the JSON body.
    async fn get_json(&self, url: &str, query: &[(&str, &str)], context: &str) -> Result<Value> {
        debug!("fetching upstream {}", url);

        let mut request = self.http.get(url).header(API_KEY_HEADER, &self.api_key);
        if !query.is_empty() {
            request = request.query(query);
        }

        let wrap = |source: reqwest::Error| AppError::Upstream {
            context: context.to_string(),
            source,
        };

        let response = request.send().await.map_err(wrap)?;
        let response = response.error_for_status().map_err(wrap)?;
        response.json::<Value>().await.map_err(wrap)
    }
}
