//! API Handlers
//!
//! HTTP request handlers for the save/load endpoints and the cache-fronted
//! upstream proxy endpoints.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::cache::{cache_key, SharedCache};
use crate::config::Config;
use crate::db::BuildStore;
use crate::error::Result;
use crate::models::{
    DescendantQuery, HealthResponse, ModuleQuery, OuidQuery, SaveRequest, SaveResponse, StatQuery,
    TitleQuery, UserQuery, WeaponQuery,
};
use crate::service::BuildService;
use crate::upstream::{GameApiClient, MetaResource};

/// Application state shared across all handlers.
///
/// Built once at startup; everything in it is cheap to clone per request.
#[derive(Clone)]
pub struct AppState {
    /// Process-wide response cache
    pub cache: SharedCache,
    /// Save/load service over the build store
    pub builds: Arc<BuildService>,
    /// Upstream game-data API client
    pub upstream: Arc<GameApiClient>,
}

impl AppState {
    /// Creates a new AppState from its parts.
    pub fn new(cache: SharedCache, builds: BuildService, upstream: GameApiClient) -> Self {
        Self {
            cache,
            builds: Arc::new(builds),
            upstream: Arc::new(upstream),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Opens the build database and constructs the upstream client.
    pub fn from_config(config: &Config) -> Result<Self> {
        let cache = SharedCache::new(config.cache_ttl);
        let store = BuildStore::open(&config.database_path)?;
        let upstream = GameApiClient::new(config)?;
        Ok(Self::new(cache, BuildService::new(store), upstream))
    }
}

// == Build Persistence ==

/// Handler for POST /api/save
///
/// Persists an opaque build payload and returns its fresh share id.
pub async fn save_handler(
    State(state): State<AppState>,
    Json(req): Json<SaveRequest>,
) -> Result<Json<SaveResponse>> {
    let id = state.builds.save(&req.data)?;
    info!("Saved build {}", id);
    Ok(Json(SaveResponse::new(id)))
}

/// Handler for GET /api/load/:id
///
/// Returns the stored payload exactly as it was saved.
pub async fn load_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>> {
    let payload = state.builds.load(&id)?;
    Ok(Json(payload))
}

// == Per-User Proxy ==

/// Handler for GET /api/user/ouid?user_name=
pub async fn user_ouid_handler(
    State(state): State<AppState>,
    Query(query): Query<OuidQuery>,
) -> Result<Json<Value>> {
    let key = cache_key("user_ouid", &[&query.user_name]);
    let value = state
        .cache
        .get_or_fetch(&key, || state.upstream.fetch_ouid(&query.user_name))
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/user/info?ouid=
pub async fn user_info_handler(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Value>> {
    let key = cache_key("user_info", &[&query.ouid]);
    let value = state
        .cache
        .get_or_fetch(&key, || state.upstream.fetch_user_info(&query.ouid))
        .await?;
    Ok(Json(value))
}

/// Handler for GET /api/user/descendant?ouid=
pub async fn user_descendant_handler(
    State(state): State<AppState>,
    Query(query): Query<UserQuery>,
) -> Result<Json<Value>> {
    let key = cache_key("user_descendant", &[&query.ouid]);
    let value = state
        .cache
        .get_or_fetch(&key, || state.upstream.fetch_user_descendant(&query.ouid))
        .await?;
    Ok(Json(value))
}

// == Metadata Proxy ==

/// Fetches a full metadata collection through the cache.
async fn collection_cached(state: &AppState, resource: MetaResource) -> Result<Value> {
    let key = cache_key(resource.cache_operation(), &[]);
    state
        .cache
        .get_or_fetch(&key, || state.upstream.fetch_collection(resource))
        .await
}

/// Fetches one record of a collection by id.
///
/// The collection dump is what gets cached; the per-id lookup is a linear
/// search over it on every request.
async fn entity_cached(state: &AppState, resource: MetaResource, id: &str) -> Result<Value> {
    let collection = collection_cached(state, resource).await?;
    GameApiClient::find_by_id(&collection, resource, id)
}

/// Handler for GET /api/meta/descendant?descendant_id=
pub async fn meta_descendant_handler(
    State(state): State<AppState>,
    Query(query): Query<DescendantQuery>,
) -> Result<Json<Value>> {
    let record = entity_cached(&state, MetaResource::Descendants, &query.descendant_id).await?;
    Ok(Json(record))
}

/// Handler for GET /api/meta/title?title_id=
///
/// Returns just the title text, not the whole record.
pub async fn meta_title_handler(
    State(state): State<AppState>,
    Query(query): Query<TitleQuery>,
) -> Result<Json<Value>> {
    let record = entity_cached(&state, MetaResource::Titles, &query.title_id).await?;
    let name = record.get("title_name").cloned().unwrap_or(Value::Null);
    Ok(Json(name))
}

/// Handler for GET /api/meta/module?module_id=
pub async fn meta_module_handler(
    State(state): State<AppState>,
    Query(query): Query<ModuleQuery>,
) -> Result<Json<Value>> {
    let record = entity_cached(&state, MetaResource::Modules, &query.module_id).await?;
    Ok(Json(record))
}

/// Handler for GET /api/meta/weapon?weapon_id=
pub async fn meta_weapon_handler(
    State(state): State<AppState>,
    Query(query): Query<WeaponQuery>,
) -> Result<Json<Value>> {
    let record = entity_cached(&state, MetaResource::Weapons, &query.weapon_id).await?;
    Ok(Json(record))
}

/// Handler for GET /api/meta/stat?stat_id=
pub async fn meta_stat_handler(
    State(state): State<AppState>,
    Query(query): Query<StatQuery>,
) -> Result<Json<Value>> {
    let record = entity_cached(&state, MetaResource::Stats, &query.stat_id).await?;
    Ok(Json(record))
}

macro_rules! collection_handler {
    ($name:ident, $resource:expr, $route:literal) => {
        #[doc = concat!("Handler for GET ", $route)]
        pub async fn $name(State(state): State<AppState>) -> Result<Json<Value>> {
            let collection = collection_cached(&state, $resource).await?;
            Ok(Json(collection))
        }
    };
}

collection_handler!(meta_modules_handler, MetaResource::Modules, "/api/meta/modules");
collection_handler!(meta_weapons_handler, MetaResource::Weapons, "/api/meta/weapons");
collection_handler!(
    meta_descendants_handler,
    MetaResource::Descendants,
    "/api/meta/descendants"
);
collection_handler!(meta_stats_handler, MetaResource::Stats, "/api/meta/stats");
collection_handler!(meta_patterns_handler, MetaResource::Patterns, "/api/meta/patterns");
collection_handler!(
    meta_materials_handler,
    MetaResource::Materials,
    "/api/meta/materials"
);
collection_handler!(
    meta_acquisition_handler,
    MetaResource::Acquisition,
    "/api/meta/acquisition"
);
collection_handler!(meta_missions_handler, MetaResource::Missions, "/api/meta/missions");

// == Health ==

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn test_state() -> (TempDir, AppState) {
        let dir = TempDir::new().unwrap();
        let config = Config {
            database_path: dir
                .path()
                .join("builds.db")
                .to_string_lossy()
                .into_owned(),
            ..Config::default()
        };
        let state = AppState::from_config(&config).unwrap();
        (dir, state)
    }

    #[tokio::test]
    async fn test_save_and_load_handler() {
        let (_dir, state) = test_state();

        let payload = json!({"gridId": "1", "boxes": []});
        let req = SaveRequest {
            data: payload.clone(),
        };
        let saved = save_handler(State(state.clone()), Json(req)).await.unwrap();
        assert!(saved.success);

        let loaded = load_handler(State(state), Path(saved.id.clone()))
            .await
            .unwrap();
        assert_eq!(loaded.0, payload);
    }

    #[tokio::test]
    async fn test_load_unknown_id() {
        let (_dir, state) = test_state();

        let result = load_handler(State(state), Path("nonexist".to_string())).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }
}
