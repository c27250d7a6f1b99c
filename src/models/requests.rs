//! Request DTOs for the server API
//!
//! Defines the structure of incoming HTTP request bodies and query strings.

use serde::Deserialize;
use serde_json::Value;

/// Request body for the save operation (POST /api/save)
///
/// The payload is opaque to the server: it is stored and returned as-is,
/// with no game-domain validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SaveRequest {
    /// The sandbox state to persist
    pub data: Value,
}

/// Query string for GET /api/user/ouid
#[derive(Debug, Clone, Deserialize)]
pub struct OuidQuery {
    pub user_name: String,
}

/// Query string for the per-user endpoints keyed by OUID
#[derive(Debug, Clone, Deserialize)]
pub struct UserQuery {
    pub ouid: String,
}

/// Query string for GET /api/meta/descendant
#[derive(Debug, Clone, Deserialize)]
pub struct DescendantQuery {
    pub descendant_id: String,
}

/// Query string for GET /api/meta/title
#[derive(Debug, Clone, Deserialize)]
pub struct TitleQuery {
    pub title_id: String,
}

/// Query string for GET /api/meta/module
#[derive(Debug, Clone, Deserialize)]
pub struct ModuleQuery {
    pub module_id: String,
}

/// Query string for GET /api/meta/weapon
#[derive(Debug, Clone, Deserialize)]
pub struct WeaponQuery {
    pub weapon_id: String,
}

/// Query string for GET /api/meta/stat
#[derive(Debug, Clone, Deserialize)]
pub struct StatQuery {
    pub stat_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_save_request_deserialize() {
        let body = r#"{"data": {"gridId": "1", "boxes": []}}"#;
        let req: SaveRequest = serde_json::from_str(body).unwrap();
        assert_eq!(req.data, json!({"gridId": "1", "boxes": []}));
    }

    #[test]
    fn test_save_request_accepts_any_json_shape() {
        let req: SaveRequest = serde_json::from_str(r#"{"data": [1, "two", null]}"#).unwrap();
        assert_eq!(req.data, json!([1, "two", null]));
    }

    #[test]
    fn test_save_request_requires_data_field() {
        let result = serde_json::from_str::<SaveRequest>(r#"{"payload": 1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_ouid_query_deserialize() {
        let query: OuidQuery = serde_json::from_str(r#"{"user_name": "Player#1234"}"#).unwrap();
        assert_eq!(query.user_name, "Player#1234");
    }
}
