//! Cache Key Construction
//!
//! A single pure function maps an operation name plus its parameters to a
//! cache key, so key layout is decided here rather than at each call site.

/// Builds a cache key from an operation name and its parameters.
///
/// Parameterless operations (full-collection fetches) key on the operation
/// name alone; parameterized ones append each parameter, colon-separated.
pub fn cache_key(operation: &str, params: &[&str]) -> String {
    if params.is_empty() {
        operation.to_string()
    } else {
        format!("{}:{}", operation, params.join(":"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_without_params() {
        assert_eq!(cache_key("meta_modules", &[]), "meta_modules");
    }

    #[test]
    fn test_key_with_single_param() {
        assert_eq!(cache_key("user_info", &["abc123"]), "user_info:abc123");
    }

    #[test]
    fn test_key_with_multiple_params() {
        assert_eq!(cache_key("op", &["a", "b"]), "op:a:b");
    }

    #[test]
    fn test_distinct_params_give_distinct_keys() {
        assert_ne!(cache_key("user_info", &["a"]), cache_key("user_info", &["b"]));
    }

    #[test]
    fn test_distinct_operations_give_distinct_keys() {
        assert_ne!(cache_key("user_info", &["a"]), cache_key("user_ouid", &["a"]));
    }
}
