//! Request DTOs for the cache HTTP front end

use serde::Deserialize;

/// Query string for `GET /cache` and `PUT /cache`.
///
/// The key is usually a full request URL, so it travels percent-encoded in
/// the query rather than in the path. An empty key is valid.
#[derive(Debug, Clone, Deserialize)]
pub struct KeyQuery {
    pub key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_query_deserialize() {
        let json = r#"{"key": "https://pokeapi.co/api/v2/location-area?offset=20"}"#;
        let query: KeyQuery = serde_json::from_str(json).unwrap();
        assert_eq!(
            query.key,
            "https://pokeapi.co/api/v2/location-area?offset=20"
        );
    }

    #[test]
    fn test_key_query_requires_key() {
        let result: Result<KeyQuery, _> = serde_json::from_str("{}");
        assert!(result.is_err());
    }
}
