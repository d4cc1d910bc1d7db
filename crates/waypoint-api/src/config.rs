//! Endpoint tables loaded from JSON configuration

use crate::endpoint::Endpoint;
use crate::error::ApiResult;
use crate::route::{with_endpoint, HttpHandlers};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A list of endpoints declared in configuration
///
/// ```json
/// { "endpoints": [ { "name": "Greeter.Hello", "path": ["^/greeter$"], "method": ["GET"], "handler": "rpc" } ] }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointTable {
    #[serde(default)]
    pub endpoints: Vec<Endpoint>,
}

impl EndpointTable {
    /// Parse a table from JSON
    pub fn from_json(json: &str) -> ApiResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize the table to JSON
    pub fn to_json(&self) -> ApiResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate every endpoint; the first failure wins
    pub fn validate(&self) -> ApiResult<()> {
        self.endpoints.iter().try_for_each(Endpoint::validate)
    }

    /// Validate the table and build one handler option per endpoint
    pub fn into_handlers(self) -> ApiResult<HttpHandlers> {
        self.validate()?;

        let mut handlers = HttpHandlers::new();
        for endpoint in &self.endpoints {
            handlers.push(with_endpoint(endpoint));
        }
        debug!(count = handlers.len(), "Loaded endpoints from configuration");
        Ok(handlers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;

    const TABLE: &str = r#"{
        "endpoints": [
            {
                "name": "Greeter.Hello",
                "description": "Say hello",
                "path": ["^/greeter$"],
                "method": ["GET", "POST"],
                "host": ["example.com"],
                "handler": "rpc"
            },
            { "name": "Greeter.Bye", "path": ["/bye"], "handler": "proxy" }
        ]
    }"#;

    #[test]
    fn test_parse_table() {
        let table = EndpointTable::from_json(TABLE).unwrap();
        assert_eq!(table.endpoints.len(), 2);
        assert_eq!(table.endpoints[0].method, vec!["GET", "POST"]);
        assert!(table.endpoints[1].method.is_empty());
        assert!(table.endpoints[1].description.is_empty());
    }

    #[test]
    fn test_into_handlers() {
        let handlers = EndpointTable::from_json(TABLE)
            .unwrap()
            .into_handlers()
            .unwrap();

        let names: Vec<&str> = handlers.iter().map(|o| o.endpoint()).collect();
        assert_eq!(names, vec!["Greeter.Hello", "Greeter.Bye"]);
        assert_eq!(handlers.as_slice()[1].metadata()["handler"], "proxy");
    }

    #[test]
    fn test_missing_handler_rejected() {
        let table = EndpointTable::from_json(r#"{"endpoints":[{"name":"Greeter.Hello"}]}"#).unwrap();
        assert!(matches!(table.into_handlers(), Err(ApiError::MissingHandler)));
    }

    #[test]
    fn test_bad_path_rejected() {
        let table = EndpointTable::from_json(
            r#"{"endpoints":[{"name":"A","handler":"rpc","path":["/ok"]},{"name":"B","handler":"rpc","path":["("]}]}"#,
        )
        .unwrap();
        assert!(matches!(
            table.validate(),
            Err(ApiError::MalformedPath { ref pattern, .. }) if pattern == "("
        ));
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(EndpointTable::from_json("{"), Err(ApiError::Config(_))));
        assert!(matches!(
            EndpointTable::from_json(r#"{"endpoints":[{"path":["/a"]}]}"#),
            Err(ApiError::Config(_))
        ));
    }

    #[test]
    fn test_to_json_reparses() {
        let table = EndpointTable::from_json(TABLE).unwrap();
        let json = table.to_json().unwrap();
        assert_eq!(EndpointTable::from_json(&json).unwrap(), table);
    }

    #[test]
    fn test_empty_table() {
        let handlers = EndpointTable::from_json("{}").unwrap().into_handlers().unwrap();
        assert!(handlers.is_empty());
    }
}
