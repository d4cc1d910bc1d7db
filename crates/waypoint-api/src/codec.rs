//! Endpoint metadata encoding
//!
//! An endpoint travels as flat handler metadata with six fixed keys. Sequence
//! fields are joined with `,` and no escaping, so an entry that itself contains
//! a comma splits into several entries when decoded.

use crate::endpoint::Endpoint;
use waypoint_server::Metadata;

/// RPC method name
pub const KEY_ENDPOINT: &str = "endpoint";
/// Free-text description
pub const KEY_DESCRIPTION: &str = "description";
/// Comma-joined HTTP methods
pub const KEY_METHOD: &str = "method";
/// Comma-joined path patterns
pub const KEY_PATH: &str = "path";
/// Comma-joined hosts
pub const KEY_HOST: &str = "host";
/// Handler type
pub const KEY_HANDLER: &str = "handler";

const SEPARATOR: char = ',';

/// Encode an endpoint to endpoint metadata
pub fn encode(endpoint: Option<&Endpoint>) -> Option<Metadata> {
    endpoint.map(encode_endpoint)
}

/// Decode endpoint metadata into an endpoint
pub fn decode(metadata: Option<&Metadata>) -> Option<Endpoint> {
    metadata.map(decode_endpoint)
}

pub(crate) fn encode_endpoint(endpoint: &Endpoint) -> Metadata {
    let sep = SEPARATOR.to_string();
    [
        (KEY_ENDPOINT, endpoint.name.clone()),
        (KEY_DESCRIPTION, endpoint.description.clone()),
        (KEY_METHOD, endpoint.method.join(&sep)),
        (KEY_PATH, endpoint.path.join(&sep)),
        (KEY_HOST, endpoint.host.join(&sep)),
        (KEY_HANDLER, endpoint.handler.clone()),
    ]
    .into_iter()
    .map(|(k, v)| (k.to_string(), v))
    .collect()
}

pub(crate) fn decode_endpoint(metadata: &Metadata) -> Endpoint {
    let scalar = |key: &str| metadata.get(key).cloned().unwrap_or_default();
    let list = |key: &str| metadata.get(key).map(|v| split(v)).unwrap_or_default();

    Endpoint {
        name: scalar(KEY_ENDPOINT),
        description: scalar(KEY_DESCRIPTION),
        method: list(KEY_METHOD),
        path: list(KEY_PATH),
        host: list(KEY_HOST),
        handler: scalar(KEY_HANDLER),
    }
}

/// Split on commas, trimming each part and dropping empty ones
fn split(value: &str) -> Vec<String> {
    value
        .split(SEPARATOR)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
