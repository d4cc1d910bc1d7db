//! Endpoint and service descriptors

use crate::codec;
use crate::error::ApiResult;
use crate::validate;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use waypoint_server::{Metadata, RegistryService};

/// Mapping between an RPC method and an HTTP endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Endpoint {
    /// RPC method (e.g., "Greeter.Hello")
    pub name: String,
    /// What this endpoint is for
    #[serde(default)]
    pub description: String,
    /// API handler type (e.g., "rpc")
    #[serde(default)]
    pub handler: String,
    /// HTTP hosts (e.g., "example.com"); empty matches any host
    #[serde(default)]
    pub host: Vec<String>,
    /// HTTP methods (e.g., "GET", "POST")
    #[serde(default)]
    pub method: Vec<String>,
    /// HTTP paths as POSIX extended regular expressions (e.g., "^/greeter$")
    #[serde(default)]
    pub path: Vec<String>,
}

impl Endpoint {
    /// Create an endpoint for an RPC method with no routing set
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Encode into handler metadata
    pub fn encode(&self) -> Metadata {
        codec::encode_endpoint(self)
    }

    /// Decode from handler metadata
    pub fn decode(metadata: &Metadata) -> Self {
        codec::decode_endpoint(metadata)
    }

    /// Check the endpoint is safe to serve
    pub fn validate(&self) -> ApiResult<()> {
        validate::validate_endpoint(self)
    }
}

/// An API service as seen by a gateway
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Service {
    /// Name of the RPC method being served
    pub name: String,
    /// Endpoint decoded from registry metadata
    pub endpoint: Option<Endpoint>,
    /// Registered versions advertising the method
    pub services: Vec<RegistryService>,
}

impl Service {
    /// Resolve a method from registry records.
    ///
    /// The endpoint is decoded from the first record advertising `name`; records
    /// that do not advertise it are dropped. Returns `None` when no record does.
    pub fn resolve(name: &str, services: Vec<RegistryService>) -> Option<Self> {
        let services: Vec<RegistryService> = services
            .into_iter()
            .filter(|s| {
                let found = s.endpoint(name).is_some();
                if !found {
                    trace!(service = %s.name, version = %s.version, method = name, "Method not advertised");
                }
                found
            })
            .collect();

        let first = services.first()?;
        let endpoint = first
            .endpoint(name)
            .and_then(|e| codec::decode(Some(&e.metadata)));

        debug!(
            method = name,
            versions = services.len(),
            "Resolved endpoint from registry"
        );

        Some(Self {
            name: name.to_string(),
            endpoint,
            services,
        })
    }
}
