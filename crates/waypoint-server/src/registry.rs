//! Registry records for service discovery
//!
//! A registered service advertises each of its RPC methods together with the
//! metadata attached through handler options. Gateways read that metadata back.

use crate::handler::{HandlerOptions, Metadata};
use serde::{Deserialize, Serialize};

/// One advertised RPC method
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryEndpoint {
    /// RPC method name (e.g., "Greeter.Hello")
    pub name: String,
    /// Metadata attached at registration
    #[serde(default)]
    pub metadata: Metadata,
}

/// One version of a registered service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryService {
    /// Service name (e.g., "greeter")
    pub name: String,
    /// Service version
    pub version: String,
    /// Advertised RPC methods
    #[serde(default)]
    pub endpoints: Vec<RegistryEndpoint>,
}

impl RegistryService {
    /// Create a registry record with no endpoints
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            endpoints: Vec::new(),
        }
    }

    /// Advertise every endpoint carried by a handler's options.
    ///
    /// Endpoints are kept sorted by name; an endpoint already present is replaced.
    pub fn with_handler_options(mut self, options: &HandlerOptions) -> Self {
        for name in options.endpoints() {
            let metadata = options.metadata(name).cloned().unwrap_or_default();
            self.endpoints.retain(|e| e.name != name);
            self.endpoints.push(RegistryEndpoint {
                name: name.to_string(),
                metadata,
            });
        }
        self.endpoints.sort_by(|a, b| a.name.cmp(&b.name));
        self
    }

    /// Find an advertised endpoint by name
    pub fn endpoint(&self, name: &str) -> Option<&RegistryEndpoint> {
        self.endpoints.iter().find(|e| e.name == name)
    }
}
