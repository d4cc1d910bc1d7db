//! Handler registration options
//!
//! A handler option attaches a flat metadata mapping to one RPC method.
//! Options are collected into [`HandlerOptions`] when a handler is registered.

use std::collections::HashMap;
use tracing::debug;

/// Flat string-keyed metadata attached to an RPC method
pub type Metadata = HashMap<String, String>;

/// Registration-time directive attaching metadata to a named RPC method
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandlerOption {
    endpoint: String,
    metadata: Metadata,
}

impl HandlerOption {
    /// RPC method this option applies to (e.g., "Greeter.Hello")
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Metadata carried by this option
    pub fn metadata(&self) -> &Metadata {
        &self.metadata
    }

    /// Apply this option to a set of handler options
    pub fn apply(&self, options: &mut HandlerOptions) {
        debug!(
            endpoint = %self.endpoint,
            keys = self.metadata.len(),
            "Attaching endpoint metadata"
        );
        options
            .metadata
            .insert(self.endpoint.clone(), self.metadata.clone());
    }
}

/// Create a handler option that sets metadata for an endpoint
pub fn endpoint_metadata(name: impl Into<String>, metadata: Metadata) -> HandlerOption {
    HandlerOption {
        endpoint: name.into(),
        metadata,
    }
}

/// Options collected for a registered handler
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandlerOptions {
    metadata: HashMap<String, Metadata>,
}

impl HandlerOptions {
    /// Create an empty option set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an option set by applying options in order.
    ///
    /// A later option for the same endpoint replaces an earlier one.
    pub fn with_options<'a, I>(options: I) -> Self
    where
        I: IntoIterator<Item = &'a HandlerOption>,
    {
        let mut set = Self::new();
        for option in options {
            option.apply(&mut set);
        }
        set
    }

    /// Metadata registered for an endpoint
    pub fn metadata(&self, endpoint: &str) -> Option<&Metadata> {
        self.metadata.get(endpoint)
    }

    /// Names of all endpoints carrying metadata
    pub fn endpoints(&self) -> impl Iterator<Item = &str> {
        self.metadata.keys().map(String::as_str)
    }

    /// Number of endpoints carrying metadata
    pub fn len(&self) -> usize {
        self.metadata.len()
    }

    /// Whether no endpoint carries metadata
    pub fn is_empty(&self) -> bool {
        self.metadata.is_empty()
    }
}
