//! HTTP endpoint metadata for Waypoint RPC handlers.
//!
//! This crate describes how an API gateway should expose an RPC method over HTTP.
//! It supports:
//! - The [`Endpoint`] descriptor (paths, methods, hosts, handler type)
//! - Encoding to and decoding from flat handler metadata
//! - Validation of names, handlers and POSIX path patterns
//! - Per-verb handler options (GET/POST/PUT/PATCH/DELETE)
//! - Endpoint tables loaded from JSON configuration

pub mod codec;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod route;
pub mod validate;

pub use codec::{decode, encode};
pub use config::EndpointTable;
pub use endpoint::{Endpoint, Service};
pub use error::{ApiError, ApiResult, PatternError};
pub use route::{delete, get, patch, post, put, with_endpoint, HttpHandlers, RPC_HANDLER};
pub use validate::validate;
