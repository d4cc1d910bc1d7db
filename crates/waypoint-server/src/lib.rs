//! Handler registration plumbing for Waypoint services.
//!
//! This crate provides the server-side pieces that endpoint metadata hangs off:
//! - Handler options that attach metadata to a named RPC method
//! - The option set a service collects at registration time
//! - Registry records that publish per-method metadata to discovery

pub mod handler;
pub mod registry;

pub use handler::{endpoint_metadata, HandlerOption, HandlerOptions, Metadata};
pub use registry::{RegistryEndpoint, RegistryService};
