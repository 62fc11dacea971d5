//! flowforge-registry
//!
//! The static model provider registry: provider metadata, per-provider
//! filtered input sets, and catalog helpers over the enabled built-ins.
#![deny(unsafe_code)]

pub mod ids;
pub mod metadata;
pub mod registry;

// Built-in provider catalog helpers (requires `flowforge-providers`).
#[cfg(feature = "builtins")]
pub mod catalog;

pub use metadata::{NativeProviderMetadata, native_providers_metadata};
pub use registry::{
    MODEL_DYNAMIC_UPDATE_FIELDS, ProviderEntry, ProviderRegistry, global_registry,
};
