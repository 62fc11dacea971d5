//! flowforge
//!
//! A static registry mapping model provider names to their configurable
//! input fields, for node-graph workflow builders that let users swap model
//! providers in a UI.
//!
//! The registry is built once at first use from the providers enabled via
//! cargo features; a provider compiled out of the build is simply absent
//! from the registry, so the application degrades to offering fewer
//! providers.
//!
//! ```rust,ignore
//! let registry = flowforge::global_registry();
//! for (name, entry) in registry.entries() {
//!     println!("{name}: {} fields", entry.inputs.len());
//! }
//! ```
#![deny(unsafe_code)]

pub use flowforge_core::{component, error, filter, inputs};

pub use flowforge_core::{
    FlowforgeError, InputField, InputKind, ModelComponent, RangeSpec, Result, base_input_names,
    base_inputs, filtered_inputs, input_fields_map, process_input,
};

pub use flowforge_registry::{
    MODEL_DYNAMIC_UPDATE_FIELDS, NativeProviderMetadata, ProviderEntry, ProviderRegistry,
    global_registry, ids, metadata, native_providers_metadata,
};

/// Built-in provider components.
#[cfg(any(
    feature = "openai",
    feature = "anthropic",
    feature = "google",
    feature = "groq",
    feature = "ollama"
))]
pub use flowforge_providers as providers;

/// Catalog helpers over the built-in provider set.
#[cfg(any(
    feature = "openai",
    feature = "anthropic",
    feature = "google",
    feature = "groq",
    feature = "ollama"
))]
pub use flowforge_registry::catalog;
