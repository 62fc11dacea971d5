//! flowforge-core
//!
//! Provider-agnostic building blocks for the model provider registry: input
//! descriptors, the model component trait, and the filtering rules applied
//! before descriptors reach the UI.
//!
//! This crate is intentionally dependency-light and shared across crates.
#![deny(unsafe_code)]

pub mod component;
pub mod error;
pub mod filter;
pub mod inputs;

pub use component::{ModelComponent, base_input_names, base_inputs};
pub use error::{FlowforgeError, Result};
pub use filter::{filtered_inputs, input_fields_map, process_input};
pub use inputs::{InputField, InputKind, RangeSpec};
