//! flowforge-providers
//!
//! Built-in model provider components. Each provider sits behind a
//! same-named cargo feature so a build only carries the integrations it
//! wants; the registry omits anything that is compiled out.
#![deny(unsafe_code)]

#[cfg(feature = "anthropic")]
pub mod anthropic;
#[cfg(feature = "google")]
pub mod google;
#[cfg(feature = "groq")]
pub mod groq;
#[cfg(feature = "ollama")]
pub mod ollama;
#[cfg(feature = "openai")]
pub mod openai;
