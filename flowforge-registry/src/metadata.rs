//! Static metadata for the built-in providers.
//!
//! This module centralizes provider identifiers, display names,
//! descriptions, default base URLs, and icons so that:
//! - The registry can register built-in providers from a single source.
//! - Catalog helpers can reuse the same metadata without re-encoding
//!   strings or URLs.

/// Static metadata for a built-in provider.
#[derive(Debug, Clone)]
pub struct NativeProviderMetadata {
    /// Canonical provider identifier (e.g., `"openai"`, `"anthropic"`).
    pub id: &'static str,
    /// Display name; also the registry key (e.g., `"OpenAI"`).
    pub name: &'static str,
    /// Short description suitable for docs and introspection.
    pub description: &'static str,
    /// Default base URL used when no override is provided.
    ///
    /// `None` means the provider has no overridable HTTP endpoint in its
    /// form (for example, Gemini).
    pub default_base_url: Option<&'static str>,
    /// Icon identifier for the UI.
    pub icon: &'static str,
}

/// Return metadata for all built-in providers enabled in this build.
///
/// This mirrors the feature-gated set that `ProviderRegistry` registers by
/// default and should stay in sync with the registry wiring.
#[allow(clippy::vec_init_then_push)]
pub fn native_providers_metadata() -> Vec<NativeProviderMetadata> {
    #[allow(unused_mut)]
    let mut out = Vec::new();

    // OpenAI
    #[cfg(feature = "openai")]
    out.push(NativeProviderMetadata {
        id: crate::ids::OPENAI,
        name: "OpenAI",
        description: "OpenAI GPT models including GPT-4o and the o-series reasoning models",
        default_base_url: Some("https://api.openai.com/v1"),
        icon: "OpenAI",
    });

    // Anthropic
    #[cfg(feature = "anthropic")]
    out.push(NativeProviderMetadata {
        id: crate::ids::ANTHROPIC,
        name: "Anthropic",
        description: "Anthropic Claude models with advanced reasoning capabilities",
        default_base_url: Some("https://api.anthropic.com"),
        icon: "Anthropic",
    });

    // Google Gemini
    #[cfg(feature = "google")]
    out.push(NativeProviderMetadata {
        id: crate::ids::GEMINI,
        name: "Google Gemini",
        description: "Google Gemini models with multimodal capabilities",
        default_base_url: None,
        icon: "GoogleGenerativeAI",
    });

    // Groq
    #[cfg(feature = "groq")]
    out.push(NativeProviderMetadata {
        id: crate::ids::GROQ,
        name: "Groq",
        description: "Groq-hosted models with ultra-fast inference",
        default_base_url: Some("https://api.groq.com/openai/v1"),
        icon: "Groq",
    });

    // Ollama
    #[cfg(feature = "ollama")]
    out.push(NativeProviderMetadata {
        id: crate::ids::OLLAMA,
        name: "Ollama",
        description: "Local Ollama models with full control and privacy",
        default_base_url: Some("http://localhost:11434"),
        icon: "Ollama",
    });

    out
}
