//! Catalog helpers over the built-in provider set.

use crate::ids::BuiltinProviderId;
use crate::metadata::{NativeProviderMetadata, native_providers_metadata};

/// Metadata for every provider enabled in this build.
pub fn supported_providers() -> Vec<NativeProviderMetadata> {
    native_providers_metadata()
}

/// Look up provider metadata by canonical id or display name.
pub fn get_provider_metadata(id_or_name: &str) -> Option<NativeProviderMetadata> {
    native_providers_metadata()
        .into_iter()
        .find(|meta| meta.id == id_or_name || meta.name == id_or_name)
}

/// Check whether `model` appears in the provider's curated model list.
///
/// Keep this as a discovery helper, not a strict source of truth: providers
/// serve models beyond the curated constants.
pub fn is_model_supported(provider_id: &str, model: &str) -> bool {
    let Some(provider) = BuiltinProviderId::parse(provider_id) else {
        return false;
    };

    #[allow(unreachable_patterns)]
    match provider {
        #[cfg(feature = "openai")]
        BuiltinProviderId::OpenAi => {
            flowforge_providers::openai::model_constants::all_models().contains(&model)
        }
        #[cfg(feature = "anthropic")]
        BuiltinProviderId::Anthropic => {
            flowforge_providers::anthropic::model_constants::all_models().contains(&model)
        }
        #[cfg(feature = "google")]
        BuiltinProviderId::Gemini => {
            flowforge_providers::google::model_constants::all_models().contains(&model)
        }
        #[cfg(feature = "groq")]
        BuiltinProviderId::Groq => {
            flowforge_providers::groq::model_constants::all_models().contains(&model)
        }
        #[cfg(feature = "ollama")]
        BuiltinProviderId::Ollama => {
            flowforge_providers::ollama::model_constants::all_models().contains(&model)
        }
        // Providers compiled out of this build.
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(feature = "openai")]
    fn test_catalog_lookup_by_id_and_name() {
        let by_id = get_provider_metadata("openai").unwrap();
        let by_name = get_provider_metadata("OpenAI").unwrap();
        assert_eq!(by_id.id, by_name.id);
    }

    #[test]
    #[cfg(feature = "openai")]
    fn test_curated_openai_model_is_supported() {
        assert!(is_model_supported("openai", "gpt-4o"));
        assert!(!is_model_supported("openai", "non-existent-model"));
    }

    #[test]
    fn test_unknown_provider_supports_nothing() {
        assert!(!is_model_supported("unknown", "gpt-4o"));
    }

    #[test]
    #[cfg(feature = "builtins")]
    fn test_metadata_names_match_registry_keys() {
        let registry = crate::registry::ProviderRegistry::with_builtin_providers();
        for meta in supported_providers() {
            assert!(
                registry.contains(meta.name),
                "metadata name {} is not a registry key",
                meta.name
            );
        }
    }
}
