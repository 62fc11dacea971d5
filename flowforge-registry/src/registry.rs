//! The model provider registry.
//!
//! Maps a provider display name to everything the UI needs to render that
//! provider's configuration form: the filtered input list, a field-name map,
//! the key prefix, and the component itself. Built once at first use and
//! read-only afterwards.

use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};

use flowforge_core::component::ModelComponent;
use flowforge_core::error::{FlowforgeError, Result};
use flowforge_core::filter::{filtered_inputs, input_fields_map};
use flowforge_core::inputs::InputField;

/// Field names whose edits trigger a rebuild of the node's form in the
/// parent application.
pub const MODEL_DYNAMIC_UPDATE_FIELDS: [&str; 5] = [
    "api_key",
    "model",
    "tool_model_enabled",
    "base_url",
    "model_name",
];

/// One provider's registration: the data backing its configuration form.
#[derive(Clone)]
pub struct ProviderEntry {
    /// Filtered, post-processed provider inputs in declaration order.
    pub inputs: Vec<InputField>,
    /// `prefix + name` → descriptor, for form-field lookup.
    pub fields: HashMap<String, InputField>,
    /// Key prefix used in `fields`; empty for the built-ins.
    pub prefix: String,
    /// The component this entry was derived from.
    pub component: Arc<dyn ModelComponent>,
}

impl ProviderEntry {
    /// Derive an entry from a component.
    ///
    /// Fails when the component declares duplicate field names; the registry
    /// skips such providers instead of shipping an ambiguous form.
    pub fn from_component(
        component: Arc<dyn ModelComponent>,
        prefix: impl Into<String>,
    ) -> Result<Self> {
        let prefix = prefix.into();
        let inputs = filtered_inputs(component.as_ref());
        let fields = input_fields_map(&inputs, &prefix);
        if fields.len() != inputs.len() {
            return Err(FlowforgeError::ComponentInit {
                provider: component.display_name().to_string(),
                reason: "component declares duplicate input names".to_string(),
            });
        }
        Ok(Self {
            inputs,
            fields,
            prefix,
            component,
        })
    }

    /// Form-field keys in declaration order (`fields` itself is unordered).
    pub fn field_names(&self) -> Vec<String> {
        self.inputs
            .iter()
            .map(|input| format!("{}{}", self.prefix, input.name))
            .collect()
    }
}

impl fmt::Debug for ProviderEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderEntry")
            .field("provider", &self.component.display_name())
            .field("prefix", &self.prefix)
            .field("inputs", &self.inputs.len())
            .finish()
    }
}

/// Registry of model providers, keyed by display name.
///
/// Registration order is preserved; the UI renders the provider dropdown in
/// this order.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    by_name: HashMap<String, ProviderEntry>,
    order: Vec<String>,
}

impl ProviderRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in provider enabled in this build
    /// pre-registered.
    pub fn with_builtin_providers() -> Self {
        #[allow(unused_mut)]
        let mut registry = Self::new();
        #[cfg(feature = "builtins")]
        registry.register_builtin_providers();
        registry
    }

    #[cfg(feature = "builtins")]
    fn register_builtin_providers(&mut self) {
        #[cfg(feature = "openai")]
        self.register_builtin(|| {
            ProviderEntry::from_component(
                Arc::new(flowforge_providers::openai::OpenAiModelComponent),
                "",
            )
        });

        #[cfg(feature = "anthropic")]
        self.register_builtin(|| {
            ProviderEntry::from_component(
                Arc::new(flowforge_providers::anthropic::AnthropicModelComponent),
                "",
            )
        });

        #[cfg(feature = "google")]
        self.register_builtin(|| {
            ProviderEntry::from_component(
                Arc::new(flowforge_providers::google::GeminiModelComponent),
                "",
            )
        });

        #[cfg(feature = "groq")]
        self.register_builtin(|| {
            ProviderEntry::from_component(
                Arc::new(flowforge_providers::groq::GroqModelComponent),
                "",
            )
        });

        #[cfg(feature = "ollama")]
        self.register_builtin(|| {
            ProviderEntry::from_component(
                Arc::new(flowforge_providers::ollama::OllamaModelComponent),
                "",
            )
        });
    }

    /// Register a built-in entry, logging and omitting it on failure so a
    /// broken provider degrades to a missing dropdown option rather than a
    /// startup failure.
    #[cfg(feature = "builtins")]
    fn register_builtin(&mut self, build: impl FnOnce() -> Result<ProviderEntry>) {
        match build() {
            Ok(entry) => {
                let name = entry.component.display_name().to_string();
                tracing::debug!(
                    provider = %name,
                    fields = entry.inputs.len(),
                    "registered model provider"
                );
                self.register(name, entry);
            }
            Err(err) => {
                tracing::warn!(error = %err, "skipping model provider");
            }
        }
    }

    /// Register an entry under a display name. Re-registering a name
    /// replaces the entry but keeps its position.
    pub fn register(&mut self, name: impl Into<String>, entry: ProviderEntry) {
        let name = name.into();
        if !self.by_name.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.by_name.insert(name, entry);
    }

    pub fn get(&self, name: &str) -> Option<&ProviderEntry> {
        self.by_name.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Provider display names in registration order.
    pub fn providers(&self) -> Vec<&str> {
        self.order.iter().map(String::as_str).collect()
    }

    /// Entries in registration order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &ProviderEntry)> {
        self.order
            .iter()
            .map(|name| (name.as_str(), &self.by_name[name]))
    }

    /// Every form-field key across all providers, registration order.
    pub fn all_provider_fields(&self) -> Vec<String> {
        self.entries()
            .flat_map(|(_, entry)| entry.field_names())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

// Global registry instance. Built once, never mutated afterwards.
static GLOBAL_REGISTRY: OnceLock<ProviderRegistry> = OnceLock::new();

/// Get the global provider registry (initialized with built-in providers).
pub fn global_registry() -> &'static ProviderRegistry {
    GLOBAL_REGISTRY.get_or_init(ProviderRegistry::with_builtin_providers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use flowforge_core::component::base_inputs;
    use flowforge_core::inputs::InputKind;

    struct TestComponent {
        duplicate: bool,
    }

    impl ModelComponent for TestComponent {
        fn display_name(&self) -> &str {
            "Test"
        }

        fn description(&self) -> &str {
            "Test component"
        }

        fn icon(&self) -> &str {
            "Test"
        }

        fn inputs(&self) -> Vec<InputField> {
            let mut inputs = base_inputs();
            inputs.push(InputField::new("api_key", InputKind::SecretText));
            inputs.push(InputField::new("temperature", InputKind::Slider));
            if self.duplicate {
                inputs.push(InputField::new("temperature", InputKind::Float));
            }
            inputs
        }
    }

    #[test]
    fn test_entry_from_component_filters_and_maps() {
        let entry =
            ProviderEntry::from_component(Arc::new(TestComponent { duplicate: false }), "")
                .unwrap();

        assert_eq!(entry.inputs.len(), 2);
        assert_eq!(entry.fields.len(), 2);
        assert!(entry.fields.contains_key("api_key"));
        assert_eq!(entry.field_names(), ["api_key", "temperature"]);
    }

    #[test]
    fn test_entry_prefix_applies_to_field_keys() {
        let entry =
            ProviderEntry::from_component(Arc::new(TestComponent { duplicate: false }), "test_")
                .unwrap();

        assert!(entry.fields.contains_key("test_api_key"));
        assert!(!entry.fields.contains_key("api_key"));
        // The descriptor keeps its unprefixed machine name.
        assert_eq!(entry.fields["test_api_key"].name, "api_key");
    }

    #[test]
    fn test_entry_rejects_duplicate_input_names() {
        let err = ProviderEntry::from_component(Arc::new(TestComponent { duplicate: true }), "")
            .unwrap_err();
        assert!(matches!(err, FlowforgeError::ComponentInit { .. }));
    }

    #[test]
    fn test_register_preserves_order_and_replaces_in_place() {
        let mut registry = ProviderRegistry::new();
        let entry = || {
            ProviderEntry::from_component(Arc::new(TestComponent { duplicate: false }), "")
                .unwrap()
        };
        registry.register("B", entry());
        registry.register("A", entry());
        registry.register("B", entry());

        assert_eq!(registry.providers(), ["B", "A"]);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_unknown_provider_resolves_to_none() {
        let registry = ProviderRegistry::with_builtin_providers();
        assert!(registry.get("unknown_provider").is_none());
        assert!(!registry.contains("unknown_provider"));
    }

    #[test]
    #[cfg(feature = "openai")]
    fn test_builtin_registry_contains_openai() {
        let registry = ProviderRegistry::with_builtin_providers();
        let entry = registry.get("OpenAI").unwrap();
        assert!(!entry.inputs.is_empty());
        assert!(entry.prefix.is_empty());
    }

    #[test]
    #[cfg(feature = "openai")]
    fn test_builtin_entries_scrub_secrets() {
        let registry = ProviderRegistry::with_builtin_providers();
        let entry = registry.get("OpenAI").unwrap();
        let api_key = entry.inputs.iter().find(|i| i.name == "api_key").unwrap();
        assert_eq!(api_key.value, serde_json::Value::Null);
        assert!(!api_key.load_from_db);
    }

    #[test]
    fn test_global_registry_is_stable() {
        let a: *const ProviderRegistry = global_registry();
        let b: *const ProviderRegistry = global_registry();
        assert_eq!(a, b);
    }
}
