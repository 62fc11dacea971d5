//! Ollama model component.

pub mod model_constants;

use flowforge_core::component::{ModelComponent, base_inputs};
use flowforge_core::inputs::{InputField, InputKind, RangeSpec};
use serde_json::json;

/// Component for local Ollama models.
///
/// Ollama authenticates nothing, so there is no api key field; the daemon
/// address is the whole configuration surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct OllamaModelComponent;

impl OllamaModelComponent {
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:11434";
}

impl ModelComponent for OllamaModelComponent {
    fn display_name(&self) -> &str {
        "Ollama"
    }

    fn description(&self) -> &str {
        "Generates text using local Ollama models."
    }

    fn icon(&self) -> &str {
        "Ollama"
    }

    fn inputs(&self) -> Vec<InputField> {
        let mut inputs = base_inputs();
        inputs.extend([
            InputField::new("base_url", InputKind::Text)
                .with_display_name("Base URL")
                .with_info("Endpoint of the Ollama daemon.")
                .with_value(json!(Self::DEFAULT_BASE_URL))
                .with_real_time_refresh(),
            InputField::new("model_name", InputKind::Dropdown)
                .with_display_name("Model Name")
                .with_info("Model tags are refreshed from the daemon once it is reachable.")
                .with_options(model_constants::chat_models())
                .with_real_time_refresh(),
            InputField::new("temperature", InputKind::Slider)
                .with_display_name("Temperature")
                .with_value(json!(0.1))
                .with_range(RangeSpec::new(0.0, 1.0, 0.01)),
            InputField::new("format", InputKind::Dropdown)
                .with_display_name("Format")
                .with_info("Constrain the output format; only JSON is supported by the daemon.")
                .with_options(["", "json"])
                .advanced(),
            InputField::new("tool_model_enabled", InputKind::Bool)
                .with_display_name("Enable Tool Models")
                .with_info("Only offer models that support tool calling.")
                .with_value(json!(true))
                .with_real_time_refresh(),
        ]);
        inputs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ollama_has_no_api_key() {
        let inputs = OllamaModelComponent.inputs();
        assert!(inputs.iter().all(|i| i.name != "api_key"));
        assert!(inputs.iter().all(|i| !i.is_secret()));
    }

    #[test]
    fn test_ollama_base_url_refreshes_the_form() {
        let inputs = OllamaModelComponent.inputs();
        let base_url = inputs.iter().find(|i| i.name == "base_url").unwrap();
        assert!(base_url.real_time_refresh);
        assert_eq!(base_url.value, json!("http://localhost:11434"));
    }
}
