//! Groq model component.

pub mod model_constants;

use flowforge_core::component::{ModelComponent, base_inputs};
use flowforge_core::inputs::{InputField, InputKind, RangeSpec};
use serde_json::json;

/// Component for Groq-hosted models.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroqModelComponent;

impl GroqModelComponent {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.groq.com/openai/v1";
    pub const DEFAULT_MODEL: &'static str = model_constants::llama::LLAMA_3_3_70B_VERSATILE;
}

impl ModelComponent for GroqModelComponent {
    fn display_name(&self) -> &str {
        "Groq"
    }

    fn description(&self) -> &str {
        "Generates text using Groq-hosted models with fast inference."
    }

    fn icon(&self) -> &str {
        "Groq"
    }

    fn inputs(&self) -> Vec<InputField> {
        let mut inputs = base_inputs();
        inputs.extend([
            InputField::new("max_tokens", InputKind::Int)
                .with_display_name("Max Output Tokens")
                .with_info("Maximum number of tokens to generate.")
                .advanced(),
            InputField::new("model_name", InputKind::Dropdown)
                .with_display_name("Model Name")
                .with_options(model_constants::chat_models())
                .with_value(json!(Self::DEFAULT_MODEL))
                .with_real_time_refresh(),
            InputField::new("base_url", InputKind::Text)
                .with_display_name("Groq API Base")
                .with_info("Base URL for the Groq OpenAI-compatible endpoint.")
                .with_value(json!(Self::DEFAULT_BASE_URL)),
            InputField::new("api_key", InputKind::SecretText)
                .with_display_name("Groq API Key")
                .with_info("Your Groq API key.")
                .required()
                .with_db_load(true)
                .with_real_time_refresh(),
            InputField::new("temperature", InputKind::Slider)
                .with_display_name("Temperature")
                .with_value(json!(0.1))
                .with_range(RangeSpec::new(0.0, 2.0, 0.01)),
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
    fn test_groq_declares_expected_inputs() {
        let inputs = GroqModelComponent.inputs();
        let names: Vec<_> = inputs.iter().map(|i| i.name.as_str()).collect();
        for name in ["api_key", "model_name", "base_url", "temperature"] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_groq_base_url_points_at_openai_compatible_endpoint() {
        let inputs = GroqModelComponent.inputs();
        let base_url = inputs.iter().find(|i| i.name == "base_url").unwrap();
        assert_eq!(base_url.value, json!("https://api.groq.com/openai/v1"));
    }
}
