//! Anthropic model component.

pub mod model_constants;

use flowforge_core::component::{ModelComponent, base_inputs};
use flowforge_core::inputs::{InputField, InputKind, RangeSpec};
use serde_json::json;

/// Component for Anthropic Claude models.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnthropicModelComponent;

impl AnthropicModelComponent {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.anthropic.com";
    pub const DEFAULT_MODEL: &'static str = model_constants::claude_sonnet_4::CLAUDE_SONNET_4;
}

impl ModelComponent for AnthropicModelComponent {
    fn display_name(&self) -> &str {
        "Anthropic"
    }

    fn description(&self) -> &str {
        "Generates text using Anthropic Claude models."
    }

    fn icon(&self) -> &str {
        "Anthropic"
    }

    fn inputs(&self) -> Vec<InputField> {
        let mut inputs = base_inputs();
        inputs.extend([
            InputField::new("max_tokens", InputKind::Int)
                .with_display_name("Max Tokens")
                .with_info("Maximum number of tokens to generate.")
                .with_value(json!(4096))
                .advanced(),
            InputField::new("model_name", InputKind::Dropdown)
                .with_display_name("Model Name")
                .with_options(model_constants::chat_models())
                .with_value(json!(Self::DEFAULT_MODEL))
                .with_real_time_refresh(),
            InputField::new("base_url", InputKind::Text)
                .with_display_name("Anthropic API URL")
                .with_info("Endpoint of the Anthropic API. Leave as the default unless requests go through a proxy.")
                .with_value(json!(Self::DEFAULT_BASE_URL)),
            InputField::new("api_key", InputKind::SecretText)
                .with_display_name("Anthropic API Key")
                .with_info("Your Anthropic API key.")
                .required()
                .with_db_load(true)
                .with_real_time_refresh(),
            InputField::new("temperature", InputKind::Slider)
                .with_display_name("Temperature")
                .with_value(json!(0.1))
                .with_range(RangeSpec::new(0.0, 1.0, 0.01)),
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
    fn test_anthropic_declares_expected_inputs() {
        let inputs = AnthropicModelComponent.inputs();
        let names: Vec<_> = inputs.iter().map(|i| i.name.as_str()).collect();
        for name in ["api_key", "model_name", "base_url", "temperature", "max_tokens"] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_anthropic_default_model_is_in_dropdown() {
        let inputs = AnthropicModelComponent.inputs();
        let model_name = inputs.iter().find(|i| i.name == "model_name").unwrap();
        assert!(
            model_name
                .options
                .iter()
                .any(|m| m == AnthropicModelComponent::DEFAULT_MODEL)
        );
    }
}
