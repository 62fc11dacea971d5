//! OpenAI model component.

pub mod model_constants;

use flowforge_core::component::{ModelComponent, base_inputs};
use flowforge_core::inputs::{InputField, InputKind, RangeSpec};
use serde_json::json;

/// Component for OpenAI chat models.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAiModelComponent;

impl OpenAiModelComponent {
    pub const DEFAULT_BASE_URL: &'static str = "https://api.openai.com/v1";
    pub const DEFAULT_MODEL: &'static str = model_constants::gpt_4o::GPT_4O_MINI;
}

impl ModelComponent for OpenAiModelComponent {
    fn display_name(&self) -> &str {
        "OpenAI"
    }

    fn description(&self) -> &str {
        "Generates text using OpenAI chat models."
    }

    fn icon(&self) -> &str {
        "OpenAI"
    }

    fn inputs(&self) -> Vec<InputField> {
        let mut inputs = base_inputs();
        inputs.extend([
            InputField::new("max_tokens", InputKind::Int)
                .with_display_name("Max Tokens")
                .with_info("Maximum number of tokens to generate. Set to 0 for unlimited.")
                .advanced(),
            InputField::new("model_kwargs", InputKind::Dict)
                .with_display_name("Model Kwargs")
                .with_info("Additional keyword arguments passed to the model.")
                .advanced(),
            InputField::new("json_mode", InputKind::Bool)
                .with_display_name("JSON Mode")
                .with_info("Constrain the model output to valid JSON.")
                .with_value(false)
                .advanced(),
            InputField::new("model_name", InputKind::Dropdown)
                .with_display_name("Model Name")
                .with_options(model_constants::chat_models())
                .with_value(json!(Self::DEFAULT_MODEL))
                .with_real_time_refresh(),
            InputField::new("base_url", InputKind::Text)
                .with_display_name("OpenAI API Base")
                .with_info("Base URL for API requests. Leave as the default unless requests go through a proxy.")
                .with_value(json!(Self::DEFAULT_BASE_URL)),
            InputField::new("api_key", InputKind::SecretText)
                .with_display_name("OpenAI API Key")
                .with_info("The OpenAI API key to use for authentication.")
                .required()
                .with_db_load(true)
                .with_real_time_refresh(),
            InputField::new("temperature", InputKind::Slider)
                .with_display_name("Temperature")
                .with_value(json!(0.1))
                .with_range(RangeSpec::new(0.0, 2.0, 0.01)),
            InputField::new("seed", InputKind::Int)
                .with_display_name("Seed")
                .with_info("Controls reproducibility of the run.")
                .with_value(json!(1))
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
    fn test_openai_declares_base_and_own_inputs() {
        let inputs = OpenAiModelComponent.inputs();
        let names: Vec<_> = inputs.iter().map(|i| i.name.as_str()).collect();

        // Base inputs come first.
        assert_eq!(&names[..3], &["input_value", "system_message", "stream"]);
        for name in ["api_key", "model_name", "temperature", "tool_model_enabled"] {
            assert!(names.contains(&name), "missing {name}");
        }
    }

    #[test]
    fn test_openai_api_key_is_secret_and_required() {
        let inputs = OpenAiModelComponent.inputs();
        let api_key = inputs.iter().find(|i| i.name == "api_key").unwrap();
        assert!(api_key.is_secret());
        assert!(api_key.required);
        assert!(api_key.load_from_db);
    }

    #[test]
    fn test_openai_model_dropdown_uses_curated_chat_models() {
        let inputs = OpenAiModelComponent.inputs();
        let model_name = inputs.iter().find(|i| i.name == "model_name").unwrap();
        assert_eq!(model_name.options.len(), model_constants::chat_models().len());
        assert!(model_name.options.iter().any(|m| m == "gpt-4o"));
    }
}
