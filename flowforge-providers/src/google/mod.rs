//! Google Gemini model component.

pub mod model_constants;

use flowforge_core::component::{ModelComponent, base_inputs};
use flowforge_core::inputs::{InputField, InputKind, RangeSpec};
use serde_json::json;

/// Component for Google Gemini models.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeminiModelComponent;

impl GeminiModelComponent {
    pub const DEFAULT_MODEL: &'static str = model_constants::gemini_2_5::GEMINI_2_5_FLASH;
}

impl ModelComponent for GeminiModelComponent {
    fn display_name(&self) -> &str {
        "Google Gemini"
    }

    fn description(&self) -> &str {
        "Generates text using Google Gemini models."
    }

    fn icon(&self) -> &str {
        "GoogleGenerativeAI"
    }

    fn inputs(&self) -> Vec<InputField> {
        let mut inputs = base_inputs();
        inputs.extend([
            InputField::new("max_output_tokens", InputKind::Int)
                .with_display_name("Max Output Tokens")
                .with_info("Maximum number of tokens to generate.")
                .advanced(),
            InputField::new("model_name", InputKind::Dropdown)
                .with_display_name("Model Name")
                .with_options(model_constants::chat_models())
                .with_value(json!(Self::DEFAULT_MODEL))
                .with_real_time_refresh(),
            InputField::new("api_key", InputKind::SecretText)
                .with_display_name("Google API Key")
                .with_info("Your Google API key for the Gemini API.")
                .required()
                .with_db_load(true)
                .with_real_time_refresh(),
            InputField::new("temperature", InputKind::Slider)
                .with_display_name("Temperature")
                .with_value(json!(0.1))
                .with_range(RangeSpec::new(0.0, 2.0, 0.05)),
            InputField::new("top_k", InputKind::Int)
                .with_display_name("Top K")
                .with_info("Sample from the k most likely next tokens at each step.")
                .advanced(),
            InputField::new("top_p", InputKind::Float)
                .with_display_name("Top P")
                .with_info("Cumulative probability cutoff for token sampling.")
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
