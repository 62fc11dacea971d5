//! Filtering and post-processing of component inputs before they reach the UI.

use std::collections::HashMap;

use serde_json::Value;

use crate::component::{ModelComponent, base_input_names};
use crate::inputs::InputField;

/// Field names demoted to advanced in every provider form.
const ALWAYS_ADVANCED_FIELDS: [&str; 3] = ["temperature", "tool_model_enabled", "base_url"];

/// Provider-specific inputs of `component`: shared base inputs removed, each
/// survivor post-processed through [`process_input`]. Declaration order is
/// preserved.
pub fn filtered_inputs(component: &dyn ModelComponent) -> Vec<InputField> {
    let base_names = base_input_names();
    component
        .inputs()
        .into_iter()
        .filter(|input| !base_names.contains(input.name.as_str()))
        .map(process_input)
        .collect()
}

/// Post-process a single provider input for display.
///
/// Secret fields must never ship a stored value back to the client: the
/// value is cleared and credential-store lookup disabled. A fixed set of
/// common tuning fields is collapsed behind the advanced toggle.
pub fn process_input(mut input: InputField) -> InputField {
    if input.is_secret() {
        input.value = Value::Null;
        input.load_from_db = false;
    } else if ALWAYS_ADVANCED_FIELDS.contains(&input.name.as_str()) {
        input.advanced = true;
    }
    input
}

/// Key `inputs` by `{prefix}{name}` for form-field lookup.
pub fn input_fields_map(inputs: &[InputField], prefix: &str) -> HashMap<String, InputField> {
    inputs
        .iter()
        .map(|input| (format!("{prefix}{}", input.name), input.clone()))
        .collect()
}
