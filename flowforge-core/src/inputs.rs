//! Input descriptor types shared across provider components.
//!
//! Descriptors are plain data: the UI renders them as form fields and posts
//! edited values back through the parent application. Nothing here talks to
//! a provider; the descriptors only describe what the form looks like.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// UI field kind for a configurable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputKind {
    /// Single-line text field.
    Text,
    /// Multi-line text area.
    MultilineText,
    /// Masked text field; values are scrubbed before leaving the registry.
    SecretText,
    Int,
    Float,
    Bool,
    /// Numeric slider; pair with a [`RangeSpec`].
    Slider,
    /// Fixed choice list; pair with `options`.
    Dropdown,
    /// Free-form key/value map.
    Dict,
    /// Graph handle accepting upstream message outputs.
    Message,
}

impl InputKind {
    /// Secret kinds must never ship a stored value back to the client.
    pub const fn is_secret(self) -> bool {
        matches!(self, Self::SecretText)
    }
}

/// Numeric range metadata for slider inputs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl RangeSpec {
    pub const fn new(min: f64, max: f64, step: f64) -> Self {
        Self { min, max, step }
    }
}

impl Default for RangeSpec {
    fn default() -> Self {
        Self::new(0.0, 1.0, 0.1)
    }
}

/// One configurable field of a model component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputField {
    /// Machine name; the form field key.
    pub name: String,
    /// Human-readable label.
    #[serde(default)]
    pub display_name: String,
    /// Help text shown next to the field.
    #[serde(default)]
    pub info: String,
    pub kind: InputKind,
    /// Current or default value; `Null` when unset.
    #[serde(default)]
    pub value: Value,
    /// Choices for dropdown fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    /// Range metadata for slider fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub range: Option<RangeSpec>,
    #[serde(default)]
    pub required: bool,
    /// Advanced fields are collapsed behind the "advanced" toggle in the UI.
    #[serde(default)]
    pub advanced: bool,
    /// Edits to this field re-query the backend for dependent form updates.
    #[serde(default)]
    pub real_time_refresh: bool,
    /// Whether the value may be hydrated from the credential store.
    #[serde(default)]
    pub load_from_db: bool,
    /// Upstream output types that may connect to a message handle.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub input_types: Vec<String>,
}

impl InputField {
    /// New field with the given machine name and kind.
    ///
    /// The display name defaults to the machine name until overridden.
    pub fn new(name: impl Into<String>, kind: InputKind) -> Self {
        let name = name.into();
        Self {
            display_name: name.clone(),
            name,
            info: String::new(),
            kind,
            value: Value::Null,
            options: Vec::new(),
            range: None,
            required: false,
            advanced: false,
            real_time_refresh: false,
            load_from_db: false,
            input_types: Vec::new(),
        }
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = display_name.into();
        self
    }

    pub fn with_info(mut self, info: impl Into<String>) -> Self {
        self.info = info.into();
        self
    }

    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.value = value.into();
        self
    }

    pub fn with_options<I, S>(mut self, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options = options.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_range(mut self, range: RangeSpec) -> Self {
        self.range = Some(range);
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn advanced(mut self) -> Self {
        self.advanced = true;
        self
    }

    pub fn with_real_time_refresh(mut self) -> Self {
        self.real_time_refresh = true;
        self
    }

    pub fn with_db_load(mut self, enabled: bool) -> Self {
        self.load_from_db = enabled;
        self
    }

    pub fn with_input_types<I, S>(mut self, input_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.input_types = input_types.into_iter().map(Into::into).collect();
        self
    }

    pub fn is_secret(&self) -> bool {
        self.kind.is_secret()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_builder_defaults() {
        let field = InputField::new("temperature", InputKind::Slider);

        assert_eq!(field.name, "temperature");
        assert_eq!(field.display_name, "temperature");
        assert_eq!(field.value, Value::Null);
        assert!(!field.required);
        assert!(!field.advanced);
        assert!(!field.load_from_db);
        assert!(field.options.is_empty());
    }

    #[test]
    fn test_field_builder_chain() {
        let field = InputField::new("model_name", InputKind::Dropdown)
            .with_display_name("Model Name")
            .with_options(["a", "b"])
            .with_value(json!("a"))
            .with_real_time_refresh()
            .required();

        assert_eq!(field.display_name, "Model Name");
        assert_eq!(field.options, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(field.value, json!("a"));
        assert!(field.real_time_refresh);
        assert!(field.required);
    }

    #[test]
    fn test_secret_kind() {
        assert!(InputKind::SecretText.is_secret());
        assert!(!InputKind::Text.is_secret());

        let field = InputField::new("api_key", InputKind::SecretText);
        assert!(field.is_secret());
    }

    #[test]
    fn test_field_serialization_shape() {
        let field = InputField::new("temperature", InputKind::Slider)
            .with_value(json!(0.1))
            .with_range(RangeSpec::new(0.0, 2.0, 0.01));

        let value = serde_json::to_value(&field).unwrap();
        assert_eq!(value["kind"], json!("slider"));
        assert_eq!(value["range"]["max"], json!(2.0));
        // Empty collections stay off the wire.
        assert!(value.get("options").is_none());
        assert!(value.get("input_types").is_none());
    }

    #[test]
    fn test_field_roundtrip() {
        let field = InputField::new("api_key", InputKind::SecretText)
            .with_display_name("API Key")
            .required()
            .with_db_load(true);

        let encoded = serde_json::to_string(&field).unwrap();
        let decoded: InputField = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, field);
    }
}
