//! The model component trait and the shared base inputs.

use std::collections::HashSet;

use crate::inputs::{InputField, InputKind};

/// A selectable model provider component.
///
/// Implementations declare their full input set, shared base inputs
/// included; the registry filters out the base inputs and post-processes the
/// provider-specific remainder for the UI (see [`crate::filter`]).
pub trait ModelComponent: Send + Sync {
    /// Display name shown in the provider dropdown (also the registry key).
    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    /// Icon identifier for the UI.
    fn icon(&self) -> &str;

    /// Declared inputs in declaration order, base inputs first.
    fn inputs(&self) -> Vec<InputField>;
}

/// Shared inputs declared by every model component.
///
/// These render on the node itself rather than in the provider form, so the
/// registry strips them from provider field sets.
pub fn base_inputs() -> Vec<InputField> {
    vec![
        InputField::new("input_value", InputKind::Message)
            .with_display_name("Input")
            .with_input_types(["Message"]),
        InputField::new("system_message", InputKind::MultilineText)
            .with_display_name("System Message")
            .with_info("A system message that helps set the behavior of the model."),
        InputField::new("stream", InputKind::Bool)
            .with_display_name("Stream")
            .with_info("Stream the response from the model.")
            .with_value(false)
            .advanced(),
    ]
}

/// Names of the shared base inputs; the filter set for provider forms.
pub fn base_input_names() -> HashSet<String> {
    base_inputs().into_iter().map(|input| input.name).collect()
}
