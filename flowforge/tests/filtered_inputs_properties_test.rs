//! Properties every registered provider's filtered inputs must hold.

use flowforge::{base_input_names, global_registry};
use serde_json::Value;

#[test]
fn no_entry_exposes_base_inputs() {
    let base = base_input_names();
    for (name, entry) in global_registry().entries() {
        for input in &entry.inputs {
            assert!(
                !base.contains(&input.name),
                "{name} leaked base input {}",
                input.name
            );
        }
    }
}

#[test]
fn every_secret_input_is_scrubbed() {
    for (name, entry) in global_registry().entries() {
        for input in entry.inputs.iter().filter(|i| i.is_secret()) {
            assert_eq!(
                input.value,
                Value::Null,
                "{name} ships a stored secret in {}",
                input.name
            );
            assert!(
                !input.load_from_db,
                "{name} leaves store lookup on for {}",
                input.name
            );
        }
    }
}

#[test]
fn common_tuning_fields_are_advanced() {
    for (name, entry) in global_registry().entries() {
        for input in &entry.inputs {
            if ["temperature", "tool_model_enabled", "base_url"].contains(&input.name.as_str()) {
                assert!(input.advanced, "{name}.{} should be advanced", input.name);
            }
        }
    }
}

#[test]
fn components_still_declare_their_full_input_set() {
    // Filtering happens at registration; the component itself keeps base
    // inputs so the node can render its shared fields.
    let base = base_input_names();
    for (name, entry) in global_registry().entries() {
        let declared = entry.component.inputs();
        for base_name in &base {
            assert!(
                declared.iter().any(|i| &i.name == base_name),
                "{name} component dropped base input {base_name}"
            );
        }
        assert_eq!(
            declared.len(),
            entry.inputs.len() + base.len(),
            "{name} declared set should be filtered set plus base inputs"
        );
    }
}

#[test]
#[cfg(feature = "ollama")]
fn ollama_registers_without_credentials() {
    let entry = global_registry().get("Ollama").unwrap();
    assert!(entry.inputs.iter().all(|i| !i.is_secret()));
}
