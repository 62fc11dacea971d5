//! Curated Ollama model tags.
//!
//! Ollama serves whatever the local daemon has pulled; this list is only a
//! starting point for the dropdown before the parent app refreshes it from
//! the daemon's tag listing.

/// Llama family
pub mod llama {
    pub const LLAMA_3_2: &str = "llama3.2:latest";
    pub const LLAMA_3_1: &str = "llama3.1:latest";

    pub const ALL: [&str; 2] = [LLAMA_3_2, LLAMA_3_1];
}

/// Mistral family
pub mod mistral {
    pub const MISTRAL: &str = "mistral:latest";

    pub const ALL: [&str; 1] = [MISTRAL];
}

/// Qwen family
pub mod qwen {
    pub const QWEN_2_5: &str = "qwen2.5:latest";

    pub const ALL: [&str; 1] = [QWEN_2_5];
}

/// Chat model tags offered in the model dropdown.
pub fn chat_models() -> Vec<&'static str> {
    let mut models = Vec::new();
    models.extend(llama::ALL);
    models.extend(mistral::ALL);
    models.extend(qwen::ALL);
    models
}

/// Every curated model tag for this provider.
pub fn all_models() -> Vec<&'static str> {
    chat_models()
}
