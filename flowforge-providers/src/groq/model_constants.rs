//! Curated Groq model ids, grouped by family.

/// Llama family
pub mod llama {
    pub const LLAMA_3_3_70B_VERSATILE: &str = "llama-3.3-70b-versatile";
    pub const LLAMA_3_1_8B_INSTANT: &str = "llama-3.1-8b-instant";

    pub const ALL: [&str; 2] = [LLAMA_3_3_70B_VERSATILE, LLAMA_3_1_8B_INSTANT];
}

/// Gemma family
pub mod gemma {
    pub const GEMMA2_9B_IT: &str = "gemma2-9b-it";

    pub const ALL: [&str; 1] = [GEMMA2_9B_IT];
}

/// Mixtral family
pub mod mixtral {
    pub const MIXTRAL_8X7B: &str = "mixtral-8x7b-32768";

    pub const ALL: [&str; 1] = [MIXTRAL_8X7B];
}

/// Chat model ids offered in the model dropdown.
pub fn chat_models() -> Vec<&'static str> {
    let mut models = Vec::new();
    models.extend(llama::ALL);
    models.extend(gemma::ALL);
    models.extend(mixtral::ALL);
    models
}

/// Every curated model id for this provider.
pub fn all_models() -> Vec<&'static str> {
    chat_models()
}
