//! Curated OpenAI model ids, grouped by family.

/// GPT-4o family
pub mod gpt_4o {
    pub const GPT_4O: &str = "gpt-4o";
    pub const GPT_4O_MINI: &str = "gpt-4o-mini";

    pub const ALL: [&str; 2] = [GPT_4O, GPT_4O_MINI];
}

/// GPT-4.1 family
pub mod gpt_4_1 {
    pub const GPT_4_1: &str = "gpt-4.1";
    pub const GPT_4_1_MINI: &str = "gpt-4.1-mini";
    pub const GPT_4_1_NANO: &str = "gpt-4.1-nano";

    pub const ALL: [&str; 3] = [GPT_4_1, GPT_4_1_MINI, GPT_4_1_NANO];
}

/// o-series reasoning models
pub mod o_series {
    pub const O3: &str = "o3";
    pub const O3_MINI: &str = "o3-mini";
    pub const O4_MINI: &str = "o4-mini";

    pub const ALL: [&str; 3] = [O3, O3_MINI, O4_MINI];
}

/// GPT-3.5 family (legacy)
pub mod gpt_3_5 {
    pub const GPT_3_5_TURBO: &str = "gpt-3.5-turbo";

    pub const ALL: [&str; 1] = [GPT_3_5_TURBO];
}

/// Chat model ids offered in the model dropdown.
pub fn chat_models() -> Vec<&'static str> {
    let mut models = Vec::new();
    models.extend(gpt_4o::ALL);
    models.extend(gpt_4_1::ALL);
    models.extend(o_series::ALL);
    models.extend(gpt_3_5::ALL);
    models
}

/// Every curated model id for this provider.
pub fn all_models() -> Vec<&'static str> {
    chat_models()
}
