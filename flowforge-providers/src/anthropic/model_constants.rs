//! Curated Anthropic model ids, grouped by family.

/// Claude Opus 4.1 (flagship)
pub mod claude_opus_4_1 {
    pub const CLAUDE_OPUS_4_1: &str = "claude-opus-4-1-20250805";

    pub const ALL: [&str; 1] = [CLAUDE_OPUS_4_1];
}

/// Claude Opus 4
pub mod claude_opus_4 {
    pub const CLAUDE_OPUS_4: &str = "claude-opus-4-20250514";

    pub const ALL: [&str; 1] = [CLAUDE_OPUS_4];
}

/// Claude Sonnet 4
pub mod claude_sonnet_4 {
    pub const CLAUDE_SONNET_4: &str = "claude-sonnet-4-20250514";

    pub const ALL: [&str; 1] = [CLAUDE_SONNET_4];
}

/// Claude Sonnet 3.7
pub mod claude_sonnet_3_7 {
    pub const CLAUDE_SONNET_3_7: &str = "claude-3-7-sonnet-20250219";

    pub const ALL: [&str; 1] = [CLAUDE_SONNET_3_7];
}

/// Claude Haiku 3.5
pub mod claude_haiku_3_5 {
    pub const CLAUDE_HAIKU_3_5: &str = "claude-3-5-haiku-20241022";

    pub const ALL: [&str; 1] = [CLAUDE_HAIKU_3_5];
}

/// Chat model ids offered in the model dropdown.
pub fn chat_models() -> Vec<&'static str> {
    let mut models = Vec::new();
    models.extend(claude_opus_4_1::ALL);
    models.extend(claude_opus_4::ALL);
    models.extend(claude_sonnet_4::ALL);
    models.extend(claude_sonnet_3_7::ALL);
    models.extend(claude_haiku_3_5::ALL);
    models
}

/// Every curated model id for this provider.
pub fn all_models() -> Vec<&'static str> {
    chat_models()
}
