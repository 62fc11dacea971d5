//! Curated Google Gemini model ids, grouped by family.

/// Gemini 2.5 family
pub mod gemini_2_5 {
    pub const GEMINI_2_5_PRO: &str = "gemini-2.5-pro";
    pub const GEMINI_2_5_FLASH: &str = "gemini-2.5-flash";
    pub const GEMINI_2_5_FLASH_LITE: &str = "gemini-2.5-flash-lite";

    pub const ALL: [&str; 3] = [GEMINI_2_5_PRO, GEMINI_2_5_FLASH, GEMINI_2_5_FLASH_LITE];
}

/// Gemini 2.0 family
pub mod gemini_2_0 {
    pub const GEMINI_2_0_FLASH: &str = "gemini-2.0-flash";
    pub const GEMINI_2_0_FLASH_LITE: &str = "gemini-2.0-flash-lite";

    pub const ALL: [&str; 2] = [GEMINI_2_0_FLASH, GEMINI_2_0_FLASH_LITE];
}

/// Chat model ids offered in the model dropdown.
pub fn chat_models() -> Vec<&'static str> {
    let mut models = Vec::new();
    models.extend(gemini_2_5::ALL);
    models.extend(gemini_2_0::ALL);
    models
}

/// Every curated model id for this provider.
pub fn all_models() -> Vec<&'static str> {
    chat_models()
}
