use serde::Serialize;

/// A selectable interface language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    /// Short identifier, e.g. `zh-CN`
    pub code: &'static str,

    /// Name shown to the user, in the language itself
    pub display_name: &'static str,
}

const CATALOG: &[LanguageOption] = &[
    LanguageOption::new("en", "English"),
    LanguageOption::new("ja", "日本語"),
    LanguageOption::new("ko", "한국어"),
    LanguageOption::new("zh-CN", "简体中文"),
    LanguageOption::new("zh-TW", "繁體中文"),
];

/// Language used when nothing else is configured.
pub const DEFAULT_LANGUAGE: &str = "en";

impl LanguageOption {
    pub const fn new(code: &'static str, display_name: &'static str) -> Self {
        Self { code, display_name }
    }

    /// The built-in languages, in declaration order.
    pub fn catalog() -> Vec<LanguageOption> {
        CATALOG.to_vec()
    }

    /// Look up a catalog entry by its code.
    pub fn find(code: &str) -> Option<LanguageOption> {
        CATALOG.iter().find(|o| o.code == code).cloned()
    }
}
