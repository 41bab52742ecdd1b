use common::Language;
use serde::Serialize;

/// One entry of the supported language table.
#[derive(Serialize, utoipa::ToSchema)]
pub struct LanguageResponse {
    /// Key to send as `language` when running code.
    #[schema(example = "cpp")]
    pub key: &'static str,
    #[schema(example = "C++")]
    pub name: &'static str,
    /// Runtime identifier on the judge.
    #[schema(example = 54)]
    pub judge_id: u32,
}

impl From<Language> for LanguageResponse {
    fn from(language: Language) -> Self {
        Self {
            key: language.as_str(),
            name: language.display_name(),
            judge_id: language.judge_id(),
        }
    }
}
