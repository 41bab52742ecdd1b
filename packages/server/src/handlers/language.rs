use axum::Json;
use common::Language;

use crate::models::language::LanguageResponse;

#[utoipa::path(
    get,
    path = "/",
    tag = "Languages",
    operation_id = "listLanguages",
    summary = "List supported languages",
    description = "Returns the fixed table of languages accepted by `runCode`, with the judge runtime each maps to.",
    responses(
        (status = 200, description = "Supported languages", body = Vec<LanguageResponse>),
    ),
)]
pub async fn list_languages() -> Json<Vec<LanguageResponse>> {
    Json(Language::ALL.iter().copied().map(LanguageResponse::from).collect())
}
