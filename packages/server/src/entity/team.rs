use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "team")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub name: String,
    #[sea_orm(indexed)]
    pub hackathon_id: Uuid,
    #[sea_orm(belongs_to, from = "hackathon_id", to = "id")]
    pub hackathon: HasOne<super::hackathon::Entity>,

    /// JSON array of challenge ids.
    #[sea_orm(column_type = "JsonBinary")]
    pub completed_challenges: serde_json::Value,
    /// JSON array of challenge ids.
    #[sea_orm(column_type = "JsonBinary")]
    pub solved_flags: serde_json::Value,

    pub total_score: i64,
    pub flag_submitted: bool,
    pub buildathon_unlocked: bool,
    pub github_link: Option<String>,

    #[sea_orm(has_many)]
    pub code_submissions: HasMany<super::code_submission::Entity>,
    #[sea_orm(has_many)]
    pub flag_submissions: HasMany<super::flag_submission::Entity>,

    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}
