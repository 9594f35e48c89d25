use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Lifecycle of a pull request. `Merged` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum PrStatus {
    #[sea_orm(string_value = "OPEN")]
    #[serde(rename = "OPEN")]
    Open,
    #[sea_orm(string_value = "MERGED")]
    #[serde(rename = "MERGED")]
    Merged,
}

#[derive(Debug, Clone, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "prs")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub title: String,
    pub author_id: String,
    pub team_name: String,            // author's team when the PR was opened
    pub status: PrStatus,
    pub created_at: DateTimeUtc,
    pub merged_at: Option<DateTimeUtc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorId",
        to   = "super::user::Column::Id"
    )]
    Author,
    #[sea_orm(has_many = "super::pr_reviewer::Entity")]
    Reviewers,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Author.def()
    }
}

impl Related<super::pr_reviewer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reviewers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
