//! Question entity for SeaORM.
//!
//! Tags are stored space-separated; the write guard forbids whitespace
//! inside a tag, so the encoding is lossless.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use overflow_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub tags: String,
    pub asked_by: String,
    pub ask_date_time: DateTimeWithTimeZone,
    pub views: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::answer::Entity")]
    Answer,
}

impl Related<super::answer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for overflow_core::domain::Question {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            title: model.title,
            text: model.text,
            tags: model.tags.split_whitespace().map(String::from).collect(),
            asked_by: model.asked_by,
            ask_date_time: model.ask_date_time.into(),
            views: model.views,
        })
    }
}

impl From<overflow_core::domain::Question> for ActiveModel {
    fn from(question: overflow_core::domain::Question) -> Self {
        Self {
            id: Set(question.id),
            title: Set(question.title),
            text: Set(question.text),
            tags: Set(question.tags.join(" ")),
            asked_by: Set(question.asked_by),
            ask_date_time: Set(question.ask_date_time.into()),
            views: Set(question.views),
        }
    }
}
