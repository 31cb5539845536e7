//! Answer entity for SeaORM.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use overflow_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub question_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub ans_by: String,
    pub ans_date_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::question::Entity",
        from = "Column::QuestionId",
        to = "super::question::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Question,
}

impl Related<super::question::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for overflow_core::domain::Answer {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: model.id,
            question_id: model.question_id,
            text: model.text,
            ans_by: model.ans_by,
            ans_date_time: model.ans_date_time.into(),
        })
    }
}

impl From<overflow_core::domain::Answer> for ActiveModel {
    fn from(answer: overflow_core::domain::Answer) -> Self {
        Self {
            id: Set(answer.id),
            question_id: Set(answer.question_id),
            text: Set(answer.text),
            ans_by: Set(answer.ans_by),
            ans_date_time: Set(answer.ans_date_time.into()),
        }
    }
}
