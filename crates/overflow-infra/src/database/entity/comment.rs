//! Comment entity for SeaORM.
//!
//! A comment belongs to either a question or an answer, so the parent is
//! stored as a kind discriminator plus id rather than a foreign key.

use sea_orm::Set;
use sea_orm::entity::prelude::*;

use overflow_core::domain::CommentParent;
use overflow_core::error::RepoError;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "comments")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub parent_kind: String,
    pub parent_id: Uuid,
    #[sea_orm(column_type = "Text")]
    pub text: String,
    pub comment_by: String,
    pub comment_date_time: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl TryFrom<Model> for overflow_core::domain::Comment {
    type Error = RepoError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let parent = CommentParent::from_parts(&model.parent_kind, model.parent_id).ok_or_else(
            || RepoError::Query(format!("unknown comment parent kind '{}'", model.parent_kind)),
        )?;
        Ok(Self {
            id: model.id,
            parent,
            text: model.text,
            comment_by: model.comment_by,
            comment_date_time: model.comment_date_time.into(),
        })
    }
}

impl From<overflow_core::domain::Comment> for ActiveModel {
    fn from(comment: overflow_core::domain::Comment) -> Self {
        Self {
            id: Set(comment.id),
            parent_kind: Set(comment.parent.kind().to_string()),
            parent_id: Set(comment.parent.id()),
            text: Set(comment.text),
            comment_by: Set(comment.comment_by),
            comment_date_time: Set(comment.comment_date_time.into()),
        }
    }
}
