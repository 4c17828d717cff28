use sea_orm::{entity::prelude::*, Set, DatabaseConnection};
use serde::{Deserialize, Serialize};

use crate::category;
use crate::errors;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "question")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: i32,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Category }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Category => Entity::belongs_to(category::Entity)
                .from(Column::Category)
                .to(category::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a question. Text fields are stored as given; the established
/// clients send empty strings and the table accepts them.
pub async fn create(
    db: &DatabaseConnection,
    question: &str,
    answer: &str,
    difficulty: i32,
    category: i32,
) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        question: Set(question.to_string()),
        answer: Set(answer.to_string()),
        difficulty: Set(difficulty),
        category: Set(category),
        ..Default::default()
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

pub async fn hard_delete(db: &DatabaseConnection, id: i32) -> Result<(), errors::ModelError> {
    Entity::delete_by_id(id)
        .exec(db)
        .await
        .map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(())
}
