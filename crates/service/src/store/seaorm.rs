use sea_orm::sea_query::{extension::postgres::PgExpr, Expr};
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::{Category, NewQuestion, Question};
use crate::store::{StoreError, TriviaStore};

/// SeaORM-backed store over the shared connection pool.
#[derive(Clone)]
pub struct SeaOrmStore {
    pub db: DatabaseConnection,
}

impl SeaOrmStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn category_view(m: models::category::Model) -> Category {
    Category { id: m.id, kind: m.kind }
}

fn question_view(m: models::question::Model) -> Question {
    Question {
        id: m.id,
        question: m.question,
        answer: m.answer,
        difficulty: m.difficulty,
        category: m.category,
    }
}

#[async_trait::async_trait]
impl TriviaStore for SeaOrmStore {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
        let rows = models::category::Entity::find()
            .order_by_asc(models::category::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(rows.into_iter().map(category_view).collect())
    }

    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
        let row = models::category::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(row.map(category_view))
    }

    async fn insert_category(&self, kind: &str) -> Result<Category, StoreError> {
        let created = models::category::create(&self.db, kind)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(category_view(created))
    }

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
        let rows = models::question::Entity::find()
            .order_by_asc(models::question::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(rows.into_iter().map(question_view).collect())
    }

    async fn list_questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError> {
        let rows = models::question::Entity::find()
            .filter(models::question::Column::Category.eq(category))
            .order_by_asc(models::question::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(rows.into_iter().map(question_view).collect())
    }

    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        // ILIKE with the raw term embedded in the pattern; % and _ in the
        // term act as wildcards, same as the established behavior.
        let pattern = format!("%{}%", term);
        let rows = models::question::Entity::find()
            .filter(
                Expr::col((models::question::Entity, models::question::Column::Question))
                    .ilike(pattern),
            )
            .order_by_asc(models::question::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(rows.into_iter().map(question_view).collect())
    }

    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
        let row = models::question::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(row.map(question_view))
    }

    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
        let created = models::question::create(
            &self.db,
            &new.question,
            &new.answer,
            new.difficulty,
            new.category,
        )
        .await
        .map_err(|e| StoreError(e.to_string()))?;
        Ok(question_view(created))
    }

    async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
        models::question::hard_delete(&self.db, id)
            .await
            .map_err(|e| StoreError(e.to_string()))?;
        Ok(())
    }
}
