//! Data store abstraction for trivia records.
//!
//! Handlers never touch the database directly; they go through a
//! `TriviaStore`, with a SeaORM implementation for production and an
//! in-memory mock for tests and doc examples.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Category, NewQuestion, Question};

pub mod seaorm;

/// Persistence failure reported by a store backend.
#[derive(Debug, Error)]
#[error("store error: {0}")]
pub struct StoreError(pub String);

/// Record storage for questions and categories.
///
/// Listing methods return rows ordered by ascending id, fully materialized;
/// windowing happens in the callers.
#[async_trait]
pub trait TriviaStore: Send + Sync {
    async fn list_categories(&self) -> Result<Vec<Category>, StoreError>;
    async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError>;
    async fn insert_category(&self, kind: &str) -> Result<Category, StoreError>;

    async fn list_questions(&self) -> Result<Vec<Question>, StoreError>;
    async fn list_questions_in_category(&self, category: i32) -> Result<Vec<Question>, StoreError>;
    /// Case-insensitive substring match on the question text.
    async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError>;
    async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError>;
    async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError>;
    async fn delete_question(&self, id: i32) -> Result<(), StoreError>;
}

/// Simple in-memory store for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::Mutex;

    pub struct MemoryStore {
        inner: Mutex<Tables>,
    }

    struct Tables {
        categories: Vec<Category>,
        questions: Vec<Question>,
        next_category: i32,
        next_question: i32,
    }

    impl Default for MemoryStore {
        fn default() -> Self {
            Self {
                inner: Mutex::new(Tables {
                    categories: Vec::new(),
                    questions: Vec::new(),
                    next_category: 1,
                    next_question: 1,
                }),
            }
        }
    }

    #[async_trait]
    impl TriviaStore for MemoryStore {
        async fn list_categories(&self) -> Result<Vec<Category>, StoreError> {
            let tables = self.inner.lock().unwrap();
            Ok(tables.categories.clone())
        }

        async fn find_category(&self, id: i32) -> Result<Option<Category>, StoreError> {
            let tables = self.inner.lock().unwrap();
            Ok(tables.categories.iter().find(|c| c.id == id).cloned())
        }

        async fn insert_category(&self, kind: &str) -> Result<Category, StoreError> {
            let mut tables = self.inner.lock().unwrap();
            let id = tables.next_category;
            tables.next_category += 1;
            let category = Category { id, kind: kind.to_string() };
            tables.categories.push(category.clone());
            Ok(category)
        }

        async fn list_questions(&self) -> Result<Vec<Question>, StoreError> {
            let tables = self.inner.lock().unwrap();
            Ok(tables.questions.clone())
        }

        async fn list_questions_in_category(
            &self,
            category: i32,
        ) -> Result<Vec<Question>, StoreError> {
            let tables = self.inner.lock().unwrap();
            Ok(tables.questions.iter().filter(|q| q.category == category).cloned().collect())
        }

        async fn search_questions(&self, term: &str) -> Result<Vec<Question>, StoreError> {
            let tables = self.inner.lock().unwrap();
            let needle = term.to_lowercase();
            Ok(tables
                .questions
                .iter()
                .filter(|q| q.question.to_lowercase().contains(&needle))
                .cloned()
                .collect())
        }

        async fn find_question(&self, id: i32) -> Result<Option<Question>, StoreError> {
            let tables = self.inner.lock().unwrap();
            Ok(tables.questions.iter().find(|q| q.id == id).cloned())
        }

        async fn insert_question(&self, new: NewQuestion) -> Result<Question, StoreError> {
            let mut tables = self.inner.lock().unwrap();
            let id = tables.next_question;
            tables.next_question += 1;
            let question = Question {
                id,
                question: new.question,
                answer: new.answer,
                difficulty: new.difficulty,
                category: new.category,
            };
            // Ids are handed out in order, so push keeps the list id-sorted.
            tables.questions.push(question.clone());
            Ok(question)
        }

        async fn delete_question(&self, id: i32) -> Result<(), StoreError> {
            let mut tables = self.inner.lock().unwrap();
            tables.questions.retain(|q| q.id != id);
            Ok(())
        }
    }

}
