use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Question: index on category for the per-category listing and quiz
        // candidate queries.
        manager
            .create_index(
                Index::create()
                    .name("idx_question_category")
                    .table(Question::Table)
                    .col(Question::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_question_category").table(Question::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Question { Table, Category }
