use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoTasks::Table)
                    .if_not_exists()
                    .col(pk_auto(TodoTasks::Id))
                    .col(string_len(TodoTasks::Title, 100))
                    .col(string_len_null(TodoTasks::Description, 255))
                    .col(boolean(TodoTasks::IsDeleted).default(false))
                    .to_owned(),
            )
            .await?;

        // Every read path filters on is_deleted
        manager
            .create_index(
                Index::create()
                    .name("idx_todo_tasks_is_deleted")
                    .table(TodoTasks::Table)
                    .col(TodoTasks::IsDeleted)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoTasks::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TodoTasks {
    Table,
    Id,
    Title,
    Description,
    IsDeleted,
}
