use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TodoSubtasks::Table)
                    .if_not_exists()
                    .col(pk_auto(TodoSubtasks::Id))
                    .col(string_len(TodoSubtasks::Name, 255))
                    .col(boolean(TodoSubtasks::IsChecked).default(false))
                    .col(boolean(TodoSubtasks::IsDeleted).default(false))
                    .col(integer(TodoSubtasks::TodoTaskId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_todo_subtasks_todo_task_id")
                            .from(TodoSubtasks::Table, TodoSubtasks::TodoTaskId)
                            .to(TodoTasks::Table, TodoTasks::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todo_subtasks_todo_task_id")
                    .table(TodoSubtasks::Table)
                    .col(TodoSubtasks::TodoTaskId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_todo_subtasks_is_deleted")
                    .table(TodoSubtasks::Table)
                    .col(TodoSubtasks::IsDeleted)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TodoSubtasks::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum TodoSubtasks {
    Table,
    Id,
    Name,
    IsChecked,
    IsDeleted,
    TodoTaskId,
}

#[derive(DeriveIden)]
enum TodoTasks {
    Table,
    Id,
}
