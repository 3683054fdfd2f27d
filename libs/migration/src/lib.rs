pub use sea_orm_migration::prelude::*;

mod m20250810_000000_create_todo_tasks;
mod m20250810_000001_create_todo_subtasks;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000000_create_todo_tasks::Migration),
            Box::new(m20250810_000001_create_todo_subtasks::Migration),
        ]
    }
}
