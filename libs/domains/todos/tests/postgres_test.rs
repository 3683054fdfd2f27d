//! PostgreSQL integration tests for the Todos domain
//!
//! These tests run the real repositories against PostgreSQL via
//! testcontainers, with the schema applied by the migration crate.
//! They need a Docker daemon, so they are ignored by default:
//!
//! ```bash
//! cargo test -p domain_todos --test postgres_test -- --ignored
//! ```

use domain_todos::*;
use sea_orm::EntityTrait;
use test_utils::{TestDataBuilder, TestDatabase, assertions::assert_some};

async fn test_db() -> TestDatabase {
    TestDatabase::with_migrator::<migration::Migrator>().await
}

#[tokio::test]
#[ignore]
async fn test_task_crud_roundtrip() {
    let db = test_db().await;
    let repo = PgTodoTaskRepository::new(db.connection());
    let service = TodoTaskService::new(repo);
    let builder = TestDataBuilder::from_test_name("task_crud_roundtrip");

    let id = service
        .add_task(CreateTodoTask {
            title: builder.name("task", "main"),
            description: Some("weekly run".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(id, 1);

    let task = service.get_task(id).await.unwrap();
    assert_eq!(task.title, builder.name("task", "main"));
    assert_eq!(task.description.as_deref(), Some("weekly run"));

    service
        .update_task(UpdateTodoTask {
            id,
            title: "Chores".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let task = service.get_task(id).await.unwrap();
    assert_eq!(task.title, "Chores");
    assert_eq!(task.description, None);

    service.delete_task(id).await.unwrap();
    assert!(matches!(
        service.get_task(id).await,
        Err(TodoError::TaskNotFound(_))
    ));
}

#[tokio::test]
#[ignore]
async fn test_soft_deleted_row_stays_in_table() {
    let db = test_db().await;
    let repo = PgTodoTaskRepository::new(db.connection());
    let service = TodoTaskService::new(repo);

    let id = service
        .add_task(CreateTodoTask {
            title: "Doomed".to_string(),
            description: None,
        })
        .await
        .unwrap();
    service.delete_task(id).await.unwrap();

    // The live-filtered reads hide the row, but it is still physically there
    let raw = domain_todos::entity::todo_task::Entity::find_by_id(id)
        .one(&db.connection())
        .await
        .unwrap();
    let raw = assert_some(raw, "soft-deleted row should remain in the table");
    assert!(raw.is_deleted);
    assert_eq!(raw.title, "Doomed");
}

#[tokio::test]
#[ignore]
async fn test_subtask_flow_against_postgres() {
    let db = test_db().await;
    let tasks = TodoTaskService::new(PgTodoTaskRepository::new(db.connection()));
    let subtasks = TodoSubtaskService::new(PgTodoSubtaskRepository::new(db.connection()));

    let task_id = tasks
        .add_task(CreateTodoTask {
            title: "Groceries".to_string(),
            description: None,
        })
        .await
        .unwrap();

    let milk = subtasks
        .add_subtask(CreateTodoSubtask {
            name: "Milk".to_string(),
            todo_task_id: task_id,
        })
        .await
        .unwrap();
    let bread = subtasks
        .add_subtask(CreateTodoSubtask {
            name: "Bread".to_string(),
            todo_task_id: task_id,
        })
        .await
        .unwrap();

    assert!(subtasks.toggle_check_status(milk).await.unwrap());
    subtasks.delete_subtask(bread).await.unwrap();

    let loaded = tasks.get_task_with_subtasks(task_id).await.unwrap();
    assert_eq!(loaded.subtasks.len(), 1);
    assert_eq!(loaded.subtasks[0].name, "Milk");
    assert!(loaded.subtasks[0].is_checked);

    let for_task = subtasks.get_subtasks_by_task(task_id).await.unwrap();
    assert_eq!(for_task.len(), 1);
}
