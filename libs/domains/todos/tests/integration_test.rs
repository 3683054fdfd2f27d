//! Integration tests for the Todos domain
//!
//! These tests exercise the service and repository layers together over the
//! in-memory store:
//! - Soft deletion hides rows from every read path
//! - Not-found mapping for missing and deleted ids
//! - Toggle semantics
//! - Concurrent creates get unique ids

use domain_todos::*;

fn task_service() -> TodoTaskService<InMemoryTodoTaskRepository> {
    TodoTaskService::new(InMemoryTodoTaskRepository::new(InMemoryTodoStore::new()))
}

fn subtask_service() -> TodoSubtaskService<InMemoryTodoSubtaskRepository> {
    TodoSubtaskService::new(InMemoryTodoSubtaskRepository::new(InMemoryTodoStore::new()))
}

fn create_task(title: &str) -> CreateTodoTask {
    CreateTodoTask {
        title: title.to_string(),
        description: None,
    }
}

fn create_subtask(name: &str, todo_task_id: i32) -> CreateTodoSubtask {
    CreateTodoSubtask {
        name: name.to_string(),
        todo_task_id,
    }
}

#[tokio::test]
async fn test_add_task_assigns_increasing_ids() {
    let service = task_service();

    let first = service.add_task(create_task("first")).await.unwrap();
    let second = service.add_task(create_task("second")).await.unwrap();

    assert_eq!(first, 1);
    assert_eq!(second, 2);

    let all = service.get_all_tasks().await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].title, "first");
}

#[tokio::test]
async fn test_deleted_task_is_not_found_everywhere() {
    let service = task_service();

    let id = service.add_task(create_task("doomed")).await.unwrap();
    service.delete_task(id).await.unwrap();

    assert!(matches!(
        service.get_task(id).await,
        Err(TodoError::TaskNotFound(_))
    ));
    assert!(matches!(
        service
            .update_task(UpdateTodoTask {
                id,
                title: "revived".to_string(),
                description: None,
            })
            .await,
        Err(TodoError::TaskNotFound(_))
    ));
    assert!(matches!(
        service.delete_task(id).await,
        Err(TodoError::TaskNotFound(_))
    ));
    assert!(service.get_all_tasks().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_update_task_overwrites_both_fields() {
    let service = task_service();

    let id = service
        .add_task(CreateTodoTask {
            title: "Groceries".to_string(),
            description: Some("weekly run".to_string()),
        })
        .await
        .unwrap();

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
}

#[tokio::test]
async fn test_get_task_with_subtasks_filters_deleted_children() {
    let store = InMemoryTodoStore::new();
    let tasks = TodoTaskService::new(InMemoryTodoTaskRepository::new(store.clone()));
    let subtasks = TodoSubtaskService::new(InMemoryTodoSubtaskRepository::new(store));

    let task_id = tasks.add_task(create_task("Groceries")).await.unwrap();
    let other_id = tasks.add_task(create_task("Chores")).await.unwrap();

    let milk = subtasks
        .add_subtask(create_subtask("Milk", task_id))
        .await
        .unwrap();
    let bread = subtasks
        .add_subtask(create_subtask("Bread", task_id))
        .await
        .unwrap();
    subtasks
        .add_subtask(create_subtask("Laundry", other_id))
        .await
        .unwrap();
    subtasks.delete_subtask(bread).await.unwrap();

    let loaded = tasks.get_task_with_subtasks(task_id).await.unwrap();
    assert_eq!(loaded.title, "Groceries");
    assert_eq!(loaded.subtasks.len(), 1);
    assert_eq!(loaded.subtasks[0].id, milk);
    assert_eq!(loaded.subtasks[0].name, "Milk");
}

#[tokio::test]
async fn test_toggle_flips_back_and_forth() {
    let service = subtask_service();

    let id = service
        .add_subtask(create_subtask("Milk", 1))
        .await
        .unwrap();

    assert!(service.toggle_check_status(id).await.unwrap());
    assert!(service.get_subtask(id).await.unwrap().is_checked);
    assert!(!service.toggle_check_status(id).await.unwrap());
    assert!(!service.get_subtask(id).await.unwrap().is_checked);
}

#[tokio::test]
async fn test_deleted_subtask_is_not_found_everywhere() {
    let service = subtask_service();

    let id = service
        .add_subtask(create_subtask("Milk", 1))
        .await
        .unwrap();
    service.delete_subtask(id).await.unwrap();

    assert!(matches!(
        service.get_subtask(id).await,
        Err(TodoError::SubtaskNotFound(_))
    ));
    assert!(matches!(
        service.toggle_check_status(id).await,
        Err(TodoError::SubtaskNotFound(_))
    ));
    assert!(matches!(
        service
            .update_subtask(UpdateTodoSubtask {
                id,
                name: "revived".to_string(),
            })
            .await,
        Err(TodoError::SubtaskNotFound(_))
    ));
    assert!(service.get_subtasks_by_task(1).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_add_subtask_accepts_dangling_task_id() {
    let service = subtask_service();

    // No parent task exists; the insert still succeeds
    let id = service
        .add_subtask(create_subtask("Orphan", 999))
        .await
        .unwrap();

    let subtask = service.get_subtask(id).await.unwrap();
    assert_eq!(subtask.todo_task_id, 999);
}

#[tokio::test]
async fn test_validation_rejects_out_of_bounds_input() {
    let tasks = task_service();
    let subtasks = subtask_service();

    assert!(matches!(
        tasks.add_task(create_task("")).await,
        Err(TodoError::Validation(_))
    ));
    assert!(matches!(
        tasks.add_task(create_task(&"x".repeat(101))).await,
        Err(TodoError::Validation(_))
    ));
    assert!(matches!(
        tasks
            .add_task(CreateTodoTask {
                title: "ok".to_string(),
                description: Some("x".repeat(256)),
            })
            .await,
        Err(TodoError::Validation(_))
    ));
    assert!(matches!(
        subtasks.add_subtask(create_subtask("", 1)).await,
        Err(TodoError::Validation(_))
    ));
    assert!(matches!(
        subtasks
            .add_subtask(create_subtask(&"x".repeat(256), 1))
            .await,
        Err(TodoError::Validation(_))
    ));
}

#[tokio::test]
async fn test_concurrent_adds_get_unique_ids() {
    let store = InMemoryTodoStore::new();

    let mut handles = vec![];
    for i in 0..5 {
        let repo = InMemoryTodoTaskRepository::new(store.clone());
        let handle = tokio::spawn(async move {
            let service = TodoTaskService::new(repo);
            service.add_task(create_task(&format!("task-{}", i))).await
        });
        handles.push(handle);
    }

    let mut ids: Vec<i32> = futures::future::join_all(handles)
        .await
        .into_iter()
        .map(|r| r.unwrap().unwrap())
        .collect();
    ids.sort_unstable();
    ids.dedup();

    assert_eq!(ids.len(), 5, "all ids should be unique");
}
