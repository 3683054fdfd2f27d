use async_trait::async_trait;
use database::UnitOfWork;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicI32, Ordering};
use tokio::sync::RwLock;

use crate::error::TodoResult;
use crate::models::{
    CreateTodoSubtask, CreateTodoTask, TodoSubtask, TodoTask, TodoTaskWithSubtasks,
};

/// Repository trait for TodoTask persistence.
///
/// Mutating operations are staged against a [`UnitOfWork`] obtained from
/// `begin()`; the caller commits with `UnitOfWork::complete()`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoTaskRepository: Send + Sync {
    /// Open a unit of work for a batch of mutations
    async fn begin(&self) -> TodoResult<UnitOfWork>;

    /// Get all live tasks, ordered by id
    async fn get_all(&self) -> TodoResult<Vec<TodoTask>>;

    /// Get a live task by ID
    async fn get_by_id(&self, id: i32) -> TodoResult<Option<TodoTask>>;

    /// Get a live task together with its live subtasks
    async fn get_with_subtasks(&self, id: i32) -> TodoResult<Option<TodoTaskWithSubtasks>>;

    /// Insert a new task, returning it with the store-assigned id
    async fn insert(&self, uow: &UnitOfWork, input: CreateTodoTask) -> TodoResult<TodoTask>;

    /// Persist changes to an existing task
    async fn update(&self, uow: &UnitOfWork, task: TodoTask) -> TodoResult<TodoTask>;

    /// Mark a task as deleted; the row is never physically removed
    async fn soft_delete(&self, uow: &UnitOfWork, task: TodoTask) -> TodoResult<()>;
}

/// Repository trait for TodoSubtask persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TodoSubtaskRepository: Send + Sync {
    /// Open a unit of work for a batch of mutations
    async fn begin(&self) -> TodoResult<UnitOfWork>;

    /// Get all live subtasks, ordered by id
    async fn get_all(&self) -> TodoResult<Vec<TodoSubtask>>;

    /// Get a live subtask by ID
    async fn get_by_id(&self, id: i32) -> TodoResult<Option<TodoSubtask>>;

    /// Get all live subtasks belonging to a task
    async fn get_all_by_task_id(&self, todo_task_id: i32) -> TodoResult<Vec<TodoSubtask>>;

    /// Insert a new subtask, returning it with the store-assigned id
    async fn insert(&self, uow: &UnitOfWork, input: CreateTodoSubtask) -> TodoResult<TodoSubtask>;

    /// Persist changes to an existing subtask
    async fn update(&self, uow: &UnitOfWork, subtask: TodoSubtask) -> TodoResult<TodoSubtask>;

    /// Mark a subtask as deleted; the row is never physically removed
    async fn soft_delete(&self, uow: &UnitOfWork, subtask: TodoSubtask) -> TodoResult<()>;
}

/// Shared in-memory backing store for both repositories (development/testing).
///
/// Clones share the same maps, so the task and subtask repositories built from
/// one store see each other's writes. Soft-deleted rows stay in the maps with
/// the flag set, matching the database behavior.
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoStore {
    tasks: Arc<RwLock<HashMap<i32, TodoTask>>>,
    subtasks: Arc<RwLock<HashMap<i32, TodoSubtask>>>,
    next_task_id: Arc<AtomicI32>,
    next_subtask_id: Arc<AtomicI32>,
}

impl InMemoryTodoStore {
    pub fn new() -> Self {
        Self::default()
    }
}

/// In-memory implementation of TodoTaskRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoTaskRepository {
    store: InMemoryTodoStore,
}

impl InMemoryTodoTaskRepository {
    pub fn new(store: InMemoryTodoStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TodoTaskRepository for InMemoryTodoTaskRepository {
    async fn begin(&self) -> TodoResult<UnitOfWork> {
        Ok(UnitOfWork::detached())
    }

    async fn get_all(&self) -> TodoResult<Vec<TodoTask>> {
        let tasks = self.store.tasks.read().await;

        let mut result: Vec<TodoTask> = tasks.values().filter(|t| !t.is_deleted).cloned().collect();
        result.sort_by_key(|t| t.id);

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> TodoResult<Option<TodoTask>> {
        let tasks = self.store.tasks.read().await;
        Ok(tasks.get(&id).filter(|t| !t.is_deleted).cloned())
    }

    async fn get_with_subtasks(&self, id: i32) -> TodoResult<Option<TodoTaskWithSubtasks>> {
        let tasks = self.store.tasks.read().await;

        let Some(task) = tasks.get(&id).filter(|t| !t.is_deleted) else {
            return Ok(None);
        };

        let subtasks = self.store.subtasks.read().await;
        let mut children: Vec<TodoSubtask> = subtasks
            .values()
            .filter(|s| s.todo_task_id == id && !s.is_deleted)
            .cloned()
            .collect();
        children.sort_by_key(|s| s.id);

        Ok(Some(TodoTaskWithSubtasks {
            id: task.id,
            title: task.title.clone(),
            description: task.description.clone(),
            subtasks: children,
        }))
    }

    async fn insert(&self, uow: &UnitOfWork, input: CreateTodoTask) -> TodoResult<TodoTask> {
        let mut tasks = self.store.tasks.write().await;

        let id = self.store.next_task_id.fetch_add(1, Ordering::SeqCst) + 1;
        let task = TodoTask {
            id,
            title: input.title,
            description: input.description,
            is_deleted: false,
        };
        tasks.insert(id, task.clone());
        uow.track(1);

        tracing::info!(task_id = id, "Created todo task");
        Ok(task)
    }

    async fn update(&self, uow: &UnitOfWork, task: TodoTask) -> TodoResult<TodoTask> {
        let mut tasks = self.store.tasks.write().await;

        tasks.insert(task.id, task.clone());
        uow.track(1);

        tracing::info!(task_id = task.id, "Updated todo task");
        Ok(task)
    }

    async fn soft_delete(&self, uow: &UnitOfWork, task: TodoTask) -> TodoResult<()> {
        let mut tasks = self.store.tasks.write().await;

        if let Some(stored) = tasks.get_mut(&task.id) {
            stored.is_deleted = true;
            uow.track(1);
            tracing::info!(task_id = task.id, "Soft-deleted todo task");
        }

        Ok(())
    }
}

/// In-memory implementation of TodoSubtaskRepository
#[derive(Debug, Default, Clone)]
pub struct InMemoryTodoSubtaskRepository {
    store: InMemoryTodoStore,
}

impl InMemoryTodoSubtaskRepository {
    pub fn new(store: InMemoryTodoStore) -> Self {
        Self { store }
    }
}

#[async_trait]
impl TodoSubtaskRepository for InMemoryTodoSubtaskRepository {
    async fn begin(&self) -> TodoResult<UnitOfWork> {
        Ok(UnitOfWork::detached())
    }

    async fn get_all(&self) -> TodoResult<Vec<TodoSubtask>> {
        let subtasks = self.store.subtasks.read().await;

        let mut result: Vec<TodoSubtask> = subtasks
            .values()
            .filter(|s| !s.is_deleted)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.id);

        Ok(result)
    }

    async fn get_by_id(&self, id: i32) -> TodoResult<Option<TodoSubtask>> {
        let subtasks = self.store.subtasks.read().await;
        Ok(subtasks.get(&id).filter(|s| !s.is_deleted).cloned())
    }

    async fn get_all_by_task_id(&self, todo_task_id: i32) -> TodoResult<Vec<TodoSubtask>> {
        let subtasks = self.store.subtasks.read().await;

        let mut result: Vec<TodoSubtask> = subtasks
            .values()
            .filter(|s| s.todo_task_id == todo_task_id && !s.is_deleted)
            .cloned()
            .collect();
        result.sort_by_key(|s| s.id);

        Ok(result)
    }

    async fn insert(&self, uow: &UnitOfWork, input: CreateTodoSubtask) -> TodoResult<TodoSubtask> {
        let mut subtasks = self.store.subtasks.write().await;

        // No liveness check on todo_task_id: inserts against unknown or
        // deleted tasks succeed, mirroring the persistence layer
        let id = self.store.next_subtask_id.fetch_add(1, Ordering::SeqCst) + 1;
        let subtask = TodoSubtask {
            id,
            name: input.name,
            is_checked: false,
            is_deleted: false,
            todo_task_id: input.todo_task_id,
        };
        subtasks.insert(id, subtask.clone());
        uow.track(1);

        tracing::info!(subtask_id = id, "Created todo subtask");
        Ok(subtask)
    }

    async fn update(&self, uow: &UnitOfWork, subtask: TodoSubtask) -> TodoResult<TodoSubtask> {
        let mut subtasks = self.store.subtasks.write().await;

        subtasks.insert(subtask.id, subtask.clone());
        uow.track(1);

        tracing::info!(subtask_id = subtask.id, "Updated todo subtask");
        Ok(subtask)
    }

    async fn soft_delete(&self, uow: &UnitOfWork, subtask: TodoSubtask) -> TodoResult<()> {
        let mut subtasks = self.store.subtasks.write().await;

        if let Some(stored) = subtasks.get_mut(&subtask.id) {
            stored.is_deleted = true;
            uow.track(1);
            tracing::info!(subtask_id = subtask.id, "Soft-deleted todo subtask");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_assigns_increasing_ids() {
        let repo = InMemoryTodoTaskRepository::new(InMemoryTodoStore::new());
        let uow = repo.begin().await.unwrap();

        let first = repo
            .insert(
                &uow,
                CreateTodoTask {
                    title: "first".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        let second = repo
            .insert(
                &uow,
                CreateTodoTask {
                    title: "second".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(uow.complete().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_soft_delete_hides_but_keeps_row() {
        let store = InMemoryTodoStore::new();
        let repo = InMemoryTodoTaskRepository::new(store.clone());
        let uow = repo.begin().await.unwrap();

        let task = repo
            .insert(
                &uow,
                CreateTodoTask {
                    title: "doomed".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        repo.soft_delete(&uow, task.clone()).await.unwrap();

        assert!(repo.get_by_id(task.id).await.unwrap().is_none());
        assert!(repo.get_all().await.unwrap().is_empty());

        // The row is still physically present, just flagged
        let tasks = store.tasks.read().await;
        assert!(tasks.get(&task.id).unwrap().is_deleted);
    }

    #[tokio::test]
    async fn test_get_all_by_task_id_filters_live_rows() {
        let store = InMemoryTodoStore::new();
        let repo = InMemoryTodoSubtaskRepository::new(store);
        let uow = repo.begin().await.unwrap();

        let milk = repo
            .insert(
                &uow,
                CreateTodoSubtask {
                    name: "Milk".to_string(),
                    todo_task_id: 1,
                },
            )
            .await
            .unwrap();
        let bread = repo
            .insert(
                &uow,
                CreateTodoSubtask {
                    name: "Bread".to_string(),
                    todo_task_id: 1,
                },
            )
            .await
            .unwrap();
        repo.insert(
            &uow,
            CreateTodoSubtask {
                name: "Other".to_string(),
                todo_task_id: 2,
            },
        )
        .await
        .unwrap();
        repo.soft_delete(&uow, bread).await.unwrap();

        let for_task = repo.get_all_by_task_id(1).await.unwrap();
        assert_eq!(for_task.len(), 1);
        assert_eq!(for_task[0].id, milk.id);
    }

    #[tokio::test]
    async fn test_shared_store_links_tasks_and_subtasks() {
        let store = InMemoryTodoStore::new();
        let tasks = InMemoryTodoTaskRepository::new(store.clone());
        let subtasks = InMemoryTodoSubtaskRepository::new(store);

        let uow = tasks.begin().await.unwrap();
        let task = tasks
            .insert(
                &uow,
                CreateTodoTask {
                    title: "Groceries".to_string(),
                    description: None,
                },
            )
            .await
            .unwrap();
        subtasks
            .insert(
                &uow,
                CreateTodoSubtask {
                    name: "Milk".to_string(),
                    todo_task_id: task.id,
                },
            )
            .await
            .unwrap();

        let loaded = tasks.get_with_subtasks(task.id).await.unwrap().unwrap();
        assert_eq!(loaded.subtasks.len(), 1);
        assert_eq!(loaded.subtasks[0].name, "Milk");
    }
}
