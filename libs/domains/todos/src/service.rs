use std::sync::Arc;
use validator::Validate;

use crate::error::{TodoError, TodoResult};
use crate::models::{
    CreateTodoSubtask, CreateTodoTask, TodoSubtask, TodoTask, TodoTaskWithSubtasks,
    UpdateTodoSubtask, UpdateTodoTask,
};
use crate::repository::{TodoSubtaskRepository, TodoTaskRepository};

/// Business logic for todo tasks.
///
/// Every mutation runs through a unit of work: stage the change on the
/// repository, then commit with `complete()`. Lookups that miss resolve to
/// `TaskNotFound`, which includes rows hidden by the soft-delete filter.
pub struct TodoTaskService<R: TodoTaskRepository> {
    repository: Arc<R>,
}

impl<R: TodoTaskRepository> TodoTaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get_all_tasks(&self) -> TodoResult<Vec<TodoTask>> {
        self.repository.get_all().await
    }

    pub async fn get_task(&self, id: i32) -> TodoResult<TodoTask> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TodoError::TaskNotFound(id))
    }

    pub async fn get_task_with_subtasks(&self, id: i32) -> TodoResult<TodoTaskWithSubtasks> {
        self.repository
            .get_with_subtasks(id)
            .await?
            .ok_or(TodoError::TaskNotFound(id))
    }

    /// Create a task and return its store-assigned id
    pub async fn add_task(&self, input: CreateTodoTask) -> TodoResult<i32> {
        input
            .validate()
            .map_err(|e| TodoError::Validation(e.to_string()))?;

        let uow = self.repository.begin().await?;
        let task = self.repository.insert(&uow, input).await?;
        uow.complete()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(task.id)
    }

    pub async fn update_task(&self, input: UpdateTodoTask) -> TodoResult<()> {
        input
            .validate()
            .map_err(|e| TodoError::Validation(e.to_string()))?;

        let mut task = self
            .repository
            .get_by_id(input.id)
            .await?
            .ok_or(TodoError::TaskNotFound(input.id))?;
        task.apply_update(input);

        let uow = self.repository.begin().await?;
        self.repository.update(&uow, task).await?;
        uow.complete()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(())
    }

    /// Soft-delete a task; the row stays in the store flagged as deleted
    pub async fn delete_task(&self, id: i32) -> TodoResult<()> {
        let task = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TodoError::TaskNotFound(id))?;

        let uow = self.repository.begin().await?;
        self.repository.soft_delete(&uow, task).await?;
        uow.complete()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(())
    }
}

/// Business logic for todo subtasks
pub struct TodoSubtaskService<R: TodoSubtaskRepository> {
    repository: Arc<R>,
}

impl<R: TodoSubtaskRepository> TodoSubtaskService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    pub async fn get_all_subtasks(&self) -> TodoResult<Vec<TodoSubtask>> {
        self.repository.get_all().await
    }

    pub async fn get_subtask(&self, id: i32) -> TodoResult<TodoSubtask> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(TodoError::SubtaskNotFound(id))
    }

    /// Subtasks for a task. An unknown task id yields an empty list rather
    /// than an error.
    pub async fn get_subtasks_by_task(&self, todo_task_id: i32) -> TodoResult<Vec<TodoSubtask>> {
        self.repository.get_all_by_task_id(todo_task_id).await
    }

    /// Create a subtask and return its store-assigned id.
    ///
    /// The parent task is not checked for existence or liveness.
    pub async fn add_subtask(&self, input: CreateTodoSubtask) -> TodoResult<i32> {
        input
            .validate()
            .map_err(|e| TodoError::Validation(e.to_string()))?;

        let uow = self.repository.begin().await?;
        let subtask = self.repository.insert(&uow, input).await?;
        uow.complete()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(subtask.id)
    }

    pub async fn update_subtask(&self, input: UpdateTodoSubtask) -> TodoResult<()> {
        input
            .validate()
            .map_err(|e| TodoError::Validation(e.to_string()))?;

        let mut subtask = self
            .repository
            .get_by_id(input.id)
            .await?
            .ok_or(TodoError::SubtaskNotFound(input.id))?;
        subtask.apply_update(input);

        let uow = self.repository.begin().await?;
        self.repository.update(&uow, subtask).await?;
        uow.complete()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(())
    }

    /// Flip the checked flag and return the new value
    pub async fn toggle_check_status(&self, id: i32) -> TodoResult<bool> {
        let mut subtask = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TodoError::SubtaskNotFound(id))?;
        let new_value = subtask.toggle_checked();

        let uow = self.repository.begin().await?;
        self.repository.update(&uow, subtask).await?;
        uow.complete()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(new_value)
    }

    pub async fn delete_subtask(&self, id: i32) -> TodoResult<()> {
        let subtask = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(TodoError::SubtaskNotFound(id))?;

        let uow = self.repository.begin().await?;
        self.repository.soft_delete(&uow, subtask).await?;
        uow.complete()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(())
    }
}
