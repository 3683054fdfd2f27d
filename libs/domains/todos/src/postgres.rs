//! PostgreSQL implementations of the todo repositories, built on
//! [`BaseRepository`] and the shared unit-of-work handle.

use async_trait::async_trait;
use database::{BaseRepository, UnitOfWork};
use sea_orm::ActiveValue::Set;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::entity;
use crate::error::{TodoError, TodoResult};
use crate::models::{
    CreateTodoSubtask, CreateTodoTask, TodoSubtask, TodoTask, TodoTaskWithSubtasks,
};
use crate::repository::{TodoSubtaskRepository, TodoTaskRepository};

/// PostgreSQL-backed TodoTask repository
pub struct PgTodoTaskRepository {
    base: BaseRepository<entity::todo_task::Entity>,
}

impl PgTodoTaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TodoTaskRepository for PgTodoTaskRepository {
    async fn begin(&self) -> TodoResult<UnitOfWork> {
        self.base
            .begin()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))
    }

    async fn get_all(&self) -> TodoResult<Vec<TodoTask>> {
        let models = entity::todo_task::find_live()
            .order_by_asc(entity::todo_task::Column::Id)
            .all(self.base.db())
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(TodoTask::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> TodoResult<Option<TodoTask>> {
        let model = entity::todo_task::find_live()
            .filter(entity::todo_task::Column::Id.eq(id))
            .one(self.base.db())
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(TodoTask::from))
    }

    async fn get_with_subtasks(&self, id: i32) -> TodoResult<Option<TodoTaskWithSubtasks>> {
        let Some(task) = self.get_by_id(id).await? else {
            return Ok(None);
        };

        let subtasks = entity::todo_subtask::find_live()
            .filter(entity::todo_subtask::Column::TodoTaskId.eq(id))
            .order_by_asc(entity::todo_subtask::Column::Id)
            .all(self.base.db())
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(Some(TodoTaskWithSubtasks {
            id: task.id,
            title: task.title,
            description: task.description,
            subtasks: subtasks.into_iter().map(TodoSubtask::from).collect(),
        }))
    }

    async fn insert(&self, uow: &UnitOfWork, input: CreateTodoTask) -> TodoResult<TodoTask> {
        let model = self
            .base
            .insert(uow, entity::todo_task::ActiveModel::from(input))
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(task_id = model.id, "Created todo task");
        Ok(TodoTask::from(model))
    }

    async fn update(&self, uow: &UnitOfWork, task: TodoTask) -> TodoResult<TodoTask> {
        let model = self
            .base
            .update(uow, entity::todo_task::ActiveModel::from(task))
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(task_id = model.id, "Updated todo task");
        Ok(TodoTask::from(model))
    }

    async fn soft_delete(&self, uow: &UnitOfWork, task: TodoTask) -> TodoResult<()> {
        let mut active = entity::todo_task::ActiveModel::from(task);
        active.is_deleted = Set(true);

        let model = self
            .base
            .update(uow, active)
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(task_id = model.id, "Soft-deleted todo task");
        Ok(())
    }
}

/// PostgreSQL-backed TodoSubtask repository
pub struct PgTodoSubtaskRepository {
    base: BaseRepository<entity::todo_subtask::Entity>,
}

impl PgTodoSubtaskRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }
}

#[async_trait]
impl TodoSubtaskRepository for PgTodoSubtaskRepository {
    async fn begin(&self) -> TodoResult<UnitOfWork> {
        self.base
            .begin()
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))
    }

    async fn get_all(&self) -> TodoResult<Vec<TodoSubtask>> {
        let models = entity::todo_subtask::find_live()
            .order_by_asc(entity::todo_subtask::Column::Id)
            .all(self.base.db())
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(TodoSubtask::from).collect())
    }

    async fn get_by_id(&self, id: i32) -> TodoResult<Option<TodoSubtask>> {
        let model = entity::todo_subtask::find_live()
            .filter(entity::todo_subtask::Column::Id.eq(id))
            .one(self.base.db())
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(model.map(TodoSubtask::from))
    }

    async fn get_all_by_task_id(&self, todo_task_id: i32) -> TodoResult<Vec<TodoSubtask>> {
        let models = entity::todo_subtask::find_live()
            .filter(entity::todo_subtask::Column::TodoTaskId.eq(todo_task_id))
            .order_by_asc(entity::todo_subtask::Column::Id)
            .all(self.base.db())
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        Ok(models.into_iter().map(TodoSubtask::from).collect())
    }

    async fn insert(&self, uow: &UnitOfWork, input: CreateTodoSubtask) -> TodoResult<TodoSubtask> {
        let model = self
            .base
            .insert(uow, entity::todo_subtask::ActiveModel::from(input))
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(subtask_id = model.id, "Created todo subtask");
        Ok(TodoSubtask::from(model))
    }

    async fn update(&self, uow: &UnitOfWork, subtask: TodoSubtask) -> TodoResult<TodoSubtask> {
        let model = self
            .base
            .update(uow, entity::todo_subtask::ActiveModel::from(subtask))
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(subtask_id = model.id, "Updated todo subtask");
        Ok(TodoSubtask::from(model))
    }

    async fn soft_delete(&self, uow: &UnitOfWork, subtask: TodoSubtask) -> TodoResult<()> {
        let mut active = entity::todo_subtask::ActiveModel::from(subtask);
        active.is_deleted = Set(true);

        let model = self
            .base
            .update(uow, active)
            .await
            .map_err(|e| TodoError::Internal(format!("Database error: {}", e)))?;

        tracing::info!(subtask_id = model.id, "Soft-deleted todo subtask");
        Ok(())
    }
}
