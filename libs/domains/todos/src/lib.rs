//! Todos Domain
//!
//! This module provides a complete domain implementation for managing todo
//! tasks and their subtasks, with soft deletion throughout.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_todos::{
//!     handlers,
//!     repository::{InMemoryTodoStore, InMemoryTodoTaskRepository},
//!     service::TodoTaskService,
//! };
//!
//! // Create repository and service over a shared store
//! let store = InMemoryTodoStore::new();
//! let repository = InMemoryTodoTaskRepository::new(store);
//! let service = TodoTaskService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::task_router(service);
//! ```

pub mod entity;
pub mod error;
pub mod handlers;
pub mod models;
pub mod postgres;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use models::{
    CreateTodoSubtask, CreateTodoTask, TodoSubtask, TodoSubtaskDto, TodoTask, TodoTaskDto,
    TodoTaskWithSubtasks, UpdateTodoSubtask, UpdateTodoTask,
};
pub use postgres::{PgTodoSubtaskRepository, PgTodoTaskRepository};
pub use repository::{
    InMemoryTodoStore, InMemoryTodoSubtaskRepository, InMemoryTodoTaskRepository,
    TodoSubtaskRepository, TodoTaskRepository,
};
pub use service::{TodoSubtaskService, TodoTaskService};
