use axum::Router;
use domain_todos::{PgTodoTaskRepository, TodoTaskService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgTodoTaskRepository::new(state.db.clone());
    let service = TodoTaskService::new(repository);
    handlers::task_router(service)
}
