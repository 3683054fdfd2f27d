use axum::Router;
use domain_todos::{PgTodoSubtaskRepository, TodoSubtaskService, handlers};

pub fn router(state: &crate::state::AppState) -> Router {
    let repository = PgTodoSubtaskRepository::new(state.db.clone());
    let service = TodoSubtaskService::new(repository);
    handlers::subtask_router(service)
}
