use axum::Router;

pub mod health;
pub mod todo_subtasks;
pub mod todo_tasks;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix will be added by the `create_router` helper.
///
/// This function takes a reference to AppState and initializes all services.
/// Returns a stateless Router (all sub-routers have state already applied).
/// Only Arc pointer clones remain when domains extract db connections (cheap).
pub fn routes(state: &crate::state::AppState) -> Router {
    Router::new()
        .nest(
            domain_todos::entity::todo_task::Model::URL,
            todo_tasks::router(state),
        )
        .nest(
            domain_todos::entity::todo_subtask::Model::URL,
            todo_subtasks::router(state),
        )
}

/// Creates a router with the /ready endpoint that performs actual health checks.
///
/// This router has state applied and can be merged with the stateless app router
/// from `create_router`. The /ready endpoint checks the database connection.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
