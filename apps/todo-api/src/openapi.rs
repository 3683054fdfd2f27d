use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    components(
        schemas(axum_helpers::ErrorResponse)
    ),
    info(
        title = "Todo API",
        version = "0.1.0",
        description = "API for managing todo tasks and their subtasks"
    ),
    servers(
        (url = "/api", description = "API base path")
    ),
    nest(
        (path = domain_todos::entity::todo_task::Model::URL, api = domain_todos::handlers::TaskApiDoc),
        (path = domain_todos::entity::todo_subtask::Model::URL, api = domain_todos::handlers::SubtaskApiDoc)
    )
)]
pub struct ApiDoc;
