use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    IdPath, ValidatedJson,
    errors::responses::{
        BadRequestIdResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::entity;
use crate::error::TodoResult;
use crate::models::{
    CreateTodoSubtask, CreateTodoTask, TodoSubtaskDto, TodoTaskDto, UpdateTodoSubtask,
    UpdateTodoTask,
};
use crate::repository::{TodoSubtaskRepository, TodoTaskRepository};
use crate::service::{TodoSubtaskService, TodoTaskService};

/// OpenAPI documentation for the TodoTask API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_tasks,
        add_task,
        update_task,
        get_task,
        delete_task,
    ),
    components(
        schemas(TodoTaskDto, CreateTodoTask, UpdateTodoTask),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::todo_task::Model::TAG, description = "Todo task endpoints")
    )
)]
pub struct TaskApiDoc;

/// OpenAPI documentation for the TodoSubtask API
#[derive(OpenApi)]
#[openapi(
    paths(
        get_all_subtasks,
        add_subtask,
        update_subtask,
        get_subtask,
        toggle_check_status,
        delete_subtask,
        get_subtasks_by_task,
    ),
    components(
        schemas(TodoSubtaskDto, CreateTodoSubtask, UpdateTodoSubtask),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestIdResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = entity::todo_subtask::Model::TAG, description = "Todo subtask endpoints")
    )
)]
pub struct SubtaskApiDoc;

/// Create the task router with all HTTP endpoints
pub fn task_router<R: TodoTaskRepository + 'static>(service: TodoTaskService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(get_all_tasks).post(add_task).put(update_task))
        .route("/{id}", get(get_task).delete(delete_task))
        .with_state(shared_service)
}

/// Create the subtask router with all HTTP endpoints
pub fn subtask_router<R: TodoSubtaskRepository + 'static>(
    service: TodoSubtaskService<R>,
) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route(
            "/",
            get(get_all_subtasks).post(add_subtask).put(update_subtask),
        )
        .route(
            "/{id}",
            get(get_subtask)
                .patch(toggle_check_status)
                .delete(delete_subtask),
        )
        .route("/task/{task_id}", get(get_subtasks_by_task))
        .with_state(shared_service)
}

/// List all live tasks
#[utoipa::path(
    get,
    path = "",
    tag = entity::todo_task::Model::TAG,
    responses(
        (status = 200, description = "List of tasks", body = Vec<TodoTaskDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all_tasks<R: TodoTaskRepository>(
    State(service): State<Arc<TodoTaskService<R>>>,
) -> TodoResult<Json<Vec<TodoTaskDto>>> {
    let tasks = service.get_all_tasks().await?;
    Ok(Json(tasks.into_iter().map(TodoTaskDto::from).collect()))
}

/// Create a new task
#[utoipa::path(
    post,
    path = "",
    tag = entity::todo_task::Model::TAG,
    request_body = CreateTodoTask,
    responses(
        (status = 201, description = "Task created successfully", body = i32),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_task<R: TodoTaskRepository>(
    State(service): State<Arc<TodoTaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodoTask>,
) -> TodoResult<impl IntoResponse> {
    let id = service.add_task(input).await?;

    let location = format!("/api{}/{}", entity::todo_task::Model::URL, id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(id),
    ))
}

/// Update an existing task; the target id travels in the body
#[utoipa::path(
    put,
    path = "",
    tag = entity::todo_task::Model::TAG,
    request_body = UpdateTodoTask,
    responses(
        (status = 204, description = "Task updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_task<R: TodoTaskRepository>(
    State(service): State<Arc<TodoTaskService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateTodoTask>,
) -> TodoResult<impl IntoResponse> {
    service.update_task(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a task by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::todo_task::Model::TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 200, description = "Task found", body = TodoTaskDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_task<R: TodoTaskRepository>(
    State(service): State<Arc<TodoTaskService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<Json<TodoTaskDto>> {
    let task = service.get_task(id).await?;
    Ok(Json(TodoTaskDto::from(task)))
}

/// Soft-delete a task
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::todo_task::Model::TAG,
    params(
        ("id" = i32, Path, description = "Task ID")
    ),
    responses(
        (status = 204, description = "Task deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_task<R: TodoTaskRepository>(
    State(service): State<Arc<TodoTaskService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<impl IntoResponse> {
    service.delete_task(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List all live subtasks
#[utoipa::path(
    get,
    path = "",
    tag = entity::todo_subtask::Model::TAG,
    responses(
        (status = 200, description = "List of subtasks", body = Vec<TodoSubtaskDto>),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all_subtasks<R: TodoSubtaskRepository>(
    State(service): State<Arc<TodoSubtaskService<R>>>,
) -> TodoResult<Json<Vec<TodoSubtaskDto>>> {
    let subtasks = service.get_all_subtasks().await?;
    Ok(Json(
        subtasks.into_iter().map(TodoSubtaskDto::from).collect(),
    ))
}

/// Create a new subtask
#[utoipa::path(
    post,
    path = "",
    tag = entity::todo_subtask::Model::TAG,
    request_body = CreateTodoSubtask,
    responses(
        (status = 201, description = "Subtask created successfully", body = i32),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn add_subtask<R: TodoSubtaskRepository>(
    State(service): State<Arc<TodoSubtaskService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateTodoSubtask>,
) -> TodoResult<impl IntoResponse> {
    let id = service.add_subtask(input).await?;

    let location = format!("/api{}/{}", entity::todo_subtask::Model::URL, id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(id),
    ))
}

/// Rename an existing subtask; the target id travels in the body
#[utoipa::path(
    put,
    path = "",
    tag = entity::todo_subtask::Model::TAG,
    request_body = UpdateTodoSubtask,
    responses(
        (status = 204, description = "Subtask updated successfully"),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update_subtask<R: TodoSubtaskRepository>(
    State(service): State<Arc<TodoSubtaskService<R>>>,
    ValidatedJson(input): ValidatedJson<UpdateTodoSubtask>,
) -> TodoResult<impl IntoResponse> {
    service.update_subtask(input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Get a subtask by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = entity::todo_subtask::Model::TAG,
    params(
        ("id" = i32, Path, description = "Subtask ID")
    ),
    responses(
        (status = 200, description = "Subtask found", body = TodoSubtaskDto),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_subtask<R: TodoSubtaskRepository>(
    State(service): State<Arc<TodoSubtaskService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<Json<TodoSubtaskDto>> {
    let subtask = service.get_subtask(id).await?;
    Ok(Json(TodoSubtaskDto::from(subtask)))
}

/// Toggle the checked flag, returning the new value
#[utoipa::path(
    patch,
    path = "/{id}",
    tag = entity::todo_subtask::Model::TAG,
    params(
        ("id" = i32, Path, description = "Subtask ID")
    ),
    responses(
        (status = 200, description = "New checked value", body = bool),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn toggle_check_status<R: TodoSubtaskRepository>(
    State(service): State<Arc<TodoSubtaskService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<Json<bool>> {
    let new_value = service.toggle_check_status(id).await?;
    Ok(Json(new_value))
}

/// Soft-delete a subtask
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = entity::todo_subtask::Model::TAG,
    params(
        ("id" = i32, Path, description = "Subtask ID")
    ),
    responses(
        (status = 204, description = "Subtask deleted successfully"),
        (status = 400, response = BadRequestIdResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn delete_subtask<R: TodoSubtaskRepository>(
    State(service): State<Arc<TodoSubtaskService<R>>>,
    IdPath(id): IdPath,
) -> TodoResult<impl IntoResponse> {
    service.delete_subtask(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// List live subtasks belonging to a task
#[utoipa::path(
    get,
    path = "/task/{task_id}",
    tag = entity::todo_subtask::Model::TAG,
    params(
        ("task_id" = i32, Path, description = "Parent task ID")
    ),
    responses(
        (status = 200, description = "Subtasks for the task", body = Vec<TodoSubtaskDto>),
        (status = 400, response = BadRequestIdResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_subtasks_by_task<R: TodoSubtaskRepository>(
    State(service): State<Arc<TodoSubtaskService<R>>>,
    IdPath(task_id): IdPath,
) -> TodoResult<Json<Vec<TodoSubtaskDto>>> {
    let subtasks = service.get_subtasks_by_task(task_id).await?;
    Ok(Json(
        subtasks.into_iter().map(TodoSubtaskDto::from).collect(),
    ))
}
