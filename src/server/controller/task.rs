use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use entity::enums::UserRole;
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        task::{
            AddTaskNoteDto, TaskDetailsDto, TaskDto, TaskNoteDto, TechnicianDto,
            UpdateChecklistDto, UpdateTaskStatusDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        service::task::TaskService,
        state::AppState,
    },
};

/// Tag for grouping task endpoints in OpenAPI documentation
pub static TASK_TAG: &str = "tasks";

/// Roles allowed to mutate tasks (admins always pass).
const TASK_WRITERS: &[UserRole] = &[UserRole::Technician, UserRole::DeploymentLead];

/// List all deployment tasks with customer and technician names.
#[utoipa::path(
    get,
    path = "/api/tasks",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "All tasks", body = Vec<TaskDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tasks(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let tasks = TaskService::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(tasks.into_iter().map(|t| t.into_dto()).collect::<Vec<_>>()),
    ))
}

/// List all technicians.
#[utoipa::path(
    get,
    path = "/api/tasks/technicians",
    tag = TASK_TAG,
    responses(
        (status = 200, description = "All technicians", body = Vec<TechnicianDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_technicians(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let technicians = TaskService::new(&state.db).technicians().await?;

    Ok((
        StatusCode::OK,
        Json(
            technicians
                .into_iter()
                .map(|t| t.into_dto())
                .collect::<Vec<_>>(),
        ),
    ))
}

/// Get a task's checklist and notes.
#[utoipa::path(
    get,
    path = "/api/tasks/{id}/details",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    responses(
        (status = 200, description = "Checklist and notes", body = TaskDetailsDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_task_details(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session).require(&[]).await?;

    let details = TaskService::new(&state.db).details(id).await?;

    Ok((StatusCode::OK, Json(details)))
}

/// Update a task's status.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}/status",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateTaskStatusDto,
    responses(
        (status = 200, description = "Status updated", body = MessageDto),
        (status = 400, description = "Unknown status", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTaskStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(TASK_WRITERS)])
        .await?;

    TaskService::new(&state.db)
        .update_status(id, &payload.status, user.user_id)
        .await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Task status updated".to_string(),
        }),
    ))
}

/// Replace a task's checklist.
#[utoipa::path(
    put,
    path = "/api/tasks/{id}/checklist",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = UpdateChecklistDto,
    responses(
        (status = 200, description = "Checklist replaced", body = MessageDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_task_checklist(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateChecklistDto>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(TASK_WRITERS)])
        .await?;

    TaskService::new(&state.db).update_checklist(id, payload).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Checklist updated".to_string(),
        }),
    ))
}

/// Append a note to a task. The author is the session user.
#[utoipa::path(
    post,
    path = "/api/tasks/{id}/notes",
    tag = TASK_TAG,
    params(("id" = i32, Path, description = "Task ID")),
    request_body = AddTaskNoteDto,
    responses(
        (status = 201, description = "Note added", body = TaskNoteDto),
        (status = 400, description = "Empty note", body = ErrorDto),
        (status = 404, description = "Task not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_task_note(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<AddTaskNoteDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::AnyRole(TASK_WRITERS)])
        .await?;

    let note = TaskService::new(&state.db)
        .add_note(id, payload.content, user.username)
        .await?;

    Ok((StatusCode::CREATED, Json(note.into_dto())))
}
