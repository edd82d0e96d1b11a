use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::middlewares::AdminUser;
use crate::models::{CreateProject, Project, UpdateProject};
use crate::repositories::{ProjectRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

// created_by is intentionally absent: it is stamped from the
// authenticated admin, and any client-supplied value is dropped.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateProjectRequest {
    pub title: String,
    pub description: String,
    pub status: String,
    pub technologies: String,
    pub required_team_size: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateProjectRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<String>,
    pub technologies: Option<String>,
    pub required_team_size: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ProjectResponse {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub status: String,
    pub technologies: String,
    pub required_team_size: i32,
    pub created_by: i32,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Project> for ProjectResponse {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            status: p.status,
            technologies: p.technologies,
            required_team_size: p.required_team_size,
            created_by: p.created_by,
            created_at: p.created_at,
            updated_at: p.updated_at,
        }
    }
}

fn validate_team_size(size: i32) -> AppResult<()> {
    if size < 1 {
        return Err(AppError::Validation(
            "required_team_size must be positive".to_string(),
        ));
    }
    Ok(())
}

// ============ Handlers ============

/// List all projects
#[utoipa::path(
    get,
    path = "/api/admin/projects",
    responses(
        (status = 200, description = "List of projects", body = [ProjectResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn list_projects(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<ProjectResponse>>> {
    let projects = ProjectRepository::list(&state.db).await?;
    Ok(Json(projects.into_iter().map(|p| p.into()).collect()))
}

/// Create a new project
#[utoipa::path(
    post,
    path = "/api/admin/projects",
    request_body = CreateProjectRequest,
    responses(
        (status = 200, description = "Project created successfully", body = ProjectResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn create_project(
    admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    if payload.title.is_empty() {
        return Err(AppError::Validation("Title is required".to_string()));
    }
    validate_team_size(payload.required_team_size)?;

    let create_project = CreateProject {
        title: payload.title,
        description: payload.description,
        status: payload.status,
        technologies: payload.technologies,
        required_team_size: payload.required_team_size,
    };

    let project = ProjectRepository::create(&state.db, admin.0.id, &create_project).await?;
    Ok(Json(project.into()))
}

/// Update a project (partial)
#[utoipa::path(
    put,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    request_body = UpdateProjectRequest,
    responses(
        (status = 200, description = "Project updated successfully", body = ProjectResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Project not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn update_project(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateProjectRequest>,
) -> AppResult<Json<ProjectResponse>> {
    if let Some(size) = payload.required_team_size {
        validate_team_size(size)?;
    }

    let update_project = UpdateProject {
        title: payload.title,
        description: payload.description,
        status: payload.status,
        technologies: payload.technologies,
        required_team_size: payload.required_team_size,
    };

    let project = ProjectRepository::update(&state.db, id, &update_project).await?;
    Ok(Json(project.into()))
}

/// Delete a project
#[utoipa::path(
    delete,
    path = "/api/admin/projects/{id}",
    params(
        ("id" = i32, Path, description = "Project ID")
    ),
    responses(
        (status = 200, description = "Project deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Project not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn delete_project(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    ProjectRepository::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Project deleted successfully")))
}
