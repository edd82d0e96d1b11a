use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::AppResult;
use crate::handlers::MessageResponse;
use crate::middlewares::AdminUser;
use crate::models::{Assignment, CreateAssignment, UpdateAssignment};
use crate::repositories::{AssignmentRepository, Repository};
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateAssignmentRequest {
    pub project_id: i32,
    pub user_id: i32,
    pub role: String,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateAssignmentRequest {
    pub project_id: Option<i32>,
    pub user_id: Option<i32>,
    pub role: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AssignmentResponse {
    pub id: i32,
    pub project_id: i32,
    pub user_id: i32,
    pub role: String,
    #[schema(value_type = String)]
    pub created_at: time::OffsetDateTime,
    #[schema(value_type = String)]
    pub updated_at: time::OffsetDateTime,
}

impl From<Assignment> for AssignmentResponse {
    fn from(a: Assignment) -> Self {
        Self {
            id: a.id,
            project_id: a.project_id,
            user_id: a.user_id,
            role: a.role,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

// ============ Handlers ============

/// List all assignments
#[utoipa::path(
    get,
    path = "/api/admin/assignments",
    responses(
        (status = 200, description = "List of assignments", body = [AssignmentResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn list_assignments(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AssignmentResponse>>> {
    let assignments = AssignmentRepository::list(&state.db).await?;
    Ok(Json(assignments.into_iter().map(|a| a.into()).collect()))
}

/// Assign a user to a project
#[utoipa::path(
    post,
    path = "/api/admin/assignments",
    request_body = CreateAssignmentRequest,
    responses(
        (status = 200, description = "Assignment created successfully", body = AssignmentResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Referenced project or user not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn create_assignment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateAssignmentRequest>,
) -> AppResult<Json<AssignmentResponse>> {
    let create_assignment = CreateAssignment {
        project_id: payload.project_id,
        user_id: payload.user_id,
        role: payload.role,
    };

    let assignment = AssignmentRepository::create(&state.db, &create_assignment).await?;
    Ok(Json(assignment.into()))
}

/// Update an assignment (partial)
#[utoipa::path(
    put,
    path = "/api/admin/assignments/{id}",
    params(
        ("id" = i32, Path, description = "Assignment ID")
    ),
    request_body = UpdateAssignmentRequest,
    responses(
        (status = 200, description = "Assignment updated successfully", body = AssignmentResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Assignment, project or user not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn update_assignment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAssignmentRequest>,
) -> AppResult<Json<AssignmentResponse>> {
    let update_assignment = UpdateAssignment {
        project_id: payload.project_id,
        user_id: payload.user_id,
        role: payload.role,
    };

    let assignment = AssignmentRepository::update(&state.db, id, &update_assignment).await?;
    Ok(Json(assignment.into()))
}

/// Delete an assignment
#[utoipa::path(
    delete,
    path = "/api/admin/assignments/{id}",
    params(
        ("id" = i32, Path, description = "Assignment ID")
    ),
    responses(
        (status = 200, description = "Assignment deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "Assignment not found")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn delete_assignment(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    AssignmentRepository::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("Assignment deleted successfully")))
}
