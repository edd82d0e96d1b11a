use axum::{
    extract::{Path, State},
    Json,
};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::entity::user::UserRole;
use crate::error::{AppError, AppResult};
use crate::handlers::MessageResponse;
use crate::middlewares::AdminUser;
use crate::models::{CreateUser, UpdateUser, UserResponse};
use crate::repositories::{Repository, UserRepository};
use crate::services::AuthService;
use crate::state::AppState;

// ============ Request/Response DTOs ============

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateUserRequest {
    pub email: String,
    pub password: String,
    #[serde(default = "default_is_active")]
    pub is_active: bool,
    #[serde(default)]
    #[schema(value_type = String)]
    pub role: UserRole,
}

fn default_is_active() -> bool {
    true
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateUserRequest {
    pub email: Option<String>,
    pub is_active: Option<bool>,
    #[schema(value_type = Option<String>)]
    pub role: Option<UserRole>,
    pub password: Option<String>,
}

fn validate_email(email: &str) -> AppResult<()> {
    // Just the basic shape; the unique index does the heavy lifting
    let valid = email.split_once('@').is_some_and(|(local, host)| {
        !local.is_empty() && host.contains('.') && !host.starts_with('.') && !host.ends_with('.')
    });
    if !valid {
        return Err(AppError::Validation("Invalid email address".to_string()));
    }
    Ok(())
}

fn validate_password(password: &str) -> AppResult<()> {
    if password.len() < 8 {
        return Err(AppError::Validation(
            "Password must be at least 8 characters".to_string(),
        ));
    }
    Ok(())
}

// ============ Handlers ============

/// List all users
#[utoipa::path(
    get,
    path = "/api/admin/users",
    responses(
        (status = 200, description = "List of users", body = [UserResponse]),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn list_users(
    _admin: AdminUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserResponse>>> {
    let users = UserRepository::list(&state.db).await?;
    Ok(Json(users.into_iter().map(|u| u.into()).collect()))
}

/// Create a new user
#[utoipa::path(
    post,
    path = "/api/admin/users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 409, description = "Email already exists")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn create_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    validate_email(&payload.email)?;
    validate_password(&payload.password)?;

    // Hash password
    let password_hash = AuthService::hash_password(&payload.password)?;

    let create_user = CreateUser {
        email: payload.email,
        password: payload.password,
        is_active: payload.is_active,
        role: payload.role,
    };

    let user = UserRepository::create(&state.db, &create_user, &password_hash).await?;
    Ok(Json(user.into()))
}

/// Update a user (partial)
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already exists")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn update_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateUserRequest>,
) -> AppResult<Json<UserResponse>> {
    if let Some(email) = &payload.email {
        validate_email(email)?;
    }
    if let Some(password) = &payload.password {
        validate_password(password)?;
    }

    // Re-hash only when a new password was supplied
    let password_hash = match &payload.password {
        Some(password) => Some(AuthService::hash_password(password)?),
        None => None,
    };

    let update_user = UpdateUser {
        email: payload.email,
        is_active: payload.is_active,
        role: payload.role,
        password: payload.password,
    };

    let user =
        UserRepository::update(&state.db, id, &update_user, password_hash.as_deref()).await?;
    Ok(Json(user.into()))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/admin/users/{id}",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted successfully", body = MessageResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Admin privileges required"),
        (status = 404, description = "User not found"),
        (status = 409, description = "User still owns projects")
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Admin"
)]
pub async fn delete_user(
    _admin: AdminUser,
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    UserRepository::delete(&state.db, id).await?;
    Ok(Json(MessageResponse::new("User deleted successfully")))
}
