// Library crate for the teamforge admin backend
// Exports modules for use by the server binary and tests

pub mod config;
pub mod entity;
pub mod error;
pub mod handlers;
pub mod middlewares;
pub mod models;
pub mod repositories;
pub mod services;
pub mod state;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::handlers::{
    create_assignment, create_project, create_user, delete_assignment, delete_project,
    delete_user, list_assignments, list_projects, list_users, login, me, update_assignment,
    update_project, update_user,
};
use crate::middlewares::auth_middleware;
use crate::state::AppState;

/// Build the application router with the given state
pub fn build_router(state: AppState) -> Router {
    // Administrative routes: every handler takes the AdminUser extractor,
    // so the role check runs after the principal is resolved
    let admin_routes = Router::new()
        // User management
        .route("/api/admin/users", get(list_users))
        .route("/api/admin/users", post(create_user))
        .route("/api/admin/users/{id}", put(update_user))
        .route("/api/admin/users/{id}", delete(delete_user))
        // Project management
        .route("/api/admin/projects", get(list_projects))
        .route("/api/admin/projects", post(create_project))
        .route("/api/admin/projects/{id}", put(update_project))
        .route("/api/admin/projects/{id}", delete(delete_project))
        // Assignment management
        .route("/api/admin/assignments", get(list_assignments))
        .route("/api/admin/assignments", post(create_assignment))
        .route("/api/admin/assignments/{id}", put(update_assignment))
        .route("/api/admin/assignments/{id}", delete(delete_assignment));

    // Protected routes (require authentication)
    let protected_routes = Router::new()
        .route("/api/auth/me", get(me))
        .merge(admin_routes)
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth_middleware,
        ));

    Router::new()
        .route("/", get(|| async { "teamforge admin backend" }))
        // Public auth routes
        .route("/api/auth/login", post(login))
        // Protected routes
        .merge(protected_routes)
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
