use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use teamforge::config::Config;
use teamforge::handlers::{
    AssignmentResponse, AuthResponse, CreateAssignmentRequest, CreateProjectRequest,
    CreateUserRequest, LoginRequest, MessageResponse, ProjectResponse, UpdateAssignmentRequest,
    UpdateProjectRequest, UpdateUserRequest,
};
use teamforge::models::UserResponse;
use teamforge::state::AppState;
use teamforge::{build_router, handlers};

/// Security scheme for Bearer token
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::auth::login,
        handlers::auth::me,
        handlers::user::list_users,
        handlers::user::create_user,
        handlers::user::update_user,
        handlers::user::delete_user,
        handlers::project::list_projects,
        handlers::project::create_project,
        handlers::project::update_project,
        handlers::project::delete_project,
        handlers::assignment::list_assignments,
        handlers::assignment::create_assignment,
        handlers::assignment::update_assignment,
        handlers::assignment::delete_assignment,
    ),
    components(schemas(
        LoginRequest,
        AuthResponse,
        UserResponse,
        CreateUserRequest,
        UpdateUserRequest,
        CreateProjectRequest,
        ProjectResponse,
        UpdateProjectRequest,
        CreateAssignmentRequest,
        AssignmentResponse,
        UpdateAssignmentRequest,
        MessageResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Admin", description = "Administrative user, project and assignment management")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Load configuration
    let config = Config::from_env()?;
    let addr = config.server_addr();

    // Initialize application state (connects to the database, runs migrations)
    tracing::info!("Connecting to database...");
    let state = AppState::new(config).await?;
    tracing::info!("Database connection established");

    // Build the main application router
    let app = build_router(state)
        // Add Swagger UI
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Server started on http://{}", addr);
    tracing::info!("Swagger UI: http://{}/swagger-ui/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
