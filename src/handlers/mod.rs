pub mod assignment;
pub mod auth;
pub mod common;
pub mod project;
pub mod user;

pub use assignment::{
    create_assignment, delete_assignment, list_assignments, update_assignment, AssignmentResponse,
    CreateAssignmentRequest, UpdateAssignmentRequest,
};
pub use auth::{login, me, AuthResponse, LoginRequest};
pub use common::MessageResponse;
pub use project::{
    create_project, delete_project, list_projects, update_project, CreateProjectRequest,
    ProjectResponse, UpdateProjectRequest,
};
pub use user::{
    create_user, delete_user, list_users, update_user, CreateUserRequest, UpdateUserRequest,
};
