pub use super::project::Entity as Project;
pub use super::project_assignment::Entity as ProjectAssignment;
pub use super::user::Entity as User;
