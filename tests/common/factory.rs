use uuid::Uuid;

use teamforge::entity::user::UserRole;
use teamforge::models::{Assignment, CreateAssignment, CreateProject, CreateUser, Project, User};
use teamforge::repositories::{AssignmentRepository, ProjectRepository, UserRepository};
use teamforge::services::AuthService;
use teamforge::state::AppState;

/// Authentication info for tests
#[allow(dead_code)]
pub struct TestAuth {
    pub user_id: i32,
    pub email: String,
    pub token: String,
}

impl TestAuth {
    /// Get the Authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

/// Factory for creating test data
pub struct Factory<'a> {
    state: &'a AppState,
}

#[allow(dead_code)]
impl<'a> Factory<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    async fn create_principal(&self, role: UserRole, is_active: bool) -> TestAuth {
        let email = format!("test-{}@example.com", Uuid::new_v4());
        let password = "TestPassword123!";

        let input = CreateUser {
            email: email.clone(),
            password: password.to_string(),
            is_active,
            role,
        };

        let password_hash = AuthService::hash_password(password).unwrap();
        let user = UserRepository::create(&self.state.db, &input, &password_hash)
            .await
            .unwrap();

        let token = AuthService::generate_token(user.id, &email, &self.state.config).unwrap();

        TestAuth {
            user_id: user.id,
            email,
            token,
        }
    }

    /// Create an admin and return auth info
    pub async fn create_admin(&self) -> TestAuth {
        self.create_principal(UserRole::Admin, true).await
    }

    /// Create a regular (non-admin) user and return auth info
    pub async fn create_user(&self) -> TestAuth {
        self.create_principal(UserRole::User, true).await
    }

    /// Create a user row with specific email and password
    pub async fn create_user_with_email(&self, email: &str, password: &str) -> User {
        let input = CreateUser {
            email: email.to_string(),
            password: password.to_string(),
            is_active: true,
            role: UserRole::User,
        };

        let password_hash = AuthService::hash_password(password).unwrap();
        UserRepository::create(&self.state.db, &input, &password_hash)
            .await
            .unwrap()
    }

    /// Create a deactivated user row
    pub async fn create_inactive_user(&self, email: &str, password: &str) -> User {
        let input = CreateUser {
            email: email.to_string(),
            password: password.to_string(),
            is_active: false,
            role: UserRole::User,
        };

        let password_hash = AuthService::hash_password(password).unwrap();
        UserRepository::create(&self.state.db, &input, &password_hash)
            .await
            .unwrap()
    }

    /// Create a test project owned by the given user
    pub async fn create_project(&self, created_by: i32) -> Project {
        let input = CreateProject {
            title: format!("Test Project {}", Uuid::new_v4()),
            description: "Test project description".to_string(),
            status: "planning".to_string(),
            technologies: "Rust,PostgreSQL".to_string(),
            required_team_size: 3,
        };

        ProjectRepository::create(&self.state.db, created_by, &input)
            .await
            .unwrap()
    }

    /// Create a test assignment
    pub async fn create_assignment(&self, project_id: i32, user_id: i32) -> Assignment {
        let input = CreateAssignment {
            project_id,
            user_id,
            role: "developer".to_string(),
        };

        AssignmentRepository::create(&self.state.db, &input)
            .await
            .unwrap()
    }
}
