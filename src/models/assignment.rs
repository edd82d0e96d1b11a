use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Join row linking one project to one user with a role label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assignment {
    pub id: i32,
    pub project_id: i32,
    pub user_id: i32,
    pub role: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateAssignment {
    pub project_id: i32,
    pub user_id: i32,
    pub role: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateAssignment {
    pub project_id: Option<i32>,
    pub user_id: Option<i32>,
    pub role: Option<String>,
}
