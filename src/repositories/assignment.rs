use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, Set,
};

use crate::entity::project_assignment::{self, ActiveModel, Column, Entity as AssignmentEntity};
use crate::error::{AppError, AppResult};
use crate::models::{Assignment, CreateAssignment, UpdateAssignment};
use crate::repositories::{ProjectRepository, Repository, UserRepository};

/// Assignment repository for database operations
pub struct AssignmentRepository;

#[async_trait]
impl Repository<Assignment> for AssignmentRepository {
    async fn find_by_id(db: &DatabaseConnection, id: i32) -> AppResult<Assignment> {
        let model = AssignmentEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment".to_string()))?;

        Ok(model.into())
    }

    async fn delete(db: &DatabaseConnection, id: i32) -> AppResult<()> {
        let result = AssignmentEntity::delete_by_id(id).exec(db).await?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound("Assignment".to_string()));
        }

        Ok(())
    }

    async fn list(db: &DatabaseConnection) -> AppResult<Vec<Assignment>> {
        let models = AssignmentEntity::find()
            .order_by_asc(Column::Id)
            .all(db)
            .await?;

        Ok(models.into_iter().map(|m| m.into()).collect())
    }

    async fn count(db: &DatabaseConnection) -> AppResult<u64> {
        let count = AssignmentEntity::find().count(db).await?;
        Ok(count)
    }
}

impl AssignmentRepository {
    /// Create a new assignment. Both referenced rows must exist; duplicate
    /// (project_id, user_id) pairs are allowed.
    pub async fn create(db: &DatabaseConnection, input: &CreateAssignment) -> AppResult<Assignment> {
        if !ProjectRepository::exists(db, input.project_id).await? {
            return Err(AppError::NotFound("Project".to_string()));
        }
        if !UserRepository::exists(db, input.user_id).await? {
            return Err(AppError::NotFound("User".to_string()));
        }

        let model = ActiveModel {
            project_id: Set(input.project_id),
            user_id: Set(input.user_id),
            role: Set(input.role.clone()),
            created_at: Set(time::OffsetDateTime::now_utc()),
            updated_at: Set(time::OffsetDateTime::now_utc()),
            ..Default::default()
        };

        let result = model.insert(db).await?;
        Ok(result.into())
    }

    /// Partial update: only fields present in the input are written.
    /// Re-points are checked against existing rows.
    pub async fn update(
        db: &DatabaseConnection,
        id: i32,
        input: &UpdateAssignment,
    ) -> AppResult<Assignment> {
        let model = AssignmentEntity::find_by_id(id)
            .one(db)
            .await?
            .ok_or_else(|| AppError::NotFound("Assignment".to_string()))?;

        if let Some(project_id) = input.project_id {
            if !ProjectRepository::exists(db, project_id).await? {
                return Err(AppError::NotFound("Project".to_string()));
            }
        }
        if let Some(user_id) = input.user_id {
            if !UserRepository::exists(db, user_id).await? {
                return Err(AppError::NotFound("User".to_string()));
            }
        }

        let mut active: ActiveModel = model.into();

        if let Some(project_id) = input.project_id {
            active.project_id = Set(project_id);
        }
        if let Some(user_id) = input.user_id {
            active.user_id = Set(user_id);
        }
        if let Some(role) = &input.role {
            active.role = Set(role.clone());
        }
        active.updated_at = Set(time::OffsetDateTime::now_utc());

        let result = active.update(db).await?;
        Ok(result.into())
    }
}

// Conversion from SeaORM model to our domain model
impl From<project_assignment::Model> for Assignment {
    fn from(m: project_assignment::Model) -> Self {
        Self {
            id: m.id,
            project_id: m.project_id,
            user_id: m.user_id,
            role: m.role,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}
