use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::project::{Project, ProjectWrite},
    errors::{foreign_key_violation, unique_violation, AppError, AuthError},
    repositories::sqlx_repo::SqlxProjectRepo,
};

pub const DUPLICATE_TITLE: &str = "A project with this title already exists";

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError>;
    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError>;
    async fn project_exists_with_title(&self, title: &str) -> Result<bool, AppError>;
    async fn create_project(&self, author_id: &Uuid, project: &ProjectWrite) -> Result<Project, AppError>;
    async fn update_project(&self, id: &Uuid, project: &ProjectWrite) -> Result<Option<Project>, AppError>;
    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxProjectRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProjectRepo { pool }
    }
}

/// A token can outlive its user; writing a project for that user is an
/// identity failure, not a conflict.
fn map_write_error(e: sqlx::Error) -> AppError {
    if foreign_key_violation(&e).as_deref() == Some("projects_author_id_fkey") {
        tracing::warn!("Project write for an author that no longer exists");
        return AuthError::InvalidUserId.into();
    }

    match unique_violation(&e).as_deref() {
        Some("projects_title_key") => AppError::Conflict(DUPLICATE_TITLE.into()),
        _ => AppError::from(e),
    }
}

#[async_trait]
impl ProjectRepository for SqlxProjectRepo {
    async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        let projects = sqlx::query_as::<_, Project>(
            "SELECT * FROM projects ORDER BY created_at"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn get_project_by_id(&self, id: &Uuid) -> Result<Option<Project>, AppError> {
        let project = sqlx::query_as::<_, Project>("SELECT * FROM projects WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(project)
    }

    async fn project_exists_with_title(&self, title: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM projects WHERE title = $1)"
        )
        .bind(title)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_project(&self, author_id: &Uuid, project: &ProjectWrite) -> Result<Project, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            INSERT INTO projects (title, description, author_id)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(author_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn update_project(&self, id: &Uuid, project: &ProjectWrite) -> Result<Option<Project>, AppError> {
        sqlx::query_as::<_, Project>(
            r#"
            UPDATE projects
            SET
                title = $1,
                description = $2,
                updated_at = NOW()
            WHERE id = $3
            RETURNING *
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_write_error)
    }

    async fn delete_project(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
