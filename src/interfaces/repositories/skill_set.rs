use async_trait::async_trait;
use uuid::Uuid;

use crate::{
    entities::skill_set::SkillSet,
    errors::AppError,
    repositories::sqlx_repo::SqlxSkillSetRepo,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SkillSetRepository: Send + Sync {
    async fn list_skill_sets(&self) -> Result<Vec<SkillSet>, AppError>;
    async fn get_skill_set_by_id(&self, id: &Uuid) -> Result<Option<SkillSet>, AppError>;
    async fn create_skill_set(&self, name: &str) -> Result<SkillSet, AppError>;
    async fn update_skill_set(&self, id: &Uuid, name: &str) -> Result<Option<SkillSet>, AppError>;
    async fn delete_skill_set(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxSkillSetRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxSkillSetRepo { pool }
    }
}

#[async_trait]
impl SkillSetRepository for SqlxSkillSetRepo {
    async fn list_skill_sets(&self) -> Result<Vec<SkillSet>, AppError> {
        let skills = sqlx::query_as::<_, SkillSet>(
            "SELECT * FROM skill_sets ORDER BY created_at, name"
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn get_skill_set_by_id(&self, id: &Uuid) -> Result<Option<SkillSet>, AppError> {
        let skill = sqlx::query_as::<_, SkillSet>("SELECT * FROM skill_sets WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(skill)
    }

    async fn create_skill_set(&self, name: &str) -> Result<SkillSet, AppError> {
        let skill = sqlx::query_as::<_, SkillSet>(
            "INSERT INTO skill_sets (name) VALUES ($1) RETURNING *"
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(skill)
    }

    async fn update_skill_set(&self, id: &Uuid, name: &str) -> Result<Option<SkillSet>, AppError> {
        let skill = sqlx::query_as::<_, SkillSet>(
            "UPDATE skill_sets SET name = $1 WHERE id = $2 RETURNING *"
        )
        .bind(name)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(skill)
    }

    async fn delete_skill_set(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM skill_sets WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
