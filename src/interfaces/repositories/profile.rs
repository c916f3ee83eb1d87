use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    entities::profile::{ProfileWrite, UserProfile},
    errors::{foreign_key_violation, is_foreign_key_violation, unique_violation, AppError, AuthError},
    repositories::sqlx_repo::SqlxProfileRepo,
};

pub const DUPLICATE_PROFILE: &str = "user profile with this user already exists.";
pub const UNKNOWN_PK: &str = "Invalid pk - object does not exist.";

const SELECT_PROFILE: &str = r#"
    SELECT
        p.id,
        p.user_id,
        p.bio,
        p.location,
        p.github_url,
        ARRAY(
            SELECT ps.skill_set_id FROM profile_skills ps
            WHERE ps.profile_id = p.id
            ORDER BY ps.skill_set_id
        ) AS skills,
        p.created_at,
        p.updated_at
    FROM user_profiles p
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProfileRepository: Send + Sync {
    async fn list_profiles(&self) -> Result<Vec<UserProfile>, AppError>;
    async fn get_profile_by_id(&self, id: &Uuid) -> Result<Option<UserProfile>, AppError>;
    async fn create_profile(&self, user_id: &Uuid, profile: &ProfileWrite) -> Result<UserProfile, AppError>;
    async fn update_profile(&self, id: &Uuid, profile: &ProfileWrite) -> Result<Option<UserProfile>, AppError>;
    async fn delete_profile(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxProfileRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxProfileRepo { pool }
    }

    async fn replace_skills(
        tx: &mut Transaction<'_, Postgres>,
        profile_id: &Uuid,
        skills: &[Uuid],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM profile_skills WHERE profile_id = $1")
            .bind(profile_id)
            .execute(&mut **tx)
            .await?;

        if skills.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO profile_skills (profile_id, skill_set_id)
            SELECT $1, UNNEST($2::uuid[])
            "#,
        )
        .bind(profile_id)
        .bind(skills)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::field("skills", UNKNOWN_PK)
            } else {
                AppError::from(e)
            }
        })?;

        Ok(())
    }
}

#[async_trait]
impl ProfileRepository for SqlxProfileRepo {
    async fn list_profiles(&self) -> Result<Vec<UserProfile>, AppError> {
        let profiles = sqlx::query_as::<_, UserProfile>(
            &format!("{SELECT_PROFILE} ORDER BY p.created_at")
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(profiles)
    }

    async fn get_profile_by_id(&self, id: &Uuid) -> Result<Option<UserProfile>, AppError> {
        let profile = sqlx::query_as::<_, UserProfile>(
            &format!("{SELECT_PROFILE} WHERE p.id = $1")
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profile)
    }

    async fn create_profile(&self, user_id: &Uuid, profile: &ProfileWrite) -> Result<UserProfile, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            r#"
            INSERT INTO user_profiles (user_id, bio, location, github_url)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(user_id)
        .bind(&profile.bio)
        .bind(&profile.location)
        .bind(&profile.github_url)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if foreign_key_violation(&e).as_deref() == Some("user_profiles_user_id_fkey") {
                tracing::warn!("Profile write for a user that no longer exists");
                return AppError::from(AuthError::InvalidUserId);
            }
            match unique_violation(&e).as_deref() {
                Some("user_profiles_user_id_key") => AppError::field("user", DUPLICATE_PROFILE),
                _ => AppError::from(e),
            }
        })?;

        Self::replace_skills(&mut tx, &id, &profile.skills).await?;
        tx.commit().await?;

        self.get_profile_by_id(&id)
            .await?
            .ok_or_else(|| AppError::InternalError("Profile vanished after insert".into()))
    }

    async fn update_profile(&self, id: &Uuid, profile: &ProfileWrite) -> Result<Option<UserProfile>, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE user_profiles
            SET
                bio = $1,
                location = $2,
                github_url = $3,
                updated_at = NOW()
            WHERE id = $4
            "#,
        )
        .bind(&profile.bio)
        .bind(&profile.location)
        .bind(&profile.github_url)
        .bind(id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::replace_skills(&mut tx, id, &profile.skills).await?;
        tx.commit().await?;

        self.get_profile_by_id(id).await
    }

    async fn delete_profile(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM user_profiles WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
