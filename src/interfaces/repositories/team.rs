use async_trait::async_trait;
use sqlx::{Postgres, Transaction};
use uuid::Uuid;

use crate::{
    entities::team::{Team, TeamWrite},
    errors::{is_foreign_key_violation, unique_violation, AppError},
    repositories::sqlx_repo::SqlxTeamRepo,
};

pub const DUPLICATE_NAME: &str = "A team with this name already exists";
pub const UNKNOWN_MEMBER: &str = "Invalid pk - object does not exist.";

const SELECT_TEAM: &str = r#"
    SELECT
        t.id,
        t.name,
        t.description,
        ARRAY(
            SELECT tm.user_id FROM team_members tm
            WHERE tm.team_id = t.id
            ORDER BY tm.user_id
        ) AS members,
        t.created_at,
        t.updated_at
    FROM teams t
"#;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    async fn list_teams(&self) -> Result<Vec<Team>, AppError>;
    async fn get_team_by_id(&self, id: &Uuid) -> Result<Option<Team>, AppError>;
    async fn team_exists_with_name(&self, name: &str) -> Result<bool, AppError>;
    async fn create_team(&self, team: &TeamWrite) -> Result<Team, AppError>;
    async fn update_team(&self, id: &Uuid, team: &TeamWrite) -> Result<Option<Team>, AppError>;
    async fn delete_team(&self, id: &Uuid) -> Result<bool, AppError>;
}

impl SqlxTeamRepo {
    pub fn new(pool: sqlx::PgPool) -> Self {
        SqlxTeamRepo { pool }
    }

    async fn replace_members(
        tx: &mut Transaction<'_, Postgres>,
        team_id: &Uuid,
        members: &[Uuid],
    ) -> Result<(), AppError> {
        sqlx::query("DELETE FROM team_members WHERE team_id = $1")
            .bind(team_id)
            .execute(&mut **tx)
            .await?;

        if members.is_empty() {
            return Ok(());
        }

        sqlx::query(
            r#"
            INSERT INTO team_members (team_id, user_id)
            SELECT $1, UNNEST($2::uuid[])
            "#,
        )
        .bind(team_id)
        .bind(members)
        .execute(&mut **tx)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                AppError::field("members", UNKNOWN_MEMBER)
            } else {
                AppError::from(e)
            }
        })?;

        Ok(())
    }
}

fn map_name_conflict(e: sqlx::Error) -> AppError {
    match unique_violation(&e).as_deref() {
        Some("teams_name_key") => AppError::Conflict(DUPLICATE_NAME.into()),
        _ => AppError::from(e),
    }
}

#[async_trait]
impl TeamRepository for SqlxTeamRepo {
    async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        let teams = sqlx::query_as::<_, Team>(&format!("{SELECT_TEAM} ORDER BY t.created_at"))
            .fetch_all(&self.pool)
            .await?;

        Ok(teams)
    }

    async fn get_team_by_id(&self, id: &Uuid) -> Result<Option<Team>, AppError> {
        let team = sqlx::query_as::<_, Team>(&format!("{SELECT_TEAM} WHERE t.id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(team)
    }

    async fn team_exists_with_name(&self, name: &str) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS(SELECT 1 FROM teams WHERE name = $1)"
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }

    async fn create_team(&self, team: &TeamWrite) -> Result<Team, AppError> {
        let mut tx = self.pool.begin().await?;

        let id: Uuid = sqlx::query_scalar(
            "INSERT INTO teams (name, description) VALUES ($1, $2) RETURNING id"
        )
        .bind(&team.name)
        .bind(&team.description)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_name_conflict)?;

        Self::replace_members(&mut tx, &id, &team.members).await?;
        tx.commit().await?;

        self.get_team_by_id(&id)
            .await?
            .ok_or_else(|| AppError::InternalError("Team vanished after insert".into()))
    }

    async fn update_team(&self, id: &Uuid, team: &TeamWrite) -> Result<Option<Team>, AppError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
            UPDATE teams
            SET
                name = $1,
                description = $2,
                updated_at = NOW()
            WHERE id = $3
            "#,
        )
        .bind(&team.name)
        .bind(&team.description)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(map_name_conflict)?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        Self::replace_members(&mut tx, id, &team.members).await?;
        tx.commit().await?;

        self.get_team_by_id(id).await
    }

    async fn delete_team(&self, id: &Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
