use validator::Validate;

use crate::{
    entities::team::{Team, TeamRequest, TeamWrite},
    errors::AppError,
    repositories::team::{TeamRepository, DUPLICATE_NAME},
    utils::valid_uuid::valid_uuid,
};

const BLANK_NAME: &str = "This field may not be blank.";

/// Team operations. Teams carry no owner, so detail operations are open
/// to any authenticated user.
pub struct TeamHandler<R>
where
    R: TeamRepository,
{
    pub team_repo: R,
}

impl<R> TeamHandler<R>
where
    R: TeamRepository,
{
    pub fn new(team_repo: R) -> Self {
        TeamHandler { team_repo }
    }

    pub async fn list_teams(&self) -> Result<Vec<Team>, AppError> {
        self.team_repo.list_teams().await
    }

    pub async fn create_team(&self, request: TeamRequest) -> Result<Team, AppError> {
        let write = validated_write(request)?;

        if self.team_repo.team_exists_with_name(&write.name).await? {
            return Err(AppError::Conflict(DUPLICATE_NAME.into()));
        }

        let team = self.team_repo.create_team(&write).await?;

        tracing::info!(team_id = %team.id, "Team created");
        Ok(team)
    }

    pub async fn get_team(&self, id: &str) -> Result<Team, AppError> {
        let valid_id = valid_uuid(id)?;
        self.team_repo
            .get_team_by_id(&valid_id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn update_team(&self, id: &str, request: TeamRequest) -> Result<Team, AppError> {
        let valid_id = valid_uuid(id)?;
        let write = validated_write(request)?;

        self.team_repo
            .update_team(&valid_id, &write)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_team(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        if !self.team_repo.delete_team(&valid_id).await? {
            return Err(not_found());
        }

        tracing::info!(team_id = %valid_id, "Team deleted");
        Ok(())
    }
}

fn validated_write(request: TeamRequest) -> Result<TeamWrite, AppError> {
    request.validate()?;

    let write = TeamWrite::from(request);
    if write.name.is_empty() {
        return Err(AppError::field("name", BLANK_NAME));
    }
    Ok(write)
}

fn not_found() -> AppError {
    AppError::NotFound("Team not found".into())
}
