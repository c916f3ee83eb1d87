use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::profile::{ProfileRequest, ProfileWrite, UserProfile},
    errors::AppError,
    repositories::profile::ProfileRepository,
    utils::valid_uuid::valid_uuid,
};

pub struct ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub profile_repo: R,
}

impl<R> ProfileHandler<R>
where
    R: ProfileRepository,
{
    pub fn new(profile_repo: R) -> Self {
        ProfileHandler { profile_repo }
    }

    pub async fn list_profiles(&self) -> Result<Vec<UserProfile>, AppError> {
        self.profile_repo.list_profiles().await
    }

    /// Creates the profile of the requesting user
    pub async fn create_profile(&self, user_id: &Uuid, request: ProfileRequest) -> Result<UserProfile, AppError> {
        request.validate()?;

        let profile = self.profile_repo
            .create_profile(user_id, &ProfileWrite::from(request))
            .await?;

        tracing::info!(profile_id = %profile.id, %user_id, "Profile created");
        Ok(profile)
    }

    pub async fn get_profile(&self, id: &str) -> Result<UserProfile, AppError> {
        let valid_id = valid_uuid(id)?;
        self.profile_repo
            .get_profile_by_id(&valid_id)
            .await?
            .ok_or_else(not_found)
    }

    /// Replaces the editable fields and the skill list of a profile
    pub async fn update_profile(&self, id: &str, request: ProfileRequest) -> Result<UserProfile, AppError> {
        let valid_id = valid_uuid(id)?;
        request.validate()?;

        self.profile_repo
            .update_profile(&valid_id, &ProfileWrite::from(request))
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_profile(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        if !self.profile_repo.delete_profile(&valid_id).await? {
            return Err(not_found());
        }

        tracing::info!(profile_id = %valid_id, "Profile deleted");
        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Profile not found".into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use crate::repositories::profile::MockProfileRepository;

    fn profile(user_id: Uuid, write: &ProfileWrite) -> UserProfile {
        UserProfile {
            id: Uuid::new_v4(),
            user_id,
            bio: write.bio.clone(),
            location: write.location.clone(),
            github_url: write.github_url.clone(),
            skills: write.skills.clone(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[actix_rt::test]
    async fn create_binds_profile_to_requester() {
        let user_id = Uuid::new_v4();
        let mut repo = MockProfileRepository::new();
        repo.expect_create_profile()
            .times(1)
            .returning(|user_id, write| Ok(profile(*user_id, write)));

        let handler = ProfileHandler::new(repo);
        let created = handler
            .create_profile(&user_id, ProfileRequest { bio: "Rustacean".into(), ..Default::default() })
            .await
            .unwrap();

        assert_eq!(created.user_id, user_id);
        assert_eq!(created.bio, "Rustacean");
    }

    #[actix_rt::test]
    async fn invalid_url_is_rejected_before_storage() {
        let mut repo = MockProfileRepository::new();
        repo.expect_create_profile().never();

        let handler = ProfileHandler::new(repo);
        let request = ProfileRequest { github_url: Some("nope".into()), ..Default::default() };
        assert!(matches!(
            handler.create_profile(&Uuid::new_v4(), request).await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_rt::test]
    async fn update_of_missing_profile_is_not_found() {
        let mut repo = MockProfileRepository::new();
        repo.expect_update_profile().returning(|_, _| Ok(None));

        let handler = ProfileHandler::new(repo);
        let result = handler
            .update_profile(&Uuid::new_v4().to_string(), ProfileRequest::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
