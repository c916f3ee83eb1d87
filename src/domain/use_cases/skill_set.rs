use validator::Validate;

use crate::{
    entities::skill_set::{SkillSet, SkillSetRequest},
    errors::AppError,
    repositories::skill_set::SkillSetRepository,
    utils::valid_uuid::valid_uuid,
};

const BLANK: &str = "This field may not be blank.";

pub struct SkillSetHandler<R>
where
    R: SkillSetRepository,
{
    pub skill_set_repo: R,
}

impl<R> SkillSetHandler<R>
where
    R: SkillSetRepository,
{
    pub fn new(skill_set_repo: R) -> Self {
        SkillSetHandler { skill_set_repo }
    }

    pub async fn list_skill_sets(&self) -> Result<Vec<SkillSet>, AppError> {
        self.skill_set_repo.list_skill_sets().await
    }

    pub async fn create_skill_set(&self, request: SkillSetRequest) -> Result<SkillSet, AppError> {
        let name = validated_name(&request)?;
        let skill = self.skill_set_repo.create_skill_set(&name).await?;

        tracing::info!(skill_set_id = %skill.id, "Skill set created");
        Ok(skill)
    }

    pub async fn get_skill_set(&self, id: &str) -> Result<SkillSet, AppError> {
        let valid_id = valid_uuid(id)?;
        self.skill_set_repo
            .get_skill_set_by_id(&valid_id)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn update_skill_set(&self, id: &str, request: SkillSetRequest) -> Result<SkillSet, AppError> {
        let valid_id = valid_uuid(id)?;
        let name = validated_name(&request)?;

        self.skill_set_repo
            .update_skill_set(&valid_id, &name)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_skill_set(&self, id: &str) -> Result<(), AppError> {
        let valid_id = valid_uuid(id)?;

        if !self.skill_set_repo.delete_skill_set(&valid_id).await? {
            return Err(not_found());
        }

        tracing::info!(skill_set_id = %valid_id, "Skill set deleted");
        Ok(())
    }
}

fn validated_name(request: &SkillSetRequest) -> Result<String, AppError> {
    request.validate()?;

    let name = request.name.trim();
    if name.is_empty() {
        return Err(AppError::field("name", BLANK));
    }
    Ok(name.to_string())
}

fn not_found() -> AppError {
    AppError::NotFound("Skill set not found".into())
}
