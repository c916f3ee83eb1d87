use uuid::Uuid;
use validator::Validate;

use crate::{
    entities::project::{Project, ProjectRequest, ProjectWrite},
    errors::AppError,
    permissions::{require_owner, ACCESS_DENIED, DELETE_DENIED},
    repositories::project::{ProjectRepository, DUPLICATE_TITLE},
    utils::valid_uuid::valid_uuid,
};

const BLANK_TITLE: &str = "This field may not be blank.";

pub struct ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub project_repo: R,
}

impl<R> ProjectHandler<R>
where
    R: ProjectRepository,
{
    pub fn new(project_repo: R) -> Self {
        ProjectHandler { project_repo }
    }

    /// Lists every project, regardless of author
    pub async fn list_projects(&self) -> Result<Vec<Project>, AppError> {
        self.project_repo.list_projects().await
    }

    /// Creates a project authored by the requesting user.
    /// The title check runs before the insert; the unique constraint
    /// catches a concurrent insert of the same title.
    pub async fn create_project(&self, author_id: &Uuid, request: ProjectRequest) -> Result<Project, AppError> {
        let write = validated_write(request)?;

        if self.project_repo.project_exists_with_title(&write.title).await? {
            return Err(AppError::Conflict(DUPLICATE_TITLE.into()));
        }

        let project = self.project_repo.create_project(author_id, &write).await?;

        tracing::info!(project_id = %project.id, %author_id, "Project created");
        Ok(project)
    }

    pub async fn get_project(&self, requester_id: &Uuid, id: &str) -> Result<Project, AppError> {
        let project = self.get_project_by_id(id).await?;
        require_owner(requester_id, &project.author_id, ACCESS_DENIED)?;
        Ok(project)
    }

    pub async fn update_project(
        &self,
        requester_id: &Uuid,
        id: &str,
        request: ProjectRequest,
    ) -> Result<Project, AppError> {
        let project = self.get_project_by_id(id).await?;
        require_owner(requester_id, &project.author_id, ACCESS_DENIED)?;

        let write = validated_write(request)?;

        self.project_repo
            .update_project(&project.id, &write)
            .await?
            .ok_or_else(not_found)
    }

    pub async fn delete_project(&self, requester_id: &Uuid, id: &str) -> Result<(), AppError> {
        let project = self.get_project_by_id(id).await?;
        require_owner(requester_id, &project.author_id, DELETE_DENIED)?;

        if !self.project_repo.delete_project(&project.id).await? {
            return Err(not_found());
        }

        tracing::info!(project_id = %project.id, "Project deleted");
        Ok(())
    }

    /// Lookup helper: malformed or unknown ids are both a 404
    async fn get_project_by_id(&self, id: &str) -> Result<Project, AppError> {
        let valid_id = valid_uuid(id)?;
        self.project_repo
            .get_project_by_id(&valid_id)
            .await?
            .ok_or_else(not_found)
    }
}

fn validated_write(request: ProjectRequest) -> Result<ProjectWrite, AppError> {
    request.validate()?;

    let write = ProjectWrite::from(request);
    if write.title.is_empty() {
        return Err(AppError::field("title", BLANK_TITLE));
    }
    Ok(write)
}

fn not_found() -> AppError {
    AppError::NotFound("Project not found".into())
}
