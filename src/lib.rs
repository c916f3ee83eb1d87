mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;

pub use domain::{entities, permissions, use_cases};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, db, utils};

use auth::jwt::JwtService;
use repositories::sqlx_repo::{SqlxProfileRepo, SqlxProjectRepo, SqlxSkillSetRepo, SqlxTeamRepo, SqlxUserRepo};
use use_cases::{
    auth::AuthHandler,
    profile::ProfileHandler,
    project::ProjectHandler,
    skill_set::SkillSetHandler,
    team::TeamHandler,
};

pub struct AppState {
    pub auth_handler: AppAuthHandler,
    pub profile_handler: AppProfileHandler,
    pub skill_set_handler: AppSkillSetHandler,
    pub project_handler: AppProjectHandler,
    pub team_handler: AppTeamHandler,
}

pub type AppAuthHandler = AuthHandler<SqlxUserRepo, JwtService>;
pub type AppProfileHandler = ProfileHandler<SqlxProfileRepo>;
pub type AppSkillSetHandler = SkillSetHandler<SqlxSkillSetRepo>;
pub type AppProjectHandler = ProjectHandler<SqlxProjectRepo>;
pub type AppTeamHandler = TeamHandler<SqlxTeamRepo>;

impl AppState {
    pub fn new(config: &settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let jwt_service = JwtService::new(config);

        AppState {
            auth_handler: AuthHandler::new(SqlxUserRepo::new(pool.clone()), jwt_service),
            profile_handler: ProfileHandler::new(SqlxProfileRepo::new(pool.clone())),
            skill_set_handler: SkillSetHandler::new(SqlxSkillSetRepo::new(pool.clone())),
            project_handler: ProjectHandler::new(SqlxProjectRepo::new(pool.clone())),
            team_handler: TeamHandler::new(SqlxTeamRepo::new(pool)),
        }
    }
}
