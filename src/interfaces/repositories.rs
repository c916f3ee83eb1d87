pub mod profile;
pub mod project;
pub mod skill_set;
pub mod sqlx_repo;
pub mod team;
pub mod token;
pub mod user;
