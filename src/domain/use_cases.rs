pub mod auth;
pub mod extractors;
pub mod profile;
pub mod project;
pub mod skill_set;
pub mod team;
