pub mod auth;
pub mod home;
pub mod json_error;
pub mod profiles;
pub mod projects;
pub mod skill_sets;
pub mod system;
pub mod teams;
pub mod users;
