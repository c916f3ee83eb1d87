pub mod entities;
pub mod permissions;
pub mod use_cases;
