pub mod nutrition;
pub mod profile;
pub mod types;
