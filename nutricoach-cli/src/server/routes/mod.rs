pub mod consult;
pub mod health;
