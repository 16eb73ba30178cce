//! Core of the nutricoach agents.
//!
//! A meal description is turned into structured nutrition data by one
//! tool-augmented conversation with a hosted model, and a second conversation
//! turns the totals plus a body profile into coaching text.

pub mod application;
pub mod config;
pub mod constants;
pub mod domain;
pub mod infrastructure;

pub use application::{agent, coach, flows, report, tooling};
pub use config::AppConfig;
pub use domain::{nutrition, profile, types};
pub use infrastructure::model;
