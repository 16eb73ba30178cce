//! # Agent Module
//!
//! Runs one tool-augmented conversation with a hosted model.
//!
//! ## Agent Loop
//!
//! 1. Send the conversation (plus tool declarations while rounds remain)
//! 2. If the response holds tool calls and a round is left, execute every
//!    call in order, append the model turn and one tool-result turn, repeat
//! 3. Otherwise the response text is final

mod errors;
mod models;
mod runner;


pub use errors::AgentError;
pub use models::{AgentOptions, AgentOutcome, AgentStep};
pub use runner::Agent;
