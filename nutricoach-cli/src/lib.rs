//! Command-line and REST front end for the nutricoach agents.

pub mod cli;
pub mod server;
