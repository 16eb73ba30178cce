pub mod agent;
pub mod coach;
pub mod flows;
pub mod report;
pub mod tooling;

#[cfg(test)]
pub(crate) mod testing;
