//! Local tools the model may call, and the registry that dispatches them.

mod energy;
mod error;
mod nutrition;
mod registry;
pub mod similarity;

pub use energy::{EnergyCalculatorTool, EnergyEstimate, compute_energy};
pub use error::ToolError;
pub use nutrition::{LOOKUP_CUTOFF, LookupOutcome, NutritionLookupTool, lookup_food};
pub use registry::{Tool, ToolRegistry};
