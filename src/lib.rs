pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::gemini::GeminiClient;
pub use config::{CliConfig, PlannerConfig};
pub use core::pipeline::PlannerEngine;
pub use domain::model::LearningPlan;
pub use utils::error::{PlannerError, Result};
