pub mod toml_config;

use crate::adapters::gemini::{DEFAULT_API_BASE, DEFAULT_MODEL};
use crate::core::ConfigProvider;
use crate::utils::error::{PlannerError, Result};
use crate::utils::rate_limit::FixedIntervalLimiter;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;
use std::time::Duration;
use self::toml_config::FileConfig;

#[derive(Debug, Clone, Parser)]
#[command(name = "skillmap")]
#[command(about = "Turn a career goal into a weekly learning roadmap with resources")]
pub struct CliConfig {
    /// Free-text learning goal; prompts interactively when omitted
    pub goal: Option<String>,

    /// Number of weeks to compress the timeline into
    #[arg(long)]
    pub weeks: Option<usize>,

    /// Seconds to wait between resource-lookup model calls
    #[arg(long)]
    pub delay_secs: Option<u64>,

    /// Gemini model name
    #[arg(long)]
    pub model: Option<String>,

    /// Base URL of the generative language API
    #[arg(long)]
    pub api_base: Option<String>,

    /// Optional TOML config file; CLI flags take precedence over it
    #[arg(long)]
    pub config: Option<String>,

    /// Emit the plan as JSON instead of rendered text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

/// Fully resolved runtime configuration: CLI flags over file values over
/// defaults, with the credential injected once at startup. Stages only
/// ever see this, never the environment.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    api_key: String,
    api_base: String,
    model: String,
    total_weeks: usize,
    pacing_delay: Duration,
}

impl PlannerConfig {
    pub fn resolve(cli: &CliConfig, file: Option<FileConfig>, api_key: String) -> Result<Self> {
        if api_key.trim().is_empty() {
            return Err(PlannerError::MissingCredential);
        }

        let file = file.unwrap_or_default();
        let file_model = file.model.unwrap_or_default();
        let file_pacing = file.pacing.unwrap_or_default();
        let file_plan = file.plan.unwrap_or_default();

        Ok(Self {
            api_key,
            api_base: cli
                .api_base
                .clone()
                .or(file_model.api_base)
                .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
            model: cli
                .model
                .clone()
                .or(file_model.name)
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            total_weeks: cli
                .weeks
                .or(file_plan.weeks)
                .unwrap_or(crate::core::timeline::DEFAULT_TOTAL_WEEKS),
            pacing_delay: cli
                .delay_secs
                .or(file_pacing.delay_secs)
                .map(Duration::from_secs)
                .unwrap_or(FixedIntervalLimiter::DEFAULT_INTERVAL),
        })
    }
}

impl ConfigProvider for PlannerConfig {
    fn api_key(&self) -> &str {
        &self.api_key
    }

    fn api_base(&self) -> &str {
        &self.api_base
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn total_weeks(&self) -> usize {
        self.total_weeks
    }

    fn pacing_delay(&self) -> Duration {
        self.pacing_delay
    }
}

impl Validate for PlannerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("api_key", &self.api_key)?;
        validate_non_empty_string("model", &self.model)?;
        validate_url("api_base", &self.api_base)?;
        validate_positive_number("weeks", self.total_weeks, 1)?;
        Ok(())
    }
}
