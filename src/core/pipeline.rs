use crate::core::goal_interpreter::GoalInterpreter;
use crate::core::resource_lookup::ResourceLookup;
use crate::core::roadmap_generator::RoadmapGenerator;
use crate::core::timeline;
use crate::core::{LearningPlan, ModelClient};
use crate::utils::error::Result;
use crate::utils::rate_limit::FixedIntervalLimiter;
use std::sync::Arc;
use std::time::Duration;

/// Runs the four stages in order and assembles the final plan.
///
/// Strictly sequential: each stage consumes its predecessor's output,
/// and a stage-level failure halts the pipeline. Only resource lookup
/// tolerates failures, and only per topic.
pub struct PlannerEngine<M: ModelClient> {
    interpreter: GoalInterpreter<M>,
    generator: RoadmapGenerator<M>,
    lookup: ResourceLookup<M>,
    total_weeks: usize,
}

impl<M: ModelClient> PlannerEngine<M> {
    pub fn new(client: Arc<M>, pacing_delay: Duration, total_weeks: usize) -> Self {
        Self {
            interpreter: GoalInterpreter::new(client.clone()),
            generator: RoadmapGenerator::new(client.clone()),
            lookup: ResourceLookup::new(client, FixedIntervalLimiter::new(pacing_delay)),
            total_weeks,
        }
    }

    pub async fn run(&self, user_goal: &str) -> Result<LearningPlan> {
        tracing::info!("Step 1/4: Analyzing your goal...");
        let profile = self
            .interpreter
            .interpret(user_goal)
            .await
            .inspect_err(|e| tracing::error!("Step 1/4 failed: {}", e))?;
        tracing::info!(
            "Step 1 complete: goal '{}', {} core skills",
            profile.goal,
            profile.core_skills.len()
        );

        tracing::info!("Step 2/4: Generating a detailed topic roadmap...");
        let roadmap = self
            .generator
            .generate(&profile)
            .await
            .inspect_err(|e| tracing::error!("Step 2/4 failed: {}", e))?;
        tracing::info!("Step 2 complete: {} weekly topics", roadmap.len());

        tracing::info!("Step 3/4: Finding learning resources (this is the slow step)...");
        let resources = self
            .lookup
            .find_resources(&roadmap)
            .await
            .inspect_err(|e| tracing::error!("Step 3/4 failed: {}", e))?;
        tracing::info!("Step 3 complete: {} resource sets", resources.len());

        tracing::info!(
            "Step 4/4: Compressing roadmap into a {}-week timeline...",
            self.total_weeks
        );
        let timeline = timeline::compress(&roadmap, self.total_weeks);
        tracing::info!("Step 4 complete: {} timeline entries", timeline.len());

        Ok(LearningPlan {
            goal: profile.goal,
            skills: profile.core_skills,
            timeline,
            resources,
        })
    }
}
