use crate::core::{ModelClient, ResourceEntry, RoadmapEntry};
use crate::utils::error::{PlannerError, Result};
use crate::utils::json_extract::extract_json_object;
use crate::utils::rate_limit::FixedIntervalLimiter;
use std::sync::Arc;

/// Stage 3: one model call per roadmap topic, serialized through the
/// rate limiter. Deliberately not batched: one topic per prompt gives
/// far more reliable JSON than asking for the whole list at once.
pub struct ResourceLookup<M: ModelClient> {
    client: Arc<M>,
    limiter: FixedIntervalLimiter,
}

impl<M: ModelClient> ResourceLookup<M> {
    pub fn new(client: Arc<M>, limiter: FixedIntervalLimiter) -> Self {
        Self { client, limiter }
    }

    /// Walks the roadmap in order. Every call acquires a pacing slot
    /// first, including calls that go on to fail, so a failed topic
    /// still counts against the rate budget. Per-topic failures are
    /// logged and skipped; the result may be shorter than the input.
    pub async fn find_resources(&self, roadmap: &[RoadmapEntry]) -> Result<Vec<ResourceEntry>> {
        if roadmap.is_empty() {
            tracing::info!("No topics in roadmap, skipping resource lookup");
            return Ok(Vec::new());
        }

        let total = roadmap.len();
        tracing::info!("Finding resources for {} topics (paced)", total);

        let mut resources = Vec::with_capacity(total);
        for (i, entry) in roadmap.iter().enumerate() {
            tracing::info!("Searching resources for '{}' ({}/{})", entry.topic, i + 1, total);

            self.limiter.acquire().await;
            match self.find_single(&entry.topic).await {
                Ok(resource) => resources.push(resource),
                Err(e) => {
                    tracing::warn!("Skipping topic '{}': {}", entry.topic, e);
                }
            }
        }

        tracing::info!(
            "Resource lookup complete: {}/{} topics resolved",
            resources.len(),
            total
        );
        Ok(resources)
    }

    async fn find_single(&self, topic: &str) -> Result<ResourceEntry> {
        let prompt = build_prompt(topic);
        let raw = self.client.call(&prompt).await?;

        let json_text = extract_json_object(&raw)
            .ok_or_else(|| PlannerError::malformed("resource lookup", &raw))?;

        serde_json::from_str::<ResourceEntry>(json_text)
            .map_err(|_| PlannerError::malformed("resource lookup", &raw))
    }
}

fn build_prompt(topic: &str) -> String {
    format!(
        r#"Find the best beginner-friendly resources for this single topic: "{topic}"

Suggest exactly:
1. One high-quality YouTube tutorial or channel (just the name).
2. One comprehensive online course (e.g., Udemy, Coursera, or official docs).
3. One practical GitHub project or repository (just the name or "user/repo").

Respond ONLY with the raw JSON object, without markdown code fences (```)
or any other explanatory text. The format must be:
{{
    "topic": "{topic}",
    "youtube": "...",
    "course": "...",
    "github": "..."
}}"#
    )
}
