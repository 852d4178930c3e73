use crate::core::{ModelClient, SkillProfile};
use crate::utils::error::{PlannerError, Result};
use crate::utils::json_extract::extract_json_object;
use std::sync::Arc;

const STAGE: &str = "goal interpreter";

/// Stage 1: free-text career goal → clarified goal + five core skills.
pub struct GoalInterpreter<M: ModelClient> {
    client: Arc<M>,
}

impl<M: ModelClient> GoalInterpreter<M> {
    pub fn new(client: Arc<M>) -> Self {
        Self { client }
    }

    pub async fn interpret(&self, user_goal: &str) -> Result<SkillProfile> {
        let prompt = build_prompt(user_goal);
        tracing::debug!("Goal interpreter prompt: {} chars", prompt.len());

        let raw = self.client.call(&prompt).await?;
        tracing::debug!("Goal interpreter raw response: {} chars", raw.len());

        let json_text =
            extract_json_object(&raw).ok_or_else(|| PlannerError::malformed(STAGE, &raw))?;

        // Typed deserialization: a response that parses as JSON but lacks
        // `goal` or `core_skills` fails here, at the producing stage.
        serde_json::from_str::<SkillProfile>(json_text)
            .map_err(|_| PlannerError::malformed(STAGE, &raw))
    }
}

fn build_prompt(user_goal: &str) -> String {
    format!(
        r#"User Goal: {user_goal}
Extract the main career path and list 5 core subskills.
Respond ONLY with the raw JSON object, without markdown code fences (```),
or any other explanatory text.
The JSON structure must be:
{{
    "goal": "....",
    "core_skills": ["", "", "", "", ""]
}}"#
    )
}
