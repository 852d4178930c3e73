use crate::core::{ModelClient, Roadmap, RoadmapEntry, SkillProfile};
use crate::utils::error::{PlannerError, Result};
use crate::utils::json_extract::extract_json_object;
use std::sync::Arc;

const STAGE: &str = "roadmap generator";

/// Stage 2: skill profile → ordered weekly topic roadmap.
pub struct RoadmapGenerator<M: ModelClient> {
    client: Arc<M>,
}

impl<M: ModelClient> RoadmapGenerator<M> {
    pub fn new(client: Arc<M>) -> Self {
        Self { client }
    }

    /// Fails fast on an empty skill list; no model call is made in that
    /// case. Week numbering, skill coverage, and non-emptiness of the
    /// returned roadmap are left to the model.
    pub async fn generate(&self, profile: &SkillProfile) -> Result<Vec<RoadmapEntry>> {
        if profile.core_skills.is_empty() {
            return Err(PlannerError::ValidationError {
                message: "skill profile has no core_skills".to_string(),
            });
        }

        let prompt = build_prompt(&profile.goal, &profile.core_skills);
        tracing::debug!("Roadmap generator prompt: {} chars", prompt.len());

        let raw = self.client.call(&prompt).await?;
        tracing::debug!("Roadmap generator raw response: {} chars", raw.len());

        let json_text =
            extract_json_object(&raw).ok_or_else(|| PlannerError::malformed(STAGE, &raw))?;

        let roadmap: Roadmap = serde_json::from_str(json_text)
            .map_err(|_| PlannerError::malformed(STAGE, &raw))?;
        Ok(roadmap.roadmap)
    }
}

fn build_prompt(goal: &str, core_skills: &[String]) -> String {
    let skills_str = core_skills.join(", ");
    format!(
        r#"You are an expert curriculum planner. Your task is to create a detailed,
structured weekly roadmap for a student trying to achieve the following goal:

GOAL: "{goal}"

The student needs to master these CORE SKILLS:
{skills_str}

Create a logical, week-by-week roadmap. Break down EACH core skill into
specific weekly topics with a short, clear description for each topic.
The plan should be comprehensive and flow logically.

Respond ONLY with the raw JSON object, without markdown code fences (```)
or any other explanatory text. The JSON format must be:
{{
    "roadmap": [
        {{"week": 1, "skill_focus": "Name of Core Skill", "topic": "Specific Topic", "description": "Brief one-sentence description..." }},
        {{"week": 2, "skill_focus": "Name of Core Skill", "topic": "Next Topic", "description": "..." }},
        ...
    ]
}}"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingClient {
        response: String,
        calls: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl ModelClient for CountingClient {
        async fn call(&self, _prompt: &str) -> Result<String> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.response.clone())
        }
    }

    fn profile(skills: &[&str]) -> SkillProfile {
        SkillProfile {
            goal: "Data Scientist".to_string(),
            core_skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn test_empty_skills_fails_without_model_call() {
        let client = Arc::new(CountingClient {
            response: String::new(),
            calls: AtomicUsize::new(0),
        });
        let generator = RoadmapGenerator::new(client.clone());

        let err = generator.generate(&profile(&[])).await.unwrap_err();
        assert!(matches!(err, PlannerError::ValidationError { .. }));
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_parses_roadmap_envelope_with_prose() {
        let body = r#"Of course! {"roadmap": [
            {"week": 1, "skill_focus": "Python", "topic": "Syntax basics", "description": "Variables and control flow."},
            {"week": 2, "skill_focus": "Python", "topic": "Data structures", "description": "Lists, dicts, sets."}
        ]} Hope this helps."#;
        let client = Arc::new(CountingClient {
            response: body.to_string(),
            calls: AtomicUsize::new(0),
        });

        let roadmap = RoadmapGenerator::new(client)
            .generate(&profile(&["Python", "Statistics"]))
            .await
            .unwrap();
        assert_eq!(roadmap.len(), 2);
        assert_eq!(roadmap[0].topic, "Syntax basics");
        assert_eq!(roadmap[1].week, 2);
    }

    #[tokio::test]
    async fn test_wrong_envelope_key_is_malformed_output() {
        let client = Arc::new(CountingClient {
            response: r#"{"plan": []}"#.to_string(),
            calls: AtomicUsize::new(0),
        });
        let err = RoadmapGenerator::new(client)
            .generate(&profile(&["Python"]))
            .await
            .unwrap_err();
        assert!(matches!(err, PlannerError::MalformedModelOutput { .. }));
    }

    #[test]
    fn test_prompt_lists_every_skill() {
        let prompt = build_prompt("SRE", &["Linux".into(), "Networking".into()]);
        assert!(prompt.contains("GOAL: \"SRE\""));
        assert!(prompt.contains("Linux, Networking"));
    }
}
