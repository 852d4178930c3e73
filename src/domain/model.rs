use serde::{Deserialize, Serialize};

/// Output of the goal interpreter: the clarified career goal plus the
/// core skills to master. Five skills by convention, not enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillProfile {
    pub goal: String,
    pub core_skills: Vec<String>,
}

/// One weekly topic in the generated roadmap. Week numbers come from the
/// model and are not validated for monotonicity or contiguity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoadmapEntry {
    pub week: u32,
    pub skill_focus: String,
    pub topic: String,
    pub description: String,
}

/// Wire envelope the model is asked to emit for the roadmap stage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roadmap {
    pub roadmap: Vec<RoadmapEntry>,
}

/// Learning resources for a single roadmap topic. Ties back to its
/// RoadmapEntry only by string equality on `topic`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub topic: String,
    pub youtube: String,
    pub course: String,
    pub github: String,
}

/// One roadmap topic re-bucketed into the compressed timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub week: u32,
    pub topic: String,
    pub description: String,
}

/// Final aggregate handed to the caller. A view composition: nothing
/// guarantees `resources` and `timeline` cover the same topic set when
/// resource lookup partially failed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LearningPlan {
    pub goal: String,
    pub skills: Vec<String>,
    pub timeline: Vec<TimelineEntry>,
    pub resources: Vec<ResourceEntry>,
}
