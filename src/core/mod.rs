pub mod goal_interpreter;
pub mod pipeline;
pub mod resource_lookup;
pub mod roadmap_generator;
pub mod timeline;

pub use crate::domain::model::{
    LearningPlan, ResourceEntry, Roadmap, RoadmapEntry, SkillProfile, TimelineEntry,
};
pub use crate::domain::ports::{ConfigProvider, ModelClient};
pub use crate::utils::error::Result;
