use crate::core::{RoadmapEntry, TimelineEntry};

pub const DEFAULT_TOTAL_WEEKS: usize = 12;

/// Stage 4: re-bucket the roadmap into `total_weeks` by fixed stride.
/// Pure and local, no model call.
///
/// `step = max(1, len / total_weeks)`; entry i (1-based) lands in week
/// `(i-1)/step + 1`. When the roadmap length is not a clean multiple of
/// the step the tail spills past `total_weeks`: 25 entries over 12
/// weeks produce a week 13. That over-count is intended behavior, not a
/// bug to fix: the stride is fixed, the fit is not.
pub fn compress(roadmap: &[RoadmapEntry], total_weeks: usize) -> Vec<TimelineEntry> {
    let step = std::cmp::max(1, roadmap.len() / total_weeks.max(1));
    roadmap
        .iter()
        .enumerate()
        .map(|(i, entry)| TimelineEntry {
            week: (i / step) as u32 + 1,
            topic: entry.topic.clone(),
            description: entry.description.clone(),
        })
        .collect()
}
