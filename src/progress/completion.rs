use std::collections::HashSet;

use crate::model::entity::Lesson;

/// Share of `lessons` whose id appears in `completed`, as a percentage in `[0, 100]`.
///
/// Ids in `completed` that belong to other courses are ignored. A course without lessons has no
/// meaningful completion, so an empty `lessons` slice yields `None`.
pub fn completion_percentage<S: AsRef<str>>(completed: &[S], lessons: &[Lesson]) -> Option<f64> {
    if lessons.is_empty() {
        return None;
    }

    let completed: HashSet<&str> = completed.iter().map(|id| id.as_ref()).collect();
    let done = lessons
        .iter()
        .filter(|lesson| completed.contains(lesson.id()))
        .count();

    Some(done as f64 / lessons.len() as f64 * 100.0)
}
