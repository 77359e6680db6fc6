use serde::Serialize;

use crate::model::entity::{Lesson, Quiz};

#[derive(Serialize, utoipa::ToSchema)]
pub struct LessonResponse {
    pub lesson: Lesson,
    pub quiz: Option<Quiz>,
    pub completed: bool,
}
