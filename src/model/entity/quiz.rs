use serde::{Deserialize, Serialize};

use crate::model::{ResourceType, ResourceTyped, entity::Answer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionType {
    MultipleChoice,
    FillInBlank,
    TrueFalse,
    Matching,
    AudioChoice,
    ImageChoice,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: String,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: Answer,
    pub explanation: String,
    pub points: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Quiz {
    id: String,
    lesson_id: String,
    title: String,
    questions: Vec<QuizQuestion>,
    /// Minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    time_limit: Option<u32>,
    /// Percentage of `max_points` needed to pass.
    passing_score: u32,
    attempts: u32,
}

impl ResourceTyped for Quiz {
    fn get_resource_type() -> ResourceType {
        ResourceType::Quiz
    }
}

impl Quiz {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn lesson_id(&self) -> &str {
        &self.lesson_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    pub fn time_limit(&self) -> Option<u32> {
        self.time_limit
    }

    pub fn passing_score(&self) -> u32 {
        self.passing_score
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    pub fn max_points(&self) -> u32 {
        self.questions.iter().map(|q| q.points).sum()
    }

    /// Whether `earned` points reach the passing percentage. A quiz worth nothing never passes.
    pub fn is_passing(&self, earned: u32) -> bool {
        let max = self.max_points();
        max > 0 && u64::from(earned) * 100 >= u64::from(self.passing_score) * u64::from(max)
    }
}
