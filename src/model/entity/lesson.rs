use serde::{Deserialize, Serialize};

use crate::model::{ResourceType, ResourceTyped, entity::Quiz};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LessonType {
    Theory,
    Practice,
    Conversation,
    Listening,
    Reading,
    Writing,
    #[serde(other)]
    Unknown,
}

impl LessonType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Theory => "theory",
            Self::Practice => "practice",
            Self::Conversation => "conversation",
            Self::Listening => "listening",
            Self::Reading => "reading",
            Self::Writing => "writing",
            Self::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for LessonType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum ExerciseType {
    MultipleChoice,
    FillInBlank,
    TrueFalse,
    Matching,
    Ordering,
    AudioRecognition,
    #[serde(other)]
    Unknown,
}

/// A correct answer is either a single string or, for matching/ordering, a list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(untagged)]
pub enum Answer {
    Single(String),
    Multiple(Vec<String>),
}

impl Answer {
    /// Case-insensitive check of a submitted answer. Multi-part answers must match in order.
    pub fn accepts(&self, given: &[&str]) -> bool {
        match self {
            Self::Single(expected) => {
                given.len() == 1 && given[0].trim().eq_ignore_ascii_case(expected.trim())
            }
            Self::Multiple(expected) => {
                expected.len() == given.len()
                    && expected
                        .iter()
                        .zip(given)
                        .all(|(e, g)| e.trim().eq_ignore_ascii_case(g.trim()))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyItem {
    pub word: String,
    pub pronunciation: String,
    pub definition: String,
    pub example: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Exercise {
    pub id: String,
    #[serde(rename = "type")]
    pub exercise_type: ExerciseType,
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    pub correct_answer: Answer,
    pub explanation: String,
    pub points: u32,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LessonContent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vocabulary: Option<Vec<VocabularyItem>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exercises: Option<Vec<Exercise>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Lesson {
    id: String,
    course_id: String,
    title: String,
    description: String,
    #[serde(rename = "type")]
    lesson_type: LessonType,
    /// Minutes.
    duration: u32,
    order: u32,
    xp_reward: u32,
    #[serde(default)]
    content: LessonContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    quiz: Option<Quiz>,
}

impl ResourceTyped for Lesson {
    fn get_resource_type() -> ResourceType {
        ResourceType::Lesson
    }
}

impl Lesson {
    pub fn new(
        id: impl Into<String>,
        course_id: impl Into<String>,
        title: impl Into<String>,
        order: u32,
    ) -> Self {
        Self {
            id: id.into(),
            course_id: course_id.into(),
            title: title.into(),
            description: String::new(),
            lesson_type: LessonType::Theory,
            duration: 0,
            order,
            xp_reward: 0,
            content: LessonContent::default(),
            quiz: None,
        }
    }

    pub fn with_reward(mut self, duration: u32, xp_reward: u32) -> Self {
        self.duration = duration;
        self.xp_reward = xp_reward;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn course_id(&self) -> &str {
        &self.course_id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn lesson_type(&self) -> LessonType {
        self.lesson_type
    }

    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn order(&self) -> u32 {
        self.order
    }

    pub fn xp_reward(&self) -> u32 {
        self.xp_reward
    }

    pub fn content(&self) -> &LessonContent {
        &self.content
    }

    pub fn quiz(&self) -> Option<&Quiz> {
        self.quiz.as_ref()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn answer_shapes() {
        let single: Answer = serde_json::from_str("\"goes\"").unwrap();
        let multi: Answer = serde_json::from_str(r#"["first", "then"]"#).unwrap();

        assert!(single.accepts(&["Goes "]));
        assert!(!single.accepts(&["go"]));
        assert!(multi.accepts(&["first", "then"]));
        assert!(!multi.accepts(&["then", "first"]));
        assert!(!multi.accepts(&["first"]));
    }

    #[test]
    fn exercise_type_is_kebab_case() {
        let t: ExerciseType = serde_json::from_str("\"fill-in-blank\"").unwrap();
        assert_eq!(t, ExerciseType::FillInBlank);
        assert_eq!(
            serde_json::to_string(&ExerciseType::AudioRecognition).unwrap(),
            "\"audio-recognition\""
        );
    }

    #[test]
    fn lesson_without_content_defaults() {
        let json = r#"{
            "id": "lesson-9",
            "courseId": "course-9",
            "title": "Silent letters",
            "description": "Knights know the gnome.",
            "type": "listening",
            "duration": 15,
            "order": 1,
            "xpReward": 20
        }"#;
        let lesson: Lesson = serde_json::from_str(json).unwrap();
        assert_eq!(lesson.lesson_type(), LessonType::Listening);
        assert!(lesson.content().text.is_none());
        assert!(lesson.quiz().is_none());
    }
}
