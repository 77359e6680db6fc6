use serde::{Deserialize, Serialize};

use crate::model::{ResourceType, ResourceTyped, entity::Lesson};

/// Difficulty tier of a course, ordered from easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
    #[serde(other)]
    Unknown,
}

impl DifficultyLevel {
    pub const ALL: [DifficultyLevel; 4] = [
        Self::Beginner,
        Self::Intermediate,
        Self::Advanced,
        Self::Expert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Expert => "expert",
            Self::Unknown => "unknown",
        }
    }

    /// Badge palette used by front ends. Unseen tiers fall back to neutral grey.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Beginner => "green",
            Self::Intermediate => "yellow",
            Self::Advanced => "orange",
            Self::Expert => "red",
            Self::Unknown => "gray",
        }
    }
}

impl std::fmt::Display for DifficultyLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for DifficultyLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum CourseCategory {
    Grammar,
    Vocabulary,
    Conversation,
    Pronunciation,
    Business,
    Academic,
    #[serde(other)]
    Unknown,
}

impl CourseCategory {
    pub const ALL: [CourseCategory; 6] = [
        Self::Grammar,
        Self::Vocabulary,
        Self::Conversation,
        Self::Pronunciation,
        Self::Business,
        Self::Academic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Grammar => "grammar",
            Self::Vocabulary => "vocabulary",
            Self::Conversation => "conversation",
            Self::Pronunciation => "pronunciation",
            Self::Business => "business",
            Self::Academic => "academic",
            Self::Unknown => "unknown",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Grammar => "📚",
            Self::Vocabulary => "📝",
            Self::Conversation => "💬",
            Self::Pronunciation => "🗣️",
            Self::Business => "💼",
            Self::Academic => "🎓",
            Self::Unknown => "📖",
        }
    }
}

impl std::fmt::Display for CourseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for CourseCategory {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or(())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    id: String,
    title: String,
    description: String,
    level: DifficultyLevel,
    category: CourseCategory,
    duration: String,
    lessons_count: u32,
    students_enrolled: u32,
    rating: f32,
    instructor: String,
    #[serde(default)]
    lessons: Vec<Lesson>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    prerequisites: Option<Vec<String>>,
    #[serde(default)]
    skills: Vec<String>,
    #[serde(default)]
    is_popular: bool,
    #[serde(default)]
    is_featured: bool,
}

impl ResourceTyped for Course {
    fn get_resource_type() -> ResourceType {
        ResourceType::Course
    }
}

impl Course {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        level: DifficultyLevel,
        category: CourseCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            level,
            category,
            duration: String::new(),
            lessons_count: 0,
            students_enrolled: 0,
            rating: 0.0,
            instructor: String::new(),
            lessons: Vec::new(),
            prerequisites: None,
            skills: Vec::new(),
            is_popular: false,
            is_featured: false,
        }
    }

    /// Replaces the lesson list and keeps `lessons_count` in step with it.
    pub fn with_lessons(mut self, lessons: Vec<Lesson>) -> Self {
        self.lessons_count = lessons.len() as u32;
        self.lessons = lessons;
        self
    }

    pub fn with_flags(mut self, is_popular: bool, is_featured: bool) -> Self {
        self.is_popular = is_popular;
        self.is_featured = is_featured;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn level(&self) -> DifficultyLevel {
        self.level
    }

    pub fn category(&self) -> CourseCategory {
        self.category
    }

    pub fn duration(&self) -> &str {
        &self.duration
    }

    pub fn lessons_count(&self) -> u32 {
        self.lessons_count
    }

    pub fn students_enrolled(&self) -> u32 {
        self.students_enrolled
    }

    pub fn rating(&self) -> f32 {
        self.rating
    }

    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }

    pub fn prerequisites(&self) -> Option<&[String]> {
        self.prerequisites.as_deref()
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn is_popular(&self) -> bool {
        self.is_popular
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured
    }

    /// Sum of minutes over every lesson of the course.
    pub fn total_minutes(&self) -> u32 {
        self.lessons.iter().map(|l| l.duration()).sum()
    }

    /// Sum of XP rewards over every lesson of the course.
    pub fn total_xp(&self) -> u32 {
        self.lessons.iter().map(|l| l.xp_reward()).sum()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn level_parses_case_insensitively() {
        assert_eq!("Beginner".parse(), Ok(DifficultyLevel::Beginner));
        assert_eq!(" expert ".parse(), Ok(DifficultyLevel::Expert));
        assert_eq!("master".parse::<DifficultyLevel>(), Err(()));
    }

    #[test]
    fn levels_are_ordered() {
        assert!(DifficultyLevel::Beginner < DifficultyLevel::Intermediate);
        assert!(DifficultyLevel::Advanced < DifficultyLevel::Expert);
    }

    #[test]
    fn unseen_values_deserialize_to_unknown() {
        let level: DifficultyLevel = serde_json::from_str("\"native\"").unwrap();
        let category: CourseCategory = serde_json::from_str("\"slang\"").unwrap();
        assert_eq!(level, DifficultyLevel::Unknown);
        assert_eq!(category, CourseCategory::Unknown);
        assert_eq!(level.badge_color(), "gray");
        assert_eq!(category.icon(), "📖");
    }

    #[test]
    fn optional_fields_default() {
        let json = r#"{
            "id": "course-9",
            "title": "Phrasal Verbs",
            "description": "Get up, get on, get over it.",
            "level": "intermediate",
            "category": "vocabulary",
            "duration": "2 weeks",
            "lessonsCount": 0,
            "studentsEnrolled": 12,
            "rating": 4.1,
            "instructor": "Kim Lee"
        }"#;
        let course: Course = serde_json::from_str(json).unwrap();
        assert!(course.lessons().is_empty());
        assert!(course.prerequisites().is_none());
        assert!(!course.is_popular());
        assert!(!course.is_featured());
        assert_eq!(course.category(), CourseCategory::Vocabulary);
    }
}
