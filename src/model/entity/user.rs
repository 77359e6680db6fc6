use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::{ResourceType, ResourceTyped};

/// Learner tier label. `Master` exists in the data shape but is never derived from XP.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserLevel {
    Newbie,
    Learner,
    Student,
    Scholar,
    Expert,
    Master,
    #[serde(other)]
    Unknown,
}

impl UserLevel {
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Newbie => "Newbie",
            Self::Learner => "Learner",
            Self::Student => "Student",
            Self::Scholar => "Scholar",
            Self::Expert => "Expert",
            Self::Master => "Master",
            Self::Unknown => "Unknown",
        }
    }
}

impl std::fmt::Display for UserLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.display_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum AchievementCategory {
    Completion,
    Streak,
    Score,
    Time,
    Special,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: String,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub xp_reward: u32,
    pub unlocked_at: DateTime<Utc>,
    pub category: AchievementCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: String,
    name: String,
    email: String,
    level: UserLevel,
    xp: u32,
    #[serde(default)]
    completed_courses: Vec<String>,
    #[serde(default)]
    completed_lessons: Vec<String>,
    /// Courses the learner is taking but has not finished.
    #[serde(default)]
    enrolled_courses: Vec<String>,
    #[serde(default)]
    achievements: Vec<Achievement>,
    streak_days: u32,
    /// Minutes.
    total_study_time: u32,
}

impl ResourceTyped for User {
    fn get_resource_type() -> ResourceType {
        ResourceType::User
    }
}

impl User {
    pub fn new(id: impl Into<String>, name: impl Into<String>, xp: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: String::new(),
            level: UserLevel::Newbie,
            xp,
            completed_courses: Vec::new(),
            completed_lessons: Vec::new(),
            enrolled_courses: Vec::new(),
            achievements: Vec::new(),
            streak_days: 0,
            total_study_time: 0,
        }
    }

    pub fn with_completed(mut self, courses: &[&str], lessons: &[&str]) -> Self {
        self.completed_courses = courses.iter().map(|s| s.to_string()).collect();
        self.completed_lessons = lessons.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn with_activity(mut self, streak_days: u32, total_study_time: u32) -> Self {
        self.streak_days = streak_days;
        self.total_study_time = total_study_time;
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Everything before the first space, used for greetings.
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Stored tier label. May lag behind what `progress::level_for` derives from `xp`.
    pub fn level(&self) -> UserLevel {
        self.level
    }

    pub fn xp(&self) -> u32 {
        self.xp
    }

    pub fn completed_courses(&self) -> &[String] {
        &self.completed_courses
    }

    pub fn completed_lessons(&self) -> &[String] {
        &self.completed_lessons
    }

    pub fn enrolled_courses(&self) -> &[String] {
        &self.enrolled_courses
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    pub fn streak_days(&self) -> u32 {
        self.streak_days
    }

    pub fn total_study_time(&self) -> u32 {
        self.total_study_time
    }

    pub fn has_completed_lesson(&self, lesson_id: &str) -> bool {
        self.completed_lessons.iter().any(|id| id == lesson_id)
    }

    pub fn has_completed_course(&self, course_id: &str) -> bool {
        self.completed_courses.iter().any(|id| id == course_id)
    }
}
