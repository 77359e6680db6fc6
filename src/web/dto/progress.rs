use serde::Serialize;

use crate::{
    model::entity::{Achievement, User, UserLevel},
    progress::{CourseProgress, LearningStats, LevelInfo},
    web::dto::courses::CourseSummary,
};

#[derive(Serialize, utoipa::ToSchema)]
pub struct ProfileResponse {
    pub id: String,
    pub name: String,
    pub first_name: String,
    pub email: String,
    pub xp: u32,
    pub streak_days: u32,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            name: user.name().to_string(),
            first_name: user.first_name().to_string(),
            email: user.email().to_string(),
            xp: user.xp(),
            streak_days: user.streak_days(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct EnrolledCourse {
    pub course: CourseSummary,
    pub progress: CourseProgress,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct DashboardResponse {
    pub profile: ProfileResponse,
    pub level: LevelInfo,
    pub stats: LearningStats,
    pub courses: Vec<EnrolledCourse>,
    pub achievements: Vec<Achievement>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LevelResponse {
    pub xp: u32,
    pub level: LevelInfo,
    pub progress_percent: f64,
    pub xp_to_next: u32,
    pub next_tier: Option<UserLevel>,
}

impl LevelResponse {
    pub fn new(xp: u32, level: LevelInfo) -> Self {
        Self {
            xp,
            level,
            progress_percent: level.progress_percent(),
            xp_to_next: level.xp_to_next(xp),
            next_tier: level.next_tier(),
        }
    }
}
