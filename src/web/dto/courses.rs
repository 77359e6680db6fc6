use serde::Serialize;

use crate::model::entity::{Course, CourseCategory, DifficultyLevel, Lesson, LessonType, User};

/// Card-sized view of a course, as listed on the home page and in the catalog.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct CourseSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub level: DifficultyLevel,
    pub level_color: String,
    pub category: CourseCategory,
    pub category_icon: String,
    pub duration: String,
    pub lessons_count: u32,
    pub students_enrolled: u32,
    pub rating: f32,
    pub instructor: String,
    pub skills: Vec<String>,
    pub is_popular: bool,
    pub is_featured: bool,
}

impl From<&Course> for CourseSummary {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id().to_string(),
            title: course.title().to_string(),
            description: course.description().to_string(),
            level: course.level(),
            level_color: course.level().badge_color().to_string(),
            category: course.category(),
            category_icon: course.category().icon().to_string(),
            duration: course.duration().to_string(),
            lessons_count: course.lessons_count(),
            students_enrolled: course.students_enrolled(),
            rating: course.rating(),
            instructor: course.instructor().to_string(),
            skills: course.skills().to_vec(),
            is_popular: course.is_popular(),
            is_featured: course.is_featured(),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CourseListResponse {
    /// Size of the whole catalog.
    pub total: usize,
    /// Number of courses matching the query.
    pub shown: usize,
    pub courses: Vec<CourseSummary>,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct LessonOutline {
    pub id: String,
    pub title: String,
    pub description: String,
    pub lesson_type: LessonType,
    pub duration: u32,
    pub order: u32,
    pub xp_reward: u32,
    pub completed: bool,
}

impl LessonOutline {
    pub fn new(lesson: &Lesson, user: &User) -> Self {
        Self {
            id: lesson.id().to_string(),
            title: lesson.title().to_string(),
            description: lesson.description().to_string(),
            lesson_type: lesson.lesson_type(),
            duration: lesson.duration(),
            order: lesson.order(),
            xp_reward: lesson.xp_reward(),
            completed: user.has_completed_lesson(lesson.id()),
        }
    }
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct CourseDetailResponse {
    pub course: CourseSummary,
    pub prerequisites: Option<Vec<String>>,
    pub lessons: Vec<LessonOutline>,
    pub total_minutes: u32,
    pub total_xp: u32,
    /// `null` when the course has no lessons yet.
    pub completion: Option<f64>,
    pub enrolled: bool,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct EnrollmentResponse {
    pub course_id: String,
    pub enrolled: bool,
    /// Whether this call changed anything.
    pub changed: bool,
}

#[derive(Serialize, utoipa::ToSchema)]
pub struct HomeResponse {
    pub featured: Vec<CourseSummary>,
    pub popular: Vec<CourseSummary>,
    pub total_courses: usize,
    pub total_students: u64,
}
