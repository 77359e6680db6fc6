use std::collections::HashSet;

use serde::Serialize;

use crate::{
    model::{
        Catalog,
        entity::{Course, User},
    },
    progress::completion_percentage,
};

/// Headline numbers of the learner dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, utoipa::ToSchema)]
pub struct LearningStats {
    pub total_xp: u32,
    pub lessons_completed: usize,
    pub courses_completed: usize,
    pub current_streak: u32,
    /// Whole hours, rounded down.
    pub study_hours: u32,
    pub achievements_unlocked: usize,
    pub achievement_xp: u32,
}

impl LearningStats {
    pub fn from_user(user: &User) -> Self {
        Self {
            total_xp: user.xp(),
            lessons_completed: user.completed_lessons().len(),
            courses_completed: user.completed_courses().len(),
            current_streak: user.streak_days(),
            study_hours: user.total_study_time() / 60,
            achievements_unlocked: user.achievements().len(),
            achievement_xp: user.achievements().iter().map(|a| a.xp_reward).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, utoipa::ToSchema)]
pub struct CourseProgress {
    pub course_id: String,
    pub completed_lessons: usize,
    pub total_lessons: usize,
    /// Share of the lessons actually listed on the course, not of its declared `lessons_count`.
    /// `None` for a course without lessons.
    pub percentage: Option<f64>,
    pub is_completed: bool,
}

pub fn course_progress(user: &User, course: &Course) -> CourseProgress {
    let completed_lessons = course
        .lessons()
        .iter()
        .filter(|lesson| user.has_completed_lesson(lesson.id()))
        .count();

    CourseProgress {
        course_id: course.id().to_string(),
        completed_lessons,
        total_lessons: course.lessons().len(),
        percentage: completion_percentage(user.completed_lessons(), course.lessons()),
        is_completed: user.has_completed_course(course.id()),
    }
}

/// Courses shown on the dashboard: completed ones, the ones the learner is taking, and any the
/// current session joined. Catalog order, no duplicates, unknown ids skipped.
pub fn enrolled_courses<'a>(
    catalog: &'a Catalog,
    session_enrollments: &HashSet<String>,
) -> Vec<&'a Course> {
    let user = catalog.user();

    catalog
        .courses()
        .iter()
        .filter(|course| {
            user.has_completed_course(course.id())
                || user.enrolled_courses().iter().any(|id| id == course.id())
                || session_enrollments.contains(course.id())
        })
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn stats_from_seed_user() {
        let catalog = Catalog::seed().unwrap();
        let stats = LearningStats::from_user(catalog.user());

        assert_eq!(
            stats,
            LearningStats {
                total_xp: 2450,
                lessons_completed: 3,
                courses_completed: 1,
                current_streak: 12,
                study_hours: 30,
                achievements_unlocked: 2,
                achievement_xp: 150,
            }
        );
    }

    #[test]
    fn study_hours_round_down() {
        let user = User::new("u", "U", 0).with_activity(0, 119);
        assert_eq!(LearningStats::from_user(&user).study_hours, 1);
    }

    #[test]
    fn progress_is_derived_from_lessons() {
        let catalog = Catalog::seed().unwrap();
        let user = catalog.user();

        let grammar = course_progress(user, catalog.course("course-1").unwrap());
        assert_eq!(grammar.completed_lessons, 2);
        assert_eq!(grammar.total_lessons, 2);
        assert_eq!(grammar.percentage, Some(100.0));
        assert!(grammar.is_completed);

        let speaking = course_progress(user, catalog.course("course-3").unwrap());
        assert_eq!(speaking.percentage, Some(0.0));
        assert!(!speaking.is_completed);
    }

    #[test]
    fn progress_ignores_declared_lesson_count() {
        let catalog = Catalog::seed().unwrap();
        let course = catalog.course("course-2").unwrap();
        assert!(course.lessons_count() as usize > course.lessons().len());

        let progress = course_progress(catalog.user(), course);
        assert_eq!(progress.total_lessons, course.lessons().len());
        assert_eq!(progress.percentage, Some(100.0));
        assert!(!progress.is_completed);
    }

    #[test]
    fn enrolled_merges_sources_in_catalog_order() {
        let catalog = Catalog::seed().unwrap();

        let ids = |extra: &[&str]| -> Vec<String> {
            let extra = extra.iter().map(|s| s.to_string()).collect();
            enrolled_courses(&catalog, &extra)
                .into_iter()
                .map(|c| c.id().to_string())
                .collect()
        };

        assert_eq!(ids(&[]), ["course-1", "course-2"]);
        assert_eq!(ids(&["course-5", "course-2", "course-404"]), ["course-1", "course-2", "course-5"]);
    }
}
