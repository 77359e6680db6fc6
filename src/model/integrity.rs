//! Data-integrity assumptions about fixtures. They are reported, never enforced.

use crate::model::Catalog;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityWarning {
    /// `lessonsCount` disagrees with the number of lessons actually listed.
    LessonCountMismatch {
        course_id: String,
        declared: u32,
        actual: usize,
    },
    /// Lesson `order` values must be unique and strictly increasing within a course.
    LessonOrderNotIncreasing {
        course_id: String,
        lesson_id: String,
        previous: u32,
        order: u32,
    },
    /// A lesson names a different course than the one that contains it.
    LessonCourseMismatch {
        course_id: String,
        lesson_id: String,
        declared: String,
    },
    /// A quiz is bound to a lesson that does not exist.
    DanglingQuiz { quiz_id: String, lesson_id: String },
}

impl std::fmt::Display for IntegrityWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LessonCountMismatch {
                course_id,
                declared,
                actual,
            } => write!(
                f,
                "{course_id}: lessonsCount is {declared} but {actual} lessons are listed"
            ),
            Self::LessonOrderNotIncreasing {
                course_id,
                lesson_id,
                previous,
                order,
            } => write!(
                f,
                "{course_id}/{lesson_id}: order {order} does not follow {previous}"
            ),
            Self::LessonCourseMismatch {
                course_id,
                lesson_id,
                declared,
            } => write!(
                f,
                "{course_id}/{lesson_id}: lesson claims to belong to {declared}"
            ),
            Self::DanglingQuiz { quiz_id, lesson_id } => {
                write!(f, "{quiz_id}: lesson {lesson_id} does not exist")
            }
        }
    }
}

pub fn check(catalog: &Catalog) -> Vec<IntegrityWarning> {
    let mut warnings = Vec::new();

    for course in catalog.courses() {
        let lessons = course.lessons();

        if course.lessons_count() as usize != lessons.len() {
            warnings.push(IntegrityWarning::LessonCountMismatch {
                course_id: course.id().to_string(),
                declared: course.lessons_count(),
                actual: lessons.len(),
            });
        }

        for pair in lessons.windows(2) {
            if pair[1].order() <= pair[0].order() {
                warnings.push(IntegrityWarning::LessonOrderNotIncreasing {
                    course_id: course.id().to_string(),
                    lesson_id: pair[1].id().to_string(),
                    previous: pair[0].order(),
                    order: pair[1].order(),
                });
            }
        }

        for lesson in lessons.iter().filter(|l| l.course_id() != course.id()) {
            warnings.push(IntegrityWarning::LessonCourseMismatch {
                course_id: course.id().to_string(),
                lesson_id: lesson.id().to_string(),
                declared: lesson.course_id().to_string(),
            });
        }
    }

    for quiz in catalog.quizzes() {
        if catalog.lesson(quiz.lesson_id()).is_none() {
            warnings.push(IntegrityWarning::DanglingQuiz {
                quiz_id: quiz.id().to_string(),
                lesson_id: quiz.lesson_id().to_string(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::model::entity::{Course, CourseCategory, DifficultyLevel, Lesson, User};

    #[test]
    fn consistent_catalog_is_clean() {
        let course = Course::new("c1", "T", "D", DifficultyLevel::Beginner, CourseCategory::Grammar)
            .with_lessons(vec![Lesson::new("l1", "c1", "A", 1), Lesson::new("l2", "c1", "B", 2)]);
        let catalog = Catalog::new(User::new("u", "U", 0), vec![course], vec![]);
        assert!(check(&catalog).is_empty());
    }

    #[test]
    fn reports_every_broken_assumption() {
        let course = Course::new("c1", "T", "D", DifficultyLevel::Beginner, CourseCategory::Grammar)
            .with_lessons(vec![
                Lesson::new("l1", "c1", "A", 2),
                Lesson::new("l2", "c2", "B", 2),
            ]);
        let catalog = Catalog::new(User::new("u", "U", 0), vec![course], vec![]);
        let warnings = check(&catalog);

        assert_eq!(warnings.len(), 2);
        assert!(matches!(
            warnings[0],
            IntegrityWarning::LessonOrderNotIncreasing { previous: 2, order: 2, .. }
        ));
        assert!(matches!(warnings[1], IntegrityWarning::LessonCourseMismatch { .. }));
    }

    #[test]
    fn seed_declares_more_lessons_than_it_ships() {
        let catalog = Catalog::seed().unwrap();
        let warnings = check(&catalog);

        assert_eq!(warnings.len(), catalog.courses().len());
        assert!(
            warnings
                .iter()
                .all(|w| matches!(w, IntegrityWarning::LessonCountMismatch { .. }))
        );
        assert_eq!(
            warnings[0].to_string(),
            "course-1: lessonsCount is 24 but 2 lessons are listed"
        );
    }
}
