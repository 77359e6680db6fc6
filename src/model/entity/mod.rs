mod course;
pub use course::{Course, CourseCategory, DifficultyLevel};

mod lesson;
pub use lesson::{Answer, Exercise, ExerciseType, Lesson, LessonContent, LessonType, VocabularyItem};

mod quiz;
pub use quiz::{QuestionType, Quiz, QuizQuestion};

mod user;
pub use user::{Achievement, AchievementCategory, User, UserLevel};
