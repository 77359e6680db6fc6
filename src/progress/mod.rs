//! Derived learner state. Everything here is a pure function of its inputs.

mod completion;
pub use completion::completion_percentage;

mod filter;
pub use filter::{CourseQuery, Selector, filter_courses};

mod level;
pub use level::{LevelInfo, level_for};

mod stats;
pub use stats::{CourseProgress, LearningStats, course_progress, enrolled_courses};
