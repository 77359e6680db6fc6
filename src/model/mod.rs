use std::path::Path;

use serde::Deserialize;

pub mod entity;
use entity::{Course, Lesson, Quiz, User};

mod error;
pub use error::{CatalogError, CatalogResult};

mod integrity;
pub use integrity::IntegrityWarning;

mod repo;
pub use repo::{CatalogRepository, ResourceType, ResourceTyped};

static SEED: &str = include_str!("../../fixtures/seed.json");

/// The read-only data set every view is derived from: the course catalog, stand-alone quizzes
/// and the learner snapshot. Built once at startup and shared behind an `Arc`.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
    user: User,
    courses: Vec<Course>,
    #[serde(default)]
    quizzes: Vec<Quiz>,
}

impl Catalog {
    pub fn new(user: User, courses: Vec<Course>, quizzes: Vec<Quiz>) -> Self {
        Self {
            user,
            courses,
            quizzes,
        }
    }

    /// Catalog shipped with the binary.
    pub fn seed() -> CatalogResult<Self> {
        Self::from_slice(SEED.as_bytes())
    }

    pub fn from_slice(bytes: &[u8]) -> CatalogResult<Self> {
        let catalog: Self = serde_json::from_slice(bytes)?;
        catalog.report_integrity();
        Ok(catalog)
    }

    pub fn from_file(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        tracing::debug!("loading fixtures from {}", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_slice(&bytes)
    }

    fn report_integrity(&self) {
        for warning in self.integrity_warnings() {
            tracing::warn!("fixture integrity: {}", warning);
        }
        tracing::debug!(
            courses = self.courses.len(),
            quizzes = self.quizzes.len(),
            "catalog loaded"
        );
    }

    pub fn integrity_warnings(&self) -> Vec<IntegrityWarning> {
        integrity::check(self)
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn quizzes(&self) -> &[Quiz] {
        &self.quizzes
    }

    pub fn course(&self, id: &str) -> Option<&Course> {
        Course::find_by_id(self, id)
    }

    pub fn lesson(&self, id: &str) -> Option<&Lesson> {
        Lesson::find_by_id(self, id)
    }

    /// The quiz attached to a lesson, either inline or as a stand-alone quiz bound by lesson id.
    pub fn quiz_for_lesson(&self, lesson_id: &str) -> Option<&Quiz> {
        self.lesson(lesson_id)
            .and_then(|lesson| lesson.quiz())
            .or_else(|| self.quizzes.iter().find(|q| q.lesson_id() == lesson_id))
    }

    pub fn featured(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_featured()).collect()
    }

    pub fn popular(&self) -> Vec<&Course> {
        self.courses.iter().filter(|c| c.is_popular()).collect()
    }
}
