use crate::model::{
    Catalog,
    entity::{Course, Lesson, Quiz},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceType {
    Course,
    Lesson,
    Quiz,
    User,
    Level,
}

impl std::fmt::Display for ResourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Course => write!(f, "course"),
            Self::Lesson => write!(f, "lesson"),
            Self::Quiz => write!(f, "quiz"),
            Self::User => write!(f, "user"),
            Self::Level => write!(f, "level"),
        }
    }
}

pub trait ResourceTyped {
    fn get_resource_type() -> ResourceType;
}

/// Read-only lookups over a [`Catalog`]. There is no write path: fixtures are loaded once.
pub trait CatalogRepository: ResourceTyped + Sized {
    fn resource_id(&self) -> &str;

    /// Every resource of this type, in fixture order.
    fn list(catalog: &Catalog) -> Vec<&Self>;

    fn find_by_id<'a>(catalog: &'a Catalog, id: &str) -> Option<&'a Self> {
        Self::list(catalog)
            .into_iter()
            .find(|item| item.resource_id() == id)
    }

    fn count(catalog: &Catalog) -> usize {
        Self::list(catalog).len()
    }
}

impl CatalogRepository for Course {
    fn resource_id(&self) -> &str {
        self.id()
    }

    fn list(catalog: &Catalog) -> Vec<&Self> {
        catalog.courses().iter().collect()
    }

    fn count(catalog: &Catalog) -> usize {
        catalog.courses().len()
    }
}

impl CatalogRepository for Lesson {
    fn resource_id(&self) -> &str {
        self.id()
    }

    fn list(catalog: &Catalog) -> Vec<&Self> {
        catalog
            .courses()
            .iter()
            .flat_map(|course| course.lessons())
            .collect()
    }
}

impl CatalogRepository for Quiz {
    fn resource_id(&self) -> &str {
        self.id()
    }

    fn list(catalog: &Catalog) -> Vec<&Self> {
        let attached = catalog
            .courses()
            .iter()
            .flat_map(|course| course.lessons())
            .filter_map(|lesson| lesson.quiz());

        catalog.quizzes().iter().chain(attached).collect()
    }
}
