//! Catalog search: free text over title and description, plus tier and category selectors.

use std::str::FromStr;

use crate::model::entity::{Course, CourseCategory, DifficultyLevel};

/// One selector of a catalog query. `"all"` (or nothing) matches every course, a known value matches
/// exactly, and anything else is kept as `Unrecognized` and matches nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
    Unrecognized(String),
}

impl<T: FromStr + PartialEq> Selector<T> {
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Self::All;
        }

        match trimmed.parse() {
            Ok(value) => Self::Only(value),
            Err(_) => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn matches(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
            Self::Unrecognized(_) => false,
        }
    }
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T> From<Option<T>> for Selector<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Self::Only)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CourseQuery {
    pub text: String,
    pub level: Selector<DifficultyLevel>,
    pub category: Selector<CourseCategory>,
}

impl CourseQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a query from raw user input, e.g. query-string values.
    pub fn parse(text: Option<&str>, level: Option<&str>, category: Option<&str>) -> Self {
        Self {
            text: text.unwrap_or_default().to_string(),
            level: level.map(Selector::parse).unwrap_or_default(),
            category: category.map(Selector::parse).unwrap_or_default(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_level(mut self, level: DifficultyLevel) -> Self {
        self.level = Selector::Only(level);
        self
    }

    pub fn with_category(mut self, category: CourseCategory) -> Self {
        self.category = Selector::Only(category);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.level == Selector::All && self.category == Selector::All
    }

    pub fn matches(&self, course: &Course) -> bool {
        self.matches_text(course)
            && self.level.matches(&course.level())
            && self.category.matches(&course.category())
    }

    fn matches_text(&self, course: &Course) -> bool {
        if self.text.is_empty() {
            return true;
        }

        let needle = self.text.to_lowercase();
        course.title().to_lowercase().contains(&needle)
            || course.description().to_lowercase().contains(&needle)
    }
}

/// Courses matching `query`, in input order.
pub fn filter_courses<'a, I>(courses: I, query: &CourseQuery) -> Vec<&'a Course>
where
    I: IntoIterator<Item = &'a Course>,
{
    courses
        .into_iter()
        .filter(|course| query.matches(course))
        .collect()
}
