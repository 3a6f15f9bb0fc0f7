//! # Catalog Loading
//!
//! Parses and validates the static course catalog once, at startup.
//! A malformed catalog is rejected here rather than surfacing as blank
//! fields on a rendered page.

use super::course::Course;
use crate::error::{Error, Result};
use std::collections::HashSet;
use std::path::Path;

/// The bundled catalog, compiled into the binary
const EMBEDDED_CATALOG: &str = include_str!("../../data/courses.json");

/// Number of courses shown in the home page "popular" strip
pub const POPULAR_COUNT: usize = 5;

/// The immutable, ordered collection of all course records
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Load the catalog bundled with the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    /// Load a catalog override from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let catalog = Self::from_json(&raw)?;
        tracing::info!(
            path = %path.as_ref().display(),
            courses = catalog.len(),
            "Loaded catalog override"
        );
        Ok(catalog)
    }

    /// Parse and validate a JSON array of course records
    pub fn from_json(raw: &str) -> Result<Self> {
        let courses: Vec<Course> = serde_json::from_str(raw)?;
        Self::from_courses(courses)
    }

    /// Validate an already-parsed list of courses
    pub fn from_courses(courses: Vec<Course>) -> Result<Self> {
        validate(&courses)?;
        Ok(Self { courses })
    }

    /// All courses in catalog order
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// The first `count` courses, as featured on the home page
    pub fn popular(&self, count: usize) -> &[Course] {
        &self.courses[..count.min(self.courses.len())]
    }
}

fn validate(courses: &[Course]) -> Result<()> {
    if courses.is_empty() {
        return Err(Error::Empty);
    }

    let mut seen = HashSet::with_capacity(courses.len());
    for (position, course) in courses.iter().enumerate() {
        if course.id == 0 {
            return Err(Error::InvalidId { position });
        }
        if !seen.insert(course.id) {
            return Err(Error::DuplicateId(course.id));
        }

        let required = [
            ("title", &course.title),
            ("description", &course.description),
            ("instructor", &course.instructor),
            ("category", &course.category),
            ("gradeLevel", &course.grade_level),
            ("techStack", &course.tech_stack),
            ("duration", &course.duration),
            ("price", &course.price),
            ("thumbnail", &course.thumbnail),
            ("capstoneProject", &course.capstone_project),
            ("learningGoals", &course.learning_goals),
            ("keyTakeaways", &course.key_takeaways),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(Error::MissingField {
                    id: course.id,
                    field,
                });
            }
        }

        if course.session_outline.iter().all(|session| session.trim().is_empty()) {
            return Err(Error::MissingField {
                id: course.id,
                field: "sessionOutline",
            });
        }

        if !course.rating.is_finite() || !(0.0..=5.0).contains(&course.rating) {
            return Err(Error::InvalidRating {
                id: course.id,
                rating: course.rating,
            });
        }
    }

    Ok(())
}
