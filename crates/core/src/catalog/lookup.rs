//! # Catalog Lookup
//!
//! Resolves the course behind a `/course/{id}` route parameter.

use super::course::Course;

/// Resolution state of a course-detail view
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    /// Resolution has not completed yet
    Loading,
    Found(&'a Course),
    /// No course has this id, or the id was not a number
    NotFound,
}

impl<'a> Lookup<'a> {
    /// Whether the view can stop waiting
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Loading)
    }

    pub fn course(&self) -> Option<&'a Course> {
        match self {
            Self::Found(course) => Some(course),
            _ => None,
        }
    }
}

/// Read the leading integer of `raw_id`, the way a browser's `parseInt`
/// does: surrounding whitespace and an optional sign are accepted, and
/// anything after the first run of digits is ignored ("2abc" and "1.5"
/// read as 2 and 1). `None` when no digits lead the input.
fn leading_integer(raw_id: &str) -> Option<i64> {
    let trimmed = raw_id.trim();
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let magnitude: i64 = rest[..end].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

/// Find the course whose id equals the leading integer of `raw_id`.
///
/// An id without leading digits resolves to `NotFound` exactly like an
/// unmatched one. If the catalog somehow holds duplicate ids the first one
/// wins.
pub fn lookup<'a>(courses: &'a [Course], raw_id: &str) -> Lookup<'a> {
    let Some(id) = leading_integer(raw_id) else {
        tracing::debug!(raw_id, "Course id has no leading integer");
        return Lookup::NotFound;
    };

    courses
        .iter()
        .find(|course| i64::from(course.id) == id)
        .map_or(Lookup::NotFound, Lookup::Found)
}
