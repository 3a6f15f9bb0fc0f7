//! # Catalog Query Engine
//!
//! Free-text search combined with grade-level and category filters.
//! All active predicates are ANDed and the result keeps catalog order.

use super::course::Course;
use serde::{Deserialize, Serialize};

/// Reserved filter value meaning "do not restrict on this dimension"
pub const ALL: &str = "all";

/// Categories offered by the listing page's category select
pub const CATEGORY_OPTIONS: &[&str] = &[
    ALL,
    "Programming",
    "AI/ML",
    "Data Science",
    "Mathematics",
    "Productivity",
    "Database",
    "Data Analysis",
];

/// Grade levels offered by the listing page's grade select
pub const GRADE_LEVEL_OPTIONS: &[&str] = &[
    ALL,
    "Grades 4-8",
    "Grades 8-12",
    "Grades 9-12",
    "Grades 11-College",
    "High School-College",
];

/// A categorical filter: either the "all" sentinel or one exact value
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Filter {
    #[default]
    All,
    Only(String),
}

impl Filter {
    /// Parse a raw select value; `"all"` and the empty string both mean `All`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "" | ALL => Self::All,
            value => Self::Only(value.to_string()),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// The raw select value ("all" for the sentinel)
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => ALL,
            Self::Only(value) => value,
        }
    }

    fn accepts(&self, value: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(expected) => expected == value,
        }
    }
}

impl From<String> for Filter {
    fn from(raw: String) -> Self {
        Self::parse(&raw)
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.as_str().to_string()
    }
}

/// Human label for a select option, with the sentinel spelled out
pub fn option_label<'a>(value: &'a str, all_label: &'a str) -> &'a str {
    if value == ALL {
        all_label
    } else {
        value
    }
}

/// The full set of predicates applied by the listing page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseQuery {
    /// Free text matched against title, description and instructor
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub grade: Filter,
    #[serde(default)]
    pub category: Filter,
}

impl CourseQuery {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_grade(mut self, grade: &str) -> Self {
        self.grade = Filter::parse(grade);
        self
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = Filter::parse(category);
        self
    }

    /// True when no predicate restricts the catalog
    pub fn is_unfiltered(&self) -> bool {
        self.text.is_empty() && self.grade.is_all() && self.category.is_all()
    }

    /// Evaluate every predicate against one course; `needle_lower` is the
    /// lowercased text, computed once per filter pass
    fn matches_with(&self, course: &Course, needle_lower: &str) -> bool {
        course.matches_text(needle_lower)
            && self.grade.accepts(&course.grade_level)
            && self.category.accepts(&course.category)
    }
}

/// Stable filter of `courses` by every active predicate in `query`
pub fn filter_courses<'a>(courses: &'a [Course], query: &CourseQuery) -> Vec<&'a Course> {
    let needle = query.text.to_lowercase();
    let matches: Vec<&Course> = courses
        .iter()
        .filter(|course| query.matches_with(course, &needle))
        .collect();

    tracing::debug!(
        text = %query.text,
        grade = query.grade.as_str(),
        category = query.category.as_str(),
        matches = matches.len(),
        "Filtered catalog"
    );
    matches
}

/// Title-only filter used by the home page's popular strip
pub fn filter_titles<'a>(courses: &'a [Course], text: &str) -> Vec<&'a Course> {
    let needle = text.to_lowercase();
    courses
        .iter()
        .filter(|course| course.title.to_lowercase().contains(&needle))
        .collect()
}

/// Heading above the listing grid: "1 Course Found" / "3 Courses Found"
pub fn result_heading(count: usize) -> String {
    let plural = if count == 1 { "" } else { "s" };
    format!("{} Course{} Found", count, plural)
}

/// Where the home page search box sends the visitor
pub fn search_redirect(raw: &str) -> String {
    if raw.trim().is_empty() {
        "/courses".to_string()
    } else {
        format!("/courses?search={}", urlencoding::encode(raw))
    }
}
