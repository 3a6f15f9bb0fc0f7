//! # Course Records
//!
//! The typed shape of one entry in the static course catalog.

use serde::{Deserialize, Serialize};

/// A single course offered by the learning center.
///
/// Field names follow the camelCase keys of the bundled `courses.json`.
/// Every field is required; a record missing any of them fails to parse.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier, the only lookup key
    pub id: u32,
    pub title: String,
    pub description: String,
    pub instructor: String,
    /// Subject area, e.g. "Programming" or "AI/ML"
    pub category: String,
    /// Audience band, e.g. "Grades 4-8"
    pub grade_level: String,
    pub tech_stack: String,
    pub duration: String,
    /// Display price, kept as text ("$149")
    pub price: String,
    /// Thumbnail image URI
    pub thumbnail: String,
    pub rating: f32,
    /// Number of enrolled students
    pub students: u32,
    pub capstone_project: String,
    pub learning_goals: String,
    pub key_takeaways: String,
    /// Session titles in teaching order
    pub session_outline: Vec<String>,
}

impl Course {
    /// Case-insensitive substring match against title, description or instructor.
    ///
    /// `needle_lower` must already be lowercased; an empty needle matches.
    pub fn matches_text(&self, needle_lower: &str) -> bool {
        if needle_lower.is_empty() {
            return true;
        }
        self.title.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
            || self.instructor.to_lowercase().contains(needle_lower)
    }

    /// Route of the detail page for this course
    pub fn detail_path(&self) -> String {
        format!("/course/{}", self.id)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::Course;

    /// Build a minimal, valid course for tests
    pub fn course(id: u32, title: &str, category: &str, grade_level: &str) -> Course {
        Course {
            id,
            title: title.to_string(),
            description: format!("An introduction to {}", title),
            instructor: "Jane Doe".to_string(),
            category: category.to_string(),
            grade_level: grade_level.to_string(),
            tech_stack: "Python".to_string(),
            duration: "6 weeks".to_string(),
            price: "$99".to_string(),
            thumbnail: "https://example.com/thumb.png".to_string(),
            rating: 4.5,
            students: 100,
            capstone_project: "Final project".to_string(),
            learning_goals: "Goals".to_string(),
            key_takeaways: "Takeaways".to_string(),
            session_outline: vec!["Intro".to_string(), "Wrap-up".to_string()],
        }
    }

    /// The two-course catalog used throughout the query and lookup tests
    pub fn sample() -> Vec<Course> {
        vec![
            course(1, "Python Basics", "Programming", "Grades 4-8"),
            course(2, "AI Foundations", "AI/ML", "Grades 9-12"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::course;

    #[test]
    fn test_matches_text_checks_each_field() {
        let mut c = course(1, "Python Basics", "Programming", "Grades 4-8");
        c.instructor = "Emily Carter".to_string();

        assert!(c.matches_text("python"));
        assert!(c.matches_text("introduction"));
        assert!(c.matches_text("carter"));
        assert!(!c.matches_text("rust"));
    }

    #[test]
    fn test_empty_needle_matches() {
        let c = course(1, "Python Basics", "Programming", "Grades 4-8");
        assert!(c.matches_text(""));
    }

    #[test]
    fn test_camel_case_fields_deserialize() {
        let json = r#"{
            "id": 7, "title": "T", "description": "D", "instructor": "I",
            "category": "Programming", "gradeLevel": "Grades 9-12",
            "techStack": "Rust", "duration": "1 week", "price": "$1",
            "thumbnail": "https://example.com/t.png", "rating": 4.0,
            "students": 3, "capstoneProject": "C", "learningGoals": "L",
            "keyTakeaways": "K", "sessionOutline": ["a", "b"]
        }"#;
        let c: super::Course = serde_json::from_str(json).unwrap();

        assert_eq!(c.grade_level, "Grades 9-12");
        assert_eq!(c.session_outline, vec!["a", "b"]);
        assert_eq!(c.detail_path(), "/course/7");
    }
}
