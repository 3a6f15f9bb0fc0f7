//! # Errors
//!
//! Failures raised while loading the catalog or validating visitor input.
//! "Not found" lookups and empty search results are display states, not errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Catalog contains no courses")]
    Empty,

    #[error("Course id must be a positive integer (found 0 at position {position})")]
    InvalidId { position: usize },

    #[error("Duplicate course id: {0}")]
    DuplicateId(u32),

    #[error("Course {id} has an empty `{field}` field")]
    MissingField { id: u32, field: &'static str },

    #[error("Course {id} has rating {rating} outside 0.0..=5.0")]
    InvalidRating { id: u32, rating: f32 },

    #[error("Invalid contact submission: {0}")]
    InvalidContact(String),

    #[error("Session check failed: {0}")]
    Session(String),
}

pub type Result<T> = std::result::Result<T, Error>;
