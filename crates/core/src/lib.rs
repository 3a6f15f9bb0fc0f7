//! # Learning Center Core
//!
//! The "Brain" of the Learning Center site - contains the course catalog,
//! the query engine, the detail lookup and the per-view state the pages
//! are rendered from.
//!
//! ## Architecture
//!
//! - `catalog/` - Typed course records, validated loading, filtering and lookup
//! - `session/` - Explicit session context passed into page rendering
//! - `showcase/` - Lifecycle-owned ticker for the rotating testimonial showcase
//! - `content/` - Static marketing copy (navigation, features, values)
//! - `contact/` - Contact form validation and acknowledgement
//!
//! ## Usage
//!
//! ```rust,ignore
//! use learning_center_core::catalog::{filter_courses, Catalog, CourseQuery};
//!
//! let catalog = Catalog::embedded()?;
//! let query = CourseQuery::new("python").with_category("Programming");
//! let matches = filter_courses(catalog.courses(), &query);
//! ```

pub mod catalog;
pub mod contact;
pub mod content;
pub mod error;
pub mod session;
pub mod showcase;

pub use error::{Error, Result};
