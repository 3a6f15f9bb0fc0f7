pub mod course;
pub mod loader;
pub mod lookup;
pub mod query;

pub use course::Course;
pub use loader::{Catalog, POPULAR_COUNT};
pub use lookup::{lookup, Lookup};
pub use query::{
    filter_courses, filter_titles, option_label, result_heading, search_redirect, CourseQuery,
    Filter, ALL, CATEGORY_OPTIONS, GRADE_LEVEL_OPTIONS,
};
