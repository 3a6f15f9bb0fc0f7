//! # JSON API
//!
//! Catalog search and lookup for script clients, plus the showcase stream.

use axum::{
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use utoipa::OpenApi;

use crate::app::SharedState;

pub mod courses;
pub mod showcase;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Learning Center API",
        version = "1.0.0",
        description = "Search and look up courses in the Learning Center catalog"
    ),
    paths(
        courses::list_courses,
        courses::get_course,
        courses::get_facets,
        showcase::showcase_events
    ),
    components(
        schemas(
            courses::CourseResponse,
            courses::CourseListResponse,
            courses::FacetsResponse,
            courses::ErrorResponse,
            showcase::ShowcaseFrame,
            showcase::TestimonialResponse
        )
    ),
    tags(
        (name = "courses", description = "Catalog search and lookup"),
        (name = "showcase", description = "Rotating testimonial showcase")
    )
)]
pub struct ApiDoc;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/courses", get(courses::list_courses))
        .route("/courses/:id", get(courses::get_course))
        .route("/facets", get(courses::get_facets))
        .route("/showcase/events", get(showcase::showcase_events))
        .route("/openapi.json", get(serve_openapi))
}

async fn serve_openapi() -> impl IntoResponse {
    let spec = ApiDoc::openapi().to_json().unwrap_or_default();
    ([(header::CONTENT_TYPE, "application/json")], spec)
}
