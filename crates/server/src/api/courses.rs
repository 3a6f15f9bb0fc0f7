//! # Courses API
//!
//! JSON endpoints over the same query engine and lookup the pages use.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use learning_center_core::catalog::{
    filter_courses, lookup, Course, CourseQuery, Lookup, ALL, CATEGORY_OPTIONS,
    GRADE_LEVEL_OPTIONS,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::app::SharedState;

/// Listing filters, shared by `/courses` and `/api/v1/courses`
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CourseListParams {
    /// Free text matched against title, description and instructor
    pub search: Option<String>,
    /// Exact grade level, or "all"
    pub grade: Option<String>,
    /// Exact category, or "all"
    pub category: Option<String>,
}

impl CourseListParams {
    pub fn to_query(&self) -> CourseQuery {
        CourseQuery::new(self.search.clone().unwrap_or_default())
            .with_grade(self.grade.as_deref().unwrap_or(ALL))
            .with_category(self.category.as_deref().unwrap_or(ALL))
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub grade_level: String,
    pub tech_stack: String,
    pub duration: String,
    pub price: String,
    pub thumbnail: String,
    pub rating: f32,
    pub students: u32,
    pub capstone_project: String,
    pub learning_goals: String,
    pub key_takeaways: String,
    pub session_outline: Vec<String>,
}

impl From<&Course> for CourseResponse {
    fn from(course: &Course) -> Self {
        Self {
            id: course.id,
            title: course.title.clone(),
            description: course.description.clone(),
            instructor: course.instructor.clone(),
            category: course.category.clone(),
            grade_level: course.grade_level.clone(),
            tech_stack: course.tech_stack.clone(),
            duration: course.duration.clone(),
            price: course.price.clone(),
            thumbnail: course.thumbnail.clone(),
            rating: course.rating,
            students: course.students,
            capstone_project: course.capstone_project.clone(),
            learning_goals: course.learning_goals.clone(),
            key_takeaways: course.key_takeaways.clone(),
            session_outline: course.session_outline.clone(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct CourseListResponse {
    pub total: usize,
    /// Whether any predicate restricted the catalog
    pub filtered: bool,
    pub courses: Vec<CourseResponse>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct FacetsResponse {
    pub categories: Vec<String>,
    pub grade_levels: Vec<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}

/// Search the catalog
#[utoipa::path(
    get,
    path = "/api/v1/courses",
    tag = "courses",
    params(CourseListParams),
    responses(
        (status = 200, description = "Matching courses in catalog order", body = CourseListResponse)
    )
)]
pub async fn list_courses(
    State(state): State<SharedState>,
    Query(params): Query<CourseListParams>,
) -> Json<CourseListResponse> {
    let query = params.to_query();
    let courses: Vec<CourseResponse> = filter_courses(state.catalog.courses(), &query)
        .into_iter()
        .map(CourseResponse::from)
        .collect();

    Json(CourseListResponse {
        total: courses.len(),
        filtered: !query.is_unfiltered(),
        courses,
    })
}

/// Look up one course by id
#[utoipa::path(
    get,
    path = "/api/v1/courses/{id}",
    tag = "courses",
    params(("id" = String, Path, description = "Course id")),
    responses(
        (status = 200, description = "The course", body = CourseResponse),
        (status = 404, description = "No course has this id", body = ErrorResponse)
    )
)]
pub async fn get_course(
    State(state): State<SharedState>,
    Path(id): Path<String>,
) -> Result<Json<CourseResponse>, (StatusCode, Json<ErrorResponse>)> {
    match lookup(state.catalog.courses(), &id) {
        Lookup::Found(course) => Ok(Json(CourseResponse::from(course))),
        Lookup::Loading | Lookup::NotFound => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!("Course not found: {}", id),
            }),
        )),
    }
}

/// Filter values offered by the listing page
#[utoipa::path(
    get,
    path = "/api/v1/facets",
    tag = "courses",
    responses(
        (status = 200, description = "Category and grade level options", body = FacetsResponse)
    )
)]
pub async fn get_facets() -> Json<FacetsResponse> {
    Json(FacetsResponse {
        categories: CATEGORY_OPTIONS.iter().map(|c| c.to_string()).collect(),
        grade_levels: GRADE_LEVEL_OPTIONS.iter().map(|g| g.to_string()).collect(),
    })
}
