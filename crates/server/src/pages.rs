//! # Pages
//!
//! Server-rendered HTML views. Each handler builds a Tera context from the
//! catalog and static content, then renders one embedded template.

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode, Uri},
    response::{Html, IntoResponse, Redirect, Response},
    routing::get,
    Form, Router,
};
use cookie::Cookie;
use learning_center_core::catalog::{
    filter_courses, filter_titles, lookup, option_label, result_heading, search_redirect, Filter,
    Lookup, CATEGORY_OPTIONS, GRADE_LEVEL_OPTIONS, POPULAR_COUNT,
};
use learning_center_core::contact::ContactForm;
use learning_center_core::content::{
    ABOUT_PILLARS, ABOUT_STATS, CONTACT_INFO, CORE_VALUES, HERO_STATS, HOME_FEATURES,
    HOW_IT_WORKS, NAV_LINKS, SITE_NAME, WHY_CHOOSE_US,
};
use learning_center_core::session::{resolve_session, SESSION_COOKIE};
use learning_center_core::showcase::{window, TESTIMONIALS, VISIBLE};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tera::{Context, Value};

use crate::api::courses::CourseListParams;
use crate::app::{AppState, SharedState};

pub fn page_routes() -> Router<SharedState> {
    Router::new()
        .route("/", get(home))
        .route("/search", get(search))
        .route("/courses", get(courses))
        .route("/course/:id", get(course_detail))
        .route("/about", get(about))
        .route("/contact", get(contact).post(submit_contact))
        .route("/login", get(login))
}

#[derive(Debug, Default, Deserialize)]
pub struct HomeParams {
    /// Title filter for the popular courses strip
    search: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    q: Option<String>,
}

/// One `<option>` of a filter select
#[derive(Debug, Serialize)]
struct SelectOption<'a> {
    value: &'a str,
    label: &'a str,
    selected: bool,
}

fn select_options<'a>(
    options: &'a [&'a str],
    all_label: &'a str,
    selected: &Filter,
) -> Vec<SelectOption<'a>> {
    options
        .iter()
        .map(|&value| SelectOption {
            value,
            label: option_label(value, all_label),
            selected: value == selected.as_str(),
        })
        .collect()
}

/// Context shared by every page: branding and navigation
fn page_context(current_path: &str) -> Context {
    let mut context = Context::new();
    context.insert("site_name", SITE_NAME);
    context.insert("nav_links", NAV_LINKS);
    context.insert("current_path", current_path);
    context
}

fn render(state: &AppState, template: &str, context: &Context, status: StatusCode) -> Response {
    match state.templates.render(template, context) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(template, "Template render failed: {:?}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// Value of the session-presence cookie, if the visitor sent one
fn session_token(headers: &HeaderMap) -> Option<String> {
    for raw in headers
        .get_all(header::COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
    {
        for cookie in Cookie::split_parse(raw).flatten() {
            if cookie.name() == SESSION_COOKIE {
                return Some(cookie.value().to_string());
            }
        }
    }
    None
}

/// Tera filter grouping digits with commas: 1250 -> "1,250"
pub fn thousands(value: &Value, _args: &HashMap<String, Value>) -> tera::Result<Value> {
    let number = value
        .as_u64()
        .ok_or_else(|| tera::Error::msg("thousands expects a non-negative integer"))?;

    let digits = number.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    Ok(Value::String(grouped))
}

async fn home(
    State(state): State<SharedState>,
    Query(params): Query<HomeParams>,
    headers: HeaderMap,
) -> Response {
    let token = session_token(&headers);
    let session = resolve_session(state.session_probe.as_ref(), token.as_deref()).await;

    let search = params.search.unwrap_or_default();
    let popular = filter_titles(state.catalog.popular(POPULAR_COUNT), &search);

    let mut context = page_context("/");
    context.insert("learner", &session.learner());
    context.insert("search", &search);
    context.insert("popular", &popular);
    context.insert("hero_stats", HERO_STATS);
    context.insert("features", HOME_FEATURES);
    context.insert("steps", HOW_IT_WORKS);
    context.insert("testimonials", window(TESTIMONIALS, 0, VISIBLE));
    render(&state, "home.html", &context, StatusCode::OK)
}

/// Home page search box: hand the query to the listing page
async fn search(Query(params): Query<SearchParams>) -> Redirect {
    Redirect::to(&search_redirect(params.q.as_deref().unwrap_or_default()))
}

async fn courses(
    State(state): State<SharedState>,
    Query(params): Query<CourseListParams>,
) -> Response {
    let query = params.to_query();
    let matches = filter_courses(state.catalog.courses(), &query);

    let mut context = page_context("/courses");
    context.insert("query", &query);
    context.insert("courses", &matches);
    context.insert("heading", &result_heading(matches.len()));
    context.insert("filtered", &!query.is_unfiltered());
    context.insert(
        "grade_options",
        &select_options(GRADE_LEVEL_OPTIONS, "All Grade Levels", &query.grade),
    );
    context.insert(
        "category_options",
        &select_options(CATEGORY_OPTIONS, "All Categories", &query.category),
    );
    render(&state, "courses.html", &context, StatusCode::OK)
}

async fn course_detail(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    let mut context = page_context("/courses");

    match lookup(state.catalog.courses(), &id) {
        Lookup::Found(course) => {
            context.insert("course", course);
            render(&state, "course_detail.html", &context, StatusCode::OK)
        }
        Lookup::Loading => render(&state, "course_loading.html", &context, StatusCode::OK),
        Lookup::NotFound => {
            tracing::debug!(id = %id, "Course not found");
            render(&state, "course_not_found.html", &context, StatusCode::NOT_FOUND)
        }
    }
}

async fn about(State(state): State<SharedState>) -> Response {
    let mut context = page_context("/about");
    context.insert("pillars", ABOUT_PILLARS);
    context.insert("stats", ABOUT_STATS);
    context.insert("reasons", WHY_CHOOSE_US);
    context.insert("values", CORE_VALUES);
    render(&state, "about.html", &context, StatusCode::OK)
}

fn contact_context(form: &ContactForm) -> Context {
    let mut context = page_context("/contact");
    context.insert("info", &CONTACT_INFO);
    context.insert("form", form);
    context
}

async fn contact(State(state): State<SharedState>) -> Response {
    let context = contact_context(&ContactForm::default());
    render(&state, "contact.html", &context, StatusCode::OK)
}

async fn submit_contact(
    State(state): State<SharedState>,
    Form(form): Form<ContactForm>,
) -> Response {
    match form.submit() {
        Ok(ack) => {
            // Cleared form, like a fresh page
            let mut context = contact_context(&ContactForm::default());
            context.insert("acknowledgement", &ack);
            render(&state, "contact.html", &context, StatusCode::OK)
        }
        Err(e) => {
            let mut context = contact_context(&form);
            context.insert("error", &e.to_string());
            render(
                &state,
                "contact.html",
                &context,
                StatusCode::UNPROCESSABLE_ENTITY,
            )
        }
    }
}

async fn login(State(state): State<SharedState>) -> Response {
    render(&state, "login.html", &page_context("/login"), StatusCode::OK)
}

pub async fn not_found(State(state): State<SharedState>, uri: Uri) -> Response {
    let mut context = page_context(uri.path());
    context.insert("path", uri.path());
    render(&state, "not_found.html", &context, StatusCode::NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support;
    use axum::body::Body;
    use axum::http::{Method, Request};
    use tower::ServiceExt;

    async fn get_page(uri: &str) -> (StatusCode, String) {
        send(Request::builder().uri(uri).body(Body::empty()).unwrap()).await
    }

    async fn send(request: Request<Body>) -> (StatusCode, String) {
        let response = test_support::router().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_thousands_filter() {
        let args = HashMap::new();
        assert_eq!(thousands(&Value::from(980), &args).unwrap(), "980");
        assert_eq!(thousands(&Value::from(1250), &args).unwrap(), "1,250");
        assert_eq!(thousands(&Value::from(1234567), &args).unwrap(), "1,234,567");
        assert!(thousands(&Value::from("many"), &args).is_err());
    }

    #[test]
    fn test_session_token_from_cookie_header() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, "theme=dark; authToken=abc123".parse().unwrap());
        assert_eq!(session_token(&headers), Some("abc123".to_string()));

        assert_eq!(session_token(&HeaderMap::new()), None);
    }

    #[tokio::test]
    async fn test_listing_shows_full_catalog() {
        let (status, body) = get_page("/courses").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("8 Courses Found"));
        assert!(body.contains("Browse all available courses"));
    }

    #[tokio::test]
    async fn test_listing_text_search() {
        let (status, body) = get_page("/courses?search=python").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Python Basics"));
        assert!(!body.contains("SQL and Databases"));
        assert!(body.contains("Filtered results based on your criteria"));
    }

    #[tokio::test]
    async fn test_listing_category_filter() {
        let (_, body) = get_page("/courses?category=AI%2FML&grade=all").await;

        assert!(body.contains("1 Course Found"));
        assert!(body.contains("AI Foundations"));
    }

    #[tokio::test]
    async fn test_listing_empty_result() {
        let (status, body) = get_page("/courses?search=zzz").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("0 Courses Found"));
        assert!(body.contains("No courses found"));
    }

    #[tokio::test]
    async fn test_detail_found() {
        let (status, body) = get_page("/course/2").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("AI Foundations"));
        assert!(body.contains("Decision trees"));
        assert!(body.contains("Back to Courses"));
    }

    #[tokio::test]
    async fn test_detail_unknown_and_malformed_ids_share_not_found() {
        for uri in ["/course/99", "/course/abc"] {
            let (status, body) = get_page(uri).await;
            assert_eq!(status, StatusCode::NOT_FOUND, "{}", uri);
            assert!(body.contains("Course Not Found"));
            assert!(body.contains("Browse All Courses"));
        }
    }

    #[tokio::test]
    async fn test_home_hero_depends_on_session_cookie() {
        let (_, anonymous) = get_page("/").await;
        assert!(anonymous.contains("Get Started Free"));
        assert!(!anonymous.contains("Welcome back"));

        let request = Request::builder()
            .uri("/")
            .header(header::COOKIE, "authToken=abc123")
            .body(Body::empty())
            .unwrap();
        let (status, signed_in) = send(request).await;

        assert_eq!(status, StatusCode::OK);
        assert!(signed_in.contains("Welcome back, John Doe"));
        assert!(!signed_in.contains("Get Started Free"));
    }

    #[tokio::test]
    async fn test_home_popular_strip_filters_titles() {
        let (_, body) = get_page("/?search=algebra").await;

        assert!(body.contains("Algebra Through Code"));
        assert!(!body.contains("AI Foundations"));
    }

    #[tokio::test]
    async fn test_home_offers_popular_filter_form() {
        let (_, body) = get_page("/").await;
        assert!(body.contains(r#"class="popular-filter""#));
        assert!(body.contains(r#"name="search""#));

        let (_, filtered) = get_page("/?search=algebra").await;
        assert!(filtered.contains(r#"value="algebra""#));
    }

    #[tokio::test]
    async fn test_detail_reads_leading_integer_of_id() {
        let (status, body) = get_page("/course/2abc").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("AI Foundations"));
    }

    #[tokio::test]
    async fn test_search_redirects_to_listing() {
        let response = test_support::router()
            .oneshot(
                Request::builder()
                    .uri("/search?q=data+science")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(
            response.headers()[header::LOCATION],
            "/courses?search=data%20science"
        );
    }

    #[tokio::test]
    async fn test_contact_submission() {
        let ok = Request::builder()
            .method(Method::POST)
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(
                "name=Ada&email=ada%40example.com&subject=Hello&message=Question",
            ))
            .unwrap();
        let (status, body) = send(ok).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Thank you for your message!"));

        let missing = Request::builder()
            .method(Method::POST)
            .uri("/contact")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("name=Ada&email=ada%40example.com"))
            .unwrap();
        let (status, body) = send(missing).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert!(body.contains("subject is required"));
    }

    #[tokio::test]
    async fn test_static_pages_render() {
        for uri in ["/about", "/contact", "/login"] {
            let (status, _) = get_page(uri).await;
            assert_eq!(status, StatusCode::OK, "{}", uri);
        }
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found_page() {
        let (status, body) = get_page("/nowhere").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Page Not Found"));
    }
}
