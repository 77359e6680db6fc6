use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;

use crate::{
    model::{CatalogRepository, ResourceTyped, entity::Course},
    progress::{CourseQuery, completion_percentage, filter_courses},
    web::{
        AppState, RequestContext, WebError, WebResult,
        dto::courses::{
            CourseDetailResponse, CourseListResponse, CourseSummary, EnrollmentResponse,
            LessonOutline,
        },
        error::ErrorResponse,
        middlewares,
    },
};

/// Raw catalog search parameters. Every field is optional; `all` means no restriction.
#[derive(Debug, Clone, Default, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CatalogParams {
    /// Case-insensitive text searched in titles and descriptions
    search: Option<String>,
    /// Difficulty tier, e.g. `beginner`, or `all`
    level: Option<String>,
    /// Course category, e.g. `grammar`, or `all`
    category: Option<String>,
}

impl From<&CatalogParams> for CourseQuery {
    fn from(params: &CatalogParams) -> Self {
        CourseQuery::parse(
            params.search.as_deref(),
            params.level.as_deref(),
            params.category.as_deref(),
        )
    }
}

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(courses_list_handler))
        .route("/{id}", get(courses_get_handler))
        .route(
            "/{id}/enroll",
            post(courses_enroll_handler).delete(courses_unenroll_handler),
        )
        .layer(middleware::from_fn(middlewares::extract_context_fn))
        .with_state(state)
}

fn find_course<'a>(state: &'a AppState, id: &str) -> WebResult<&'a Course> {
    Course::find_by_id(state.catalog(), id)
        .ok_or_else(|| WebError::resource_not_found(Course::get_resource_type(), id))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses",
    description = "Search the course catalog. Criteria are combined with AND; no match is an empty list, not an error",
    params(CatalogParams),
    responses(
        (status = 200, description = "Matching courses in catalog order", body = CourseListResponse),
    ),
    tag = "courses"
)]
pub(crate) async fn courses_list_handler(
    State(state): State<AppState>,
    Query(params): Query<CatalogParams>,
) -> WebResult<impl IntoResponse> {
    let query = CourseQuery::from(&params);
    let catalog = state.catalog();

    let courses: Vec<CourseSummary> = filter_courses(catalog.courses(), &query)
        .into_iter()
        .map(CourseSummary::from)
        .collect();
    tracing::debug!(?query, matches = courses.len(), "catalog search");

    let res = CourseListResponse {
        total: Course::count(catalog),
        shown: courses.len(),
        courses,
    };

    Ok((StatusCode::OK, Json(res)))
}

#[utoipa::path(
    get,
    path = "/api/v1/courses/{course_id}",
    description = "Course detail with lesson outline, the learner's completion and this session's enrollment",
    params(
        ("course_id" = String, Path, description = "ID of the course to get")
    ),
    responses(
        (status = 200, description = "Course found", body = CourseDetailResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub(crate) async fn courses_get_handler(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let course = find_course(&state, &id)?;
    let user = state.catalog().user();
    let enrolled = state.sessions().is_enrolled(ctx.session(), course.id()).await;

    let res = CourseDetailResponse {
        course: CourseSummary::from(course),
        prerequisites: course.prerequisites().map(<[String]>::to_vec),
        lessons: course
            .lessons()
            .iter()
            .map(|lesson| LessonOutline::new(lesson, user))
            .collect(),
        total_minutes: course.total_minutes(),
        total_xp: course.total_xp(),
        completion: completion_percentage(user.completed_lessons(), course.lessons()),
        enrolled,
    };

    Ok((StatusCode::OK, Json(res)))
}

#[utoipa::path(
    post,
    path = "/api/v1/courses/{course_id}/enroll",
    description = "Enroll the current session in a course. Enrolling twice is harmless",
    params(
        ("course_id" = String, Path, description = "ID of the course to join")
    ),
    responses(
        (status = 200, description = "Enrolled", body = EnrollmentResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub(crate) async fn courses_enroll_handler(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let course = find_course(&state, &id)?;
    let changed = state.sessions().enroll(ctx.session(), course.id()).await;

    let res = EnrollmentResponse {
        course_id: course.id().to_string(),
        enrolled: true,
        changed,
    };

    Ok((StatusCode::OK, Json(res)))
}

#[utoipa::path(
    delete,
    path = "/api/v1/courses/{course_id}/enroll",
    description = "Leave a course in the current session",
    params(
        ("course_id" = String, Path, description = "ID of the course to leave")
    ),
    responses(
        (status = 200, description = "Unenrolled", body = EnrollmentResponse),
        (status = 404, description = "Course not found", body = ErrorResponse),
    ),
    tag = "courses"
)]
pub(crate) async fn courses_unenroll_handler(
    ctx: RequestContext,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let course = find_course(&state, &id)?;
    let changed = state.sessions().unenroll(ctx.session(), course.id()).await;

    let res = EnrollmentResponse {
        course_id: course.id().to_string(),
        enrolled: false,
        changed,
    };

    Ok((StatusCode::OK, Json(res)))
}
