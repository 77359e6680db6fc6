use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};

use crate::{
    model::ResourceType,
    progress::{LearningStats, course_progress, enrolled_courses, level_for},
    web::{
        AppState, RequestContext, WebError, WebResult,
        dto::{
            courses::CourseSummary,
            progress::{DashboardResponse, EnrolledCourse, LevelResponse, ProfileResponse},
        },
        error::ErrorResponse,
        middlewares,
    },
};

pub fn dashboard_routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(dashboard_get_handler))
        .layer(middleware::from_fn(middlewares::extract_context_fn))
        .with_state(state)
}

pub fn level_routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/{xp}", get(level_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/dashboard",
    description = "Learner dashboard: profile, tier, statistics, courses in progress and achievements",
    responses(
        (status = 200, description = "Dashboard built", body = DashboardResponse),
    ),
    tag = "progress"
)]
pub(crate) async fn dashboard_get_handler(
    ctx: RequestContext,
    State(state): State<AppState>,
) -> WebResult<impl IntoResponse> {
    let catalog = state.catalog();
    let user = catalog.user();
    let joined = state.sessions().enrolled(ctx.session()).await;

    let courses = enrolled_courses(catalog, &joined)
        .into_iter()
        .map(|course| EnrolledCourse {
            course: CourseSummary::from(course),
            progress: course_progress(user, course),
        })
        .collect();

    let res = DashboardResponse {
        profile: ProfileResponse::from(user),
        level: level_for(user.xp()),
        stats: LearningStats::from_user(user),
        courses,
        achievements: user.achievements().to_vec(),
    };

    Ok((StatusCode::OK, Json(res)))
}

#[utoipa::path(
    get,
    path = "/api/v1/level/{xp}",
    description = "Tier and progress for an XP total",
    params(
        ("xp" = u32, Path, description = "Non-negative XP total")
    ),
    responses(
        (status = 200, description = "Level computed", body = LevelResponse),
        (status = 400, description = "XP is not a non-negative whole number", body = ErrorResponse),
    ),
    tag = "progress"
)]
pub(crate) async fn level_get_handler(Path(xp): Path<String>) -> WebResult<impl IntoResponse> {
    let xp: u32 = xp.trim().parse().map_err(|_| {
        WebError::resource_bad_request(ResourceType::Level, "xp must be a non-negative whole number")
    })?;

    Ok((StatusCode::OK, Json(LevelResponse::new(xp, level_for(xp)))))
}
