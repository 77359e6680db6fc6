use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};

use crate::web::{AppState, WebResult, dto::courses::{CourseSummary, HomeResponse}};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/", get(home_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/home",
    description = "Featured and popular courses for the landing page",
    responses(
        (status = 200, description = "Home page data", body = HomeResponse),
    ),
    tag = "home"
)]
pub(crate) async fn home_get_handler(State(state): State<AppState>) -> WebResult<impl IntoResponse> {
    let catalog = state.catalog();

    let res = HomeResponse {
        featured: catalog.featured().into_iter().map(CourseSummary::from).collect(),
        popular: catalog.popular().into_iter().map(CourseSummary::from).collect(),
        total_courses: catalog.courses().len(),
        total_students: catalog
            .courses()
            .iter()
            .map(|c| u64::from(c.students_enrolled()))
            .sum(),
    };

    Ok((StatusCode::OK, Json(res)))
}
