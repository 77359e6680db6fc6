use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::{
    model::{CatalogRepository, ResourceTyped, entity::Lesson},
    web::{AppState, WebError, WebResult, dto::lessons::LessonResponse, error::ErrorResponse},
};

pub fn routes<S>(state: AppState) -> Router<S> {
    Router::new()
        .route("/{id}", get(lessons_get_handler))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/api/v1/lessons/{lesson_id}",
    description = "Fetch comprehensive info about lesson including its content and quiz",
    params(
        ("lesson_id" = String, Path, description = "ID of the lesson to get")
    ),
    responses(
        (status = 200, description = "Lesson found", body = LessonResponse),
        (status = 404, description = "Lesson not found", body = ErrorResponse),
    ),
    tag = "lessons"
)]
pub(crate) async fn lessons_get_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> WebResult<impl IntoResponse> {
    let catalog = state.catalog();
    let lesson = Lesson::find_by_id(catalog, &id)
        .ok_or_else(|| WebError::resource_not_found(Lesson::get_resource_type(), &id))?;

    let res = LessonResponse {
        lesson: lesson.clone(),
        quiz: catalog.quiz_for_lesson(lesson.id()).cloned(),
        completed: catalog.user().has_completed_lesson(lesson.id()),
    };

    Ok((StatusCode::OK, Json(res)))
}
