use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

pub struct SessionCookieModifier;

impl Modify for SessionCookieModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(schema) = openapi.components.as_mut() {
            schema.add_security_scheme(
                "session",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "SID",
                    "Anonymous session id, issued on first request; scopes enrollment",
                ))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::web::routes::home::home_get_handler,
        crate::web::routes::courses::courses_list_handler,
        crate::web::routes::courses::courses_get_handler,
        crate::web::routes::courses::courses_enroll_handler,
        crate::web::routes::courses::courses_unenroll_handler,
        crate::web::routes::lessons::lessons_get_handler,
        crate::web::routes::progress::dashboard_get_handler,
        crate::web::routes::progress::level_get_handler,
    ),
    modifiers(&SessionCookieModifier),
)]
pub struct ApiDoc;
