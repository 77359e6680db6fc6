use axum::{extract::Request, middleware::Next, response::Response};
use tower_cookies::{Cookie, Cookies, cookie::SameSite};

use crate::{
    session::{SessionId, new_session_id},
    web::RequestContext,
};

pub static SESSION_COOKIE: &str = "SID";

/// Attaches a [`RequestContext`] to the request, issuing a fresh session cookie when the client
/// has none or sends one that is not a valid session id.
pub async fn extract_context_fn(cookies: Cookies, mut req: Request, next: Next) -> Response {
    let existing = cookies
        .get(SESSION_COOKIE)
        .and_then(|cookie| cookie.value().parse::<SessionId>().ok());

    let ctx = match existing {
        Some(session) => RequestContext::new(session, false),
        None => {
            let session = new_session_id();
            tracing::debug!(%session, "issuing session cookie");

            let mut cookie = Cookie::new(SESSION_COOKIE, session.to_string());
            cookie.set_same_site(SameSite::Lax);
            cookie.set_http_only(true);
            cookie.set_path("/");
            cookies.add(cookie);

            RequestContext::new(session, true)
        }
    };

    req.extensions_mut().insert(ctx);
    next.run(req).await
}
