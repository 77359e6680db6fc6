//! Request context: which anonymous session the request belongs to.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    session::SessionId,
    web::{WebResult, error::WebError},
};

#[derive(Debug, Clone)]
pub struct RequestContext {
    session: SessionId,
    is_new: bool,
}

impl RequestContext {
    pub fn new(session: SessionId, is_new: bool) -> Self {
        Self { session, is_new }
    }

    pub fn session(&self) -> SessionId {
        self.session
    }

    /// The session cookie was issued by this very request.
    pub fn is_new(&self) -> bool {
        self.is_new
    }
}

impl<S> FromRequestParts<S> for RequestContext
where
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> WebResult<Self> {
        parts
            .extensions
            .get::<RequestContext>()
            .cloned()
            .ok_or(WebError::session_missing())
    }
}
