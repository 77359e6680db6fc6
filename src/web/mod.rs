mod context;
pub use context::RequestContext;

mod error;
pub use error::{ErrorResponse, WebError, WebResult};

pub mod middlewares;

mod state;
pub use state::AppState;

pub mod dto;

pub mod routes;

pub mod doc;
