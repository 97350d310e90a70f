pub mod api;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;
pub mod state;

#[cfg(test)]
mod tests;

pub use api::{
    center_freq::{CenterFreqRequest, CenterFreqResponse, update_center_frequency},
    error::{ApiError, ApiErrorResponse, Result as ApiResult},
    files::{resolve_under_root, serve_file},
};
pub use error::{Result as ServerErrorResult, ServerError};
pub use routes::build_router;
pub use state::ServerState;
