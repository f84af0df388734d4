use thiserror::Error;

use stunning_api::ApiError;
use stunning_core::CoreError;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("failed to load {resource}: {message}")]
    Query { resource: String, message: String },
}
