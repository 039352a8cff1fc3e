use thiserror::Error;

/// Application-level errors
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    CoreError(#[from] vcardkit_core::error::CoreError),

    #[error("Parser task failed: {0}")]
    TaskError(#[from] tokio::task::JoinError),

    #[error("Failed to render output: {0}")]
    RenderError(#[from] serde_json::Error),
}

pub type AppResult<T> = std::result::Result<T, AppError>;
