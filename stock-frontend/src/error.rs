use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Error aggregation")]
    Aggregate(Vec<AppError>),
    #[error("File operation failed")]
    FileOperationFailed(#[from] std::io::Error),
    #[error("Stopping the key listener failed")]
    ListenerShutdownFailed(#[from] tokio::sync::oneshot::error::RecvError),
    #[error("Loading products failed")]
    LoadProductsFailed(#[from] csv::Error),
    #[error("Product file is missing the column {0}")]
    MissingProductColumn(&'static str),
    #[error("Terminal not initialized")]
    TerminalNotInitialized,
}
