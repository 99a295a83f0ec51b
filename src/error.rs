use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("failed to start async runtime: {0}")]
    Runtime(#[source] io::Error),

    #[error("failed to open window: {0}")]
    Window(#[from] eframe::Error),

    #[error("cannot read metadata for {}: {source}", .path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("dropped file '{0}' has neither a path nor contents")]
    UnsizedDrop(String),

    #[error("--name is required with --headless")]
    MissingName,

    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("failed to write output: {0}")]
    Output(#[source] io::Error),
}
