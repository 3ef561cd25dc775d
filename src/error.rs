//! Error types for the visualizer shell
//!
//! The sorting core has no recoverable errors: a bad index is a bug and
//! panics. What can fail is the terminal itself, the startup
//! configuration, and log setup. All of them surface as [`VizError`].

/// Result alias that carries [`VizError`]
pub type Result<T> = std::result::Result<T, VizError>;

#[derive(Debug, thiserror::Error)]
pub enum VizError {
    /// Terminal setup, drawing, or input polling failed
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration cannot drive a run
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The log subscriber could not be installed
    #[error("logging setup failed: {0}")]
    Logging(String),
}

impl VizError {
    pub fn config<T: Into<String>>(msg: T) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
