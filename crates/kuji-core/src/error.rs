pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("cannot draw seats for an empty participant list")]
    EmptyRoster,

    #[error("invalid group size: {size} (group size must be at least 1)")]
    InvalidGroupSize { size: i64 },

    #[error("roster import failed: {0}")]
    RosterImport(#[from] csv::Error),

    #[error("history I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("history JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
