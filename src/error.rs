use std::path::PathBuf;

/// Errors raised while loading, correcting or exporting a sensor log.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input log does not exist.
    #[error("input file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// Any other I/O failure on a named file.
    #[error("failed to access {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A data line is malformed (missing columns or a non-numeric token).
    #[error("line {line}: {message}")]
    Parse { line: u64, message: String },

    /// A mean was requested over zero samples.
    #[error("cannot center the '{channel}' series: it has no samples")]
    EmptySeries { channel: &'static str },

    /// Mount angles or gravity constant are unusable.
    #[error("invalid mount configuration: {0}")]
    InvalidMount(String),

    /// Low-level CSV reader/writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A JSON config file could not be parsed.
    #[error("failed to parse config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// Map an `io::Error` on `path`, singling out the missing-file case.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound(path)
        } else {
            Error::Io { path, source }
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
