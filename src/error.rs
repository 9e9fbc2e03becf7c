use std::path::PathBuf;

pub type Result<T, E = ReportError> = core::result::Result<T, E>;

#[derive(thiserror::Error, Debug)]
pub enum ReportError {
    /// Result file could not be opened or read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Result file is not valid JSON.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Valid JSON, but the top-level value is not an object.
    #[error("failed to parse {}: top-level JSON value is not an object", .path.display())]
    NotAnObject { path: PathBuf },
    /// A required field is absent from an otherwise valid record.
    #[error("missing required field `{key}` in {}", .path.display())]
    MissingField { key: String, path: PathBuf },
    /// Writing the report itself failed (closed stdout, full disk).
    #[error("output: {0}")]
    Output(#[from] std::io::Error),
}

impl ReportError {
    /// True for both invalid JSON and a non-object top level.
    pub fn is_parse(&self) -> bool {
        matches!(self, Self::Parse { .. } | Self::NotAnObject { .. })
    }

    /// The result file this error is about, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Io { path, .. }
            | Self::Parse { path, .. }
            | Self::NotAnObject { path }
            | Self::MissingField { path, .. } => Some(path),
            Self::Output(_) => None,
        }
    }
}
