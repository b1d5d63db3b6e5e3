use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StacError {
    #[error("Items directory not found: {}", .0.display())]
    DirectoryMissing(PathBuf),

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid JSON: {0}")]
    ParseText(serde_json::Error),

    #[error("Not a STAC Item (type != 'Feature')")]
    NotAStacItem,

    #[error("Error parsing geometry: {0}")]
    GeometryParse(serde_json::Error),

    #[error("Error parsing geometry: decoded value is not an object or null")]
    GeometryNotObject,

    #[error("JSON serialization failed: {0}")]
    Serialize(serde_json::Error),

    #[error("Failed to write report: {0}")]
    Report(#[from] std::io::Error),

    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl StacError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StacError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, StacError>;
