//! Error taxonomy for waypoint generation and export.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, WaypointError>;

#[derive(Debug, Error)]
pub enum WaypointError {
    /// A field is missing or cannot be coerced to a finite number.
    #[error("invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    /// The output sink could not be written.
    #[error("export failed: {0}")]
    ExportFailure(String),
}

impl WaypointError {
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Field name for InvalidInput errors.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidInput { field, .. } => Some(field),
            Self::ExportFailure(_) => None,
        }
    }
}

impl From<std::io::Error> for WaypointError {
    fn from(err: std::io::Error) -> Self {
        Self::ExportFailure(err.to_string())
    }
}

impl From<csv::Error> for WaypointError {
    fn from(err: csv::Error) -> Self {
        Self::ExportFailure(err.to_string())
    }
}

impl From<kml::Error> for WaypointError {
    fn from(err: kml::Error) -> Self {
        Self::ExportFailure(err.to_string())
    }
}
