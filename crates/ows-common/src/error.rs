//! Error types for the OGC web service crates.

use thiserror::Error;

/// Result type alias using OwsError.
pub type OwsResult<T> = Result<T, OwsError>;

/// Primary error type for SRS and layer operations.
#[derive(Debug, Error)]
pub enum OwsError {
    // === SRS Errors ===
    #[error("Unrecognized SRS name: {0}")]
    UnrecognizedSrsName(String),

    #[error("SRS {auth_name}:{auth_srid} not handled by the spatial reference table")]
    SrsNotHandled { auth_name: String, auth_srid: i32 },

    #[error("SRID {0} not handled by the spatial reference table")]
    SridNotHandled(i32),

    // === Layer Errors ===
    #[error("Layer '{0}' has no resolved SRS")]
    LayerSrsContract(String),

    // === Infrastructure Errors ===
    #[error("Database error: {0}")]
    Database(String),
}

impl OwsError {
    /// Get the OGC service exception code for this error.
    pub fn exception_code(&self) -> &'static str {
        match self {
            OwsError::UnrecognizedSrsName(_)
            | OwsError::SrsNotHandled { .. }
            | OwsError::SridNotHandled(_) => "InvalidSRS",
            OwsError::LayerSrsContract(_) | OwsError::Database(_) => "NoApplicableCode",
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            OwsError::UnrecognizedSrsName(_)
            | OwsError::SrsNotHandled { .. }
            | OwsError::SridNotHandled(_) => 400,
            OwsError::LayerSrsContract(_) | OwsError::Database(_) => 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_srs_errors_map_to_invalid_srs() {
        let err = OwsError::UnrecognizedSrsName("FOO:4326".to_string());
        assert_eq!(err.exception_code(), "InvalidSRS");
        assert_eq!(err.http_status_code(), 400);

        let err = OwsError::SridNotHandled(999999);
        assert_eq!(err.exception_code(), "InvalidSRS");
        assert_eq!(err.http_status_code(), 400);
    }

    #[test]
    fn test_contract_violation_is_internal() {
        let err = OwsError::LayerSrsContract("temperature_2m".to_string());
        assert_eq!(err.exception_code(), "NoApplicableCode");
        assert_eq!(err.http_status_code(), 500);
    }
}
