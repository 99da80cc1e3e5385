use thiserror::Error;

use crate::location::LocationId;

/// Failure of the initial location request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum FetchError {
    #[error("Failed to fetch locations: {0}")]
    Network(String),

    #[error("Failed to fetch locations: HTTP {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Unexpected location data: {0}")]
    Decode(String),

    #[error("Invalid location data: {0}")]
    Invalid(#[from] ValidationError),
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ValidationError {
    #[error("location id {id} is used more than once")]
    DuplicateId { id: LocationId },

    #[error("location {id} has an invalid position ({lat}, {lng})")]
    InvalidPosition { id: LocationId, lat: f64, lng: f64 },
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum GeolocationError {
    #[error("geolocation is not supported")]
    Unsupported,

    #[error("permission denied: {0}")]
    Denied(String),

    #[error("position unavailable: {0}")]
    Unavailable(String),

    #[error("timeout: {0}")]
    Timeout(String),

    #[error("{0}")]
    Other(String),
}

impl GeolocationError {
    /// Maps a `GeolocationPositionError` code.
    #[must_use]
    pub fn from_code(code: u16, message: String) -> Self {
        match code {
            1 => Self::Denied(message),
            2 => Self::Unavailable(message),
            3 => Self::Timeout(message),
            _ => Self::Other(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geolocation_error_codes() {
        assert_eq!(
            GeolocationError::from_code(1, "User denied".into()),
            GeolocationError::Denied("User denied".into())
        );
        assert!(matches!(
            GeolocationError::from_code(2, "Position unavailable".into()),
            GeolocationError::Unavailable(_)
        ));
        assert!(matches!(
            GeolocationError::from_code(3, String::new()),
            GeolocationError::Timeout(_)
        ));
        assert!(matches!(
            GeolocationError::from_code(42, String::new()),
            GeolocationError::Other(_)
        ));
    }

    #[test]
    fn fetch_error_messages() {
        let err = FetchError::Status {
            status: 503,
            reason: "Service Unavailable".into(),
        };
        assert_eq!(
            err.to_string(),
            "Failed to fetch locations: HTTP 503 Service Unavailable"
        );
        let err = FetchError::from(ValidationError::DuplicateId { id: 4 });
        assert_eq!(
            err.to_string(),
            "Invalid location data: location id 4 is used more than once"
        );
    }
}
