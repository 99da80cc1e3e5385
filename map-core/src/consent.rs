use std::{fmt, str::FromStr};

use thiserror::Error;

/// LocalStorage key holding the cookie consent decision.
pub const CONSENT_STORAGE_KEY: &str = "cookie-consent";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Consent {
    Accepted,
    Rejected,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown consent value {0:?}")]
pub struct UnknownConsent(pub String);

impl Consent {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
        }
    }
}

impl FromStr for Consent {
    type Err = UnknownConsent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "accepted" => Ok(Self::Accepted),
            "rejected" => Ok(Self::Rejected),
            _ => Err(UnknownConsent(s.to_string())),
        }
    }
}

impl fmt::Display for Consent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
