use thiserror::Error;

pub type Result<T> = std::result::Result<T, IssuanceError>;

/// Errors surfaced by the issuance engine and its interfaces.
///
/// Every engine-level failure is a total rejection: the operation that
/// produced it has left the ledger and the lifecycle state untouched. The
/// inner strings are stable reason codes asserted on by callers.
#[derive(Error, Debug)]
pub enum IssuanceError {
    /// The operation is not permitted in the current lifecycle state.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    /// An amount violates the engine's arithmetic rules.
    #[error("invalid amount: {0}")]
    InvalidAmount(&'static str),
    /// The caller has no ledger entry to act on.
    #[error("not found: {0}")]
    NotFound(&'static str),
    /// A privileged operation was invoked by a non-owner.
    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),
    /// A capability collaborator (treasury or token mint) failed.
    #[error("capability error: {0}")]
    Capability(String),
    /// An op-script row is missing a required field.
    #[error("script error: {0}")]
    Script(&'static str),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl IssuanceError {
    /// The stable reason string carried by domain errors, if any.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::InvalidState(r)
            | Self::InvalidAmount(r)
            | Self::NotFound(r)
            | Self::Unauthorized(r)
            | Self::Script(r) => Some(*r),
            Self::Capability(r) => Some(r.as_str()),
            Self::Csv(_) | Self::Io(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reason_exposes_domain_strings() {
        let err = IssuanceError::InvalidState("Not open for investments.");
        assert_eq!(err.reason(), Some("Not open for investments."));
        assert_eq!(err.to_string(), "invalid state: Not open for investments.");
    }

    #[test]
    fn test_reason_absent_for_interface_errors() {
        let err = IssuanceError::from(std::io::Error::other("boom"));
        assert!(err.reason().is_none());
    }
}
