//! Error taxonomy for the GRC AI Engine.

use thiserror::Error;

/// Failures the lookup pipeline can surface to a caller.
///
/// `InvalidRequest` and `UnrecognizedStandard` are client errors (resubmit with
/// corrected input); `GenerationFailed` is a server-side failure of the outbound
/// generation call and is never retried automatically. A knowledge-base miss is
/// not an error - it is the control-flow branch into generation.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Task text violated a validation rule. Carries the rule's user-facing
    /// message verbatim.
    #[error("{0}")]
    InvalidRequest(String),

    /// Compliance input did not match any catalog entry or alias. Carries the
    /// original, un-normalized input.
    #[error("Compliance '{0}' not recognized or supported.")]
    UnrecognizedStandard(String),

    /// Outbound generation call failed at the transport or provider level.
    #[error("Error querying generation API: {0}")]
    GenerationFailed(String),
}

/// Bearer credential verification failures.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Not authenticated")]
    MissingCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrecognized_standard_names_the_input() {
        let err = LookupError::UnrecognizedStandard("hipaa2".to_string());
        assert_eq!(
            err.to_string(),
            "Compliance 'hipaa2' not recognized or supported."
        );
    }

    #[test]
    fn test_invalid_request_message_is_verbatim() {
        let err =
            LookupError::InvalidRequest("Compliance Task must be longer than 20 characters.".into());
        assert_eq!(
            err.to_string(),
            "Compliance Task must be longer than 20 characters."
        );
    }
}
