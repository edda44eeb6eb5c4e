//! Exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define the process exit codes `dirgraph` can return.
//! - Map `ClientError` variants onto those codes.
//!
//! Does NOT handle:
//! - Error message formatting (anyhow `Display`).
//! - Signal handling (see `cancellation`).
//!
//! Invariants:
//! - Exit code 130 is reserved for SIGINT (128 + 2).

use directory_client::ClientError;

/// Structured exit codes for `dirgraph`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including configuration errors.
    GeneralError = 1,

    /// No usable bearer token, or the API rejected it (HTTP 401/403).
    ///
    /// Scripts should sign in again and pass a fresh token.
    AuthorizationRequired = 2,

    /// Network failure or timeout. Scripts may retry.
    ConnectionError = 3,

    /// The requested object id does not exist.
    NotFound = 4,

    /// The request could not be formed, or the response could not be read.
    ///
    /// Retrying the same command will not help.
    InvalidData = 5,

    /// Any other non-success response from the directory API.
    RemoteError = 6,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }

}

const SIGN_IN_HINT: &str =
    "AuthorizationRequired: sign in and pass a bearer token with --access-token or GRAPH_ACCESS_TOKEN";

const PERMISSION_HINT: &str =
    "AuthorizationRequired: the signed-in account lacks permission for this request";

/// Short hint printed after the error message, if any.
///
/// A fresh sign-in is suggested only when a new token could help; HTTP 403
/// gets a permission hint instead.
pub fn hint_for(err: &anyhow::Error) -> Option<&'static str> {
    let client_error = err
        .chain()
        .find_map(|cause| cause.downcast_ref::<ClientError>())?;
    match client_error {
        e if e.requires_reauthentication() => Some(SIGN_IN_HINT),
        e if e.is_auth_error() => Some(PERMISSION_HINT),
        _ => None,
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::Unauthorized { .. } => ExitCode::AuthorizationRequired,

            ClientError::Http(_) | ClientError::Timeout(_) => ExitCode::ConnectionError,

            ClientError::NotFound(_) => ExitCode::NotFound,

            ClientError::Deserialization(_)
            | ClientError::InvalidResponse(_)
            | ClientError::UnsupportedRelation { .. }
            | ClientError::InvalidUrl(_) => ExitCode::InvalidData,

            ClientError::RemoteError { .. } => ExitCode::RemoteError,
        }
    }
}

/// Extract an exit code from an `anyhow::Error`.
pub trait ExitCodeExt {
    /// `GeneralError` unless a `ClientError` is found in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ClientError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use directory_client::LinkRelation;
    use std::time::Duration;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthorizationRequired.as_i32(), 2);
        assert_eq!(ExitCode::ConnectionError.as_i32(), 3);
        assert_eq!(ExitCode::NotFound.as_i32(), 4);
        assert_eq!(ExitCode::InvalidData.as_i32(), 5);
        assert_eq!(ExitCode::RemoteError.as_i32(), 6);
        assert_eq!(ExitCode::Interrupted.as_i32(), 130);
    }

    #[test]
    fn test_client_error_mapping() {
        assert_eq!(
            ExitCode::from(&ClientError::unauthorized_locally("no token")),
            ExitCode::AuthorizationRequired
        );
        assert_eq!(
            ExitCode::from(&ClientError::Timeout(Duration::from_secs(30))),
            ExitCode::ConnectionError
        );
        assert_eq!(
            ExitCode::from(&ClientError::NotFound("r1".into())),
            ExitCode::NotFound
        );
        assert_eq!(
            ExitCode::from(&ClientError::UnsupportedRelation {
                relation: LinkRelation::Manager,
                kind: "Role".into(),
            }),
            ExitCode::InvalidData
        );
        assert_eq!(
            ExitCode::from(&ClientError::Deserialization("bad".into())),
            ExitCode::InvalidData
        );
        assert_eq!(
            ExitCode::from(&ClientError::RemoteError {
                status: 500,
                url: "https://graph.windows.net/contoso/users".into(),
                code: None,
                message: "Internal Server Error".into(),
                request_id: None,
            }),
            ExitCode::RemoteError
        );
    }

    #[test]
    fn test_exit_code_found_through_context() {
        let err = Err::<(), _>(ClientError::NotFound("u1".into()))
            .context("Failed to fetch user")
            .unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::NotFound);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::anyhow!("invalid output format");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }

    #[test]
    fn test_hint_depends_on_rejection_status() {
        let missing = anyhow::Error::new(ClientError::unauthorized_locally("no token"))
            .context("Failed to list roles");
        assert_eq!(hint_for(&missing), Some(SIGN_IN_HINT));

        let expired = anyhow::Error::new(ClientError::Unauthorized {
            status: Some(401),
            message: "token expired".into(),
        });
        assert_eq!(hint_for(&expired), Some(SIGN_IN_HINT));

        let forbidden = anyhow::Error::new(ClientError::Unauthorized {
            status: Some(403),
            message: "Insufficient privileges to complete the operation.".into(),
        });
        assert_eq!(hint_for(&forbidden), Some(PERMISSION_HINT));
        assert_eq!(forbidden.exit_code(), ExitCode::AuthorizationRequired);

        assert_eq!(hint_for(&anyhow::Error::new(ClientError::NotFound("r1".into()))), None);
        assert_eq!(hint_for(&anyhow::anyhow!("invalid output format")), None);
    }
}
