//! Error types for the gluster CLI client
//!
//! Classification order inside the client is fixed: busy marker first (raw
//! text, any exit code), then envelope decode, then outcome code, then
//! entity mapping.

use thiserror::Error;

/// Failure code the daemon reports on `peer detach` for an unknown host
pub const PEER_NOT_FOUND_CODE: i32 = 2;

/// Unified error type for the client
#[derive(Error, Debug)]
pub enum Error {
    // =========================================================================
    // Daemon Errors
    // =========================================================================
    /// The daemon is serializing another administrative operation.
    #[error("gluster busy: another transaction is in progress\ncommand: {command}\nexit code: {exit_code}\nstdout: {stdout}\nstderr: {stderr}")]
    Busy {
        command: String,
        exit_code: i32,
        stdout: String,
        stderr: String,
    },

    /// Output could not be decoded as the expected response shape.
    #[error("gluster response decode error: {reason}\ncommand: {command}\noutput: {output}")]
    Decode {
        command: String,
        output: String,
        reason: String,
    },

    /// The envelope (or exit code, for plain-text commands) reported failure.
    #[error("gluster command failed with code {code}: {message}\ncommand: {command}")]
    CommandFailed {
        command: String,
        code: i32,
        message: String,
        output: String,
    },

    #[error("gluster peer not found: {host}\ncommand: {command}")]
    PeerNotFound {
        host: String,
        command: String,
        output: String,
    },

    // =========================================================================
    // Local Errors
    // =========================================================================
    #[error("failed to execute {command}: {source}")]
    Exec {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Action a caller should take on error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorAction {
    /// Retry with exponential backoff
    RetryWithBackoff,
    /// Don't retry, the failure needs investigation
    NoRetry,
}

impl Error {
    /// Determine what action to take for this error
    pub fn action(&self) -> ErrorAction {
        match self {
            Error::Busy { .. } => ErrorAction::RetryWithBackoff,
            _ => ErrorAction::NoRetry,
        }
    }

    /// Check if this error is retryable
    pub fn is_retryable(&self) -> bool {
        !matches!(self.action(), ErrorAction::NoRetry)
    }

    /// Check if this error is transient
    pub fn is_transient(&self) -> bool {
        matches!(self, Error::Busy { .. })
    }

    /// Effective failure code, if the error carries one
    pub fn code(&self) -> Option<i32> {
        match self {
            Error::Busy { exit_code, .. } => Some(*exit_code),
            Error::CommandFailed { code, .. } => Some(*code),
            Error::PeerNotFound { .. } => Some(PEER_NOT_FOUND_CODE),
            _ => None,
        }
    }

    /// Rendered command line the error originated from
    pub fn command(&self) -> Option<&str> {
        match self {
            Error::Busy { command, .. }
            | Error::Decode { command, .. }
            | Error::CommandFailed { command, .. }
            | Error::PeerNotFound { command, .. }
            | Error::Exec { command, .. } => Some(command),
            _ => None,
        }
    }
}

/// Result type alias for the client
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn busy() -> Error {
        Error::Busy {
            command: "gluster --mode=script volume start vol1 --xml".into(),
            exit_code: 1,
            stdout: String::new(),
            stderr: "Another transaction is in progress for vol1".into(),
        }
    }

    #[test]
    fn test_error_actions() {
        assert_eq!(busy().action(), ErrorAction::RetryWithBackoff);

        let err = Error::CommandFailed {
            command: "gluster --mode=script volume stop vol1 --xml".into(),
            code: 2,
            message: "volume does not exist".into(),
            output: String::new(),
        };
        assert_eq!(err.action(), ErrorAction::NoRetry);

        let err = Error::Configuration("bad path".into());
        assert_eq!(err.action(), ErrorAction::NoRetry);
    }

    #[test]
    fn test_error_retryable() {
        assert!(busy().is_retryable());
        assert!(busy().is_transient());

        let decode = Error::Decode {
            command: "gluster --mode=script peer status --xml".into(),
            output: "<oops".into(),
            reason: "malformed".into(),
        };
        assert!(!decode.is_retryable());
        assert!(!decode.is_transient());
    }

    #[test]
    fn test_error_keeps_command_and_output() {
        let err = Error::Decode {
            command: "gluster --mode=script volume info --xml".into(),
            output: "<cliOutput>".into(),
            reason: "unexpected end of stream".into(),
        };
        let text = err.to_string();
        assert!(text.contains("gluster --mode=script volume info --xml"));
        assert!(text.contains("<cliOutput>"));
        assert_eq!(err.command(), Some("gluster --mode=script volume info --xml"));
    }

    #[test]
    fn test_error_codes() {
        let err = Error::PeerNotFound {
            host: "node9".into(),
            command: "gluster --mode=script peer detach node9 --xml".into(),
            output: String::new(),
        };
        assert_eq!(err.code(), Some(PEER_NOT_FOUND_CODE));
        assert_eq!(busy().code(), Some(1));
        assert_eq!(Error::Configuration("x".into()).code(), None);
    }
}
