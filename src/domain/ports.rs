//! Domain Ports - Collaborator traits for the gluster client
//!
//! The client never spawns processes or inspects network interfaces itself.
//! Adapters implement these traits to provide concrete functionality.

use std::io;

// =============================================================================
// Command Execution
// =============================================================================

/// Captured result of one external process invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Process exit code (`-1` when terminated by a signal)
    pub exit_code: i32,
    /// Raw standard output
    pub stdout: Vec<u8>,
    /// Raw standard error
    pub stderr: Vec<u8>,
}

impl CommandOutput {
    pub fn new(exit_code: i32, stdout: impl Into<Vec<u8>>, stderr: impl Into<Vec<u8>>) -> Self {
        Self {
            exit_code,
            stdout: stdout.into(),
            stderr: stderr.into(),
        }
    }

    /// Successful invocation with the given standard output
    pub fn success(stdout: impl Into<Vec<u8>>) -> Self {
        Self::new(0, stdout, Vec::new())
    }

    pub fn stdout_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    pub fn stderr_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stderr).into_owned()
    }
}

/// Runs an argument vector as a subprocess
///
/// Implementations must not fail on a non-zero exit code; the client
/// inspects [`CommandOutput::exit_code`] itself. An `Err` means the process
/// could not be run at all.
pub trait CommandExecutor: Send + Sync {
    fn execute(&self, argv: &[String]) -> io::Result<CommandOutput>;
}

// =============================================================================
// Local Identity
// =============================================================================

/// Resolves the address other peers know this host by
pub trait LocalIdentity: Send + Sync {
    /// Best-effort non-loopback address, or the host name when none exists
    fn local_address(&self) -> String;
}
