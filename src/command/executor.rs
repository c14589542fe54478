//! Process-backed Command Executor

use crate::domain::ports::{CommandExecutor, CommandOutput};
use std::io;
use std::process::Command;
use tracing::debug;

/// Runs commands as local subprocesses
#[derive(Debug, Clone, Default)]
pub struct SystemExecutor;

impl SystemExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl CommandExecutor for SystemExecutor {
    fn execute(&self, argv: &[String]) -> io::Result<CommandOutput> {
        let (program, args) = argv.split_first().ok_or_else(|| {
            io::Error::new(io::ErrorKind::InvalidInput, "empty argument vector")
        })?;

        let output = Command::new(program).args(args).output()?;

        // A process killed by a signal has no exit code
        let exit_code = output.status.code().unwrap_or(-1);
        debug!("{} exited with {}", program, exit_code);

        Ok(CommandOutput {
            exit_code,
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}
