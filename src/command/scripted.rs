//! Scripted Command Executor
//!
//! Replays queued outputs in order and records every argument vector it
//! receives. Useful for exercising the client without a gluster install.

use crate::domain::ports::{CommandExecutor, CommandOutput};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::io;

#[derive(Debug, Default)]
pub struct ScriptedExecutor {
    responses: Mutex<VecDeque<io::Result<CommandOutput>>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an output for the next invocation
    pub fn push(&self, output: CommandOutput) -> &Self {
        self.responses.lock().push_back(Ok(output));
        self
    }

    /// Queue a successful invocation printing `stdout`
    pub fn push_stdout(&self, stdout: &str) -> &Self {
        self.push(CommandOutput::success(stdout))
    }

    /// Queue a spawn failure
    pub fn push_spawn_error(&self, kind: io::ErrorKind) -> &Self {
        self.responses
            .lock()
            .push_back(Err(io::Error::new(kind, "scripted spawn failure")));
        self
    }

    /// Argument vectors received so far
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().clone()
    }

    pub fn remaining(&self) -> usize {
        self.responses.lock().len()
    }
}

impl CommandExecutor for ScriptedExecutor {
    fn execute(&self, argv: &[String]) -> io::Result<CommandOutput> {
        self.calls.lock().push(argv.to_vec());
        self.responses.lock().pop_front().unwrap_or_else(|| {
            Err(io::Error::new(
                io::ErrorKind::NotFound,
                "no scripted response left",
            ))
        })
    }
}
