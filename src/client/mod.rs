//! Operation Facade
//!
//! [`GlusterClient`] exposes one method per administrative operation. Every
//! call builds one command, runs it exactly once, and classifies the output
//! in a fixed order: busy marker, envelope, outcome code, entity mapping.
//! The client never retries; see [`crate::retry`] for a caller-side helper.

mod brick;
mod georep;
mod peer;
mod profile;
mod snapshot;
mod volume;

use crate::command::{
    CommandBuilder, Operation, OutputFormat, SystemExecutor, DEFAULT_GLUSTER_PATH,
    GLUSTER_BINARY,
};
use crate::domain::ports::{CommandExecutor, LocalIdentity};
use crate::error::{Error, Result};
use crate::identity::SystemIdentity;
use crate::mapper;
use crate::response::{decode_envelope, is_busy, EnvelopeError, SchemaError};
use once_cell::sync::OnceCell;
use roxmltree::Node;
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, warn};

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for the gluster client
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Path (or bare name) of the gluster tool
    pub gluster_path: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let gluster_path = if Path::new(DEFAULT_GLUSTER_PATH).exists() {
            DEFAULT_GLUSTER_PATH
        } else {
            GLUSTER_BINARY
        };
        Self {
            gluster_path: gluster_path.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_gluster_path(gluster_path: impl Into<String>) -> Self {
        Self {
            gluster_path: gluster_path.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.gluster_path.trim().is_empty() {
            return Err(Error::Configuration(
                "gluster path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Raw Response
// =============================================================================

/// Output of one invocation, kept so every failure can quote it
#[derive(Debug)]
struct RawResponse {
    command: String,
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl RawResponse {
    /// Both streams, stdout first; stderr often carries the daemon's reason
    fn output(&self) -> String {
        match (self.stdout.is_empty(), self.stderr.is_empty()) {
            (_, true) => self.stdout.clone(),
            (true, false) => self.stderr.clone(),
            (false, false) if self.stdout.ends_with('\n') => {
                format!("{}{}", self.stdout, self.stderr)
            }
            (false, false) => format!("{}\n{}", self.stdout, self.stderr),
        }
    }

    fn decode_error(&self, reason: impl ToString) -> Error {
        Error::Decode {
            command: self.command.clone(),
            output: self.output(),
            reason: reason.to_string(),
        }
    }

    fn envelope_error(&self, err: EnvelopeError) -> Error {
        match err {
            EnvelopeError::Malformed(reason) => self.decode_error(reason),
            EnvelopeError::Failed { code, message } => Error::CommandFailed {
                command: self.command.clone(),
                code,
                message,
                output: self.output(),
            },
        }
    }
}

// =============================================================================
// Client
// =============================================================================

/// Synchronous client for the gluster command-line tool
///
/// The local address and local peer UUID are resolved at most once per
/// client, even under concurrent callers.
pub struct GlusterClient {
    config: ClientConfig,
    builder: CommandBuilder,
    executor: Arc<dyn CommandExecutor>,
    identity: Arc<dyn LocalIdentity>,
    local_address: OnceCell<String>,
    local_uuid: OnceCell<String>,
}

impl std::fmt::Debug for GlusterClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlusterClient")
            .field("config", &self.config)
            .field("local_address", &self.local_address.get())
            .field("local_uuid", &self.local_uuid.get())
            .finish_non_exhaustive()
    }
}

impl GlusterClient {
    /// Create a client that runs the tool as a local subprocess
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            builder: CommandBuilder::new(config.gluster_path.clone()),
            config,
            executor: Arc::new(SystemExecutor::new()),
            identity: Arc::new(SystemIdentity::new()),
            local_address: OnceCell::new(),
            local_uuid: OnceCell::new(),
        })
    }

    /// Replace the command executor
    pub fn with_executor(mut self, executor: Arc<dyn CommandExecutor>) -> Self {
        self.executor = executor;
        self
    }

    /// Replace the local identity source
    pub fn with_identity(mut self, identity: Arc<dyn LocalIdentity>) -> Self {
        self.identity = identity;
        self.local_address = OnceCell::new();
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Address other peers know this host by; substituted for `localhost`
    pub fn local_address(&self) -> &str {
        self.local_address.get_or_init(|| {
            let address = self.identity.local_address();
            debug!("Resolved local address: {}", address);
            address
        })
    }

    /// UUID of the local peer, from `gluster system:: uuid get`
    ///
    /// A failed lookup is not memoized; the next call tries again.
    pub fn local_uuid(&self) -> Result<&str> {
        self.local_uuid
            .get_or_try_init(|| {
                let raw = self.run_plain(&Operation::SystemUuid)?;
                mapper::local_uuid(&raw.stdout)
                    .ok_or_else(|| raw.decode_error("no \"UUID: \" line in output"))
            })
            .map(String::as_str)
    }

    // =========================================================================
    // Execution
    // =========================================================================

    /// Run one operation and apply the busy check
    fn execute(&self, op: &Operation) -> Result<RawResponse> {
        let command = self.builder.build(op);
        let rendered = command.to_string();
        debug!("Executing: {}", rendered);

        let output = self
            .executor
            .execute(command.argv())
            .map_err(|source| Error::Exec {
                command: rendered.clone(),
                source,
            })?;

        let raw = RawResponse {
            command: rendered,
            exit_code: output.exit_code,
            stdout: output.stdout_lossy(),
            stderr: output.stderr_lossy(),
        };
        debug!("{} exited with {}", raw.command, raw.exit_code);

        if is_busy(&raw.stdout, &raw.stderr) {
            warn!("Gluster busy, another transaction is in progress: {}", raw.command);
            return Err(Error::Busy {
                command: raw.command,
                exit_code: raw.exit_code,
                stdout: raw.stdout,
                stderr: raw.stderr,
            });
        }

        Ok(raw)
    }

    /// Run an enveloped operation and map its response tree
    fn run_xml<T, F>(&self, op: &Operation, map: F) -> Result<T>
    where
        F: for<'a, 'input> FnOnce(Node<'a, 'input>) -> std::result::Result<T, SchemaError>,
    {
        debug_assert_eq!(op.format(), OutputFormat::Xml);
        let raw = self.execute(op)?;
        let envelope = decode_envelope(&raw.stdout).map_err(|e| raw.envelope_error(e))?;
        map(envelope.root()).map_err(|e| raw.decode_error(e))
    }

    /// Run an enveloped operation that only acknowledges
    fn run_ack(&self, op: &Operation) -> Result<()> {
        self.run_xml(op, |_| Ok(()))
    }

    /// Run an operation without an envelope; the exit code decides success
    fn run_plain(&self, op: &Operation) -> Result<RawResponse> {
        let raw = self.execute(op)?;
        if raw.exit_code != 0 {
            let stderr = raw.stderr.trim();
            let message = if stderr.is_empty() {
                raw.stdout.trim()
            } else {
                stderr
            };
            return Err(Error::CommandFailed {
                command: raw.command.clone(),
                code: raw.exit_code,
                message: message.to_string(),
                output: raw.output(),
            });
        }
        Ok(raw)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::command::ScriptedExecutor;
    use crate::identity::FixedIdentity;

    pub const LOCAL_ADDRESS: &str = "10.0.0.1";

    /// Client wired to a scripted executor and a fixed local address
    pub fn scripted_client() -> (GlusterClient, Arc<ScriptedExecutor>) {
        let executor = Arc::new(ScriptedExecutor::new());
        let client = GlusterClient::new(ClientConfig::with_gluster_path("gluster"))
            .unwrap()
            .with_executor(executor.clone())
            .with_identity(Arc::new(FixedIdentity::new(LOCAL_ADDRESS)));
        (client, executor)
    }

    /// Successful envelope around `body`
    pub fn ok_envelope(body: &str) -> String {
        format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n\
             <cliOutput><opRet>0</opRet><opErrno>0</opErrno><opErrstr/>{}</cliOutput>",
            body
        )
    }

    pub fn argv(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }
}
