//! Gluster CLI Client - Typed control plane for GlusterFS
//!
//! Drives the `gluster` command-line tool and turns its responses into
//! typed records and typed failures.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────┐
//! │                    Operation Facade (client)                      │
//! ├──────────────────────────────────────────────────────────────────┤
//! │  Command Builder ──► Command Executor ──► Busy Classifier         │
//! │                                              │                    │
//! │                                              ▼                    │
//! │                      Entity Mappers ◄── Response Decoder          │
//! └──────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`client`]: one method per administrative operation
//! - [`command`]: argument vector synthesis and process execution
//! - [`response`]: busy detection, envelope decoding, schema accessors
//! - [`mapper`]: response trees to domain records
//! - [`domain`]: entity types, enumerated codes and collaborator traits
//! - [`identity`]: local host address discovery
//! - [`retry`]: caller-side busy retry
//! - [`error`]: error types and handling

pub mod client;
pub mod command;
pub mod domain;
pub mod error;
pub mod identity;
pub mod mapper;
pub mod response;
pub mod retry;

// Re-export commonly used types
pub use client::{ClientConfig, GlusterClient};

pub use command::{
    AddBrickRequest, CommandBuilder, GeoRepSessionRef, Operation, RebalanceMode,
    RemoveBrickRequest, ReplaceBrickRequest, ScriptedExecutor, SnapshotDeleteTarget,
    SystemExecutor, VolumeCreateRequest,
};

pub use domain::ports::{CommandExecutor, CommandOutput, LocalIdentity};

pub use error::{Error, ErrorAction, Result};

pub use identity::{FixedIdentity, SystemIdentity};

pub use retry::{retry_on_busy, RetryPolicy};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
