//! Volume Entities
//!
//! Results of `volume info`, the four `volume status` variants and
//! `volume set help-xml`.

use super::codes::{OnlineStatus, TransportType, VolumeType};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// =============================================================================
// Volume Info
// =============================================================================

/// A volume as described by `volume info`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    pub name: String,
    pub uuid: String,
    pub volume_type: VolumeType,
    pub status: OnlineStatus,
    /// Always equal to `bricks.len()`
    pub brick_count: u32,
    pub dist_count: u32,
    pub stripe_count: u32,
    pub replica_count: u32,
    /// One or both transports, TCP first
    pub transport: Vec<TransportType>,
    /// Brick addresses (`host:/path`) in daemon order
    pub bricks: Vec<String>,
    /// Reconfigured options in daemon order
    pub options: IndexMap<String, String>,
    /// Empty for daemons that do not report brick owners
    pub bricks_info: Vec<BrickInfo>,
}

/// Brick address plus the UUID of the peer hosting it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickInfo {
    pub name: String,
    pub host_uuid: String,
}

/// Descriptor of a settable volume option
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeOptionInfo {
    pub name: String,
    pub default_value: Option<String>,
    pub description: Option<String>,
}

// =============================================================================
// Volume Status (default)
// =============================================================================

/// Runtime view of a volume's bricks and service daemons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeStatus {
    pub name: String,
    pub bricks: Vec<BrickRuntimeStatus>,
    pub nfs: Vec<DaemonStatus>,
    pub shd: Vec<DaemonStatus>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickRuntimeStatus {
    /// `host:path`
    pub brick: String,
    pub host_uuid: String,
    /// `None` when the daemon reports `N/A`
    pub port: Option<u16>,
    pub status: OnlineStatus,
    /// `None` when the process is not running
    pub pid: Option<u32>,
}

/// NFS server or self-heal daemon entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaemonStatus {
    /// Resolved host; never the literal `localhost`
    pub hostname: String,
    pub host_uuid: String,
    /// Only reported for NFS servers
    pub port: Option<u16>,
    pub status: OnlineStatus,
    pub pid: Option<u32>,
}

// =============================================================================
// Volume Status (detail)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeStatusDetail {
    pub name: String,
    pub bricks: Vec<BrickStatusDetail>,
}

/// Capacity facts for one brick
///
/// Sizes are rendered in GiB with three decimals (`"2.000"`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickStatusDetail {
    pub brick: String,
    pub host_uuid: String,
    pub size_total: String,
    pub size_free: String,
    pub device: String,
    pub block_size: String,
    pub mount_options: String,
    pub fs_name: String,
}

// =============================================================================
// Volume Status (clients)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeClients {
    pub name: String,
    pub bricks: Vec<BrickClients>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrickClients {
    pub brick: String,
    pub host_uuid: String,
    pub clients: Vec<ClientSession>,
}

/// Byte counters of one client connected to a brick
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientSession {
    pub hostname: String,
    pub bytes_read: u64,
    pub bytes_write: u64,
}

// =============================================================================
// Volume Status (mem)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeMemory {
    pub name: String,
    pub bricks: Vec<MemoryProfile>,
}

/// Allocator statistics of one brick process
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryProfile {
    pub brick: String,
    pub host_uuid: String,
    /// Free-form `mallinfo` counters
    pub mallinfo: IndexMap<String, String>,
    pub mempool: Vec<MemPoolEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemPoolEntry {
    pub name: String,
    /// Every other pool counter, keyed by tag
    pub stats: IndexMap<String, String>,
}
