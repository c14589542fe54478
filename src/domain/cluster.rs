//! Cluster Entities
//!
//! Peers, listed volume tasks and the merged progress of rebalance and
//! remove-brick operations.

use super::codes::{HostStatus, MigrationStatus, TaskStatus, TaskType};
use serde::{Deserialize, Serialize};

// =============================================================================
// Peers
// =============================================================================

/// A cluster member; the local peer is always listed first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PeerStatus {
    pub hostname: String,
    pub uuid: String,
    pub status: HostStatus,
}

// =============================================================================
// Async Task Progress
// =============================================================================

/// Counters shared by the aggregate and every per-host entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskProgress {
    /// Elapsed runtime in seconds
    pub runtime: f64,
    pub files_scanned: u64,
    pub files_moved: u64,
    pub files_failed: u64,
    pub files_skipped: u64,
    pub total_size_moved: u64,
    pub status: TaskStatus,
}

/// Progress reported by a single peer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostTaskProgress {
    pub name: String,
    pub id: String,
    #[serde(flatten)]
    pub progress: TaskProgress,
}

/// Rebalance or remove-brick status merged across peers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AsyncTaskStatus {
    pub summary: TaskProgress,
    pub hosts: Vec<HostTaskProgress>,
}

// =============================================================================
// Volume Tasks
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VolumeTask {
    pub id: String,
    pub volume_name: String,
    pub task_type: TaskType,
    pub status: TaskStatus,
    /// Source and destination for replace-brick, the removed set for
    /// remove-brick, empty for rebalance
    pub bricks: Vec<String>,
}

// =============================================================================
// Replace-Brick
// =============================================================================

/// Result of `replace-brick ... status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplaceBrickStatus {
    pub status: MigrationStatus,
    /// Full command output, one line per daemon line
    pub message: String,
}
