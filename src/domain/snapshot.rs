//! Snapshot Entities

use serde::{Deserialize, Serialize};

/// Result of `snapshot restore`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotRestore {
    pub volume_name: String,
    pub volume_uuid: String,
    pub snapshot_name: String,
    pub snapshot_uuid: String,
}
