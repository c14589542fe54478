//! Enumerated Codes
//!
//! The gluster CLI reports states as free-form strings or small integer
//! codes. Each is mapped through an explicit lookup table into a closed
//! enumeration; anything unrecognized lands on an `Unknown` variant.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalize a daemon status string into a stable token
///
/// Upper-cases and replaces every space and hyphen with an underscore, so
/// `"fix-layout in progress"` becomes `"FIX_LAYOUT_IN_PROGRESS"`. Applying it
/// to an already normalized token returns the token unchanged.
pub fn normalize_token(raw: &str) -> String {
    raw.trim()
        .to_uppercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

fn lookup<T: Copy>(table: &[(&str, T)], token: &str) -> Option<T> {
    table
        .iter()
        .find(|(name, _)| *name == token)
        .map(|(_, value)| *value)
}

// =============================================================================
// Online Status
// =============================================================================

/// Lifecycle status of a volume, brick or service daemon
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnlineStatus {
    Online,
    Offline,
}

impl OnlineStatus {
    /// Brick and daemon nodes report `"1"` when running
    pub fn from_node_code(code: &str) -> Self {
        if code.trim() == "1" {
            OnlineStatus::Online
        } else {
            OnlineStatus::Offline
        }
    }

    /// Volumes report `"Started"` when running
    pub fn from_volume_status(status: &str) -> Self {
        if status.trim().eq_ignore_ascii_case("started") {
            OnlineStatus::Online
        } else {
            OnlineStatus::Offline
        }
    }
}

impl fmt::Display for OnlineStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OnlineStatus::Online => write!(f, "ONLINE"),
            OnlineStatus::Offline => write!(f, "OFFLINE"),
        }
    }
}

// =============================================================================
// Transport Type
// =============================================================================

/// Volume transport
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransportType {
    Tcp,
    Rdma,
}

impl TransportType {
    /// Decode the tri-state `transport` code of `volume info`
    ///
    /// `"0"` is TCP, `"1"` is RDMA, anything else means both.
    pub fn from_code(code: &str) -> Vec<TransportType> {
        match code.trim() {
            "0" => vec![TransportType::Tcp],
            "1" => vec![TransportType::Rdma],
            _ => vec![TransportType::Tcp, TransportType::Rdma],
        }
    }

    /// Spelling accepted by `volume create ... transport`
    pub fn as_cli_arg(&self) -> &'static str {
        match self {
            TransportType::Tcp => "tcp",
            TransportType::Rdma => "rdma",
        }
    }
}

impl fmt::Display for TransportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransportType::Tcp => write!(f, "TCP"),
            TransportType::Rdma => write!(f, "RDMA"),
        }
    }
}

// =============================================================================
// Volume Type
// =============================================================================

/// Volume topology as reported by `typeStr`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VolumeType {
    Distribute,
    Replicate,
    Stripe,
    Disperse,
    Tier,
    DistributedReplicate,
    DistributedStripe,
    DistributedDisperse,
    StripedReplicate,
    DistributedStripedReplicate,
    Unknown,
}

const VOLUME_TYPE_TABLE: &[(&str, VolumeType)] = &[
    ("DISTRIBUTE", VolumeType::Distribute),
    ("REPLICATE", VolumeType::Replicate),
    ("STRIPE", VolumeType::Stripe),
    ("DISPERSE", VolumeType::Disperse),
    ("TIER", VolumeType::Tier),
    ("DISTRIBUTED_REPLICATE", VolumeType::DistributedReplicate),
    ("DISTRIBUTED_STRIPE", VolumeType::DistributedStripe),
    ("DISTRIBUTED_DISPERSE", VolumeType::DistributedDisperse),
    ("STRIPED_REPLICATE", VolumeType::StripedReplicate),
    ("DISTRIBUTED_STRIPED_REPLICATE", VolumeType::DistributedStripedReplicate),
];

impl VolumeType {
    pub fn from_type_str(raw: &str) -> Self {
        lookup(VOLUME_TYPE_TABLE, &normalize_token(raw)).unwrap_or(VolumeType::Unknown)
    }

    pub fn as_token(&self) -> &'static str {
        VOLUME_TYPE_TABLE
            .iter()
            .find(|(_, value)| value == self)
            .map(|(name, _)| *name)
            .unwrap_or("UNKNOWN")
    }
}

impl fmt::Display for VolumeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}

// =============================================================================
// Peer Connectivity
// =============================================================================

/// Connectivity of a cluster peer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HostStatus {
    Connected,
    Disconnected,
    Unknown,
}

/// `state` code of a peer that is fully in the cluster
const PEER_IN_CLUSTER_STATE: &str = "3";

impl HostStatus {
    /// Derive connectivity from the `state` and `connected` codes
    pub fn from_codes(state: &str, connected: &str) -> Self {
        if state.trim() != PEER_IN_CLUSTER_STATE {
            HostStatus::Unknown
        } else if connected.trim() == "1" {
            HostStatus::Connected
        } else {
            HostStatus::Disconnected
        }
    }
}

impl fmt::Display for HostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostStatus::Connected => write!(f, "CONNECTED"),
            HostStatus::Disconnected => write!(f, "DISCONNECTED"),
            HostStatus::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// =============================================================================
// Task Type / Task Status
// =============================================================================

/// Kind of long-running volume task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    Rebalance,
    ReplaceBrick,
    RemoveBrick,
    Unknown,
}

const TASK_TYPE_TABLE: &[(&str, TaskType)] = &[
    ("REBALANCE", TaskType::Rebalance),
    ("REPLACE_BRICK", TaskType::ReplaceBrick),
    ("REMOVE_BRICK", TaskType::RemoveBrick),
];

impl TaskType {
    pub fn from_type_str(raw: &str) -> Self {
        lookup(TASK_TYPE_TABLE, &normalize_token(raw)).unwrap_or(TaskType::Unknown)
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = TASK_TYPE_TABLE
            .iter()
            .find(|(_, value)| value == self)
            .map(|(name, _)| *name)
            .unwrap_or("UNKNOWN");
        f.write_str(token)
    }
}

/// Progress state of a rebalance, remove-brick or listed task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Stopped,
    Completed,
    Failed,
    FixLayoutInProgress,
    FixLayoutStopped,
    FixLayoutCompleted,
    FixLayoutFailed,
    Unknown,
}

const TASK_STATUS_TABLE: &[(&str, TaskStatus)] = &[
    ("NOT_STARTED", TaskStatus::NotStarted),
    ("IN_PROGRESS", TaskStatus::InProgress),
    ("STOPPED", TaskStatus::Stopped),
    ("COMPLETED", TaskStatus::Completed),
    ("FAILED", TaskStatus::Failed),
    ("FIX_LAYOUT_IN_PROGRESS", TaskStatus::FixLayoutInProgress),
    ("FIX_LAYOUT_STOPPED", TaskStatus::FixLayoutStopped),
    ("FIX_LAYOUT_COMPLETED", TaskStatus::FixLayoutCompleted),
    ("FIX_LAYOUT_FAILED", TaskStatus::FixLayoutFailed),
    ("UNKNOWN", TaskStatus::Unknown),
];

impl TaskStatus {
    pub fn from_status_str(raw: &str) -> Self {
        lookup(TASK_STATUS_TABLE, &normalize_token(raw)).unwrap_or(TaskStatus::Unknown)
    }

    /// Whether the task will make no further progress
    pub fn is_finished(&self) -> bool {
        matches!(
            self,
            TaskStatus::Stopped
                | TaskStatus::Completed
                | TaskStatus::Failed
                | TaskStatus::FixLayoutStopped
                | TaskStatus::FixLayoutCompleted
                | TaskStatus::FixLayoutFailed
        )
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = TASK_STATUS_TABLE
            .iter()
            .find(|(_, value)| value == self)
            .map(|(name, _)| *name)
            .unwrap_or("UNKNOWN");
        f.write_str(token)
    }
}

// =============================================================================
// Replace-Brick Migration
// =============================================================================

/// Migration state scraped from `replace-brick ... status`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MigrationStatus {
    Paused,
    Completed,
    Running,
    Unknown,
    #[serde(rename = "NA")]
    NotAvailable,
}

impl fmt::Display for MigrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationStatus::Paused => write!(f, "PAUSED"),
            MigrationStatus::Completed => write!(f, "COMPLETED"),
            MigrationStatus::Running => write!(f, "RUNNING"),
            MigrationStatus::Unknown => write!(f, "UNKNOWN"),
            MigrationStatus::NotAvailable => write!(f, "NA"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("in progress"), "IN_PROGRESS");
        assert_eq!(normalize_token("fix-layout in progress"), "FIX_LAYOUT_IN_PROGRESS");
        assert_eq!(normalize_token("Distributed-Replicate"), "DISTRIBUTED_REPLICATE");
        assert_eq!(normalize_token("Replace brick"), "REPLACE_BRICK");
    }

    #[test]
    fn test_normalize_token_idempotent() {
        for raw in ["not started", "fix-layout failed", "Striped-Replicate", "IN_PROGRESS"] {
            let once = normalize_token(raw);
            assert_eq!(normalize_token(&once), once);
        }
    }

    #[test]
    fn test_transport_decode_is_total() {
        assert_eq!(TransportType::from_code("0"), vec![TransportType::Tcp]);
        assert_eq!(TransportType::from_code("1"), vec![TransportType::Rdma]);
        for other in ["2", "", "tcp,rdma", "-1"] {
            assert_eq!(
                TransportType::from_code(other),
                vec![TransportType::Tcp, TransportType::Rdma]
            );
        }
    }

    #[test]
    fn test_volume_type_lookup() {
        assert_eq!(VolumeType::from_type_str("Distribute"), VolumeType::Distribute);
        assert_eq!(
            VolumeType::from_type_str("Distributed-Striped-Replicate"),
            VolumeType::DistributedStripedReplicate
        );
        assert_eq!(VolumeType::from_type_str("Hyperspace"), VolumeType::Unknown);
        assert_eq!(VolumeType::StripedReplicate.to_string(), "STRIPED_REPLICATE");
        assert_eq!(VolumeType::Unknown.to_string(), "UNKNOWN");
    }

    #[test]
    fn test_volume_type_table_is_exhaustive() {
        for (token, value) in VOLUME_TYPE_TABLE {
            assert_eq!(VolumeType::from_type_str(token), *value);
            assert_eq!(value.as_token(), *token);
        }
    }

    #[test]
    fn test_task_lookups() {
        assert_eq!(TaskType::from_type_str("Rebalance"), TaskType::Rebalance);
        assert_eq!(TaskType::from_type_str("Replace brick"), TaskType::ReplaceBrick);
        assert_eq!(TaskType::from_type_str("remove-brick"), TaskType::RemoveBrick);
        assert_eq!(TaskType::from_type_str("defrag"), TaskType::Unknown);

        for (token, value) in TASK_STATUS_TABLE {
            assert_eq!(TaskStatus::from_status_str(token), *value);
            assert_eq!(value.to_string(), *token);
        }
        assert_eq!(
            TaskStatus::from_status_str("fix-layout completed"),
            TaskStatus::FixLayoutCompleted
        );
        assert_eq!(TaskStatus::from_status_str("exploded"), TaskStatus::Unknown);
        assert!(TaskStatus::Completed.is_finished());
        assert!(!TaskStatus::InProgress.is_finished());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(OnlineStatus::from_node_code("1"), OnlineStatus::Online);
        assert_eq!(OnlineStatus::from_node_code("0"), OnlineStatus::Offline);
        assert_eq!(OnlineStatus::from_volume_status("Started"), OnlineStatus::Online);
        assert_eq!(OnlineStatus::from_volume_status("Created"), OnlineStatus::Offline);

        assert_eq!(HostStatus::from_codes("3", "1"), HostStatus::Connected);
        assert_eq!(HostStatus::from_codes("3", "0"), HostStatus::Disconnected);
        assert_eq!(HostStatus::from_codes("5", "1"), HostStatus::Unknown);
    }

    #[test]
    fn test_serde_tokens() {
        let json = serde_json::to_string(&TaskStatus::FixLayoutInProgress).unwrap();
        assert_eq!(json, "\"FIX_LAYOUT_IN_PROGRESS\"");
        let json = serde_json::to_string(&MigrationStatus::NotAvailable).unwrap();
        assert_eq!(json, "\"NA\"");
    }
}
