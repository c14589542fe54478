//! Profiling Statistics

use serde::{Deserialize, Serialize};

/// Output of `volume profile <vol> info [nfs]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileInfo {
    pub volume_name: String,
    /// Entries describe NFS servers rather than bricks
    pub nfs: bool,
    pub bricks: Vec<BrickProfile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrickProfile {
    /// Brick or NFS server name; `localhost` is resolved
    pub name: String,
    pub cumulative: ProfileStats,
    pub interval: ProfileStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub block_stats: Vec<BlockStat>,
    pub fop_stats: Vec<FopStat>,
    /// Seconds covered by the sample
    pub duration: u64,
    pub total_read: u64,
    pub total_write: u64,
}

/// Read/write histogram bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStat {
    pub size: u64,
    pub reads: u64,
    pub writes: u64,
}

/// File-operation latency histogram entry (latencies in microseconds)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FopStat {
    pub name: String,
    pub hits: u64,
    pub latency_avg: f64,
    pub latency_min: f64,
    pub latency_max: f64,
}
