//! Geo-Replication Entities

use serde::{Deserialize, Serialize};

/// Separator between remote host and remote volume in a session endpoint
pub const REMOTE_ENDPOINT_SEPARATOR: &str = "::";

/// Render a remote endpoint (`host::volume`)
pub fn remote_endpoint(remote_host: &str, remote_volume: &str) -> String {
    format!("{}{}{}", remote_host, REMOTE_ENDPOINT_SEPARATOR, remote_volume)
}

/// One replication session of a master volume
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRepSession {
    /// Raw remote endpoint as reported by the daemon
    pub session_key: String,
    pub remote_volume_name: String,
    pub pairs: Vec<GeoRepPair>,
}

/// Master brick to slave replication pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRepPair {
    pub host: String,
    pub host_uuid: String,
    pub brick_name: String,
    pub remote_host: String,
    pub status: String,
    pub checkpoint_status: String,
    pub crawl_status: String,
    /// Only present for `status detail`
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub detail: Option<GeoRepPairDetail>,
}

/// Sync counters of a pair; the daemon may report `N/A` for any of them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRepPairDetail {
    pub files_synced: String,
    pub files_pending: String,
    pub bytes_pending: String,
    pub deletes_pending: String,
    pub files_skipped: String,
}
