//! Volume profiling

use super::GlusterClient;
use crate::command::Operation;
use crate::domain::profile::ProfileInfo;
use crate::error::Result;
use crate::mapper;

impl GlusterClient {
    pub fn profile_start(&self, volume: &str) -> Result<()> {
        self.run_ack(&Operation::ProfileStart {
            volume: volume.to_string(),
        })
    }

    pub fn profile_stop(&self, volume: &str) -> Result<()> {
        self.run_ack(&Operation::ProfileStop {
            volume: volume.to_string(),
        })
    }

    /// Cumulative and interval statistics per brick, or per NFS server
    pub fn profile_info(&self, volume: &str, nfs: bool) -> Result<ProfileInfo> {
        let op = Operation::ProfileInfo {
            volume: volume.to_string(),
            nfs,
        };
        self.run_xml(&op, |root| mapper::profile_info(root, nfs, self.local_address()))
    }
}
