//! Snapshots

use super::GlusterClient;
use crate::command::{Operation, SnapshotDeleteTarget};
use crate::domain::snapshot::SnapshotRestore;
use crate::error::Result;
use crate::mapper;

impl GlusterClient {
    /// Snapshot a volume and return the snapshot UUID
    pub fn snapshot_create(
        &self,
        volume: &str,
        snapshot: &str,
        description: Option<&str>,
        force: bool,
    ) -> Result<String> {
        let op = Operation::SnapshotCreate {
            volume: volume.to_string(),
            snapshot: snapshot.to_string(),
            description: description.map(str::to_string),
            force,
        };
        self.run_xml(&op, mapper::snapshot_created)
    }

    /// Delete one snapshot, or every snapshot of a volume
    ///
    /// Runs without `--xml`: the daemon's structured reply for this command
    /// is unreliable, so success is judged by exit code.
    pub fn snapshot_delete(&self, target: SnapshotDeleteTarget) -> Result<()> {
        self.run_plain(&Operation::SnapshotDelete(target))?;
        Ok(())
    }

    pub fn snapshot_activate(&self, snapshot: &str, force: bool) -> Result<()> {
        self.run_ack(&Operation::SnapshotActivate {
            snapshot: snapshot.to_string(),
            force,
        })
    }

    pub fn snapshot_deactivate(&self, snapshot: &str) -> Result<()> {
        self.run_ack(&Operation::SnapshotDeactivate {
            snapshot: snapshot.to_string(),
        })
    }

    /// Restore the origin volume of a snapshot
    pub fn snapshot_restore(&self, snapshot: &str) -> Result<SnapshotRestore> {
        let op = Operation::SnapshotRestore {
            snapshot: snapshot.to_string(),
        };
        self.run_xml(&op, mapper::snapshot_restore)
    }
}
