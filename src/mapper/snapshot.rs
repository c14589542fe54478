//! Snapshot Mapping

use crate::domain::snapshot::SnapshotRestore;
use crate::response::tree::{NodeExt, SchemaError};
use roxmltree::Node;

/// UUID of a freshly created snapshot
pub fn snapshot_created(root: Node<'_, '_>) -> Result<String, SchemaError> {
    root.text_at("snapCreate/snapshot/uuid")
}

pub fn snapshot_restore(root: Node<'_, '_>) -> Result<SnapshotRestore, SchemaError> {
    let restore = root.required("snapRestore")?;
    Ok(SnapshotRestore {
        volume_name: restore.text_at("volume/name")?,
        volume_uuid: restore.text_at("volume/uuid")?,
        snapshot_name: restore.text_at("snapshot/name")?,
        snapshot_uuid: restore.text_at("snapshot/uuid")?,
    })
}
