//! Cluster Mapping
//!
//! Peers, volume task listings, async task progress and the task ids
//! returned when a rebalance, replace-brick or remove-brick starts.

use crate::domain::cluster::{
    AsyncTaskStatus, HostTaskProgress, PeerStatus, TaskProgress, VolumeTask,
};
use crate::domain::codes::{HostStatus, TaskStatus, TaskType};
use crate::response::tree::{NodeExt, SchemaError};
use roxmltree::Node;

/// Prefix of the single meaningful line printed by `system:: uuid get`
pub const UUID_LINE_PREFIX: &str = "UUID: ";

/// Extract the local peer UUID from `system:: uuid get` output
pub fn local_uuid(output: &str) -> Option<String> {
    output
        .lines()
        .map(str::trim)
        .find_map(|line| line.strip_prefix(UUID_LINE_PREFIX.trim_end()))
        .map(|uuid| uuid.trim().to_string())
        .filter(|uuid| !uuid.is_empty())
}

/// Remote peers from `peer status --xml`
///
/// The local peer is never part of this listing.
pub fn peer_status(root: Node<'_, '_>) -> Result<Vec<PeerStatus>, SchemaError> {
    root.find_all("peerStatus/peer")
        .into_iter()
        .map(|peer| {
            Ok(PeerStatus {
                hostname: peer.text_at("hostname")?,
                uuid: peer.text_at("uuid")?,
                status: HostStatus::from_codes(
                    &peer.text_at("state")?,
                    &peer.text_at("connected")?,
                ),
            })
        })
        .collect()
}

// =============================================================================
// Async Tasks
// =============================================================================

/// Long-running task whose progress is merged across peers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsyncTaskKind {
    Rebalance,
    RemoveBrick,
}

impl AsyncTaskKind {
    fn section(&self) -> &'static str {
        match self {
            AsyncTaskKind::Rebalance => "volRebalance",
            AsyncTaskKind::RemoveBrick => "volRemoveBrick",
        }
    }
}

fn task_progress(node: Node<'_, '_>) -> Result<TaskProgress, SchemaError> {
    Ok(TaskProgress {
        runtime: node.parse_at("runtime")?,
        files_scanned: node.parse_at("lookups")?,
        files_moved: node.parse_at("files")?,
        files_failed: node.parse_at("failures")?,
        files_skipped: node.parse_at("skipped")?,
        total_size_moved: node.parse_at("size")?,
        status: TaskStatus::from_status_str(&node.text_at("statusStr")?),
    })
}

/// Decode `rebalance status` or `remove-brick ... status`
pub fn async_task_status(
    root: Node<'_, '_>,
    kind: AsyncTaskKind,
) -> Result<AsyncTaskStatus, SchemaError> {
    let section = root.required(kind.section())?;

    let summary = task_progress(section.required("aggregate")?)?;
    let hosts = section
        .find_all("node")
        .into_iter()
        .map(|node| {
            Ok(HostTaskProgress {
                name: node.text_at("nodeName")?,
                id: node.text_at("id")?,
                progress: task_progress(node)?,
            })
        })
        .collect::<Result<_, SchemaError>>()?;

    Ok(AsyncTaskStatus { summary, hosts })
}

/// Task started by a rebalance, replace-brick or remove-brick command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StartedTask {
    Rebalance,
    ReplaceBrick,
    RemoveBrick,
}

pub fn task_id(root: Node<'_, '_>, task: StartedTask) -> Result<String, SchemaError> {
    let path = match task {
        StartedTask::Rebalance => "volRebalance/task-id",
        StartedTask::ReplaceBrick => "volReplaceBrick/task-id",
        StartedTask::RemoveBrick => "volRemoveBrick/task-id",
    };
    root.text_at(path)
}

// =============================================================================
// Volume Tasks
// =============================================================================

/// Tasks of every volume listed in `volume status <vol|all> tasks`
pub fn volume_tasks(root: Node<'_, '_>) -> Result<Vec<VolumeTask>, SchemaError> {
    let mut tasks = Vec::new();
    for volume in root.find_all("volStatus/volumes/volume") {
        let volume_name = volume.text_at("volName")?;
        for task in volume.find_all("tasks/task") {
            let task_type = TaskType::from_type_str(&task.text_at("type")?);
            let bricks = match task_type {
                TaskType::ReplaceBrick => vec![
                    task.text_at("params/srcBrick")?,
                    task.text_at("params/dstBrick")?,
                ],
                TaskType::RemoveBrick => task
                    .find_all("params/brick")
                    .iter()
                    .map(|b| b.text().unwrap_or("").to_string())
                    .collect(),
                TaskType::Rebalance | TaskType::Unknown => Vec::new(),
            };

            tasks.push(VolumeTask {
                id: task.text_at("id")?,
                volume_name: volume_name.clone(),
                task_type,
                status: TaskStatus::from_status_str(&task.text_at("statusStr")?),
                bricks,
            });
        }
    }
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::decode_envelope;

    fn wrap(body: &str) -> String {
        format!(
            "<cliOutput><opRet>0</opRet><opErrno>0</opErrno><opErrstr/>{}</cliOutput>",
            body
        )
    }

    #[test]
    fn test_local_uuid() {
        assert_eq!(
            local_uuid("UUID: 3b0a5e4c-3a1f-4c55-9d4e-2f3c1a9e8b77\n").as_deref(),
            Some("3b0a5e4c-3a1f-4c55-9d4e-2f3c1a9e8b77")
        );
        assert_eq!(local_uuid("  UUID: abc  ").as_deref(), Some("abc"));
        assert_eq!(local_uuid("uuid: abc"), None);
        assert_eq!(local_uuid("UUID:"), None);
        assert_eq!(local_uuid(""), None);
    }

    #[test]
    fn test_peer_status() {
        let xml = wrap(
            "<peerStatus>\
               <peer><uuid>u2</uuid><hostname>node2</hostname><connected>1</connected><state>3</state></peer>\
               <peer><uuid>u3</uuid><hostname>node3</hostname><connected>0</connected><state>3</state></peer>\
               <peer><uuid>u4</uuid><hostname>node4</hostname><connected>1</connected><state>5</state></peer>\
             </peerStatus>",
        );
        let envelope = decode_envelope(&xml).unwrap();
        let peers = peer_status(envelope.root()).unwrap();

        let statuses: Vec<_> = peers.iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![HostStatus::Connected, HostStatus::Disconnected, HostStatus::Unknown]
        );
        assert_eq!(peers[0].hostname, "node2");
        assert_eq!(peers[0].uuid, "u2");
    }

    #[test]
    fn test_no_peers() {
        let xml = wrap("<peerStatus/>");
        let envelope = decode_envelope(&xml).unwrap();
        assert!(peer_status(envelope.root()).unwrap().is_empty());
    }

    const REBALANCE: &str = "<volRebalance><task-id>t-1</task-id><op>3</op><nodeCount>2</nodeCount>\
        <node><nodeName>node1</nodeName><id>u1</id><files>12</files><size>4096</size>\
          <lookups>40</lookups><failures>0</failures><skipped>1</skipped><status>1</status>\
          <statusStr>in progress</statusStr><runtime>3.00</runtime></node>\
        <node><nodeName>node2</nodeName><id>u2</id><files>3</files><size>1024</size>\
          <lookups>20</lookups><failures>2</failures><skipped>0</skipped><status>3</status>\
          <statusStr>completed</statusStr><runtime>2.50</runtime></node>\
        <aggregate><files>15</files><size>5120</size><lookups>60</lookups><failures>2</failures>\
          <skipped>1</skipped><status>1</status><statusStr>in progress</statusStr>\
          <runtime>3.00</runtime></aggregate></volRebalance>";

    #[test]
    fn test_rebalance_status() {
        let xml = wrap(REBALANCE);
        let envelope = decode_envelope(&xml).unwrap();
        let status = async_task_status(envelope.root(), AsyncTaskKind::Rebalance).unwrap();

        assert_eq!(status.summary.files_moved, 15);
        assert_eq!(status.summary.files_scanned, 60);
        assert_eq!(status.summary.total_size_moved, 5120);
        assert_eq!(status.summary.status, TaskStatus::InProgress);
        assert_eq!(status.summary.runtime, 3.0);

        assert_eq!(status.hosts.len(), 2);
        assert_eq!(status.hosts[1].name, "node2");
        assert_eq!(status.hosts[1].id, "u2");
        assert_eq!(status.hosts[1].progress.files_failed, 2);
        assert_eq!(status.hosts[1].progress.status, TaskStatus::Completed);

        assert_eq!(task_id(envelope.root(), StartedTask::Rebalance).unwrap(), "t-1");
    }

    #[test]
    fn test_remove_brick_status_reads_its_own_section() {
        let xml = wrap(REBALANCE);
        let envelope = decode_envelope(&xml).unwrap();
        assert_eq!(
            async_task_status(envelope.root(), AsyncTaskKind::RemoveBrick).unwrap_err(),
            SchemaError::Missing {
                path: "volRemoveBrick".into()
            }
        );

        let xml = wrap(&REBALANCE.replace("volRebalance", "volRemoveBrick"));
        let envelope = decode_envelope(&xml).unwrap();
        let status = async_task_status(envelope.root(), AsyncTaskKind::RemoveBrick).unwrap();
        assert_eq!(status.hosts.len(), 2);
        assert_eq!(task_id(envelope.root(), StartedTask::RemoveBrick).unwrap(), "t-1");
    }

    #[test]
    fn test_fix_layout_status() {
        let xml = wrap(&REBALANCE.replace("in progress", "fix-layout in progress"));
        let envelope = decode_envelope(&xml).unwrap();
        let status = async_task_status(envelope.root(), AsyncTaskKind::Rebalance).unwrap();
        assert_eq!(status.summary.status, TaskStatus::FixLayoutInProgress);
    }

    #[test]
    fn test_volume_tasks() {
        let xml = wrap(
            "<volStatus><volumes>\
               <volume><volName>vol1</volName><tasks>\
                 <task><type>Rebalance</type><id>t-1</id><status>1</status><statusStr>in progress</statusStr></task>\
                 <task><type>Replace brick</type><id>t-2</id><status>1</status><statusStr>in progress</statusStr>\
                   <params><srcBrick>h1:/b1</srcBrick><dstBrick>h2:/b1</dstBrick></params></task>\
               </tasks></volume>\
               <volume><volName>vol2</volName><tasks>\
                 <task><type>Remove brick</type><id>t-3</id><status>3</status><statusStr>completed</statusStr>\
                   <params><brick>h1:/b2</brick><brick>h2:/b2</brick></params></task>\
               </tasks></volume>\
             </volumes></volStatus>",
        );
        let envelope = decode_envelope(&xml).unwrap();
        let tasks = volume_tasks(envelope.root()).unwrap();

        assert_eq!(tasks.len(), 3);
        assert_eq!(tasks[0].task_type, TaskType::Rebalance);
        assert!(tasks[0].bricks.is_empty());
        assert_eq!(tasks[1].task_type, TaskType::ReplaceBrick);
        assert_eq!(tasks[1].bricks, vec!["h1:/b1", "h2:/b1"]);
        assert_eq!(
            tasks[2],
            VolumeTask {
                id: "t-3".into(),
                volume_name: "vol2".into(),
                task_type: TaskType::RemoveBrick,
                status: TaskStatus::Completed,
                bricks: vec!["h1:/b2".into(), "h2:/b2".into()],
            }
        );
    }
}
