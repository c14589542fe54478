//! Volume Status Mapping
//!
//! The four `volume status` variants share a `volStatus/volumes/volume`
//! layout with one `node` element per brick or service daemon.

use crate::domain::codes::OnlineStatus;
use crate::domain::volume::{
    BrickClients, BrickRuntimeStatus, BrickStatusDetail, ClientSession, DaemonStatus,
    MemPoolEntry, MemoryProfile, VolumeClients, VolumeMemory, VolumeStatus, VolumeStatusDetail,
};
use crate::response::tree::{NodeExt, SchemaError};
use roxmltree::Node;

const VOLUME_PATH: &str = "volStatus/volumes/volume";
const NFS_SERVER: &str = "NFS Server";
const SELF_HEAL_DAEMON: &str = "Self-heal Daemon";
const LOCALHOST: &str = "localhost";

const KIB_PER_GIB: f64 = 1024.0 * 1024.0;

/// Render a KiB count as GiB with three decimals
pub fn format_size_gib(kib: u64) -> String {
    format!("{:.3}", kib as f64 / KIB_PER_GIB)
}

fn volume_name(root: Node<'_, '_>) -> Result<String, SchemaError> {
    root.text_at("volStatus/volumes/volume/volName")
}

fn nodes<'a, 'input>(root: Node<'a, 'input>) -> Vec<Node<'a, 'input>> {
    root.find_all(&format!("{}/node", VOLUME_PATH))
}

/// `host:path` identifier of a brick node
fn brick_name(node: Node<'_, '_>) -> Result<String, SchemaError> {
    Ok(format!("{}:{}", node.text_at("hostname")?, node.text_at("path")?))
}

/// `N/A` and negative values mean the process is not running
fn parse_pid(raw: &str) -> Option<u32> {
    raw.trim().parse().ok()
}

fn parse_port(node: Node<'_, '_>) -> Option<u16> {
    node.opt_text_at("port")
        .or_else(|| node.opt_text_at("ports/tcp"))
        .and_then(|raw| raw.trim().parse().ok())
}

// =============================================================================
// Default
// =============================================================================

/// Decode `volume status <vol> --xml`
///
/// Daemons running on the queried host report their path as `localhost`;
/// that is replaced by `local_address`.
pub fn volume_status(root: Node<'_, '_>, local_address: &str) -> Result<VolumeStatus, SchemaError> {
    let mut status = VolumeStatus {
        name: volume_name(root)?,
        bricks: Vec::new(),
        nfs: Vec::new(),
        shd: Vec::new(),
    };

    for node in nodes(root) {
        let hostname = node.text_at("hostname")?;
        let mut path = node.text_at("path")?;
        if path == LOCALHOST {
            path = local_address.to_string();
        }
        let host_uuid = node.text_at("peerid")?;
        let online = OnlineStatus::from_node_code(&node.text_at("status")?);
        let pid = parse_pid(&node.text_at("pid")?);

        match hostname.as_str() {
            NFS_SERVER => status.nfs.push(DaemonStatus {
                hostname: path,
                host_uuid,
                port: parse_port(node),
                status: online,
                pid,
            }),
            SELF_HEAL_DAEMON => status.shd.push(DaemonStatus {
                hostname: path,
                host_uuid,
                port: None,
                status: online,
                pid,
            }),
            _ => status.bricks.push(BrickRuntimeStatus {
                brick: format!("{}:{}", hostname, path),
                host_uuid,
                port: parse_port(node),
                status: online,
                pid,
            }),
        }
    }

    Ok(status)
}

// =============================================================================
// Detail / Clients / Mem
// =============================================================================

pub fn volume_status_detail(root: Node<'_, '_>) -> Result<VolumeStatusDetail, SchemaError> {
    let bricks = nodes(root)
        .into_iter()
        .map(|node| {
            Ok(BrickStatusDetail {
                brick: brick_name(node)?,
                host_uuid: node.text_at("peerid")?,
                size_total: format_size_gib(node.parse_at("sizeTotal")?),
                size_free: format_size_gib(node.parse_at("sizeFree")?),
                device: node.text_at("device")?,
                block_size: node.text_at("blockSize")?,
                mount_options: node.text_at("mntOptions")?,
                fs_name: node.text_at("fsName")?,
            })
        })
        .collect::<Result<_, SchemaError>>()?;

    Ok(VolumeStatusDetail {
        name: volume_name(root)?,
        bricks,
    })
}

pub fn volume_status_clients(root: Node<'_, '_>) -> Result<VolumeClients, SchemaError> {
    let mut bricks = Vec::new();
    for node in nodes(root) {
        let clients = node
            .find_all("clientsStatus/client")
            .into_iter()
            .map(|client| {
                Ok(ClientSession {
                    hostname: client.text_at("hostname")?,
                    bytes_read: client.parse_at("bytesRead")?,
                    bytes_write: client.parse_at("bytesWrite")?,
                })
            })
            .collect::<Result<_, SchemaError>>()?;

        bricks.push(BrickClients {
            brick: brick_name(node)?,
            host_uuid: node.text_at("peerid")?,
            clients,
        });
    }

    Ok(VolumeClients {
        name: volume_name(root)?,
        bricks,
    })
}

pub fn volume_status_mem(root: Node<'_, '_>) -> Result<VolumeMemory, SchemaError> {
    let mut bricks = Vec::new();
    for node in nodes(root) {
        let mut mempool = Vec::new();
        for pool in node.find_all("memStatus/mempool/pool") {
            let mut stats = pool.leaf_map();
            let name = stats
                .shift_remove("name")
                .ok_or_else(|| SchemaError::Missing {
                    path: "memStatus/mempool/pool/name".to_string(),
                })?;
            mempool.push(MemPoolEntry { name, stats });
        }

        bricks.push(MemoryProfile {
            brick: brick_name(node)?,
            host_uuid: node.text_at("peerid")?,
            mallinfo: node.required("memStatus/mallinfo")?.leaf_map(),
            mempool,
        });
    }

    Ok(VolumeMemory {
        name: volume_name(root)?,
        bricks,
    })
}
