//! Geo-Replication Mapping

use crate::domain::georep::{GeoRepPair, GeoRepPairDetail, GeoRepSession, REMOTE_ENDPOINT_SEPARATOR};
use crate::response::tree::{NodeExt, SchemaError};
use indexmap::IndexMap;
use roxmltree::Node;

/// Volume name of a session endpoint: the text after the last separator
fn remote_volume_name(session_key: &str) -> String {
    session_key
        .rsplit(REMOTE_ENDPOINT_SEPARATOR)
        .next()
        .unwrap_or(session_key)
        .to_string()
}

/// Host of a pair's slave endpoint: the text before the first separator
fn remote_host(slave: &str) -> String {
    slave
        .split(REMOTE_ENDPOINT_SEPARATOR)
        .next()
        .unwrap_or(slave)
        .to_string()
}

fn pair_detail(pair: Node<'_, '_>) -> Result<GeoRepPairDetail, SchemaError> {
    Ok(GeoRepPairDetail {
        files_synced: pair.text_at("files_syncd")?,
        files_pending: pair.text_at("files_pending")?,
        bytes_pending: pair.text_at("bytes_pending")?,
        deletes_pending: pair.text_at("deletes_pending")?,
        files_skipped: pair.text_at("files_skipped")?,
    })
}

fn map_pair(pair: Node<'_, '_>, detail: bool) -> Result<GeoRepPair, SchemaError> {
    Ok(GeoRepPair {
        host: pair.text_at("master_node")?,
        host_uuid: pair.text_at("master_node_uuid")?,
        brick_name: pair.text_at("master_brick")?,
        remote_host: remote_host(&pair.text_at("slave")?),
        status: pair.text_at("status")?,
        checkpoint_status: pair.text_at("checkpoint_status")?,
        crawl_status: pair.text_at("crawl_status")?,
        detail: if detail { Some(pair_detail(pair)?) } else { None },
    })
}

/// Sessions per master volume from `geo-replication ... status [detail]`
pub fn geo_rep_status(
    root: Node<'_, '_>,
    detail: bool,
) -> Result<IndexMap<String, Vec<GeoRepSession>>, SchemaError> {
    let mut volumes = IndexMap::new();
    for volume in root.find_all("geoRep/volume") {
        let name = volume.text_at("name")?;
        let mut sessions = Vec::new();
        for session in volume.find_all("sessions/session") {
            let session_key = session.text_at("session_slave")?;
            let pairs = session
                .find_all("pair")
                .into_iter()
                .map(|pair| map_pair(pair, detail))
                .collect::<Result<_, SchemaError>>()?;

            sessions.push(GeoRepSession {
                remote_volume_name: remote_volume_name(&session_key),
                session_key,
                pairs,
            });
        }
        volumes.insert(name, sessions);
    }
    Ok(volumes)
}

/// Effective options of one session from `geo-replication ... config`
pub fn geo_rep_config(root: Node<'_, '_>) -> Result<IndexMap<String, String>, SchemaError> {
    Ok(root.required("geoRep/config")?.leaf_map())
}
