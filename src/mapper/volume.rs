//! Volume Info Mapping
//!
//! Maps `volume info`, `volume create` and `volume set help-xml` responses.

use crate::domain::codes::{OnlineStatus, TransportType, VolumeType};
use crate::domain::volume::{BrickInfo, Volume, VolumeOptionInfo};
use crate::response::tree::{NodeExt, SchemaError};
use indexmap::IndexMap;
use roxmltree::Node;
use tracing::warn;

/// Decode `volInfo/volumes/volume` entries keyed by volume name
pub fn volume_info(root: Node<'_, '_>) -> Result<IndexMap<String, Volume>, SchemaError> {
    let mut volumes = IndexMap::new();
    for el in root.find_all("volInfo/volumes/volume") {
        let volume = map_volume(el)?;
        volumes.insert(volume.name.clone(), volume);
    }
    Ok(volumes)
}

fn map_volume(el: Node<'_, '_>) -> Result<Volume, SchemaError> {
    let name = el.text_at("name")?;
    let brick_nodes = el.find_all("bricks/brick");

    let bricks: Vec<String> = brick_nodes
        .iter()
        .map(|b| b.text().unwrap_or("").trim().to_string())
        .collect();

    let brick_count: u32 = el.parse_at("brickCount")?;
    if bricks.len() != brick_count as usize {
        return Err(SchemaError::Inconsistent(format!(
            "volume {} reports brickCount {} but lists {} bricks",
            name,
            brick_count,
            bricks.len()
        )));
    }

    let mut options = IndexMap::new();
    for option in el.find_all("options/option") {
        options.insert(option.text_at("name")?, option.text_at("value")?);
    }

    Ok(Volume {
        uuid: el.text_at("id")?,
        volume_type: VolumeType::from_type_str(&el.text_at("typeStr")?),
        status: OnlineStatus::from_volume_status(&el.text_at("statusStr")?),
        brick_count,
        dist_count: el.parse_at("distCount")?,
        stripe_count: el.parse_at("stripeCount")?,
        replica_count: el.parse_at("replicaCount")?,
        transport: TransportType::from_code(&el.text_at("transport")?),
        bricks,
        options,
        bricks_info: brick_details(&name, &brick_nodes),
        name,
    })
}

/// Collect brick owners, stopping at the first brick without them
///
/// Older daemons omit `name`/`hostUuid` per brick. Whatever was collected
/// before the first gap is returned. This is a compatibility shim: a
/// partial list is not a guarantee that the remaining bricks are unowned.
fn brick_details(volume: &str, bricks: &[Node<'_, '_>]) -> Vec<BrickInfo> {
    let mut details = Vec::new();
    for brick in bricks {
        match (brick.find("name"), brick.find("hostUuid")) {
            (Some(name), Some(host_uuid)) => details.push(BrickInfo {
                name: name.text().unwrap_or("").to_string(),
                host_uuid: host_uuid.text().unwrap_or("").to_string(),
            }),
            _ => {
                warn!(
                    "Volume {}: brick owner missing after {} entries, daemon predates brick UUIDs",
                    volume,
                    details.len()
                );
                break;
            }
        }
    }
    details
}

/// UUID of a freshly created volume
pub fn volume_created(root: Node<'_, '_>) -> Result<String, SchemaError> {
    root.text_at("volCreate/volume/id")
}

/// Option descriptors from `volume set help-xml`
///
/// Accepts both the `option` and the newer `volumeOption` element names.
pub fn volume_option_help(root: Node<'_, '_>) -> Result<Vec<VolumeOptionInfo>, SchemaError> {
    root.children()
        .filter(|c| {
            c.is_element() && matches!(c.tag_name().name(), "option" | "volumeOption")
        })
        .map(|el| {
            Ok(VolumeOptionInfo {
                name: el.text_at("name")?,
                default_value: el.opt_text_at("defaultValue"),
                description: el.opt_text_at("description"),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::decode_envelope;
    use roxmltree::Document;

    const VOLUME_INFO: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<cliOutput>
  <opRet>0</opRet>
  <opErrno>0</opErrno>
  <opErrstr/>
  <volInfo>
    <volumes>
      <volume>
        <name>music</name>
        <id>b3114c71-741b-4c6f-a39e-80384c4ea3cf</id>
        <status>1</status>
        <statusStr>Started</statusStr>
        <brickCount>2</brickCount>
        <distCount>2</distCount>
        <stripeCount>1</stripeCount>
        <replicaCount>2</replicaCount>
        <type>2</type>
        <typeStr>Replicate</typeStr>
        <transport>0</transport>
        <bricks>
          <brick uuid="5f1b5a4a-a3c7-4d3c-b4e0-6d3f2a7e1c11">node1:/bricks/b1<name>node1:/bricks/b1</name><hostUuid>5f1b5a4a-a3c7-4d3c-b4e0-6d3f2a7e1c11</hostUuid></brick>
          <brick uuid="8a2c6b5e-1d4f-4e2a-9c3b-7f4e3b8d2c22">node2:/bricks/b1<name>node2:/bricks/b1</name><hostUuid>8a2c6b5e-1d4f-4e2a-9c3b-7f4e3b8d2c22</hostUuid></brick>
        </bricks>
        <optCount>2</optCount>
        <options>
          <option><name>performance.readdir-ahead</name><value>on</value></option>
          <option><name>auth.allow</name><value>*</value></option>
        </options>
      </volume>
      <volume>
        <name>legacy</name>
        <id>0c1d2e3f-0000-4000-8000-000000000001</id>
        <status>0</status>
        <statusStr>Created</statusStr>
        <brickCount>3</brickCount>
        <distCount>1</distCount>
        <stripeCount>1</stripeCount>
        <replicaCount>1</replicaCount>
        <typeStr>Distributed-Striped-Replicate</typeStr>
        <transport>2</transport>
        <bricks>
          <brick>node1:/bricks/l1<name>node1:/bricks/l1</name><hostUuid>5f1b</hostUuid></brick>
          <brick>node2:/bricks/l2</brick>
          <brick>node3:/bricks/l3<name>node3:/bricks/l3</name><hostUuid>9c9c</hostUuid></brick>
        </bricks>
        <options/>
      </volume>
    </volumes>
    <count>2</count>
  </volInfo>
</cliOutput>"#;

    #[test]
    fn test_volume_info() {
        let envelope = decode_envelope(VOLUME_INFO).unwrap();
        let volumes = volume_info(envelope.root()).unwrap();
        assert_eq!(volumes.len(), 2);

        let music = &volumes["music"];
        assert_eq!(music.uuid, "b3114c71-741b-4c6f-a39e-80384c4ea3cf");
        assert_eq!(music.volume_type, VolumeType::Replicate);
        assert_eq!(music.status, OnlineStatus::Online);
        assert_eq!(music.brick_count, 2);
        assert_eq!(music.replica_count, 2);
        assert_eq!(music.transport, vec![TransportType::Tcp]);
        assert_eq!(music.bricks, vec!["node1:/bricks/b1", "node2:/bricks/b1"]);
        assert_eq!(music.options["performance.readdir-ahead"], "on");
        assert_eq!(music.options.get_index(1).unwrap().0, "auth.allow");
        assert_eq!(music.bricks_info.len(), 2);
        assert_eq!(
            music.bricks_info[1],
            BrickInfo {
                name: "node2:/bricks/b1".into(),
                host_uuid: "8a2c6b5e-1d4f-4e2a-9c3b-7f4e3b8d2c22".into(),
            }
        );
    }

    #[test]
    fn test_brick_count_matches_bricks() {
        let envelope = decode_envelope(VOLUME_INFO).unwrap();
        for volume in volume_info(envelope.root()).unwrap().values() {
            assert_eq!(volume.bricks.len(), volume.brick_count as usize);
        }
    }

    #[test]
    fn test_legacy_brick_details_stop_at_first_gap() {
        let envelope = decode_envelope(VOLUME_INFO).unwrap();
        let volumes = volume_info(envelope.root()).unwrap();
        let legacy = &volumes["legacy"];

        assert_eq!(legacy.status, OnlineStatus::Offline);
        assert_eq!(legacy.volume_type, VolumeType::DistributedStripedReplicate);
        assert_eq!(legacy.transport, vec![TransportType::Tcp, TransportType::Rdma]);
        assert_eq!(legacy.bricks.len(), 3);
        assert_eq!(legacy.bricks_info.len(), 1);
        assert_eq!(legacy.bricks_info[0].name, "node1:/bricks/l1");
        assert!(legacy.options.is_empty());
    }

    #[test]
    fn test_brick_count_mismatch_is_rejected() {
        let xml = "<cliOutput><volInfo><volumes><volume><name>v</name>\
                   <brickCount>2</brickCount><bricks><brick>h:/b</brick></bricks>\
                   </volume></volumes></volInfo></cliOutput>";
        let doc = Document::parse(xml).unwrap();
        assert!(matches!(
            volume_info(doc.root_element()),
            Err(SchemaError::Inconsistent(_))
        ));
    }

    #[test]
    fn test_missing_field_names_path() {
        let xml = "<cliOutput><volInfo><volumes><volume><name>v</name>\
                   <brickCount>0</brickCount></volume></volumes></volInfo></cliOutput>";
        let doc = Document::parse(xml).unwrap();
        assert_eq!(
            volume_info(doc.root_element()).unwrap_err(),
            SchemaError::Missing { path: "id".into() }
        );
    }

    #[test]
    fn test_volume_option_help() {
        let xml = r#"<?xml version="1.0"?>
<options>
  <option>
    <defaultValue>off</defaultValue>
    <description>Enable NFS ACLs</description>
    <name>nfs.acl</name>
  </option>
  <volumeOption>
    <defaultValue/>
    <name>auth.allow</name>
  </volumeOption>
</options>"#;
        let doc = Document::parse(xml).unwrap();
        let options = volume_option_help(doc.root_element()).unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].name, "nfs.acl");
        assert_eq!(options[0].default_value.as_deref(), Some("off"));
        assert_eq!(options[1].default_value, None);
        assert_eq!(options[1].description, None);
    }
}
