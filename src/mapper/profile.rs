//! Profile Mapping

use crate::domain::profile::{BlockStat, BrickProfile, FopStat, ProfileInfo, ProfileStats};
use crate::response::tree::{NodeExt, SchemaError};
use roxmltree::Node;

fn stats(brick: Node<'_, '_>, section: &str) -> Result<ProfileStats, SchemaError> {
    let block_stats = brick
        .find_all(&format!("{}/blockStats/block", section))
        .into_iter()
        .map(|block| {
            Ok(BlockStat {
                size: block.parse_at("size")?,
                reads: block.parse_at("reads")?,
                writes: block.parse_at("writes")?,
            })
        })
        .collect::<Result<_, SchemaError>>()?;

    let fop_stats = brick
        .find_all(&format!("{}/fopStats/fop", section))
        .into_iter()
        .map(|fop| {
            Ok(FopStat {
                name: fop.text_at("name")?,
                hits: fop.parse_at("hits")?,
                latency_avg: fop.parse_at("avgLatency")?,
                latency_min: fop.parse_at("minLatency")?,
                latency_max: fop.parse_at("maxLatency")?,
            })
        })
        .collect::<Result<_, SchemaError>>()?;

    Ok(ProfileStats {
        block_stats,
        fop_stats,
        duration: brick.parse_at(&format!("{}/duration", section))?,
        total_read: brick.parse_at(&format!("{}/totalRead", section))?,
        total_write: brick.parse_at(&format!("{}/totalWrite", section))?,
    })
}

/// Decode `volume profile <vol> info [nfs]`
///
/// NFS server entries on the queried host are named `localhost`; that is
/// replaced by `local_address`.
pub fn profile_info(
    root: Node<'_, '_>,
    nfs: bool,
    local_address: &str,
) -> Result<ProfileInfo, SchemaError> {
    let mut bricks = Vec::new();
    for brick in root.find_all("volProfile/brick") {
        let mut name = brick.text_at("brickName")?;
        if name == "localhost" {
            name = local_address.to_string();
        }
        bricks.push(BrickProfile {
            name,
            cumulative: stats(brick, "cumulativeStats")?,
            interval: stats(brick, "intervalStats")?,
        });
    }

    Ok(ProfileInfo {
        volume_name: root.text_at("volProfile/volname")?,
        nfs,
        bricks,
    })
}
