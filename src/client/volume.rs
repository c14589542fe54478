//! Volume lifecycle, configuration and status

use super::GlusterClient;
use crate::command::{Operation, StatusVariant, VolumeCreateRequest};
use crate::domain::cluster::VolumeTask;
use crate::domain::volume::{
    Volume, VolumeClients, VolumeMemory, VolumeOptionInfo, VolumeStatus, VolumeStatusDetail,
};
use crate::error::Result;
use crate::mapper;
use crate::response::parse_document;
use indexmap::IndexMap;

/// Volume name accepted by `volume status` to cover every volume
const ALL_VOLUMES: &str = "all";

impl GlusterClient {
    // =========================================================================
    // Queries
    // =========================================================================

    /// Describe one volume, or every volume when `volume` is `None`
    ///
    /// `remote_host` queries the daemon of another peer.
    pub fn volume_info(
        &self,
        volume: Option<&str>,
        remote_host: Option<&str>,
    ) -> Result<IndexMap<String, Volume>> {
        let op = Operation::VolumeInfo {
            volume: volume.map(str::to_string),
            remote_host: remote_host.map(str::to_string),
        };
        self.run_xml(&op, mapper::volume_info)
    }

    fn status_op(volume: &str, brick: Option<&str>, variant: StatusVariant) -> Operation {
        Operation::VolumeStatus {
            volume: volume.to_string(),
            brick: brick.map(str::to_string),
            variant,
        }
    }

    /// Bricks, NFS servers and self-heal daemons of a volume
    pub fn volume_status(&self, volume: &str, brick: Option<&str>) -> Result<VolumeStatus> {
        let op = Self::status_op(volume, brick, StatusVariant::Default);
        self.run_xml(&op, |root| mapper::volume_status(root, self.local_address()))
    }

    pub fn volume_status_detail(
        &self,
        volume: &str,
        brick: Option<&str>,
    ) -> Result<VolumeStatusDetail> {
        let op = Self::status_op(volume, brick, StatusVariant::Detail);
        self.run_xml(&op, mapper::volume_status_detail)
    }

    pub fn volume_status_clients(
        &self,
        volume: &str,
        brick: Option<&str>,
    ) -> Result<VolumeClients> {
        let op = Self::status_op(volume, brick, StatusVariant::Clients);
        self.run_xml(&op, mapper::volume_status_clients)
    }

    pub fn volume_status_mem(&self, volume: &str, brick: Option<&str>) -> Result<VolumeMemory> {
        let op = Self::status_op(volume, brick, StatusVariant::Mem);
        self.run_xml(&op, mapper::volume_status_mem)
    }

    /// Running tasks of one volume, or of every volume
    pub fn volume_tasks(&self, volume: Option<&str>) -> Result<Vec<VolumeTask>> {
        let op = Operation::VolumeTasks {
            volume: volume.unwrap_or(ALL_VOLUMES).to_string(),
        };
        self.run_xml(&op, mapper::volume_tasks)
    }

    /// Settable options with their defaults
    pub fn volume_set_help(&self) -> Result<Vec<VolumeOptionInfo>> {
        let raw = self.run_plain(&Operation::VolumeSetHelp)?;
        let doc = parse_document(&raw.stdout).map_err(|e| raw.decode_error(e))?;
        mapper::volume_option_help(doc.root_element()).map_err(|e| raw.decode_error(e))
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Create a volume and return its UUID
    pub fn volume_create(&self, request: &VolumeCreateRequest) -> Result<String> {
        self.run_xml(
            &Operation::VolumeCreate(request.clone()),
            mapper::volume_created,
        )
    }

    pub fn volume_start(&self, volume: &str, force: bool) -> Result<()> {
        self.run_ack(&Operation::VolumeStart {
            volume: volume.to_string(),
            force,
        })
    }

    pub fn volume_stop(&self, volume: &str, force: bool) -> Result<()> {
        self.run_ack(&Operation::VolumeStop {
            volume: volume.to_string(),
            force,
        })
    }

    pub fn volume_delete(&self, volume: &str) -> Result<()> {
        self.run_ack(&Operation::VolumeDelete {
            volume: volume.to_string(),
        })
    }

    // =========================================================================
    // Options
    // =========================================================================

    pub fn volume_set(&self, volume: &str, option: &str, value: &str) -> Result<()> {
        self.run_ack(&Operation::VolumeSet {
            volume: volume.to_string(),
            option: option.to_string(),
            value: value.to_string(),
        })
    }

    /// Reset one option, or every option when `option` is `None`
    pub fn volume_reset(&self, volume: &str, option: Option<&str>, force: bool) -> Result<()> {
        self.run_ack(&Operation::VolumeReset {
            volume: volume.to_string(),
            option: option.map(str::to_string),
            force,
        })
    }
}
