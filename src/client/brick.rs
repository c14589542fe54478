//! Brick topology changes: add-brick, rebalance, replace-brick, remove-brick

use super::GlusterClient;
use crate::command::{
    AddBrickRequest, Operation, RebalanceMode, RemoveBrickAction, RemoveBrickRequest,
    ReplaceBrickAction, ReplaceBrickRequest,
};
use crate::domain::cluster::{AsyncTaskStatus, ReplaceBrickStatus};
use crate::error::Result;
use crate::mapper::{self, AsyncTaskKind, StartedTask};

impl GlusterClient {
    pub fn volume_add_brick(&self, request: &AddBrickRequest) -> Result<()> {
        self.run_ack(&Operation::VolumeAddBrick(request.clone()))
    }

    // =========================================================================
    // Rebalance
    // =========================================================================

    /// Start a rebalance and return its task id
    pub fn rebalance_start(
        &self,
        volume: &str,
        mode: Option<RebalanceMode>,
        force: bool,
    ) -> Result<String> {
        let op = Operation::RebalanceStart {
            volume: volume.to_string(),
            mode,
            force,
        };
        self.run_xml(&op, |root| mapper::task_id(root, StartedTask::Rebalance))
    }

    /// Stop a rebalance; the daemon reports the progress reached
    pub fn rebalance_stop(&self, volume: &str, force: bool) -> Result<AsyncTaskStatus> {
        let op = Operation::RebalanceStop {
            volume: volume.to_string(),
            force,
        };
        self.run_xml(&op, |root| {
            mapper::async_task_status(root, AsyncTaskKind::Rebalance)
        })
    }

    pub fn rebalance_status(&self, volume: &str) -> Result<AsyncTaskStatus> {
        let op = Operation::RebalanceStatus {
            volume: volume.to_string(),
        };
        self.run_xml(&op, |root| {
            mapper::async_task_status(root, AsyncTaskKind::Rebalance)
        })
    }

    // =========================================================================
    // Replace-Brick
    // =========================================================================

    /// Start migrating a brick and return the task id
    pub fn replace_brick_start(&self, request: &ReplaceBrickRequest) -> Result<String> {
        let op = Operation::ReplaceBrick(request.clone(), ReplaceBrickAction::Start);
        self.run_xml(&op, |root| mapper::task_id(root, StartedTask::ReplaceBrick))
    }

    pub fn replace_brick_abort(&self, request: &ReplaceBrickRequest) -> Result<()> {
        self.run_ack(&Operation::ReplaceBrick(
            request.clone(),
            ReplaceBrickAction::Abort,
        ))
    }

    pub fn replace_brick_pause(&self, request: &ReplaceBrickRequest) -> Result<()> {
        self.run_ack(&Operation::ReplaceBrick(
            request.clone(),
            ReplaceBrickAction::Pause,
        ))
    }

    /// Migration progress, scraped from plain-text output
    pub fn replace_brick_status(
        &self,
        request: &ReplaceBrickRequest,
    ) -> Result<ReplaceBrickStatus> {
        let raw = self.run_plain(&Operation::ReplaceBrick(
            request.clone(),
            ReplaceBrickAction::Status,
        ))?;
        Ok(mapper::replace_brick_status(&raw.stdout))
    }

    pub fn replace_brick_commit(&self, request: &ReplaceBrickRequest, force: bool) -> Result<()> {
        self.run_ack(&Operation::ReplaceBrick(
            request.clone(),
            ReplaceBrickAction::Commit { force },
        ))
    }

    // =========================================================================
    // Remove-Brick
    // =========================================================================

    /// Start draining bricks and return the task id
    pub fn remove_brick_start(&self, request: &RemoveBrickRequest) -> Result<String> {
        let op = Operation::RemoveBrick(request.clone(), RemoveBrickAction::Start);
        self.run_xml(&op, |root| mapper::task_id(root, StartedTask::RemoveBrick))
    }

    pub fn remove_brick_stop(&self, request: &RemoveBrickRequest) -> Result<AsyncTaskStatus> {
        let op = Operation::RemoveBrick(request.clone(), RemoveBrickAction::Stop);
        self.run_xml(&op, |root| {
            mapper::async_task_status(root, AsyncTaskKind::RemoveBrick)
        })
    }

    pub fn remove_brick_status(&self, request: &RemoveBrickRequest) -> Result<AsyncTaskStatus> {
        let op = Operation::RemoveBrick(request.clone(), RemoveBrickAction::Status);
        self.run_xml(&op, |root| {
            mapper::async_task_status(root, AsyncTaskKind::RemoveBrick)
        })
    }

    pub fn remove_brick_commit(&self, request: &RemoveBrickRequest) -> Result<()> {
        self.run_ack(&Operation::RemoveBrick(
            request.clone(),
            RemoveBrickAction::Commit,
        ))
    }

    /// Remove bricks immediately without migrating their data
    pub fn remove_brick_force(&self, request: &RemoveBrickRequest) -> Result<()> {
        self.run_ack(&Operation::RemoveBrick(
            request.clone(),
            RemoveBrickAction::Force,
        ))
    }
}
