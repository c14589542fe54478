//! Command Builder
//!
//! Renders typed [`Operation`] requests into the argument vectors the
//! gluster tool expects. Positional order is part of the tool's grammar:
//! stripe before replica before transport before bricks, `force` last.

use crate::domain::codes::TransportType;
use crate::domain::georep::remote_endpoint;
use std::fmt;

// =============================================================================
// Constants
// =============================================================================

/// Installed location of the gluster tool on most distributions
pub const DEFAULT_GLUSTER_PATH: &str = "/usr/sbin/gluster";

/// Bare tool name, resolved through `PATH`
pub const GLUSTER_BINARY: &str = "gluster";

const SCRIPT_MODE: &str = "--mode=script";
const XML_FLAG: &str = "--xml";
const FORCE: &str = "force";

// =============================================================================
// Command
// =============================================================================

/// How the output of a command is decoded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// XML envelope, requested with `--xml`
    Xml,
    /// Free text (or XML without an envelope)
    Plain,
}

/// A fully rendered invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    argv: Vec<String>,
    format: OutputFormat,
}

impl Command {
    pub fn argv(&self) -> &[String] {
        &self.argv
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.argv.join(" "))
    }
}

// =============================================================================
// Request Types
// =============================================================================

/// Which `volume status` report to request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusVariant {
    Default,
    Detail,
    Clients,
    Mem,
}

impl StatusVariant {
    fn as_arg(&self) -> Option<&'static str> {
        match self {
            StatusVariant::Default => None,
            StatusVariant::Detail => Some("detail"),
            StatusVariant::Clients => Some("clients"),
            StatusVariant::Mem => Some("mem"),
        }
    }
}

/// Parameters of `volume create`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VolumeCreateRequest {
    pub name: String,
    pub bricks: Vec<String>,
    pub stripe_count: Option<u32>,
    pub replica_count: Option<u32>,
    pub transports: Vec<TransportType>,
    pub force: bool,
}

impl VolumeCreateRequest {
    pub fn new(name: impl Into<String>, bricks: Vec<String>) -> Self {
        Self {
            name: name.into(),
            bricks,
            ..Default::default()
        }
    }

    pub fn stripe(mut self, count: u32) -> Self {
        self.stripe_count = Some(count);
        self
    }

    pub fn replica(mut self, count: u32) -> Self {
        self.replica_count = Some(count);
        self
    }

    pub fn transport(mut self, transport: TransportType) -> Self {
        self.transports.push(transport);
        self
    }

    pub fn force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }
}

/// Parameters of `volume add-brick`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddBrickRequest {
    pub volume: String,
    pub bricks: Vec<String>,
    pub stripe_count: Option<u32>,
    pub replica_count: Option<u32>,
    pub force: bool,
}

/// Target of a remove-brick operation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemoveBrickRequest {
    pub volume: String,
    pub bricks: Vec<String>,
    pub replica_count: Option<u32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveBrickAction {
    Start,
    Stop,
    Status,
    Commit,
    Force,
}

impl RemoveBrickAction {
    fn as_arg(&self) -> &'static str {
        match self {
            RemoveBrickAction::Start => "start",
            RemoveBrickAction::Stop => "stop",
            RemoveBrickAction::Status => "status",
            RemoveBrickAction::Commit => "commit",
            RemoveBrickAction::Force => "force",
        }
    }
}

/// Source and destination of a replace-brick operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplaceBrickRequest {
    pub volume: String,
    pub existing_brick: String,
    pub new_brick: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplaceBrickAction {
    Start,
    Abort,
    Pause,
    Status,
    Commit { force: bool },
}

impl ReplaceBrickAction {
    fn as_arg(&self) -> &'static str {
        match self {
            ReplaceBrickAction::Start => "start",
            ReplaceBrickAction::Abort => "abort",
            ReplaceBrickAction::Pause => "pause",
            ReplaceBrickAction::Status => "status",
            ReplaceBrickAction::Commit { .. } => "commit",
        }
    }
}

/// Optional rebalance mode placed before `start`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RebalanceMode {
    FixLayout,
}

impl RebalanceMode {
    fn as_arg(&self) -> &'static str {
        match self {
            RebalanceMode::FixLayout => "fix-layout",
        }
    }
}

/// A master volume paired with a remote endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeoRepSessionRef {
    pub volume: String,
    pub remote_host: String,
    pub remote_volume: String,
}

impl GeoRepSessionRef {
    pub fn new(
        volume: impl Into<String>,
        remote_host: impl Into<String>,
        remote_volume: impl Into<String>,
    ) -> Self {
        Self {
            volume: volume.into(),
            remote_host: remote_host.into(),
            remote_volume: remote_volume.into(),
        }
    }

    pub fn endpoint(&self) -> String {
        remote_endpoint(&self.remote_host, &self.remote_volume)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoRepAction {
    Start,
    Stop,
    Pause,
    Resume,
}

impl GeoRepAction {
    fn as_arg(&self) -> &'static str {
        match self {
            GeoRepAction::Start => "start",
            GeoRepAction::Stop => "stop",
            GeoRepAction::Pause => "pause",
            GeoRepAction::Resume => "resume",
        }
    }
}

/// Change requested through `geo-replication ... config`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GeoRepConfigChange {
    Set { name: String, value: String },
    Reset { name: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotDeleteTarget {
    Snapshot(String),
    /// Every snapshot of the named volume
    Volume(String),
}

// =============================================================================
// Operation
// =============================================================================

/// Every administrative operation the client can issue
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    VolumeInfo {
        volume: Option<String>,
        remote_host: Option<String>,
    },
    VolumeStatus {
        volume: String,
        brick: Option<String>,
        variant: StatusVariant,
    },
    VolumeTasks {
        volume: String,
    },
    VolumeCreate(VolumeCreateRequest),
    VolumeStart {
        volume: String,
        force: bool,
    },
    VolumeStop {
        volume: String,
        force: bool,
    },
    VolumeDelete {
        volume: String,
    },
    VolumeSet {
        volume: String,
        option: String,
        value: String,
    },
    VolumeSetHelp,
    VolumeReset {
        volume: String,
        option: Option<String>,
        force: bool,
    },
    VolumeAddBrick(AddBrickRequest),
    RebalanceStart {
        volume: String,
        mode: Option<RebalanceMode>,
        force: bool,
    },
    RebalanceStop {
        volume: String,
        force: bool,
    },
    RebalanceStatus {
        volume: String,
    },
    ReplaceBrick(ReplaceBrickRequest, ReplaceBrickAction),
    RemoveBrick(RemoveBrickRequest, RemoveBrickAction),
    PeerProbe {
        host: String,
    },
    PeerDetach {
        host: String,
        force: bool,
    },
    PeerStatus,
    SystemUuid,
    ProfileStart {
        volume: String,
    },
    ProfileStop {
        volume: String,
    },
    ProfileInfo {
        volume: String,
        nfs: bool,
    },
    GeoRepSession {
        session: GeoRepSessionRef,
        action: GeoRepAction,
        force: bool,
    },
    GeoRepStatus {
        volume: Option<String>,
        remote: Option<(String, String)>,
        detail: bool,
    },
    GeoRepConfig {
        session: GeoRepSessionRef,
        change: Option<GeoRepConfigChange>,
    },
    SnapshotCreate {
        volume: String,
        snapshot: String,
        description: Option<String>,
        force: bool,
    },
    SnapshotDelete(SnapshotDeleteTarget),
    SnapshotActivate {
        snapshot: String,
        force: bool,
    },
    SnapshotDeactivate {
        snapshot: String,
    },
    SnapshotRestore {
        snapshot: String,
    },
}

impl Operation {
    /// Output contract of the operation
    ///
    /// `volume set help-xml` is already XML without an envelope, snapshot
    /// delete avoids a defective XML path in the daemon, and replace-brick
    /// status has no structured form.
    pub fn format(&self) -> OutputFormat {
        match self {
            Operation::VolumeSetHelp
            | Operation::SystemUuid
            | Operation::SnapshotDelete(_)
            | Operation::ReplaceBrick(_, ReplaceBrickAction::Status) => OutputFormat::Plain,
            _ => OutputFormat::Xml,
        }
    }
}

// =============================================================================
// Builder
// =============================================================================

/// Turns operations into commands for a given gluster binary
#[derive(Debug, Clone)]
pub struct CommandBuilder {
    gluster: String,
}

impl CommandBuilder {
    pub fn new(gluster_path: impl Into<String>) -> Self {
        Self {
            gluster: gluster_path.into(),
        }
    }

    pub fn build(&self, op: &Operation) -> Command {
        let mut argv = self.render(op);
        let format = op.format();
        if format == OutputFormat::Xml {
            argv.push(XML_FLAG.to_string());
        }
        Command { argv, format }
    }

    fn base(&self, subsystem: &str) -> Vec<String> {
        vec![
            self.gluster.clone(),
            SCRIPT_MODE.to_string(),
            subsystem.to_string(),
        ]
    }

    fn render(&self, op: &Operation) -> Vec<String> {
        match op {
            Operation::VolumeInfo {
                volume,
                remote_host,
            } => {
                let mut argv = self.base("volume");
                argv.push("info".into());
                if let Some(host) = remote_host {
                    argv.push(format!("--remote-host={}", host));
                }
                push_opt(&mut argv, volume.as_deref());
                argv
            }
            Operation::VolumeStatus {
                volume,
                brick,
                variant,
            } => {
                let mut argv = self.base("volume");
                argv.extend(["status".to_string(), volume.clone()]);
                push_opt(&mut argv, brick.as_deref());
                push_opt(&mut argv, variant.as_arg());
                argv
            }
            Operation::VolumeTasks { volume } => {
                let mut argv = self.base("volume");
                argv.extend(["status".to_string(), volume.clone(), "tasks".to_string()]);
                argv
            }
            Operation::VolumeCreate(req) => {
                let mut argv = self.base("volume");
                argv.extend(["create".to_string(), req.name.clone()]);
                push_count(&mut argv, "stripe", req.stripe_count);
                push_count(&mut argv, "replica", req.replica_count);
                if !req.transports.is_empty() {
                    let transports: Vec<&str> =
                        req.transports.iter().map(|t| t.as_cli_arg()).collect();
                    argv.extend(["transport".to_string(), transports.join(",")]);
                }
                argv.extend(req.bricks.iter().cloned());
                push_force(&mut argv, req.force);
                argv
            }
            Operation::VolumeStart { volume, force } => {
                let mut argv = self.base("volume");
                argv.extend(["start".to_string(), volume.clone()]);
                push_force(&mut argv, *force);
                argv
            }
            Operation::VolumeStop { volume, force } => {
                let mut argv = self.base("volume");
                argv.extend(["stop".to_string(), volume.clone()]);
                push_force(&mut argv, *force);
                argv
            }
            Operation::VolumeDelete { volume } => {
                let mut argv = self.base("volume");
                argv.extend(["delete".to_string(), volume.clone()]);
                argv
            }
            Operation::VolumeSet {
                volume,
                option,
                value,
            } => {
                let mut argv = self.base("volume");
                argv.extend([
                    "set".to_string(),
                    volume.clone(),
                    option.clone(),
                    value.clone(),
                ]);
                argv
            }
            Operation::VolumeSetHelp => {
                let mut argv = self.base("volume");
                argv.extend(["set".to_string(), "help-xml".to_string()]);
                argv
            }
            Operation::VolumeReset {
                volume,
                option,
                force,
            } => {
                let mut argv = self.base("volume");
                argv.extend(["reset".to_string(), volume.clone()]);
                push_opt(&mut argv, option.as_deref());
                push_force(&mut argv, *force);
                argv
            }
            Operation::VolumeAddBrick(req) => {
                let mut argv = self.base("volume");
                argv.extend(["add-brick".to_string(), req.volume.clone()]);
                push_count(&mut argv, "stripe", req.stripe_count);
                push_count(&mut argv, "replica", req.replica_count);
                argv.extend(req.bricks.iter().cloned());
                push_force(&mut argv, req.force);
                argv
            }
            Operation::RebalanceStart {
                volume,
                mode,
                force,
            } => {
                let mut argv = self.base("volume");
                argv.extend(["rebalance".to_string(), volume.clone()]);
                push_opt(&mut argv, mode.map(|m| m.as_arg()));
                argv.push("start".into());
                push_force(&mut argv, *force);
                argv
            }
            Operation::RebalanceStop { volume, force } => {
                let mut argv = self.base("volume");
                argv.extend(["rebalance".to_string(), volume.clone(), "stop".to_string()]);
                push_force(&mut argv, *force);
                argv
            }
            Operation::RebalanceStatus { volume } => {
                let mut argv = self.base("volume");
                argv.extend([
                    "rebalance".to_string(),
                    volume.clone(),
                    "status".to_string(),
                ]);
                argv
            }
            Operation::ReplaceBrick(req, action) => {
                let mut argv = self.base("volume");
                argv.extend([
                    "replace-brick".to_string(),
                    req.volume.clone(),
                    req.existing_brick.clone(),
                    req.new_brick.clone(),
                    action.as_arg().to_string(),
                ]);
                if let ReplaceBrickAction::Commit { force } = action {
                    push_force(&mut argv, *force);
                }
                argv
            }
            Operation::RemoveBrick(req, action) => {
                let mut argv = self.base("volume");
                argv.extend(["remove-brick".to_string(), req.volume.clone()]);
                push_count(&mut argv, "replica", req.replica_count);
                argv.extend(req.bricks.iter().cloned());
                argv.push(action.as_arg().to_string());
                argv
            }
            Operation::PeerProbe { host } => {
                let mut argv = self.base("peer");
                argv.extend(["probe".to_string(), host.clone()]);
                argv
            }
            Operation::PeerDetach { host, force } => {
                let mut argv = self.base("peer");
                argv.extend(["detach".to_string(), host.clone()]);
                push_force(&mut argv, *force);
                argv
            }
            Operation::PeerStatus => {
                let mut argv = self.base("peer");
                argv.push("status".into());
                argv
            }
            Operation::SystemUuid => vec![
                self.gluster.clone(),
                "system::".to_string(),
                "uuid".to_string(),
                "get".to_string(),
            ],
            Operation::ProfileStart { volume } => {
                let mut argv = self.base("volume");
                argv.extend(["profile".to_string(), volume.clone(), "start".to_string()]);
                argv
            }
            Operation::ProfileStop { volume } => {
                let mut argv = self.base("volume");
                argv.extend(["profile".to_string(), volume.clone(), "stop".to_string()]);
                argv
            }
            Operation::ProfileInfo { volume, nfs } => {
                let mut argv = self.base("volume");
                argv.extend(["profile".to_string(), volume.clone(), "info".to_string()]);
                if *nfs {
                    argv.push("nfs".into());
                }
                argv
            }
            Operation::GeoRepSession {
                session,
                action,
                force,
            } => {
                let mut argv = self.geo_rep_base();
                argv.extend([
                    session.volume.clone(),
                    session.endpoint(),
                    action.as_arg().to_string(),
                ]);
                push_force(&mut argv, *force);
                argv
            }
            Operation::GeoRepStatus {
                volume,
                remote,
                detail,
            } => {
                let mut argv = self.geo_rep_base();
                push_opt(&mut argv, volume.as_deref());
                if let Some((host, remote_volume)) = remote {
                    argv.push(remote_endpoint(host, remote_volume));
                }
                argv.push("status".into());
                if *detail {
                    argv.push("detail".into());
                }
                argv
            }
            Operation::GeoRepConfig { session, change } => {
                let mut argv = self.geo_rep_base();
                argv.extend([
                    session.volume.clone(),
                    session.endpoint(),
                    "config".to_string(),
                ]);
                match change {
                    Some(GeoRepConfigChange::Set { name, value }) => {
                        argv.extend([name.clone(), value.clone()]);
                    }
                    Some(GeoRepConfigChange::Reset { name }) => {
                        argv.push(format!("!{}", name));
                    }
                    None => {}
                }
                argv
            }
            Operation::SnapshotCreate {
                volume,
                snapshot,
                description,
                force,
            } => {
                let mut argv = self.base("snapshot");
                argv.extend(["create".to_string(), snapshot.clone(), volume.clone()]);
                if let Some(description) = description {
                    argv.extend(["description".to_string(), description.clone()]);
                }
                push_force(&mut argv, *force);
                argv
            }
            Operation::SnapshotDelete(target) => {
                let mut argv = self.base("snapshot");
                argv.push("delete".into());
                match target {
                    SnapshotDeleteTarget::Snapshot(name) => argv.push(name.clone()),
                    SnapshotDeleteTarget::Volume(volume) => {
                        argv.extend(["volume".to_string(), volume.clone()]);
                    }
                }
                argv
            }
            Operation::SnapshotActivate { snapshot, force } => {
                let mut argv = self.base("snapshot");
                argv.extend(["activate".to_string(), snapshot.clone()]);
                push_force(&mut argv, *force);
                argv
            }
            Operation::SnapshotDeactivate { snapshot } => {
                let mut argv = self.base("snapshot");
                argv.extend(["deactivate".to_string(), snapshot.clone()]);
                argv
            }
            Operation::SnapshotRestore { snapshot } => {
                let mut argv = self.base("snapshot");
                argv.extend(["restore".to_string(), snapshot.clone()]);
                argv
            }
        }
    }

    fn geo_rep_base(&self) -> Vec<String> {
        let mut argv = self.base("volume");
        argv.push("geo-replication".into());
        argv
    }
}

fn push_opt(argv: &mut Vec<String>, value: Option<&str>) {
    if let Some(value) = value {
        argv.push(value.to_string());
    }
}

// A zero count means "not requested", same as absent.
fn push_count(argv: &mut Vec<String>, keyword: &str, count: Option<u32>) {
    if let Some(count) = count.filter(|c| *c > 0) {
        argv.extend([keyword.to_string(), count.to_string()]);
    }
}

fn push_force(argv: &mut Vec<String>, force: bool) {
    if force {
        argv.push(FORCE.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CommandBuilder {
        CommandBuilder::new("/usr/sbin/gluster")
    }

    fn argv(op: Operation) -> Vec<String> {
        builder().build(&op).argv().to_vec()
    }

    fn words(s: &str) -> Vec<String> {
        s.split_whitespace().map(String::from).collect()
    }

    #[test]
    fn test_volume_create_modifier_order() {
        let req = VolumeCreateRequest::new(
            "vol1",
            vec!["h1:/b1".to_string(), "h2:/b2".to_string()],
        )
        .replica(2)
        .stripe(2)
        .transport(TransportType::Tcp)
        .transport(TransportType::Rdma)
        .force(true);

        assert_eq!(
            argv(Operation::VolumeCreate(req)),
            words(
                "/usr/sbin/gluster --mode=script volume create vol1 stripe 2 replica 2 \
                 transport tcp,rdma h1:/b1 h2:/b2 force --xml"
            )
        );
    }

    #[test]
    fn test_volume_create_minimal() {
        let req = VolumeCreateRequest::new("vol1", vec!["h1:/b1".to_string()]).replica(0);
        assert_eq!(
            argv(Operation::VolumeCreate(req)),
            words("/usr/sbin/gluster --mode=script volume create vol1 h1:/b1 --xml")
        );
    }

    #[test]
    fn test_volume_info_remote_host_before_name() {
        let op = Operation::VolumeInfo {
            volume: Some("vol1".into()),
            remote_host: Some("node2".into()),
        };
        assert_eq!(
            argv(op),
            words("/usr/sbin/gluster --mode=script volume info --remote-host=node2 vol1 --xml")
        );
    }

    #[test]
    fn test_volume_status_variants() {
        let op = Operation::VolumeStatus {
            volume: "vol1".into(),
            brick: Some("h1:/b1".into()),
            variant: StatusVariant::Detail,
        };
        assert_eq!(
            argv(op),
            words("/usr/sbin/gluster --mode=script volume status vol1 h1:/b1 detail --xml")
        );

        let op = Operation::VolumeStatus {
            volume: "vol1".into(),
            brick: None,
            variant: StatusVariant::Default,
        };
        assert_eq!(
            argv(op),
            words("/usr/sbin/gluster --mode=script volume status vol1 --xml")
        );
    }

    #[test]
    fn test_add_brick_order() {
        let op = Operation::VolumeAddBrick(AddBrickRequest {
            volume: "vol1".into(),
            bricks: vec!["h3:/b3".into()],
            stripe_count: Some(2),
            replica_count: Some(3),
            force: true,
        });
        assert_eq!(
            argv(op),
            words(
                "/usr/sbin/gluster --mode=script volume add-brick vol1 stripe 2 replica 3 \
                 h3:/b3 force --xml"
            )
        );
    }

    #[test]
    fn test_reset_option_then_force() {
        let op = Operation::VolumeReset {
            volume: "vol1".into(),
            option: Some("nfs.disable".into()),
            force: true,
        };
        assert_eq!(
            argv(op),
            words("/usr/sbin/gluster --mode=script volume reset vol1 nfs.disable force --xml")
        );
    }

    #[test]
    fn test_rebalance_mode_before_start() {
        let op = Operation::RebalanceStart {
            volume: "vol1".into(),
            mode: Some(RebalanceMode::FixLayout),
            force: true,
        };
        assert_eq!(
            argv(op),
            words("/usr/sbin/gluster --mode=script volume rebalance vol1 fix-layout start force --xml")
        );
    }

    #[test]
    fn test_remove_brick_actions() {
        let req = RemoveBrickRequest {
            volume: "vol1".into(),
            bricks: vec!["h1:/b1".into(), "h2:/b2".into()],
            replica_count: Some(2),
        };
        assert_eq!(
            argv(Operation::RemoveBrick(req.clone(), RemoveBrickAction::Start)),
            words(
                "/usr/sbin/gluster --mode=script volume remove-brick vol1 replica 2 \
                 h1:/b1 h2:/b2 start --xml"
            )
        );
        assert_eq!(
            argv(Operation::RemoveBrick(req, RemoveBrickAction::Force)),
            words(
                "/usr/sbin/gluster --mode=script volume remove-brick vol1 replica 2 \
                 h1:/b1 h2:/b2 force --xml"
            )
        );
    }

    #[test]
    fn test_replace_brick_status_is_plain() {
        let req = ReplaceBrickRequest {
            volume: "vol1".into(),
            existing_brick: "h1:/b1".into(),
            new_brick: "h2:/b1".into(),
        };
        let cmd =
            builder().build(&Operation::ReplaceBrick(req.clone(), ReplaceBrickAction::Status));
        assert_eq!(cmd.format(), OutputFormat::Plain);
        assert_eq!(
            cmd.argv(),
            words("/usr/sbin/gluster --mode=script volume replace-brick vol1 h1:/b1 h2:/b1 status")
                .as_slice()
        );

        assert_eq!(
            argv(Operation::ReplaceBrick(
                req,
                ReplaceBrickAction::Commit { force: true }
            )),
            words(
                "/usr/sbin/gluster --mode=script volume replace-brick vol1 h1:/b1 h2:/b1 \
                 commit force --xml"
            )
        );
    }

    #[test]
    fn test_peer_commands() {
        assert_eq!(
            argv(Operation::PeerDetach {
                host: "node2".into(),
                force: true
            }),
            words("/usr/sbin/gluster --mode=script peer detach node2 force --xml")
        );
        assert_eq!(
            argv(Operation::SystemUuid),
            words("/usr/sbin/gluster system:: uuid get")
        );
    }

    #[test]
    fn test_geo_rep_commands() {
        let session = GeoRepSessionRef::new("master", "host2", "remoteVol");
        assert_eq!(
            argv(Operation::GeoRepSession {
                session: session.clone(),
                action: GeoRepAction::Pause,
                force: true,
            }),
            words(
                "/usr/sbin/gluster --mode=script volume geo-replication master \
                 host2::remoteVol pause force --xml"
            )
        );
        assert_eq!(
            argv(Operation::GeoRepStatus {
                volume: Some("master".into()),
                remote: Some(("host2".into(), "remoteVol".into())),
                detail: true,
            }),
            words(
                "/usr/sbin/gluster --mode=script volume geo-replication master \
                 host2::remoteVol status detail --xml"
            )
        );
        assert_eq!(
            argv(Operation::GeoRepConfig {
                session,
                change: Some(GeoRepConfigChange::Reset {
                    name: "log-level".into()
                }),
            }),
            words(
                "/usr/sbin/gluster --mode=script volume geo-replication master \
                 host2::remoteVol config !log-level --xml"
            )
        );
    }

    #[test]
    fn test_snapshot_commands() {
        assert_eq!(
            argv(Operation::SnapshotCreate {
                volume: "vol1".into(),
                snapshot: "snap1".into(),
                description: Some("nightly".into()),
                force: true,
            }),
            words(
                "/usr/sbin/gluster --mode=script snapshot create snap1 vol1 \
                 description nightly force --xml"
            )
        );

        let cmd = builder().build(&Operation::SnapshotDelete(SnapshotDeleteTarget::Volume(
            "vol1".into(),
        )));
        assert_eq!(cmd.format(), OutputFormat::Plain);
        assert_eq!(
            cmd.argv(),
            words("/usr/sbin/gluster --mode=script snapshot delete volume vol1").as_slice()
        );
    }

    #[test]
    fn test_set_help_has_no_xml_flag() {
        let cmd = builder().build(&Operation::VolumeSetHelp);
        assert_eq!(cmd.format(), OutputFormat::Plain);
        assert_eq!(
            cmd.to_string(),
            "/usr/sbin/gluster --mode=script volume set help-xml"
        );
    }
}
