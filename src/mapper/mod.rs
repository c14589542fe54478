//! Entity Mappers
//!
//! Pure functions from a decoded response tree (or raw text, for the two
//! commands without structured output) to domain entities.

pub mod cluster;
pub mod georep;
pub mod profile;
pub mod replace_brick;
pub mod snapshot;
pub mod status;
pub mod volume;

pub use cluster::{
    async_task_status, local_uuid, peer_status, task_id, volume_tasks, AsyncTaskKind,
    StartedTask,
};
pub use georep::{geo_rep_config, geo_rep_status};
pub use profile::profile_info;
pub use replace_brick::replace_brick_status;
pub use snapshot::{snapshot_created, snapshot_restore};
pub use status::{
    format_size_gib, volume_status, volume_status_clients, volume_status_detail,
    volume_status_mem,
};
pub use volume::{volume_created, volume_info, volume_option_help};
