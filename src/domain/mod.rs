//! Domain Layer
//!
//! Collaborator ports and the typed entities decoded from gluster responses.
//! Every entity is a detached value produced fresh per call.

pub mod cluster;
pub mod codes;
pub mod georep;
pub mod ports;
pub mod profile;
pub mod snapshot;
pub mod volume;

pub use cluster::*;
pub use codes::*;
pub use georep::*;
pub use ports::*;
pub use profile::*;
pub use snapshot::*;
pub use volume::*;
