//! Command Synthesis and Execution
//!
//! - Builder: typed operations to gluster argument vectors
//! - Executor: runs them as local processes
//! - Scripted: replays canned outputs

pub mod builder;
pub mod executor;
pub mod scripted;

pub use builder::*;
pub use executor::*;
pub use scripted::*;
