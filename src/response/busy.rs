//! Transient-Failure Classifier
//!
//! The daemon serializes administrative operations cluster-wide and reports
//! a concurrent one with a fixed phrase that is not guaranteed to arrive
//! inside a well-formed envelope, so the check runs on raw text.

/// Lower-cased marker emitted while another operation holds the cluster lock
pub const BUSY_MARKER: &str = "another transaction is in progress";

/// Whether the combined output carries the busy marker (case-insensitive)
pub fn is_busy(stdout: &str, stderr: &str) -> bool {
    let mut combined = String::with_capacity(stdout.len() + stderr.len());
    combined.push_str(stdout);
    combined.push_str(stderr);
    combined.to_lowercase().contains(BUSY_MARKER)
}
