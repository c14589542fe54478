//! Replace-Brick Status Parsing
//!
//! `replace-brick ... status` has no structured output. Only the first line
//! is classified; the full output is kept as the message.

use crate::domain::cluster::ReplaceBrickStatus;
use crate::domain::codes::MigrationStatus;

/// Classify plain-text migration status output
pub fn replace_brick_status(output: &str) -> ReplaceBrickStatus {
    let lines: Vec<&str> = output.lines().collect();
    let first = lines
        .first()
        .map(|line| line.trim().to_uppercase())
        .unwrap_or_default();

    let status = if first.contains("PAUSED") {
        MigrationStatus::Paused
    } else if first.ends_with("MIGRATION COMPLETE") {
        MigrationStatus::Completed
    } else if first.starts_with("NUMBER OF FILES MIGRATED") {
        MigrationStatus::Running
    } else if first.ends_with("UNKNOWN") {
        MigrationStatus::Unknown
    } else {
        MigrationStatus::NotAvailable
    };

    ReplaceBrickStatus {
        status,
        message: lines.join("\n"),
    }
}
