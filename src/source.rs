//! Boundary traits for the excluded collaborators.

use activa_types::Snapshot;

/// Supplies one consistent read snapshot per report invocation. The
/// reporting engine issues no writes and holds no connection of its own.
pub trait SnapshotSource {
    type Error;

    fn snapshot(&self) -> Result<Snapshot, Self::Error>;
}

/// Periodic hook the scheduler collaborator invokes for reminder and
/// obsolescence passes. The reporting core never reads the wall clock for
/// scheduling; it only reacts when triggered.
pub trait ReminderTrigger {
    fn run_reminder_pass(&self);
}
