//! Inter-task communication channels
//!
//! The panel loop runs as a single task; these statics are the seam for
//! collaborators outside it.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;

use triphase_core::fault::FaultState;

/// Latest fault report from the fault-detection collaborator
///
/// Only the most recent report matters, so a signal (overwrite) rather
/// than a queue.
pub static FAULT_REPORT: Signal<CriticalSectionRawMutex, FaultState> = Signal::new();
