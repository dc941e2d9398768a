//! Fault report from the fault-detection collaborator
//!
//! The panel never raises or clears faults itself. It stores the latest
//! report and shows it on the FAULT page and the fault LED.

use heapless::String;

/// Maximum stored message length
pub const MAX_FAULT_MESSAGE_LEN: usize = 32;

/// Message shown while no fault is active
pub const NO_FAULT_MESSAGE: &str = "No Fault";

/// Latest fault report
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FaultState {
    /// Fault flag
    pub active: bool,
    /// Short operator-facing message
    pub message: String<MAX_FAULT_MESSAGE_LEN>,
}

impl FaultState {
    /// An active fault with the given message (truncated to fit)
    pub fn new(message: &str) -> Self {
        Self {
            active: true,
            message: truncated(message),
        }
    }

    /// No fault
    pub fn cleared() -> Self {
        Self {
            active: false,
            message: truncated(NO_FAULT_MESSAGE),
        }
    }
}

impl Default for FaultState {
    fn default() -> Self {
        Self::cleared()
    }
}

fn truncated(message: &str) -> String<MAX_FAULT_MESSAGE_LEN> {
    let mut out = String::new();
    for c in message.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}
