//! Triphase Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the panel logic and
//! drivers are written against. Chip-specific HALs implement them, so the
//! core state machine and the display driver can be tested on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  triphase-firmware (dispatch loop)      │
//! └─────────────────────────────────────────┘
//!           │                     │
//!           ▼                     ▼
//! ┌──────────────────┐  ┌──────────────────┐
//! │ triphase-drivers │  │  triphase-core   │
//! └──────────────────┘  └──────────────────┘
//!           │
//!           ▼
//! ┌─────────────────────────────────────────┐
//! │  triphase-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!           │
//!           ▼
//! ┌─────────────────────────────────────────┐
//! │  triphase-hal-rp2040                    │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`i2c::I2cBus`] - I2C master writes (display expander)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;
pub mod i2c;

// Re-export key traits at crate root for convenience
pub use gpio::{InputPin, OutputPin};
pub use i2c::{I2cBus, I2cBusError, I2cConfig};
