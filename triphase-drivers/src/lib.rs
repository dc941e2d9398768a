//! Hardware driver implementations
//!
//! This crate provides concrete implementations on top of the
//! triphase-hal traits:
//!
//! - HD44780 character LCD behind a PCF8574 I2C expander
//! - Output synchronizer for the inverter control lines
//! - Indicator LED bank

#![no_std]
#![deny(unsafe_code)]

pub mod lcd;
pub mod outputs;
