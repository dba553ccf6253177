//! Core driver for the Qualcomm PM8018 power-management IC.
//!
//! The chip sits on an SSBI control bus and hosts several functions (GPIO, MPP,
//! RTC, power key, misc control, regulators). This crate identifies the chip
//! and instantiates those functions as cells under the chip's [Device] node;
//! the cell drivers themselves live elsewhere.
//!
//! Collaborators are supplied by the platform through [ProbeContext]: the bus
//! transport, the interrupt-chip factory and the registration host.
#![cfg_attr(not(test), no_std)]

extern crate alloc;

#[macro_use]
pub mod logging;

pub mod dev;
pub mod error;
pub mod pm8018;
pub mod pm8xxx;

pub use dev::{Device, Handle, HandleRef, probe::ProbeContext};
pub use error::ProbeError;
pub use pm8018::Pm8018;
