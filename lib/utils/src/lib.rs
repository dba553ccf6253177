//! Small helpers shared by the PMIC crates.
#![cfg_attr(not(test), no_std)]

pub mod macros;
pub mod range;
