//! Interrupt-chip contract for the PMIC's interrupt block.
//!
//! The chip itself is provided by the platform through [IrqChipFactory]. The
//! core only creates it, queries line status on behalf of sub-drivers and
//! releases it on teardown.
use crate::dev::{device::Device, handle::Handle};
use alloc::boxed::Box;
use bitflags::bitflags;
use core::fmt::{self, Display};

bitflags! {
    /// Trigger configuration of the summary interrupt line towards the SoC.
    pub struct IrqTrigger : u32 {
        const RISING  = 0x0000_0001;
        const FALLING = 0x0000_0002;
        const HIGH    = 0x0000_0004;
        const LOW     = 0x0000_0008;
    }
}

/// Interrupt platform data handed to [IrqChipFactory::init].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrqPlatformData {
    /// First host interrupt number assigned to the chip.
    pub irq_base: u32,
    /// Summary interrupt the chip raises on the SoC.
    pub devirq: u32,
    pub irq_trigger_flag: IrqTrigger,
    /// Number of lines the chip exposes. Overwritten by the core before init.
    pub nirqs: u32,
}

/// Errors reported by the interrupt chip or its factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IrqChipError {
    /// No interrupt chip was established for this device.
    NoChip,
    /// The line lies outside the chip.
    InvalidIrq(u32),
    /// The chip could not reach its registers.
    Bus,
    /// Chip-specific failure code.
    Failed(i32),
}

impl Display for IrqChipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChip => f.write_str("no interrupt chip"),
            Self::InvalidIrq(irq) => write!(f, "invalid interrupt {}", irq),
            Self::Bus => f.write_str("interrupt chip bus error"),
            Self::Failed(code) => write!(f, "interrupt chip failed ({})", code),
        }
    }
}

impl core::error::Error for IrqChipError {}

/// An initialized interrupt chip.
pub trait IrqChip: Send + Sync {
    /// Real-time status of one chip-relative interrupt line.
    fn irq_status(&self, irq: u32) -> Result<bool, IrqChipError>;

    /// Release the chip. Consumes it, so it can only happen once.
    fn exit(self: Box<Self>) -> Result<(), IrqChipError>;
}

/// Creates interrupt chips for a PMIC device.
pub trait IrqChipFactory: Send + Sync {
    fn init(
        &self,
        dev: &Handle<Device>,
        pdata: &IrqPlatformData,
    ) -> Result<Box<dyn IrqChip>, IrqChipError>;
}
