//! Errors returned when binding the PMIC core.
use crate::{
    dev::{bus::BusError, intc::IrqChipError, mfd::HostError},
    pm8018::registry::SubdeviceStep,
};
use core::fmt::{self, Display};

/// Why [probe](crate::pm8018::Pm8018::probe) did not bind.
///
/// Except for [ProbeError::Bus] and [ProbeError::ConfigurationMissing], which
/// happen before anything is set up, every variant is returned after the
/// partial bring-up has been unwound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeError {
    /// Reading the revision registers failed.
    Bus(BusError),
    /// The board provided no platform data.
    ConfigurationMissing,
    /// No memory for the regulator cells.
    AllocationFailure { count: usize },
    /// The host refused the cells of `step`.
    Registration {
        step: SubdeviceStep,
        cause: HostError,
    },
    InterruptInit(IrqChipError),
}

impl ProbeError {
    /// Bring-up step the error comes from, if bring-up had started.
    pub fn step(&self) -> Option<SubdeviceStep> {
        match self {
            Self::Bus(_) | Self::ConfigurationMissing => None,
            Self::AllocationFailure { .. } => Some(SubdeviceStep::Regulators),
            Self::Registration { step, .. } => Some(*step),
            Self::InterruptInit(_) => Some(SubdeviceStep::Interrupts),
        }
    }
}

impl Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(err) => write!(f, "revision read failed: {}", err),
            Self::ConfigurationMissing => f.write_str("no platform data"),
            Self::AllocationFailure { count } => {
                write!(f, "cannot allocate {} regulator cell(s)", count)
            }
            Self::Registration { step, cause } => {
                write!(f, "failed to add {} subdevice: {}", step, cause)
            }
            Self::InterruptInit(err) => write!(f, "failed to init interrupts: {}", err),
        }
    }
}

impl core::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Bus(err) => Some(err),
            Self::Registration { cause, .. } => Some(cause),
            Self::InterruptInit(err) => Some(err),
            Self::ConfigurationMissing | Self::AllocationFailure { .. } => None,
        }
    }
}

impl From<BusError> for ProbeError {
    fn from(err: BusError) -> Self {
        ProbeError::Bus(err)
    }
}
