//! Control-bus transport used to reach PMIC registers.
//!
//! Notes:
//! - Every call is blocking and atomic from the caller's point of view; the
//!   transport applies its own timeout.
//! - Errors are terminal for the operation in progress. Callers do not retry.
use core::fmt::{self, Display};

/// Failures reported by a [SsbiBus] implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusError {
    /// The transfer did not complete within the transport's timeout.
    Timeout,
    /// The controller reported a transfer error for this address.
    Transfer { addr: u16 },
    /// The requested length is not supported by the transport.
    InvalidLength { len: usize },
}

impl Display for BusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Timeout => f.write_str("bus transfer timed out"),
            Self::Transfer { addr } => write!(f, "bus transfer failed at {:#05x}", addr),
            Self::InvalidLength { len } => write!(f, "unsupported transfer length {}", len),
        }
    }
}

impl core::error::Error for BusError {}

/// Register access over the serial control bus.
///
/// Addresses are 16 bits wide; a transfer covers `buf.len()` consecutive registers.
pub trait SsbiBus: Send + Sync {
    fn read(&self, addr: u16, buf: &mut [u8]) -> Result<(), BusError>;
    fn write(&self, addr: u16, buf: &[u8]) -> Result<(), BusError>;

    /// Read one register.
    fn read_byte(&self, addr: u16) -> Result<u8, BusError> {
        let mut val = [0u8; 1];
        self.read(addr, &mut val)?;
        Ok(val[0])
    }

    /// Write one register.
    fn write_byte(&self, addr: u16, val: u8) -> Result<(), BusError> {
        self.write(addr, &[val])
    }
}
