//! Definitions shared by the PM8xxx family: cell names, per-cell platform data
//! and the register/interrupt interface a core driver offers its sub-drivers.
use crate::{
    dev::{bus::BusError, intc::IrqChipError},
    pm8018::config::RegulatorPlatformData,
};

pub const PM8XXX_GPIO_DEV_NAME: &str = "pm8xxx-gpio";
pub const PM8XXX_MPP_DEV_NAME: &str = "pm8xxx-mpp";
pub const PM8XXX_RTC_DEV_NAME: &str = "rtc-pm8xxx";
pub const PM8XXX_PWRKEY_DEV_NAME: &str = "pm8xxx-pwrkey";
pub const PM8XXX_MISC_DEV_NAME: &str = "pm8xxx-misc";
pub const PM8XXX_DEBUG_DEV_NAME: &str = "pm8xxx-debug";

/// GPIO controller platform data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GpioPlatformData {
    /// First host GPIO number.
    pub gpio_base: u32,
    /// Pin count, filled in by the core.
    pub ngpios: u32,
}

/// Multi-purpose pin controller platform data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MppPlatformData {
    /// First host GPIO number used for MPPs.
    pub mpp_base: u32,
    /// Pin count, filled in by the core.
    pub nmpps: u32,
    /// First MPP control register, filled in by the core.
    pub base_addr: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RtcPlatformData {
    pub rtc_write_enable: bool,
    pub rtc_alarm_powerup: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PwrkeyPlatformData {
    pub pull_up: bool,
    /// Debounce before a press is reported.
    pub kpd_trigger_delay_us: u32,
    pub wakeup: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MiscPlatformData {
    pub priority: i32,
}

/// Configuration blob carried by a cell.
///
/// GPIO and MPP data are copies completed with chip constants; the rest borrow
/// the board configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlatformData<'a> {
    None,
    Gpio(GpioPlatformData),
    Mpp(MppPlatformData),
    Rtc(&'a RtcPlatformData),
    Pwrkey(&'a PwrkeyPlatformData),
    Misc(&'a MiscPlatformData),
    Debug(&'static str),
    Regulator(&'a RegulatorPlatformData),
}

/// Chip family detected from the revision registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pm8xxxVersion {
    Unknown,
    Pm8018,
}

/// Register and interrupt access offered by a bound PM8xxx core to its cells.
pub trait Pm8xxxCore {
    fn readb(&self, addr: u16) -> Result<u8, BusError>;
    fn writeb(&self, addr: u16, val: u8) -> Result<(), BusError>;
    fn read_buf(&self, addr: u16, buf: &mut [u8]) -> Result<(), BusError>;
    fn write_buf(&self, addr: u16, buf: &[u8]) -> Result<(), BusError>;
    fn read_irq_stat(&self, irq: u32) -> Result<bool, IrqChipError>;
    fn version(&self) -> Pm8xxxVersion;
    fn revision(&self) -> u8;
}
