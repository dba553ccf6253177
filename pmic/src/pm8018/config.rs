//! Board configuration consumed by the PM8018 core.
use crate::{
    dev::intc::IrqPlatformData,
    pm8xxx::{
        GpioPlatformData, MiscPlatformData, MppPlatformData, PwrkeyPlatformData, RtcPlatformData,
    },
};
use alloc::vec::Vec;

/// Platform data of one regulator used by the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegulatorPlatformData {
    /// Board-assigned regulator id, used as the cell instance id.
    pub id: u32,
    pub name: &'static str,
    pub min_uv: u32,
    pub max_uv: u32,
    pub pull_down_enable: bool,
    pub enable_time_us: u32,
    pub system_ua: u32,
}

/// Everything the board tells the core about this PM8018.
///
/// Each sub-component is instantiated only when its entry is present; the
/// debug cell is always instantiated.
#[derive(Debug, Clone, Default)]
pub struct Pm8018PlatformData {
    pub irq: Option<IrqPlatformData>,
    pub gpio: Option<GpioPlatformData>,
    pub mpp: Option<MppPlatformData>,
    pub rtc: Option<RtcPlatformData>,
    pub pwrkey: Option<PwrkeyPlatformData>,
    pub misc: Option<MiscPlatformData>,
    pub regulators: Vec<RegulatorPlatformData>,
}
