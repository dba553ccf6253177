//! Cell descriptions for every PM8018 sub-component.
//!
//! Pure functions of the board configuration and the chip constants: nothing here
//! touches the bus or the host, and every call returns a freshly built spec.
use crate::{
    dev::{mfd::SubcomponentSpec, resource::ResourceSpec},
    pm8018::{config::RegulatorPlatformData, consts::*},
    pm8xxx::{
        GpioPlatformData, MiscPlatformData, MppPlatformData, PM8XXX_DEBUG_DEV_NAME,
        PM8XXX_GPIO_DEV_NAME, PM8XXX_MISC_DEV_NAME, PM8XXX_MPP_DEV_NAME, PM8XXX_PWRKEY_DEV_NAME,
        PM8XXX_RTC_DEV_NAME, PlatformData, PwrkeyPlatformData, RtcPlatformData,
    },
};
use alloc::{vec, vec::Vec};

/// Interrupt window covering `count` lines starting at bit 0 of `block`.
pub const fn irq_block(block: u32, count: u32) -> ResourceSpec {
    ResourceSpec::irq_range(pm8018_irq_block_bit(block, 0), count)
}

pub fn gpio_resources() -> Vec<ResourceSpec> {
    vec![irq_block(PM8018_GPIO_BLOCK_START, PM8018_NR_GPIOS)]
}

pub fn mpp_resources() -> Vec<ResourceSpec> {
    vec![irq_block(PM8018_MPP_BLOCK_START, PM8018_NR_MPPS)]
}

pub fn rtc_resources() -> Vec<ResourceSpec> {
    vec![
        ResourceSpec::irq(PM8018_RTC_ALARM_IRQ),
        ResourceSpec::io("pmic_rtc_base", REG_RTC_BASE as u32),
    ]
}

/// Release comes first: the power-key driver takes resource 0 as the release
/// interrupt and resource 1 as the press interrupt.
pub fn pwrkey_resources() -> Vec<ResourceSpec> {
    vec![
        ResourceSpec::irq(PM8018_PWRKEY_REL_IRQ),
        ResourceSpec::irq(PM8018_PWRKEY_PRESS_IRQ),
    ]
}

pub fn gpio_cell(pdata: &GpioPlatformData) -> SubcomponentSpec<'static> {
    SubcomponentSpec {
        name: PM8XXX_GPIO_DEV_NAME,
        id: None,
        resources: gpio_resources(),
        platform_data: PlatformData::Gpio(GpioPlatformData {
            ngpios: PM8018_NR_GPIOS,
            ..*pdata
        }),
    }
}

pub fn mpp_cell(pdata: &MppPlatformData) -> SubcomponentSpec<'static> {
    SubcomponentSpec {
        name: PM8XXX_MPP_DEV_NAME,
        id: None,
        resources: mpp_resources(),
        platform_data: PlatformData::Mpp(MppPlatformData {
            nmpps: PM8018_NR_MPPS,
            base_addr: REG_MPP_BASE,
            ..*pdata
        }),
    }
}

pub fn rtc_cell(pdata: &RtcPlatformData) -> SubcomponentSpec<'_> {
    SubcomponentSpec {
        name: PM8XXX_RTC_DEV_NAME,
        id: None,
        resources: rtc_resources(),
        platform_data: PlatformData::Rtc(pdata),
    }
}

pub fn pwrkey_cell(pdata: &PwrkeyPlatformData) -> SubcomponentSpec<'_> {
    SubcomponentSpec {
        name: PM8XXX_PWRKEY_DEV_NAME,
        id: None,
        resources: pwrkey_resources(),
        platform_data: PlatformData::Pwrkey(pdata),
    }
}

pub fn misc_cell(pdata: &MiscPlatformData) -> SubcomponentSpec<'_> {
    SubcomponentSpec {
        name: PM8XXX_MISC_DEV_NAME,
        id: None,
        resources: Vec::new(),
        platform_data: PlatformData::Misc(pdata),
    }
}

pub fn debug_cell() -> SubcomponentSpec<'static> {
    SubcomponentSpec {
        name: PM8XXX_DEBUG_DEV_NAME,
        id: None,
        resources: Vec::new(),
        platform_data: PlatformData::Debug(PM8018_DEBUG_DATA),
    }
}

/// One regulator instance; keeps the board's id and borrows its data.
pub fn regulator_cell(pdata: &RegulatorPlatformData) -> SubcomponentSpec<'_> {
    SubcomponentSpec {
        name: PM8018_REGULATOR_DEV_NAME,
        id: Some(pdata.id),
        resources: Vec::new(),
        platform_data: PlatformData::Regulator(pdata),
    }
}
