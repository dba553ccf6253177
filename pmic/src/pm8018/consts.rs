//! Fixed hardware description of the PM8018. These values must match the silicon.

pub const PM8018_CORE_DEV_NAME: &str = "pm8018-core";
pub const PM8018_REGULATOR_DEV_NAME: &str = "pm8018-regulator";

/// Payload of the debug cell.
pub const PM8018_DEBUG_DATA: &str = "pm8018-dbg";

// SSBI register addresses
pub const REG_HWREV: u16 = 0x002; // PMIC4 revision
pub const REG_HWREV_2: u16 = 0x0E8; // PMIC4 revision 2
pub const REG_MPP_BASE: u16 = 0x050;
pub const REG_RTC_BASE: u16 = 0x11D;
pub const REG_TEMP_ALARM_CTRL: u16 = 0x01B;
pub const REG_TEMP_ALARM_PWM: u16 = 0x09B;

pub const PM8018_VERSION_MASK: u16 = 0xFFF0;
pub const PM8018_VERSION_VALUE: u16 = 0x08F0;
pub const PM8018_REVISION_MASK: u16 = 0x000F;

pub const PM8018_NR_IRQS: u32 = 256;
pub const PM8018_NR_GPIOS: u32 = 6;
pub const PM8018_NR_MPPS: u32 = 6;

/// Interrupt blocks hold 8 lines each.
pub const PM8018_IRQ_BLOCK_SIZE: u32 = 8;
pub const PM8018_MPP_BLOCK_START: u32 = 16;
pub const PM8018_GPIO_BLOCK_START: u32 = 24;

/// Chip-relative interrupt number of `bit` in `block`.
pub const fn pm8018_irq_block_bit(block: u32, bit: u32) -> u32 {
    block * PM8018_IRQ_BLOCK_SIZE + bit
}

pub const PM8018_RTC_ALARM_IRQ: u32 = pm8018_irq_block_bit(4, 7);
pub const PM8018_PWRKEY_REL_IRQ: u32 = pm8018_irq_block_bit(6, 2);
pub const PM8018_PWRKEY_PRESS_IRQ: u32 = pm8018_irq_block_bit(6, 3);

const _: () = assert!(
    pm8018_irq_block_bit(PM8018_GPIO_BLOCK_START, PM8018_NR_GPIOS) <= PM8018_NR_IRQS,
    "GPIO interrupts exceed the interrupt block"
);
