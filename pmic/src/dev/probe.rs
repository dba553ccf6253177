//! Collaborators handed to a driver at probe time.
use crate::dev::{bus::SsbiBus, intc::IrqChipFactory, mfd::SubdeviceHost};

/// Everything a PMIC core driver needs from its environment during probe.
///
/// The bus and host stay borrowed by the bound driver until it is removed; the
/// interrupt-chip factory is only used while probing.
#[derive(Clone, Copy)]
pub struct ProbeContext<'a> {
    pub bus: &'a dyn SsbiBus,
    pub host: &'a dyn SubdeviceHost,
    pub irq_factory: &'a dyn IrqChipFactory,
}

impl<'a> ProbeContext<'a> {
    pub fn new(
        bus: &'a dyn SsbiBus,
        host: &'a dyn SubdeviceHost,
        irq_factory: &'a dyn IrqChipFactory,
    ) -> ProbeContext<'a> {
        ProbeContext {
            bus,
            host,
            irq_factory,
        }
    }
}
