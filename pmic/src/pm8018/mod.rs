//! PM8018 core driver.
//!
//! Binding a [Pm8018] identifies the chip, brings up its interrupt block and
//! registers one cell per configured sub-component. The handle then serves
//! register and interrupt-status access to the cell drivers until it is
//! removed or dropped, which releases everything again.
pub mod config;
pub mod consts;
pub mod registry;
pub mod regulator;
pub mod resources;
pub mod revision;
pub mod rollback;

use crate::{
    dev::{
        bus::{BusError, SsbiBus},
        device::Device,
        handle::Handle,
        intc::IrqChipError,
        mfd::{SubcomponentSpec, SubdeviceHost},
        probe::ProbeContext,
    },
    error::ProbeError,
    logging::TARGET,
    pm8xxx::{Pm8xxxCore, Pm8xxxVersion},
};
use alloc::vec::Vec;
use config::Pm8018PlatformData;
use registry::{BringUpState, SubdeviceRegistry};
use revision::{ChipIdentity, RevisionWord};
use rollback::{RegistrationLedger, RollbackController};

/// A bound PM8018.
pub struct Pm8018<'a> {
    dev: Handle<Device>,
    bus: &'a dyn SsbiBus,
    host: &'a dyn SubdeviceHost,
    rev_registers: RevisionWord,
    irq_base: u32,
    rollback: RollbackController,
    regulators: Vec<SubcomponentSpec<'a>>,
    state: BringUpState,
}

impl<'a> Pm8018<'a> {
    /// Bind the core to `dev`.
    ///
    /// Nothing is touched without platform data. A chip whose revision does not
    /// match the PM8018 is reported but still brought up.
    pub fn probe(
        dev: Handle<Device>,
        pdata: Option<&'a Pm8018PlatformData>,
        ctx: ProbeContext<'a>,
    ) -> Result<Pm8018<'a>, ProbeError> {
        let Some(pdata) = pdata else {
            log::error!(target: TARGET, "{}: missing platform data", dev.name);
            return Err(ProbeError::ConfigurationMissing);
        };

        let rev_registers = revision::probe(ctx.bus)?;
        let identity = revision::identify(rev_registers);
        let rev_name = revision::revision_name(identity);
        match identity.family {
            Pm8xxxVersion::Pm8018 => {
                log::info!(target: TARGET, "PMIC version: PM8018 rev {}", rev_name)
            }
            Pm8xxxVersion::Unknown => log::warn!(
                target: TARGET,
                "PMIC version: unknown ({:#06x}), rev {}",
                rev_registers.into_const(),
                rev_name
            ),
        }

        let mut rollback = RollbackController::new();
        let bring_up = SubdeviceRegistry::new(&dev, ctx.host, &mut rollback)
            .add_subdevices(pdata, ctx.irq_factory)
            .inspect_err(|err| {
                log::error!(target: TARGET, "{}: failed to add subdevices: {}", dev.name, err)
            })?;

        if !rollback.has_irq_chip() {
            log::warn!(
                target: TARGET,
                "{}: no interrupt chip, gpio might not work",
                dev.name
            );
        }
        rollback.commit();

        Ok(Pm8018 {
            dev,
            bus: ctx.bus,
            host: ctx.host,
            rev_registers,
            irq_base: bring_up.irq_base,
            rollback,
            regulators: bring_up.regulators,
            state: BringUpState::Complete,
        })
    }

    /// Unbind: drop every cell, then release the interrupt chip.
    pub fn remove(mut self) {
        self.teardown();
    }

    fn teardown(&mut self) {
        if self.state == BringUpState::Removed {
            return;
        }
        self.rollback.unwind(self.host, &self.dev);
        self.regulators.clear();
        self.state = BringUpState::Removed;
        log::info!(target: TARGET, "{}: removed", self.dev.name);
    }

    pub fn device(&self) -> &Handle<Device> {
        &self.dev
    }

    pub fn identity(&self) -> ChipIdentity {
        revision::identify(self.rev_registers)
    }

    pub fn revision_word(&self) -> RevisionWord {
        self.rev_registers
    }

    pub fn state(&self) -> BringUpState {
        self.state
    }

    pub fn irq_base(&self) -> u32 {
        self.irq_base
    }

    /// Registered regulator cells, in board order.
    pub fn regulators(&self) -> &[SubcomponentSpec<'a>] {
        &self.regulators
    }

    pub fn ledger(&self) -> &RegistrationLedger {
        self.rollback.ledger()
    }

    pub fn has_irq_chip(&self) -> bool {
        self.rollback.has_irq_chip()
    }
}

impl Drop for Pm8018<'_> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl Pm8xxxCore for Pm8018<'_> {
    fn readb(&self, addr: u16) -> Result<u8, BusError> {
        self.bus.read_byte(addr)
    }

    fn writeb(&self, addr: u16, val: u8) -> Result<(), BusError> {
        self.bus.write_byte(addr, val)
    }

    fn read_buf(&self, addr: u16, buf: &mut [u8]) -> Result<(), BusError> {
        self.bus.read(addr, buf)
    }

    fn write_buf(&self, addr: u16, buf: &[u8]) -> Result<(), BusError> {
        self.bus.write(addr, buf)
    }

    fn read_irq_stat(&self, irq: u32) -> Result<bool, IrqChipError> {
        self.rollback
            .irq_chip()
            .ok_or(IrqChipError::NoChip)?
            .irq_status(irq)
    }

    fn version(&self) -> Pm8xxxVersion {
        self.identity().family
    }

    fn revision(&self) -> u8 {
        self.identity().revision
    }
}
