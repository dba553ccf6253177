//! Ordered bring-up of the PM8018 cells.
//!
//! The interrupt chip comes first since every other cell may route interrupts
//! through it. Cells follow in a fixed order:
//! gpio, mpp, rtc, pwrkey, misc, debug and finally the regulator bank. A cell
//! whose configuration is absent is skipped; debug is always registered.
//!
//! Every side effect is handed to the [RollbackController] as soon as it
//! happens, so a failure at any point unwinds everything before returning.
use crate::{
    dev::{
        device::Device,
        handle::Handle,
        intc::{IrqChipFactory, IrqPlatformData},
        mfd::{SubcomponentSpec, SubdeviceHost},
    },
    error::ProbeError,
    logging::TARGET,
    pm8018::{
        config::Pm8018PlatformData,
        consts::PM8018_NR_IRQS,
        regulator::{CellReserve, register_regulators_with, reserve_exact},
        resources,
        rollback::RollbackController,
    },
};
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// One step of the bring-up sequence, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SubdeviceStep {
    Interrupts,
    Gpio,
    Mpp,
    Rtc,
    Pwrkey,
    Misc,
    Debug,
    Regulators,
}

impl SubdeviceStep {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Interrupts => "interrupts",
            Self::Gpio => "gpio",
            Self::Mpp => "mpp",
            Self::Rtc => "rtc",
            Self::Pwrkey => "pwrkey",
            Self::Misc => "misc",
            Self::Debug => "debug",
            Self::Regulators => "regulators",
        }
    }
}

impl Display for SubdeviceStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BringUpState {
    Init,
    InterruptsReady,
    /// The step was the last one to complete.
    Registered(SubdeviceStep),
    Complete,
    Failed(SubdeviceStep),
    Removed,
}

/// Result of a successful bring-up.
#[derive(Debug)]
pub struct BringUp<'a> {
    /// Base added to every chip-relative interrupt, 0 without an interrupt chip.
    pub irq_base: u32,
    pub regulators: Vec<SubcomponentSpec<'a>>,
}

/// Sequencer for one bring-up attempt.
pub struct SubdeviceRegistry<'r> {
    dev: &'r Handle<Device>,
    host: &'r dyn SubdeviceHost,
    rollback: &'r mut RollbackController,
    state: BringUpState,
    irq_base: u32,
    reserve: CellReserve,
}

impl<'r> SubdeviceRegistry<'r> {
    pub fn new(
        dev: &'r Handle<Device>,
        host: &'r dyn SubdeviceHost,
        rollback: &'r mut RollbackController,
    ) -> SubdeviceRegistry<'r> {
        SubdeviceRegistry {
            dev,
            host,
            rollback,
            state: BringUpState::Init,
            irq_base: 0,
            reserve: reserve_exact,
        }
    }

    #[cfg(test)]
    fn with_cell_reserve(mut self, reserve: CellReserve) -> SubdeviceRegistry<'r> {
        self.reserve = reserve;
        self
    }

    pub fn state(&self) -> BringUpState {
        self.state
    }

    /// Run every step. The ledger is left as recorded; committing it is up to
    /// the caller.
    pub fn add_subdevices<'a>(
        &mut self,
        pdata: &'a Pm8018PlatformData,
        irq_factory: &dyn IrqChipFactory,
    ) -> Result<BringUp<'a>, ProbeError> {
        match self.run_steps(pdata, irq_factory) {
            Ok(regulators) => {
                self.state = BringUpState::Complete;
                Ok(BringUp {
                    irq_base: self.irq_base,
                    regulators,
                })
            }
            Err(err) => {
                let step = err.step().unwrap_or(SubdeviceStep::Regulators);
                self.state = BringUpState::Failed(step);
                // Interrupt init failing leaves nothing behind to undo.
                if step != SubdeviceStep::Interrupts {
                    let undone = self.rollback.unwind(self.host, self.dev);
                    log::warn!(
                        target: TARGET,
                        "{} failed, unwound {} cell(s)",
                        step,
                        undone.len()
                    );
                }
                Err(err)
            }
        }
    }

    fn run_steps<'a>(
        &mut self,
        pdata: &'a Pm8018PlatformData,
        irq_factory: &dyn IrqChipFactory,
    ) -> Result<Vec<SubcomponentSpec<'a>>, ProbeError> {
        if let Some(irq) = &pdata.irq {
            self.init_interrupts(irq, irq_factory)?;
        }

        if let Some(gpio) = &pdata.gpio {
            self.register(SubdeviceStep::Gpio, &[resources::gpio_cell(gpio)])?;
        }
        if let Some(mpp) = &pdata.mpp {
            self.register(SubdeviceStep::Mpp, &[resources::mpp_cell(mpp)])?;
        }
        if let Some(rtc) = &pdata.rtc {
            self.register(SubdeviceStep::Rtc, &[resources::rtc_cell(rtc)])?;
        }
        if let Some(pwrkey) = &pdata.pwrkey {
            self.register(SubdeviceStep::Pwrkey, &[resources::pwrkey_cell(pwrkey)])?;
        }
        if let Some(misc) = &pdata.misc {
            self.register(SubdeviceStep::Misc, &[resources::misc_cell(misc)])?;
        }
        self.register(SubdeviceStep::Debug, &[resources::debug_cell()])?;

        let regulators = register_regulators_with(
            self.host,
            self.dev,
            &pdata.regulators,
            self.irq_base,
            self.reserve,
        )?;
        if !regulators.is_empty() {
            self.rollback.record(&regulators);
            self.state = BringUpState::Registered(SubdeviceStep::Regulators);
        }
        Ok(regulators)
    }

    /// Create the interrupt chip; its base applies to every later registration.
    fn init_interrupts(
        &mut self,
        irq: &IrqPlatformData,
        irq_factory: &dyn IrqChipFactory,
    ) -> Result<(), ProbeError> {
        let irq_pdata = IrqPlatformData {
            nirqs: PM8018_NR_IRQS,
            ..*irq
        };
        let chip = irq_factory.init(self.dev, &irq_pdata).map_err(|err| {
            log::error!(target: TARGET, "Failed to init interrupts: {}", err);
            ProbeError::InterruptInit(err)
        })?;
        self.rollback.adopt_irq_chip(chip);
        self.irq_base = irq_pdata.irq_base;
        self.state = BringUpState::InterruptsReady;
        Ok(())
    }

    fn register(&mut self, step: SubdeviceStep, cells: &[SubcomponentSpec<'_>]) -> Result<(), ProbeError> {
        self.host
            .add_devices(self.dev, cells, self.irq_base)
            .map_err(|cause| {
                log::error!(target: TARGET, "Failed to add {} subdevice: {}", step, cause);
                ProbeError::Registration { step, cause }
            })?;
        self.rollback.record(cells);
        self.state = BringUpState::Registered(step);
        debug_ex!(target: TARGET, "{} registered", step);
        Ok(())
    }
}
