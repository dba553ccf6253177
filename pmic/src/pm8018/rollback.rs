//! Record of bring-up side effects and their reversal.
//!
//! Two kinds of side effects exist: the interrupt chip, and cells registered
//! with the host. [RollbackController::unwind] undoes both, cells first, and is
//! the only teardown path, whether bring-up failed halfway or a bound device is
//! being removed.
use crate::{
    dev::{
        device::Device,
        handle::Handle,
        intc::IrqChip,
        mfd::{SubcomponentSpec, SubdeviceHost},
    },
    logging::TARGET,
};
use alloc::{boxed::Box, vec::Vec};

/// A cell the host accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LedgerEntry {
    pub name: &'static str,
    pub id: Option<u32>,
}

impl From<&SubcomponentSpec<'_>> for LedgerEntry {
    fn from(spec: &SubcomponentSpec<'_>) -> Self {
        LedgerEntry {
            name: spec.name,
            id: spec.id,
        }
    }
}

/// Cells registered by the bring-up in progress, oldest first.
#[derive(Debug, Default)]
pub struct RegistrationLedger {
    entries: Vec<LedgerEntry>,
}

impl RegistrationLedger {
    pub const fn new() -> RegistrationLedger {
        RegistrationLedger {
            entries: Vec::new(),
        }
    }

    pub fn record(&mut self, cells: &[SubcomponentSpec<'_>]) {
        self.entries.extend(cells.iter().map(LedgerEntry::from));
    }

    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drain the ledger, most recent registration first.
    fn take_reversed(&mut self) -> Vec<LedgerEntry> {
        let mut entries = core::mem::take(&mut self.entries);
        entries.reverse();
        entries
    }
}

/// Owner of every side effect a bring-up performed.
#[derive(Default)]
pub struct RollbackController {
    ledger: RegistrationLedger,
    irq_chip: Option<Box<dyn IrqChip>>,
}

impl RollbackController {
    pub const fn new() -> RollbackController {
        RollbackController {
            ledger: RegistrationLedger::new(),
            irq_chip: None,
        }
    }

    pub fn ledger(&self) -> &RegistrationLedger {
        &self.ledger
    }

    pub fn irq_chip(&self) -> Option<&dyn IrqChip> {
        self.irq_chip.as_deref()
    }

    pub fn has_irq_chip(&self) -> bool {
        self.irq_chip.is_some()
    }

    /// Take ownership of a freshly initialized interrupt chip.
    pub fn adopt_irq_chip(&mut self, chip: Box<dyn IrqChip>) {
        self.irq_chip = Some(chip);
    }

    pub fn record(&mut self, cells: &[SubcomponentSpec<'_>]) {
        self.ledger.record(cells);
    }

    /// Bring-up finished: registered cells now belong to the bound device.
    pub fn commit(&mut self) {
        debug_ex!(target: TARGET, "committing {} cell(s)", self.ledger.len());
        self.ledger.entries.clear();
    }

    /// Remove every cell registered under `dev`, then release the interrupt chip.
    ///
    /// Returns the ledger entries that were outstanding, most recent first.
    /// Safe to call repeatedly: once everything is released, another call
    /// changes nothing.
    pub fn unwind(&mut self, host: &dyn SubdeviceHost, dev: &Handle<Device>) -> Vec<LedgerEntry> {
        let undone = self.ledger.take_reversed();
        debug_ex!(target: TARGET, "{}: unwinding {:?}", dev.name, undone);
        host.remove_all(dev);

        if let Some(chip) = self.irq_chip.take() {
            if let Err(err) = chip.exit() {
                log::error!(target: TARGET, "Failed to release interrupt chip: {}", err);
            }
        }
        undone
    }
}
