//! Mock collaborators shared by the scenario tests.
#![allow(dead_code)]

use pmic::{
    Device, Handle,
    dev::{
        bus::{BusError, SsbiBus},
        intc::{IrqChip, IrqChipError, IrqChipFactory, IrqPlatformData},
        mfd::{DeviceTreeHost, HostError, SubcomponentSpec, SubdeviceHost},
    },
    pm8018::consts::{REG_HWREV, REG_HWREV_2},
};
use spin::Mutex;
use std::sync::Arc;

/// Register file answering the two revision registers and recording every access.
pub struct RecordingBus {
    regs: Mutex<[u8; 0x200]>,
    pub reads: Mutex<Vec<u16>>,
    pub fail_at: Option<u16>,
}

impl RecordingBus {
    pub fn new(hwrev: u8, hwrev_2: u8) -> RecordingBus {
        let mut regs = [0u8; 0x200];
        regs[REG_HWREV as usize] = hwrev;
        regs[REG_HWREV_2 as usize] = hwrev_2;
        RecordingBus {
            regs: Mutex::new(regs),
            reads: Mutex::new(Vec::new()),
            fail_at: None,
        }
    }

    /// A PM8018 rev 2.0.
    pub fn pm8018() -> RecordingBus {
        RecordingBus::new(0xF3, 0x08)
    }

    pub fn failing_at(addr: u16) -> RecordingBus {
        RecordingBus {
            fail_at: Some(addr),
            ..RecordingBus::pm8018()
        }
    }

    pub fn read_count(&self) -> usize {
        self.reads.lock().len()
    }

    pub fn reg(&self, addr: u16) -> u8 {
        self.regs.lock()[addr as usize]
    }
}

impl SsbiBus for RecordingBus {
    fn read(&self, addr: u16, buf: &mut [u8]) -> Result<(), BusError> {
        self.reads.lock().push(addr);
        if self.fail_at == Some(addr) {
            return Err(BusError::Transfer { addr });
        }
        let regs = self.regs.lock();
        let start = addr as usize;
        let src = regs
            .get(start..start + buf.len())
            .ok_or(BusError::InvalidLength { len: buf.len() })?;
        buf.copy_from_slice(src);
        Ok(())
    }

    fn write(&self, addr: u16, buf: &[u8]) -> Result<(), BusError> {
        let mut regs = self.regs.lock();
        let start = addr as usize;
        let dst = regs
            .get_mut(start..start + buf.len())
            .ok_or(BusError::InvalidLength { len: buf.len() })?;
        dst.copy_from_slice(buf);
        Ok(())
    }
}

/// One `add_devices` call as seen by the host.
#[derive(Debug, Clone, PartialEq)]
pub struct AddCall {
    pub cells: Vec<(&'static str, Option<u32>)>,
    pub irq_base: u32,
}

/// [DeviceTreeHost] wrapper counting calls and optionally refusing one cell.
#[derive(Default)]
pub struct MockHost {
    inner: DeviceTreeHost,
    pub fail_on: Option<&'static str>,
    pub adds: Mutex<Vec<AddCall>>,
    pub removals: Mutex<usize>,
}

impl MockHost {
    pub fn new() -> MockHost {
        MockHost::default()
    }

    pub fn failing_on(name: &'static str) -> MockHost {
        MockHost {
            fail_on: Some(name),
            ..MockHost::default()
        }
    }

    pub fn add_calls(&self) -> Vec<AddCall> {
        self.adds.lock().clone()
    }

    pub fn removal_count(&self) -> usize {
        *self.removals.lock()
    }

    pub fn call_count(&self) -> usize {
        self.adds.lock().len() + self.removal_count()
    }
}

impl SubdeviceHost for MockHost {
    fn add_devices(
        &self,
        parent: &Handle<Device>,
        cells: &[SubcomponentSpec<'_>],
        irq_base: u32,
    ) -> Result<(), HostError> {
        self.adds.lock().push(AddCall {
            cells: cells.iter().map(|cell| (cell.name, cell.id)).collect(),
            irq_base,
        });
        if cells.iter().any(|cell| Some(cell.name) == self.fail_on) {
            return Err(HostError::Rejected(-12));
        }
        self.inner.add_devices(parent, cells, irq_base)
    }

    fn remove_all(&self, parent: &Handle<Device>) {
        *self.removals.lock() += 1;
        self.inner.remove_all(parent)
    }
}

/// Counters shared between a [MockIrqFactory] and the chips it creates.
#[derive(Default)]
pub struct IrqCounters {
    pub inits: Mutex<Vec<IrqPlatformData>>,
    pub exits: Mutex<usize>,
}

pub struct MockIrqFactory {
    pub counters: Arc<IrqCounters>,
    pub init_error: Option<IrqChipError>,
    pub exit_error: Option<IrqChipError>,
    /// Lines reported as asserted.
    pub asserted: Vec<u32>,
}

impl MockIrqFactory {
    pub fn new() -> MockIrqFactory {
        MockIrqFactory {
            counters: Arc::new(IrqCounters::default()),
            init_error: None,
            exit_error: None,
            asserted: Vec::new(),
        }
    }

    pub fn init_count(&self) -> usize {
        self.counters.inits.lock().len()
    }

    pub fn exit_count(&self) -> usize {
        *self.counters.exits.lock()
    }
}

struct MockIrqChip {
    counters: Arc<IrqCounters>,
    nirqs: u32,
    asserted: Vec<u32>,
    exit_error: Option<IrqChipError>,
}

impl IrqChip for MockIrqChip {
    fn irq_status(&self, irq: u32) -> Result<bool, IrqChipError> {
        if irq >= self.nirqs {
            return Err(IrqChipError::InvalidIrq(irq));
        }
        Ok(self.asserted.contains(&irq))
    }

    fn exit(self: Box<Self>) -> Result<(), IrqChipError> {
        *self.counters.exits.lock() += 1;
        match self.exit_error {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl IrqChipFactory for MockIrqFactory {
    fn init(
        &self,
        _dev: &Handle<Device>,
        pdata: &IrqPlatformData,
    ) -> Result<Box<dyn IrqChip>, IrqChipError> {
        self.counters.inits.lock().push(*pdata);
        if let Some(err) = self.init_error {
            return Err(err);
        }
        Ok(Box::new(MockIrqChip {
            counters: self.counters.clone(),
            nirqs: pdata.nirqs,
            asserted: self.asserted.clone(),
            exit_error: self.exit_error,
        }))
    }
}
