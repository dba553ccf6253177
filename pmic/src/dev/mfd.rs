//! Cells of a multi-function device and the host primitive that instantiates them.
//!
//! A [SubcomponentSpec] describes one logical function of the chip. The host
//! turns accepted specs into child [Device] nodes of the chip's own node:
//! - [SubdeviceHost::add_devices] takes one or many specs and either commits all
//!   of them or none;
//! - [SubdeviceHost::remove_all] drops everything registered under a parent, so
//!   teardown never needs to track individual cells.
use crate::{
    dev::{device::Device, handle::Handle, resource::ResourceSpec},
    logging::TARGET,
    pm8xxx::PlatformData,
};
use alloc::vec::Vec;
use core::fmt::{self, Display};

/// One logical sub-component to register. Built fresh for every bring-up.
#[derive(Debug, Clone, PartialEq)]
pub struct SubcomponentSpec<'a> {
    pub name: &'static str,
    /// Instance id, [None] for single-instance cells.
    pub id: Option<u32>,
    pub resources: Vec<ResourceSpec>,
    pub platform_data: PlatformData<'a>,
}

/// Reasons a host refuses a batch of cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostError {
    /// A cell with the same name and id already exists under the parent.
    Duplicate { name: &'static str, id: Option<u32> },
    /// A resource of the cell is already claimed by a sibling.
    ResourceBusy { name: &'static str },
    /// The cell description is unusable.
    Invalid,
    /// The host ran out of memory while staging the batch.
    NoMemory,
    /// Host-specific failure code.
    Rejected(i32),
}

impl Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate { name, id: Some(id) } => write!(f, "{}.{} already registered", name, id),
            Self::Duplicate { name, id: None } => write!(f, "{} already registered", name),
            Self::ResourceBusy { name } => write!(f, "resources of {} are busy", name),
            Self::Invalid => f.write_str("invalid cell description"),
            Self::NoMemory => f.write_str("out of memory"),
            Self::Rejected(code) => write!(f, "rejected by host ({})", code),
        }
    }
}

impl core::error::Error for HostError {}

/// Host registration primitive.
pub trait SubdeviceHost: Send + Sync {
    /// Instantiate `cells` under `parent`, moving interrupt resources by `irq_base`.
    ///
    /// The batch is committed entirely or rejected entirely.
    fn add_devices(
        &self,
        parent: &Handle<Device>,
        cells: &[SubcomponentSpec<'_>],
        irq_base: u32,
    ) -> Result<(), HostError>;

    /// Remove every cell registered under `parent`.
    fn remove_all(&self, parent: &Handle<Device>);
}

/// [SubdeviceHost] that records cells as children in the [Device] tree.
#[derive(Debug, Default)]
pub struct DeviceTreeHost;

impl DeviceTreeHost {
    pub const fn new() -> DeviceTreeHost {
        DeviceTreeHost
    }
}

impl SubdeviceHost for DeviceTreeHost {
    fn add_devices(
        &self,
        parent: &Handle<Device>,
        cells: &[SubcomponentSpec<'_>],
        irq_base: u32,
    ) -> Result<(), HostError> {
        let mut children = parent.child.write();
        let mut staged: Vec<Handle<Device>> = Vec::new();
        staged
            .try_reserve_exact(cells.len())
            .map_err(|_| HostError::NoMemory)?;

        for cell in cells {
            if cell.name.is_empty() {
                return Err(HostError::Invalid);
            }
            let resources: Vec<ResourceSpec> = cell
                .resources
                .iter()
                .map(|res| res.offset_irq(irq_base))
                .collect::<Option<_>>()
                .ok_or(HostError::Invalid)?;
            for dev in children.iter().chain(staged.iter()) {
                if dev.name.as_ref() == cell.name && dev.id == cell.id {
                    return Err(HostError::Duplicate {
                        name: cell.name,
                        id: cell.id,
                    });
                }
                let busy = dev
                    .resources
                    .iter()
                    .any(|claimed| resources.iter().any(|res| res.conflicts_with(claimed)));
                if busy {
                    return Err(HostError::ResourceBusy { name: cell.name });
                }
            }
            staged.push(Device::new_child(parent, cell.name, cell.id, resources));
        }

        debug_ex!(
            target: TARGET,
            "{}: added {} cell(s) at irq base {}",
            parent.name,
            staged.len(),
            irq_base
        );
        children.extend(staged);
        Ok(())
    }

    fn remove_all(&self, parent: &Handle<Device>) {
        let removed = core::mem::take(&mut *parent.child.write());
        debug_ex!(target: TARGET, "{}: removed {} cell(s)", parent.name, removed.len());
        drop(removed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn cell(name: &'static str, id: Option<u32>, resources: Vec<ResourceSpec>) -> SubcomponentSpec<'static> {
        SubcomponentSpec {
            name,
            id,
            resources,
            platform_data: PlatformData::None,
        }
    }

    #[test]
    fn interrupts_are_offset_by_base() {
        let root = Device::new_root("pm8018-core");
        let host = DeviceTreeHost::new();
        let rtc = cell(
            "rtc-pm8xxx",
            None,
            vec![ResourceSpec::irq(39), ResourceSpec::io("pmic_rtc_base", 0x11D)],
        );
        host.add_devices(&root, &[rtc], 64).unwrap();

        let child = root.find_child("rtc-pm8xxx", None).unwrap();
        assert_eq!(child.resources[0], ResourceSpec::irq(103));
        assert_eq!(child.resources[1], ResourceSpec::io("pmic_rtc_base", 0x11D));
    }

    #[test]
    fn duplicate_in_batch_rejects_everything() {
        let root = Device::new_root("pm8018-core");
        let host = DeviceTreeHost::new();
        let batch = [
            cell("pm8018-regulator", Some(1), vec![]),
            cell("pm8018-regulator", Some(2), vec![]),
            cell("pm8018-regulator", Some(1), vec![]),
        ];
        assert_eq!(
            host.add_devices(&root, &batch, 0),
            Err(HostError::Duplicate {
                name: "pm8018-regulator",
                id: Some(1)
            })
        );
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn overlapping_interrupts_are_busy() {
        let root = Device::new_root("pm8018-core");
        let host = DeviceTreeHost::new();
        host.add_devices(&root, &[cell("a", None, vec![ResourceSpec::irq_range(0, 8)])], 0)
            .unwrap();
        assert_eq!(
            host.add_devices(&root, &[cell("b", None, vec![ResourceSpec::irq(7)])], 0),
            Err(HostError::ResourceBusy { name: "b" })
        );
        host.add_devices(&root, &[cell("b", None, vec![ResourceSpec::irq(7)])], 8)
            .unwrap();
        assert_eq!(root.child_count(), 2);
    }

    #[test]
    fn remove_all_clears_children() {
        let root = Device::new_root("pm8018-core");
        let host = DeviceTreeHost::new();
        host.add_devices(&root, &[cell("a", None, vec![]), cell("b", None, vec![])], 0)
            .unwrap();
        host.remove_all(&root);
        assert_eq!(root.child_count(), 0);
        host.remove_all(&root);
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn interrupts_past_the_last_number_are_invalid() {
        let root = Device::new_root("pm8018-core");
        let host = DeviceTreeHost::new();
        let batch = [
            cell("pm8xxx-debug", None, vec![]),
            cell("pm8xxx-gpio", None, vec![ResourceSpec::irq_range(192, 6)]),
        ];
        assert_eq!(
            host.add_devices(&root, &batch, u32::MAX - 100),
            Err(HostError::Invalid)
        );
        assert_eq!(root.child_count(), 0);
    }

    #[test]
    fn unnamed_cell_is_invalid() {
        let root = Device::new_root("pm8018-core");
        assert_eq!(
            DeviceTreeHost::new().add_devices(&root, &[cell("", None, vec![])], 0),
            Err(HostError::Invalid)
        );
    }
}
