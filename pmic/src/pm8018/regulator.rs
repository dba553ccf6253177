//! The regulator bank: a variable number of identical cells registered as one batch.
use crate::{
    dev::{
        device::Device,
        handle::Handle,
        mfd::{SubcomponentSpec, SubdeviceHost},
    },
    error::ProbeError,
    logging::TARGET,
    pm8018::{config::RegulatorPlatformData, registry::SubdeviceStep, resources::regulator_cell},
};
use alloc::{collections::TryReserveError, vec::Vec};

/// Reserves room for `count` more cells before any of them is built.
pub type CellReserve =
    for<'c> fn(&mut Vec<SubcomponentSpec<'c>>, usize) -> Result<(), TryReserveError>;

/// Default [CellReserve]: exactly `count` slots from the global allocator.
pub fn reserve_exact(cells: &mut Vec<SubcomponentSpec<'_>>, count: usize) -> Result<(), TryReserveError> {
    cells.try_reserve_exact(count)
}

/// Register one cell per entry of `configs` with a single host call.
///
/// On success the returned specs belong to the caller for as long as the cells
/// stay registered. On failure nothing is registered and nothing is kept.
pub fn register_regulators<'a>(
    host: &dyn SubdeviceHost,
    dev: &Handle<Device>,
    configs: &'a [RegulatorPlatformData],
    irq_base: u32,
) -> Result<Vec<SubcomponentSpec<'a>>, ProbeError> {
    register_regulators_with(host, dev, configs, irq_base, reserve_exact)
}

/// [register_regulators] with the cell array reserved through `reserve`.
pub fn register_regulators_with<'a>(
    host: &dyn SubdeviceHost,
    dev: &Handle<Device>,
    configs: &'a [RegulatorPlatformData],
    irq_base: u32,
    reserve: CellReserve,
) -> Result<Vec<SubcomponentSpec<'a>>, ProbeError> {
    if configs.is_empty() {
        return Ok(Vec::new());
    }

    let count = configs.len();
    let mut cells = Vec::new();
    reserve(&mut cells, count).map_err(|_| {
        log::error!(target: TARGET, "Failed to allocate {} regulator cell(s)", count);
        ProbeError::AllocationFailure { count }
    })?;
    cells.extend(configs.iter().map(regulator_cell));

    host.add_devices(dev, &cells, irq_base).map_err(|cause| {
        log::error!(target: TARGET, "Failed to add regulator subdevices: {}", cause);
        ProbeError::Registration {
            step: SubdeviceStep::Regulators,
            cause,
        }
    })?;
    debug_ex!(target: TARGET, "registered {} regulator(s)", count);
    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        dev::mfd::{DeviceTreeHost, HostError},
        pm8xxx::PlatformData,
    };
    use alloc::vec;

    fn regulator(id: u32, name: &'static str) -> RegulatorPlatformData {
        RegulatorPlatformData {
            id,
            name,
            min_uv: 1_050_000,
            max_uv: 1_300_000,
            ..Default::default()
        }
    }

    struct NoCalls;

    impl SubdeviceHost for NoCalls {
        fn add_devices(
            &self,
            _: &Handle<Device>,
            _: &[SubcomponentSpec<'_>],
            _: u32,
        ) -> Result<(), HostError> {
            panic!("unexpected registration");
        }

        fn remove_all(&self, _: &Handle<Device>) {
            panic!("unexpected removal");
        }
    }

    fn exhausted(cells: &mut Vec<SubcomponentSpec<'_>>, _count: usize) -> Result<(), TryReserveError> {
        cells.try_reserve_exact(usize::MAX)
    }

    #[test]
    fn allocation_failure_skips_the_host() {
        let configs = vec![regulator(1, "8018_l1"), regulator(2, "8018_l2")];
        let dev = Device::new_root("pm8018-core");
        let err = register_regulators_with(&NoCalls, &dev, &configs, 0, exhausted).unwrap_err();

        assert_eq!(err, ProbeError::AllocationFailure { count: 2 });
        assert_eq!(err.step(), Some(SubdeviceStep::Regulators));
    }

    #[test]
    fn empty_bank_skips_the_host() {
        let dev = Device::new_root("pm8018-core");
        assert!(register_regulators(&NoCalls, &dev, &[], 0).unwrap().is_empty());
    }

    #[test]
    fn ids_and_data_are_preserved() {
        let configs = vec![regulator(7, "8018_s1"), regulator(2, "8018_l2"), regulator(11, "8018_l9")];
        let dev = Device::new_root("pm8018-core");
        let cells = register_regulators(&DeviceTreeHost::new(), &dev, &configs, 0).unwrap();

        assert_eq!(cells.len(), 3);
        for (cell, config) in cells.iter().zip(&configs) {
            assert_eq!(cell.name, "pm8018-regulator");
            assert_eq!(cell.id, Some(config.id));
            match cell.platform_data {
                PlatformData::Regulator(data) => assert!(core::ptr::eq(data, config)),
                other => panic!("unexpected platform data {:?}", other),
            }
        }
        assert_eq!(dev.child_count(), 3);
    }

    #[test]
    fn rejected_batch_leaves_nothing_behind() {
        let configs = vec![regulator(1, "8018_l1"), regulator(1, "8018_l1_dup")];
        let dev = Device::new_root("pm8018-core");
        let err = register_regulators(&DeviceTreeHost::new(), &dev, &configs, 0).unwrap_err();

        assert_eq!(
            err,
            ProbeError::Registration {
                step: SubdeviceStep::Regulators,
                cause: HostError::Duplicate {
                    name: "pm8018-regulator",
                    id: Some(1)
                },
            }
        );
        assert_eq!(dev.child_count(), 0);
    }
}
