//! Chip identification from the two hardware revision registers.
use crate::{
    dev::bus::{BusError, SsbiBus},
    logging::TARGET,
    pm8018::consts::{
        PM8018_REVISION_MASK, PM8018_VERSION_MASK, PM8018_VERSION_VALUE, REG_HWREV, REG_HWREV_2,
    },
    pm8xxx::Pm8xxxVersion,
};
use num_enum::TryFromPrimitive;

utils::define_struct!(
    copy,
    /// `REG_HWREV` in the low byte, `REG_HWREV_2` in the high byte.
    RevisionWord,
    u16
);

impl RevisionWord {
    pub const fn compose(low: u8, high: u8) -> RevisionWord {
        RevisionWord::from_const(low as u16 | ((high as u16) << 8))
    }
}

/// Revisions of the PM8018 known to this driver, indexed by the low nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[repr(u8)]
pub enum Pm8018Revision {
    Test = 0,
    V1p0 = 1,
    V1p1 = 2,
    V2p0 = 3,
}

impl Pm8018Revision {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Test => "test",
            Self::V1p0 => "1.0",
            Self::V1p1 => "1.1",
            Self::V2p0 => "2.0",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChipIdentity {
    pub family: Pm8xxxVersion,
    /// Low nibble of the revision word.
    pub revision: u8,
}

/// Read both revision registers, low one first.
///
/// A failed read aborts immediately; no partial word is produced.
pub fn probe(bus: &dyn SsbiBus) -> Result<RevisionWord, BusError> {
    let low = bus.read_byte(REG_HWREV).inspect_err(|err| {
        log::error!(target: TARGET, "Failed to read hw rev 1 reg {:#05x}: {}", REG_HWREV, err)
    })?;
    log::info!(target: TARGET, "PMIC revision 1: {:02X}", low);

    let high = bus.read_byte(REG_HWREV_2).inspect_err(|err| {
        log::error!(target: TARGET, "Failed to read hw rev 2 reg {:#05x}: {}", REG_HWREV_2, err)
    })?;
    log::info!(target: TARGET, "PMIC revision 2: {:02X}", high);

    let word = RevisionWord::compose(low, high);
    log::info!(target: TARGET, "PMIC revision word: {:#06x}", word.into_const());
    Ok(word)
}

pub const fn identify(word: RevisionWord) -> ChipIdentity {
    let raw = word.into_const();
    let family = if raw & PM8018_VERSION_MASK == PM8018_VERSION_VALUE {
        Pm8xxxVersion::Pm8018
    } else {
        Pm8xxxVersion::Unknown
    };
    ChipIdentity {
        family,
        revision: (raw & PM8018_REVISION_MASK) as u8,
    }
}

/// Human-readable revision, `"unknown"` for indices outside the table.
pub fn revision_name(identity: ChipIdentity) -> &'static str {
    Pm8018Revision::try_from(identity.revision)
        .map(Pm8018Revision::name)
        .unwrap_or("unknown")
}
