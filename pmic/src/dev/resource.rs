//! Hardware resources attached to a cell: interrupt windows and register addresses.
use bitflags::bitflags;
use core::{fmt::Debug, ops::RangeInclusive};
use utils::range::RangeExt;

bitflags! {
    /// Kind of a [ResourceSpec].
    pub struct ResourceFlags : u32 {
        /// Register window on the control bus.
        const IO  = 0x0000_0100;
        /// Interrupt lines, relative to the interrupt chip unless already offset.
        const IRQ = 0x0000_0400;
    }
}

/// One resource of a cell, spanning `start..=end`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ResourceSpec {
    pub name: Option<&'static str>,
    pub start: u32,
    pub end: u32,
    pub flags: ResourceFlags,
}

impl ResourceSpec {
    /// A window of `count` consecutive interrupts starting at `first`.
    pub const fn irq_range(first: u32, count: u32) -> ResourceSpec {
        ResourceSpec {
            name: None,
            start: first,
            end: first + count - 1,
            flags: ResourceFlags::IRQ,
        }
    }

    /// A single interrupt line.
    pub const fn irq(irq: u32) -> ResourceSpec {
        ResourceSpec {
            name: None,
            start: irq,
            end: irq,
            flags: ResourceFlags::IRQ,
        }
    }

    /// A single named register address.
    pub const fn io(name: &'static str, addr: u32) -> ResourceSpec {
        ResourceSpec {
            name: Some(name),
            start: addr,
            end: addr,
            flags: ResourceFlags::IO,
        }
    }

    pub fn is_irq(&self) -> bool {
        self.flags.contains(ResourceFlags::IRQ)
    }

    pub fn span(&self) -> RangeInclusive<u32> {
        self.start..=self.end
    }

    /// The same resource moved to absolute interrupt numbers.
    ///
    /// I/O resources are returned unchanged. [None] if the window would run
    /// past the last interrupt number.
    pub fn offset_irq(&self, irq_base: u32) -> Option<ResourceSpec> {
        if !self.is_irq() {
            return Some(*self);
        }
        Some(ResourceSpec {
            start: self.start.checked_add(irq_base)?,
            end: self.end.checked_add(irq_base)?,
            ..*self
        })
    }

    /// Whether both resources are of the same kind and claim a common element.
    pub fn conflicts_with(&self, other: &ResourceSpec) -> bool {
        self.flags == other.flags && self.span().overlap(&other.span())
    }
}

impl Debug for ResourceSpec {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let kind = if self.is_irq() { "irq" } else { "io" };
        match self.name {
            Some(name) => f.write_fmt(format_args!(
                "{}:{}[{:#x},{:#x}]",
                kind, name, self.start, self.end
            )),
            None => f.write_fmt(format_args!("{}[{:#x},{:#x}]", kind, self.start, self.end)),
        }
    }
}
