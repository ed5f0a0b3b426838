//! # Memory-Mapped Register Access
//!
//! Raw 32-bit register access to the board's peripheral window.
//!
//! ## Overview
//!
//! Peripherals on the supported boards sit behind a single contiguous MMIO
//! window whose physical base depends on the silicon revision. This crate
//! resolves that base once from the firmware-reported board variant and hands
//! out an [`Mmio`] handle; every register load and store goes through the
//! handle rather than through hidden process-wide state, so driver code stays
//! composable and unit-testable.
//!
//! The handle is generic over a [`RegisterBus`]. On hardware that bus is
//! [`PhysBus`], which turns each access into one volatile 32-bit load or
//! store; tests substitute an array-backed bus and never touch device memory.
//!
//! ## Access contract
//!
//! There is no error channel and no bounds checking: an offset that does not
//! name a device register is a caller contract violation with undefined
//! hardware behavior, exactly like a stray port write. Volatility is the only
//! guarantee this layer adds — accesses are never elided, cached, or
//! reordered by the compiler.
//!
//! ## Boot-time sequencing
//!
//! The kernel's own instance lives in a [`GlobalMmio`]: set exactly once
//! during early boot, before interrupts are enabled, and immutable from then
//! on. Because the single initialization happens before any concurrent
//! access, the cell needs no locking.

#![cfg_attr(not(any(test, doctest)), no_std)]
#![allow(unsafe_code)]

mod board;
mod bus;
mod global;

pub use board::{BoardVariant, PeripheralBase};
pub use bus::{PhysBus, RegisterBus};
pub use global::GlobalMmio;

/// Handle for 32-bit register access relative to a peripheral base.
///
/// Produced by [`Mmio::init`] (hardware) or [`Mmio::with_bus`] (any bus,
/// used by tests). Copyable and immutable: a handle never changes its base
/// after construction.
#[derive(Debug, Copy, Clone)]
pub struct Mmio<B = PhysBus> {
    base: PeripheralBase,
    bus: B,
}

impl Mmio<PhysBus> {
    /// Resolve the peripheral base for `variant` and return a hardware
    /// handle.
    ///
    /// Call once during early boot, before interrupts are enabled and before
    /// any register access.
    ///
    /// # Safety
    /// The caller must guarantee that the peripheral window of `variant` is
    /// identity-accessible from the current address space and that this
    /// kernel is actually running on that board.
    #[must_use]
    pub unsafe fn init(variant: BoardVariant) -> Self {
        // SAFETY: forwarded to the caller; PhysBus carries the same contract.
        Self::with_bus(variant, unsafe { PhysBus::new() })
    }
}

impl<B> Mmio<B>
where
    B: RegisterBus,
{
    /// Build a handle over an explicit bus.
    #[must_use]
    pub const fn with_bus(variant: BoardVariant, bus: B) -> Self {
        Self {
            base: variant.peripheral_base(),
            bus,
        }
    }

    /// The resolved peripheral base address.
    #[must_use]
    pub const fn base(&self) -> PeripheralBase {
        self.base
    }

    /// One 32-bit volatile store at `base + offset`.
    ///
    /// `offset` must name a writable device register; anything else is
    /// undefined hardware behavior.
    #[inline]
    pub fn write(&self, offset: u32, value: u32) {
        self.bus.store32(self.base.register(offset), value);
    }

    /// One 32-bit volatile load at `base + offset`.
    ///
    /// `offset` must name a readable device register; anything else is
    /// undefined hardware behavior.
    #[inline]
    #[must_use]
    pub fn read(&self, offset: u32) -> u32 {
        self.bus.load32(self.base.register(offset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::RefCell;
    use std::collections::HashMap;

    /// Array-of-registers stand-in for the peripheral window.
    struct FakeBus {
        cells: RefCell<HashMap<u64, u32>>,
    }

    impl FakeBus {
        fn new() -> Self {
            Self {
                cells: RefCell::new(HashMap::new()),
            }
        }
    }

    // SAFETY: all accesses land in the owned map; no device memory involved.
    unsafe impl RegisterBus for FakeBus {
        fn load32(&self, addr: u64) -> u32 {
            self.cells.borrow().get(&addr).copied().unwrap_or(0)
        }

        fn store32(&self, addr: u64, value: u32) {
            self.cells.borrow_mut().insert(addr, value);
        }
    }

    #[test]
    fn write_then_read_round_trips() {
        let mmio = Mmio::with_bus(BoardVariant::from_raw(3), FakeBus::new());
        assert_eq!(mmio.base().as_u64(), 0x3F00_0000);

        mmio.write(0x10, 0xDEAD_BEEF);
        assert_eq!(mmio.read(0x10), 0xDEAD_BEEF);
    }

    #[test]
    fn distinct_offsets_are_distinct_registers() {
        let mmio = Mmio::with_bus(BoardVariant::from_raw(4), FakeBus::new());

        mmio.write(0x00, 1);
        mmio.write(0x04, 2);
        assert_eq!(mmio.read(0x00), 1);
        assert_eq!(mmio.read(0x04), 2);
    }

    #[test]
    fn accesses_are_base_relative() {
        let bus = FakeBus::new();
        bus.store32(0x3F00_0210, 0xCAFE_F00D);

        let mmio = Mmio::with_bus(BoardVariant::from_raw(2), bus);
        assert_eq!(mmio.read(0x210), 0xCAFE_F00D);
    }
}
