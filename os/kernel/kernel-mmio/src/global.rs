use crate::{Mmio, PhysBus};
use core::{
    cell::UnsafeCell,
    mem::MaybeUninit,
    sync::atomic::{AtomicU8, Ordering},
};

const UNSET: u8 = 0;
const SETTING: u8 = 1;
const SET: u8 = 2;

/// Write-once cell for the kernel's process-wide [`Mmio`] handle.
///
/// Early boot resolves the board variant and calls [`set`](Self::set) exactly
/// once, before interrupts are enabled; afterwards the handle is immutable
/// and [`get`](Self::get) is safe from any interrupt or syscall path. The
/// cell carries no lock: the single write happens at a point with no
/// concurrent access, and publication is an acquire/release pair.
pub struct GlobalMmio {
    state: AtomicU8,
    slot: UnsafeCell<MaybeUninit<Mmio<PhysBus>>>,
}

impl GlobalMmio {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: AtomicU8::new(UNSET),
            slot: UnsafeCell::new(MaybeUninit::uninit()),
        }
    }

    /// Publish the boot-time handle.
    ///
    /// Returns `true` on the first call. A second call is a boot-sequencing
    /// bug: it leaves the original handle in place, returns `false`, and
    /// trips a debug assertion.
    #[must_use = "a false return means the cell was already set"]
    pub fn set(&self, mmio: Mmio<PhysBus>) -> bool {
        if self
            .state
            .compare_exchange(UNSET, SETTING, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            debug_assert!(false, "GlobalMmio::set called twice");
            return false;
        }

        // SAFETY: the UNSET -> SETTING transition makes us the only writer.
        unsafe {
            (*self.slot.get()).write(mmio);
        }
        log::debug!("peripheral window at {}", mmio.base());
        // Publish the value before marking SET.
        self.state.store(SET, Ordering::Release);
        true
    }

    /// The published handle, or `None` before [`set`](Self::set) completes.
    #[inline]
    pub fn get(&self) -> Option<&Mmio<PhysBus>> {
        if self.state.load(Ordering::Acquire) == SET {
            // SAFETY: SET guarantees the write is done.
            Some(unsafe { (*self.slot.get()).assume_init_ref() })
        } else {
            None
        }
    }
}

impl Default for GlobalMmio {
    fn default() -> Self {
        Self::new()
    }
}

// SAFETY: written once before SET is published; shared read-only afterwards.
unsafe impl Sync for GlobalMmio {}
