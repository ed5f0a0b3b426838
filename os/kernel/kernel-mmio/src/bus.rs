/// Backend performing the actual 32-bit register accesses.
///
/// [`Mmio`](crate::Mmio) is generic over this trait so driver logic can be
/// exercised against an in-memory bus instead of device registers.
///
/// # Safety
/// Implementors promise that `load32`/`store32` are sound for every address
/// the implementation accepts: either the access really reaches mapped
/// device memory (hardware buses) or it never dereferences the address at
/// all (test buses). The burden of passing only valid register addresses
/// stays with the caller of the hardware bus, per the access contract.
pub unsafe trait RegisterBus {
    /// One 32-bit volatile-equivalent load from `addr`.
    fn load32(&self, addr: u64) -> u32;

    /// One 32-bit volatile-equivalent store to `addr`.
    fn store32(&self, addr: u64, value: u32);
}

/// The hardware bus: volatile loads and stores through raw pointers.
///
/// Construction is the unsafe step; every access afterwards relies on the
/// promise made there.
#[derive(Debug, Copy, Clone)]
pub struct PhysBus {
    _private: (),
}

impl PhysBus {
    /// # Safety
    /// The caller must guarantee that every address later passed to this bus
    /// is a mapped, identity-accessible device register in the current
    /// address space, and that 32-bit volatile access to it is permitted by
    /// the device. Nothing is checked at access time.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _private: () }
    }
}

// SAFETY: soundness of each access was asserted at construction.
unsafe impl RegisterBus for PhysBus {
    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn load32(&self, addr: u64) -> u32 {
        // SAFETY: PhysBus::new's contract covers addr.
        unsafe { core::ptr::read_volatile(addr as usize as *const u32) }
    }

    #[inline]
    #[allow(clippy::cast_possible_truncation)]
    fn store32(&self, addr: u64, value: u32) {
        // SAFETY: PhysBus::new's contract covers addr.
        unsafe { core::ptr::write_volatile(addr as usize as *mut u32, value) }
    }
}
