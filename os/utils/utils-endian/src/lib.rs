//! # Byte-Order Conversion
//!
//! Pure byte-reversal helpers for values exchanged with devices or wire
//! formats that fix a byte order. The functions are total and carry no
//! platform detection: callers decide when a value needs normalizing,
//! typically right before a register write or right after a register read.
//!
//! Both helpers are involutions — applying one twice returns the input:
//!
//! ```rust
//! # use utils_endian::{swap16, swap32};
//! assert_eq!(swap16(swap16(0xBEEF)), 0xBEEF);
//! assert_eq!(swap32(swap32(0xDEAD_BEEF)), 0xDEAD_BEEF);
//! ```

#![cfg_attr(not(any(test, doctest)), no_std)]

/// Reverse the byte order of a 16-bit value.
///
/// `0xAABB` becomes `0xBBAA`.
#[inline]
#[must_use]
pub const fn swap16(v: u16) -> u16 {
    v.swap_bytes()
}

/// Reverse the byte order of a 32-bit value.
///
/// `0xAABB_CCDD` becomes `0xDDCC_BBAA`.
#[inline]
#[must_use]
pub const fn swap32(v: u32) -> u32 {
    v.swap_bytes()
}
