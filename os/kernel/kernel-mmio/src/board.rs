use core::fmt;

/// Supported board variants, keyed by the firmware-reported generation
/// number.
///
/// The mapping is closed: generations 2 and 3 share the `0x3F00_0000` window,
/// generation 4 moved it to `0xFE00_0000`, and every other value falls back
/// to the original `0x2000_0000` window. An unknown generation is *not* an
/// error — the fallback is the documented behavior for first-generation and
/// unrecognized boards alike.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BoardVariant {
    /// First-generation silicon (BCM2835) and the fallback for unknown
    /// generation numbers.
    Gen1,
    /// Second generation (BCM2836).
    Gen2,
    /// Third generation (BCM2837).
    Gen3,
    /// Fourth generation (BCM2711).
    Gen4,
}

impl BoardVariant {
    /// Classify a raw firmware generation number.
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        match raw {
            2 => Self::Gen2,
            3 => Self::Gen3,
            4 => Self::Gen4,
            _ => Self::Gen1,
        }
    }

    /// Physical base of this variant's peripheral MMIO window.
    #[must_use]
    pub const fn peripheral_base(self) -> PeripheralBase {
        match self {
            Self::Gen1 => PeripheralBase::new(0x2000_0000),
            Self::Gen2 | Self::Gen3 => PeripheralBase::new(0x3F00_0000),
            Self::Gen4 => PeripheralBase::new(0xFE00_0000),
        }
    }
}

impl From<u32> for BoardVariant {
    #[inline]
    fn from(raw: u32) -> Self {
        Self::from_raw(raw)
    }
}

/// Physical base address of the peripheral window.
///
/// A thin wrapper that carries intent: this is the anchor for register
/// offsets, not a general-purpose address. Constructed only through
/// [`BoardVariant::peripheral_base`], so a live value always names one of the
/// documented windows.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct PeripheralBase(u64);

impl PeripheralBase {
    const fn new(v: u64) -> Self {
        Self(v)
    }

    #[inline]
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }

    /// Absolute address of the register at `offset` within the window.
    #[inline]
    #[must_use]
    #[allow(clippy::cast_lossless)]
    pub const fn register(self, offset: u32) -> u64 {
        self.0 + offset as u64
    }
}

impl fmt::Debug for PeripheralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PeripheralBase(0x{:08X})", self.0)
    }
}

impl fmt::Display for PeripheralBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:08X}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generations_two_and_three_share_a_window() {
        assert_eq!(
            BoardVariant::from_raw(2).peripheral_base().as_u64(),
            0x3F00_0000
        );
        assert_eq!(
            BoardVariant::from_raw(3).peripheral_base().as_u64(),
            0x3F00_0000
        );
    }

    #[test]
    fn generation_four_window() {
        assert_eq!(
            BoardVariant::from_raw(4).peripheral_base().as_u64(),
            0xFE00_0000
        );
    }

    #[test]
    fn unknown_generations_fall_back() {
        assert_eq!(
            BoardVariant::from_raw(0).peripheral_base().as_u64(),
            0x2000_0000
        );
        assert_eq!(
            BoardVariant::from_raw(99).peripheral_base().as_u64(),
            0x2000_0000
        );
    }

    #[test]
    fn register_addresses_are_base_relative() {
        let base = BoardVariant::Gen4.peripheral_base();
        assert_eq!(base.register(0), 0xFE00_0000);
        assert_eq!(base.register(0x0020_1000), 0xFE20_1000);
    }
}
