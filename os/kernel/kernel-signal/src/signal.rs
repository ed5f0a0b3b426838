use core::fmt;

/// Process group identifier.
///
/// Owned by the process subsystem; this crate only references it as the
/// address of a group-wide delivery.
#[repr(transparent)]
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Pgid(u32);

impl Pgid {
    #[inline]
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Pgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pgid({})", self.0)
    }
}

impl fmt::Display for Pgid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for Pgid {
    #[inline]
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

/// The closed set of signals the terminal can raise.
///
/// Default dispositions live with the process subsystem; this crate only
/// names the kinds and their conventional numbers for external callers such
/// as a `kill` utility.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Signal {
    /// Interrupt (Ctrl-C).
    Int,
    /// Quit (Ctrl-\).
    Quit,
}

impl Signal {
    /// Conventional signal number.
    #[must_use]
    pub const fn number(self) -> u32 {
        match self {
            Self::Int => 2,
            Self::Quit => 3,
        }
    }

    /// Look a signal up by its conventional number.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            2 => Some(Self::Int),
            3 => Some(Self::Quit),
            _ => None,
        }
    }

    /// Map a terminal input byte to the signal it raises, if any.
    ///
    /// Control characters follow the `X - '@'` convention: Ctrl-C is
    /// `b'C' - b'@'` = `0x03`, Ctrl-\ is `b'\\' - b'@'` = `0x1C`. Every byte
    /// outside the mapped set is ordinary input and yields `None`.
    #[must_use]
    pub const fn from_control_char(byte: u8) -> Option<Self> {
        const CTRL_C: u8 = b'C' - b'@';
        const CTRL_BACKSLASH: u8 = b'\\' - b'@';

        match byte {
            CTRL_C => Some(Self::Int),
            CTRL_BACKSLASH => Some(Self::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_characters_follow_the_caret_convention() {
        assert_eq!(Signal::from_control_char(0x03), Some(Signal::Int));
        assert_eq!(Signal::from_control_char(0x1C), Some(Signal::Quit));
    }

    #[test]
    fn all_other_bytes_are_ordinary_input() {
        for byte in 0..=u8::MAX {
            if byte == 0x03 || byte == 0x1C {
                continue;
            }
            assert_eq!(Signal::from_control_char(byte), None, "byte {byte:#04x}");
        }
    }

    #[test]
    fn numbers_round_trip() {
        assert_eq!(Signal::Int.number(), 2);
        assert_eq!(Signal::Quit.number(), 3);
        assert_eq!(Signal::from_number(2), Some(Signal::Int));
        assert_eq!(Signal::from_number(3), Some(Signal::Quit));
        assert_eq!(Signal::from_number(9), None);
    }
}
