/// The standard 16-entry text-mode palette.
///
/// Discriminants are the hardware color numbers; both attribute nibbles use
/// the same table. Intensity (bit 3) of the background nibble doubles as the
/// blink bit on some adapters, which is a display-driver concern, not an
/// encoding one.
#[repr(u8)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGray = 7,
    DarkGray = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    Pink = 13,
    Yellow = 14,
    White = 15,
}

impl Color {
    /// Map a raw value to its palette entry, keeping only the low 4 bits.
    #[must_use]
    pub const fn from_bits(value: u8) -> Self {
        match value & 0x0F {
            1 => Self::Blue,
            2 => Self::Green,
            3 => Self::Cyan,
            4 => Self::Red,
            5 => Self::Magenta,
            6 => Self::Brown,
            7 => Self::LightGray,
            8 => Self::DarkGray,
            9 => Self::LightBlue,
            10 => Self::LightGreen,
            11 => Self::LightCyan,
            12 => Self::LightRed,
            13 => Self::Pink,
            14 => Self::Yellow,
            15 => Self::White,
            _ => Self::Black,
        }
    }

    #[must_use]
    pub const fn into_bits(self) -> u8 {
        self as u8
    }
}
