//! # VGA Text Cell Encoding
//!
//! One on-screen character position in VGA text mode is a 16-bit word: the
//! low byte is the glyph code, the high byte packs two 4-bit colors as
//! `(bg << 4) | fg`. This crate models that word as a [`VgaCell`] and offers
//! the raw [`encode`] helper for display code that works with untyped color
//! values.
//!
//! Everything here is a pure derived value: cells are computed per character
//! position and written out by the display path, never stored as state.

#![cfg_attr(not(any(test, doctest)), no_std)]

mod color;

pub use color::Color;

use bitfield_struct::bitfield;

/// Architectural model of one VGA text-mode cell.
///
/// Field order mirrors the hardware word, low bits first. The layout is a
/// stable ABI: display memory is an array of exactly these words.
#[bitfield(u16)]
pub struct VgaCell {
    /// Bits 0–7 — glyph code (code page 437).
    pub glyph: u8,

    /// Bits 8–11 — foreground color.
    #[bits(4, default = Color::Black)]
    pub fg: Color,

    /// Bits 12–15 — background color.
    #[bits(4, default = Color::Black)]
    pub bg: Color,
}

impl VgaCell {
    /// A space on black, the cell used for cleared screen regions.
    pub const BLANK: Self = Self::new()
        .with_glyph(b' ')
        .with_fg(Color::LightGray)
        .with_bg(Color::Black);
}

/// Pack a glyph and two raw color values into one cell word.
///
/// Total and deterministic: only the low 4 bits of each color participate —
/// values of 16 and above are silently truncated, never rejected.
#[inline]
#[must_use]
pub const fn encode(glyph: u8, fg: u8, bg: u8) -> u16 {
    VgaCell::new()
        .with_glyph(glyph)
        .with_fg(Color::from_bits(fg))
        .with_bg(Color::from_bits(bg))
        .into_bits()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn high_byte_packs_background_over_foreground() {
        for fg in 0..16u8 {
            for bg in 0..16u8 {
                for &glyph in &[0u8, b' ', b'A', 0x7F, 0xFF] {
                    let cell = encode(glyph, fg, bg);
                    assert_eq!(cell >> 8, u16::from((bg << 4) | fg));
                    assert_eq!(cell & 0xFF, u16::from(glyph));
                }
            }
        }
    }

    #[test]
    fn colors_at_or_above_sixteen_are_truncated() {
        assert_eq!(encode(b'x', 16, 0), encode(b'x', 0, 0));
        assert_eq!(encode(b'x', 0x1F, 0x2E), encode(b'x', 0x0F, 0x0E));
        assert_eq!(encode(b'x', 0xFF, 0xFF), encode(b'x', 0x0F, 0x0F));
    }

    #[test]
    fn typed_and_raw_encodings_agree() {
        let typed = VgaCell::new()
            .with_glyph(b'R')
            .with_fg(Color::Yellow)
            .with_bg(Color::Blue);
        assert_eq!(typed.into_bits(), encode(b'R', 14, 1));
    }

    #[test]
    fn blank_is_lightgray_space_on_black() {
        assert_eq!(VgaCell::BLANK.glyph(), b' ');
        assert_eq!(VgaCell::BLANK.fg(), Color::LightGray);
        assert_eq!(VgaCell::BLANK.bg(), Color::Black);
        assert_eq!(VgaCell::BLANK.into_bits(), 0x0720);
    }
}
