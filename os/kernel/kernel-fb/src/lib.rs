//! # Framebuffer Configuration Interface
//!
//! The two-operation descriptor protocol between the kernel and the active
//! display surface: `GET_INFO` snapshots the current geometry, `SET_INFO`
//! requests a new one. Both travel as a [`FbDescriptor`], a fixed-layout
//! binary contract shared with userspace ioctl callers.
//!
//! Mode negotiation itself belongs to the display driver behind the
//! [`FbConfigure`] trait; this crate fixes only the request/response shape,
//! the selector numbers, and the failure channel. [`BasicSurface`] is the
//! minimal in-kernel surface used where no real driver is attached.

#![cfg_attr(not(any(test, doctest)), no_std)]

mod surface;

pub use surface::BasicSurface;

/// Selector for the get-geometry operation.
pub const FBIOGET_INFO: u32 = 0;

/// Selector for the set-geometry operation.
pub const FBIOSET_INFO: u32 = 1;

/// Geometry snapshot of one display surface.
///
/// Four `u32` fields in declared order — `width`, `height`, `pitch`,
/// `bits_per_pixel` — form a stable ABI for every consumer; reordering or
/// resizing a field is a breaking change. A snapshot is immutable once read:
/// reconfiguration produces a new descriptor, never an in-place edit of a
/// live one.
#[repr(C)]
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct FbDescriptor {
    /// Visible width in pixels.
    pub width: u32,

    /// Visible height in pixels.
    pub height: u32,

    /// Bytes per scanline, including any padding the surface carries.
    pub pitch: u32,

    /// Bits per pixel.
    pub bits_per_pixel: u32,
}

impl FbDescriptor {
    #[must_use]
    pub const fn new(width: u32, height: u32, pitch: u32, bits_per_pixel: u32) -> Self {
        Self {
            width,
            height,
            pitch,
            bits_per_pixel,
        }
    }

    /// Bytes one scanline actually needs for `width` pixels at this depth.
    #[must_use]
    pub const fn min_pitch(&self) -> u32 {
        self.width.saturating_mul(self.bits_per_pixel.div_ceil(8))
    }
}

/// One decoded configuration request, as selected by an ioctl number.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum FbRequest {
    /// [`FBIOGET_INFO`] — read the current geometry.
    GetInfo,
    /// [`FBIOSET_INFO`] — request a new geometry.
    SetInfo,
}

impl FbRequest {
    /// Decode a raw selector. Unknown selectors belong to other subsystems
    /// and decode to `None`.
    #[must_use]
    pub const fn from_selector(selector: u32) -> Option<Self> {
        match selector {
            FBIOGET_INFO => Some(Self::GetInfo),
            FBIOSET_INFO => Some(Self::SetInfo),
            _ => None,
        }
    }
}

/// Rejection causes for a [`FbConfigure::set_info`] request.
#[derive(Debug, Copy, Clone, Eq, PartialEq, thiserror::Error)]
pub enum SetInfoError {
    #[error("width or height is zero")]
    ZeroDimension,
    #[error("pitch smaller than one scanline")]
    PitchTooSmall,
    #[error("unsupported color depth")]
    UnsupportedDepth,
}

/// The active display surface, as the kernel sees it.
///
/// Implemented by the display driver, consumed by the ioctl path.
pub trait FbConfigure {
    /// Current geometry. Cannot fail on a live surface.
    fn get_info(&self) -> FbDescriptor;

    /// Request reconfiguration to `desc`.
    ///
    /// # Errors
    /// Returns a [`SetInfoError`] when the driver rejects the geometry; the
    /// surface then keeps its previous descriptor.
    fn set_info(&mut self, desc: &FbDescriptor) -> Result<(), SetInfoError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::mem::offset_of;

    #[test]
    fn descriptor_layout_is_the_abi() {
        assert_eq!(size_of::<FbDescriptor>(), 16);
        assert_eq!(offset_of!(FbDescriptor, width), 0);
        assert_eq!(offset_of!(FbDescriptor, height), 4);
        assert_eq!(offset_of!(FbDescriptor, pitch), 8);
        assert_eq!(offset_of!(FbDescriptor, bits_per_pixel), 12);
    }

    #[test]
    fn selectors_decode() {
        assert_eq!(FbRequest::from_selector(0), Some(FbRequest::GetInfo));
        assert_eq!(FbRequest::from_selector(1), Some(FbRequest::SetInfo));
        assert_eq!(FbRequest::from_selector(2), None);
        assert_eq!(FbRequest::from_selector(u32::MAX), None);
    }

    #[test]
    fn min_pitch_rounds_depth_up_to_bytes() {
        assert_eq!(FbDescriptor::new(800, 600, 0, 32).min_pitch(), 3200);
        assert_eq!(FbDescriptor::new(640, 480, 0, 24).min_pitch(), 1920);
        assert_eq!(FbDescriptor::new(80, 25, 0, 4).min_pitch(), 80);
    }
}
