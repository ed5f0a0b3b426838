use crate::{FbConfigure, FbDescriptor, SetInfoError};

/// Color depths the basic surface accepts.
const SUPPORTED_DEPTHS: [u32; 4] = [8, 16, 24, 32];

/// Minimal in-kernel surface with a straightforward acceptance policy.
///
/// Accepts any geometry with nonzero extents, a supported depth, and a pitch
/// that covers at least one scanline. Real display drivers replace this with
/// hardware-aware negotiation; the request/response shape stays the same.
#[derive(Debug, Clone)]
pub struct BasicSurface {
    current: FbDescriptor,
}

impl BasicSurface {
    /// A surface already configured to `initial`.
    ///
    /// The initial descriptor is the caller's claim about the live display;
    /// it is not re-validated here.
    #[must_use]
    pub const fn new(initial: FbDescriptor) -> Self {
        Self { current: initial }
    }
}

impl Default for BasicSurface {
    /// 640×480 at 32 bpp, packed scanlines.
    fn default() -> Self {
        Self::new(FbDescriptor::new(640, 480, 2560, 32))
    }
}

impl FbConfigure for BasicSurface {
    fn get_info(&self) -> FbDescriptor {
        self.current
    }

    fn set_info(&mut self, desc: &FbDescriptor) -> Result<(), SetInfoError> {
        if desc.width == 0 || desc.height == 0 {
            return Err(SetInfoError::ZeroDimension);
        }
        if !SUPPORTED_DEPTHS.contains(&desc.bits_per_pixel) {
            return Err(SetInfoError::UnsupportedDepth);
        }
        if desc.pitch < desc.min_pitch() {
            return Err(SetInfoError::PitchTooSmall);
        }

        log::info!(
            "framebuffer reconfigured to {}x{} @ {} bpp (pitch {})",
            desc.width,
            desc.height,
            desc.bits_per_pixel,
            desc.pitch
        );
        self.current = *desc;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepted_geometry_is_what_get_info_returns() {
        let mut surface = BasicSurface::default();
        let requested = FbDescriptor::new(800, 600, 3200, 32);

        surface.set_info(&requested).unwrap();
        assert_eq!(surface.get_info(), requested);
    }

    #[test]
    fn rejected_geometry_leaves_the_surface_unchanged() {
        let mut surface = BasicSurface::default();
        let before = surface.get_info();

        let too_narrow = FbDescriptor::new(1024, 768, 1024, 32);
        assert_eq!(
            surface.set_info(&too_narrow),
            Err(SetInfoError::PitchTooSmall)
        );
        assert_eq!(surface.get_info(), before);
    }

    #[test]
    fn zero_extents_are_rejected() {
        let mut surface = BasicSurface::default();
        assert_eq!(
            surface.set_info(&FbDescriptor::new(0, 600, 3200, 32)),
            Err(SetInfoError::ZeroDimension)
        );
        assert_eq!(
            surface.set_info(&FbDescriptor::new(800, 0, 3200, 32)),
            Err(SetInfoError::ZeroDimension)
        );
    }

    #[test]
    fn odd_depths_are_rejected() {
        let mut surface = BasicSurface::default();
        assert_eq!(
            surface.set_info(&FbDescriptor::new(800, 600, 3200, 13)),
            Err(SetInfoError::UnsupportedDepth)
        );
    }

    #[test]
    fn get_info_never_fails_and_is_repeatable() {
        let surface = BasicSurface::new(FbDescriptor::new(1920, 1080, 7680, 32));
        assert_eq!(surface.get_info(), surface.get_info());
    }
}
