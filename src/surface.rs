//! Rendering-surface identity and the offscreen-raster factory seam.

use crate::raster::RasterImage;

/// Stable identity of a windowing-layer surface configuration.
///
/// The windowing layer assigns one id per distinct pixel-format/transparency
/// configuration (per display adapter, in practice). The id is opaque here;
/// only equality matters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DeviceConfigId(pub u64);

/// Configuration class of a rendering destination.
///
/// Two descriptors are equal iff they name the same configuration.
/// `Generic` is the software-surface class used when no device configuration
/// is available; it is a distinct class of its own, not a wildcard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SurfaceDescriptor {
    #[default]
    Generic,
    Device(DeviceConfigId),
}

/// What the painter needs from a rendering destination.
///
/// Implemented by the embedding toolkit's windowing layer; tests substitute
/// an in-memory implementation, so no real display is required.
pub trait Surface {
    /// Configuration class of this destination.
    fn descriptor(&self) -> SurfaceDescriptor;

    /// Offscreen raster compatible with this destination's pixel format.
    ///
    /// `None` means the windowing layer cannot allocate one right now;
    /// callers degrade to a plain [`RasterImage`].
    fn create_compatible_raster(&self, width: u32, height: u32) -> Option<RasterImage> {
        Some(RasterImage::new(width, height))
    }
}

/// Software destination with no device configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct GenericSurface;

impl Surface for GenericSurface {
    fn descriptor(&self) -> SurfaceDescriptor {
        SurfaceDescriptor::Generic
    }
}
