//! Glaze caches expensive widget artwork as rasterized bitmaps.
//!
//! A widget look-and-feel redraws vector borders, icons and gradient fills
//! on every repaint of every visible widget. Glaze rasterizes that artwork
//! once per rendering-surface configuration and parameter state, then reuses
//! the cached bitmap via fast, clipped, tiled blits:
//!
//! - implement [`Artwork`] for a piece of art
//! - hand it to a [`CachedPainter`] owned by the widget instance
//! - call [`CachedPainter::paint`] from the widget's paint routine
//!
//! The built-in [`GradientBand`] artwork renders 3-color, 4-segment gradient
//! bands and caches them as narrow strips tiled across the control. Theme
//! tokens resolve through [`StyleProvider`]; a JSON-backed [`Stylesheet`]
//! implementation is included.
#![forbid(unsafe_code)]

pub mod cache;
pub mod color;
pub mod composite;
pub mod error;
pub mod gradient;
pub mod image_io;
pub mod painter;
pub mod params;
pub mod raster;
pub mod style;
pub mod surface;

pub use cache::{CacheEntry, ImageCache};
pub use color::Rgba8Premul;
pub use error::{GlazeError, GlazeResult};
pub use gradient::{GradientAxis, GradientBand, GradientSpec, fill_gradient, fill_gradient_rect};
pub use painter::{Artwork, CachedPainter};
pub use params::{PaintParams, ParamHasher, ParamKey};
pub use raster::RasterImage;
pub use style::{StyleProvider, Stylesheet};
pub use surface::{DeviceConfigId, GenericSurface, Surface, SurfaceDescriptor};
