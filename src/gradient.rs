//! Multi-stop linear gradient bands.
//!
//! A band is a 3-color, 4-segment gradient described by [`GradientSpec`]:
//! a ramp from the start color to the mid color, a flat stretch of the mid
//! color, a ramp back to the start color, and a ramp from the start color to
//! the end color over the remainder. The fill is a pure function of
//! (spec, size, axis) — identical inputs produce identical pixels — which is
//! what makes its output safe to cache.

use crate::color::Rgba8Premul;
use crate::error::GlazeResult;
use crate::painter::Artwork;
use crate::params::{PaintParams, ParamHasher};
use crate::raster::RasterImage;

/// Cross-axis width of the strip cached for tiled gradient fills.
const TILE_CROSS_AXIS: u32 = 64;

/// Direction a gradient band runs in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum GradientAxis {
    /// Color varies along x, constant down each column.
    Horizontal,
    /// Color varies along y, constant across each row.
    Vertical,
}

/// 3-color, 4-segment gradient description supplied by the theme.
///
/// `ratio1` is the fraction of the band taken by each of the two
/// start↔mid ramps, `ratio2` the fraction taken by the flat mid stretch.
/// `ratio1 × 2 + ratio2 > 1` is accepted input: segments are truncated
/// back-to-front so the band never overflows (see [`segment_lengths`]).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GradientSpec {
    pub ratio1: f32,
    pub ratio2: f32,
    pub start: Rgba8Premul,
    pub mid: Rgba8Premul,
    pub end: Rgba8Premul,
}

impl GradientSpec {
    pub fn new(
        ratio1: f32,
        ratio2: f32,
        start: Rgba8Premul,
        mid: Rgba8Premul,
        end: Rgba8Premul,
    ) -> Self {
        Self {
            ratio1,
            ratio2,
            start,
            mid,
            end,
        }
    }
}

impl PaintParams for GradientSpec {
    fn write(&self, hasher: &mut ParamHasher) {
        hasher.write_f32(self.ratio1);
        hasher.write_f32(self.ratio2);
        for color in [self.start, self.mid, self.end] {
            hasher.write_bytes(&color.to_array());
        }
    }
}

/// Lengths of the four segments for a band of `len` pixels.
///
/// Nominal lengths are `round(ratio1·len)`, `round(ratio2·len)`,
/// `round(ratio1·len)` and the remainder. Each segment is then granted at
/// most what is left of the band, so overlong ratios truncate the later
/// segments first and the four lengths always sum to exactly `len`.
/// Ratios are clamped into [0, 1] before rounding.
pub fn segment_lengths(spec: &GradientSpec, len: u32) -> [u32; 4] {
    let ratio1 = spec.ratio1.clamp(0.0, 1.0);
    let ratio2 = spec.ratio2.clamp(0.0, 1.0);
    let ramp = (ratio1 * len as f32).round() as u32;
    let flat = (ratio2 * len as f32).round() as u32;

    let mut remaining = len;
    let a = ramp.min(remaining);
    remaining -= a;
    let b = flat.min(remaining);
    remaining -= b;
    let c = ramp.min(remaining);
    remaining -= c;
    [a, b, c, remaining]
}

/// Fills the whole raster with the gradient band.
///
/// This is the artwork path: the raster is the cached tile.
pub fn fill_gradient(raster: &mut RasterImage, spec: &GradientSpec, axis: GradientAxis) {
    let (w, h) = (raster.width(), raster.height());
    fill_gradient_rect(raster, 0, 0, w, h, spec, axis);
}

/// Fills the `w × h` region at `(x, y)` with the gradient band, clipped to
/// the raster.
///
/// Segment boundaries are computed from the requested band length (`h` for
/// vertical, `w` for horizontal), not the clipped one, so a partially
/// visible band keeps its proportions. Zero-length segments are skipped
/// without issuing any fill.
pub fn fill_gradient_rect(
    raster: &mut RasterImage,
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    spec: &GradientSpec,
    axis: GradientAxis,
) {
    if w == 0 || h == 0 {
        return;
    }
    let band = Band { x, y, w, h, axis };
    let band_len = match axis {
        GradientAxis::Horizontal => w,
        GradientAxis::Vertical => h,
    };
    let [a, b, c, d] = segment_lengths(spec, band_len);

    let mut offset = 0;
    offset = band.ramp(raster, offset, a, spec.start, spec.mid);
    offset = band.flat(raster, offset, b, spec.mid);
    offset = band.ramp(raster, offset, c, spec.mid, spec.start);
    band.ramp(raster, offset, d, spec.start, spec.end);
}

/// Placement of a band inside a raster.
#[derive(Clone, Copy)]
struct Band {
    x: i32,
    y: i32,
    w: u32,
    h: u32,
    axis: GradientAxis,
}

impl Band {
    /// Linear ramp of `len` lines from `from` to `to`, starting at `offset`
    /// along the band. Endpoints are exact: line 0 is `from`, line `len − 1`
    /// is `to`. Returns the offset past the segment.
    fn ramp(
        &self,
        raster: &mut RasterImage,
        offset: u32,
        len: u32,
        from: Rgba8Premul,
        to: Rgba8Premul,
    ) -> u32 {
        for i in 0..len {
            let t = if len > 1 {
                i as f32 / (len - 1) as f32
            } else {
                0.0
            };
            self.line(raster, offset + i, from.lerp(to, t));
        }
        offset + len
    }

    /// Flat stretch of `len` lines of `color` starting at `offset`.
    fn flat(&self, raster: &mut RasterImage, offset: u32, len: u32, color: Rgba8Premul) -> u32 {
        if len == 0 {
            return offset;
        }
        match self.axis {
            GradientAxis::Horizontal => {
                raster.fill_rect(self.x.saturating_add_unsigned(offset), self.y, len, self.h, color);
            }
            GradientAxis::Vertical => {
                raster.fill_rect(self.x, self.y.saturating_add_unsigned(offset), self.w, len, color);
            }
        }
        offset + len
    }

    /// One cross-axis line of the band at `offset`.
    fn line(&self, raster: &mut RasterImage, offset: u32, color: Rgba8Premul) {
        match self.axis {
            GradientAxis::Horizontal => {
                raster.fill_rect(self.x.saturating_add_unsigned(offset), self.y, 1, self.h, color);
            }
            GradientAxis::Vertical => {
                raster.fill_rect(self.x, self.y.saturating_add_unsigned(offset), self.w, 1, color);
            }
        }
    }
}

/// Tileable gradient artwork.
///
/// Caches a strip of at most [`TILE_CROSS_AXIS`] pixels along the cross
/// axis and full length along the gradient axis; the painter repeats the
/// strip across the control. The [`GradientSpec`] is the parameter vector:
/// a theme change re-renders the strip.
#[derive(Clone, Copy, Debug)]
pub struct GradientBand {
    axis: GradientAxis,
}

impl GradientBand {
    pub fn new(axis: GradientAxis) -> Self {
        Self { axis }
    }

    pub fn horizontal() -> Self {
        Self::new(GradientAxis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(GradientAxis::Vertical)
    }

    pub fn axis(&self) -> GradientAxis {
        self.axis
    }
}

impl Artwork for GradientBand {
    type Params = GradientSpec;

    fn natural_size(&self, width: u32, height: u32) -> (u32, u32) {
        match self.axis {
            GradientAxis::Horizontal => (width, height.min(TILE_CROSS_AXIS)),
            GradientAxis::Vertical => (width.min(TILE_CROSS_AXIS), height),
        }
    }

    fn render(&self, raster: &mut RasterImage, params: &GradientSpec) -> GlazeResult<()> {
        fill_gradient(raster, params, self.axis);
        Ok(())
    }
}
