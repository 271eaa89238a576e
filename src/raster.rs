//! Owned premultiplied-RGBA8 pixel buffers.

use crate::color::Rgba8Premul;
use crate::composite;
use crate::error::{GlazeError, GlazeResult};

/// Row-major premultiplied RGBA8 pixel buffer.
///
/// Creation never fails; zero-sized rasters are legal and every operation on
/// them is a no-op. Fill and blit operations clip to the buffer bounds, so
/// callers may pass regions that hang over the edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Transparent raster of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize) * 4;
        Self {
            width,
            height,
            data: vec![0; len],
        }
    }

    /// Raster uniformly filled with `color`.
    pub fn filled(width: u32, height: u32, color: Rgba8Premul) -> Self {
        let mut raster = Self::new(width, height);
        raster.fill(color);
        raster
    }

    /// Wraps an existing premultiplied RGBA8 buffer.
    pub fn from_premul_vec(width: u32, height: u32, data: Vec<u8>) -> GlazeResult<Self> {
        let expected = (width as usize) * (height as usize) * 4;
        if data.len() != expected {
            return Err(GlazeError::validation(format!(
                "raster buffer is {} bytes, {}x{} needs {}",
                data.len(),
                width,
                height,
                expected
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba8Premul> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y);
        Some(Rgba8Premul::from_array([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]))
    }

    /// Writes one pixel; out-of-bounds coordinates are ignored.
    pub fn put_pixel(&mut self, x: u32, y: u32, color: Rgba8Premul) {
        if x >= self.width || y >= self.height {
            return;
        }
        let i = self.index(x, y);
        self.data[i..i + 4].copy_from_slice(&color.to_array());
    }

    pub fn fill(&mut self, color: Rgba8Premul) {
        for px in self.data.chunks_exact_mut(4) {
            px.copy_from_slice(&color.to_array());
        }
    }

    /// Overwrites the `w × h` rect at `(x, y)` with `color`, clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Rgba8Premul) {
        let Some((x0, y0, x1, y1)) = self.clip(x, y, w, h) else {
            return;
        };
        let px = color.to_array();
        for row in y0..y1 {
            let start = self.index(x0, row);
            let end = self.index(x1 - 1, row) + 4;
            for chunk in self.data[start..end].chunks_exact_mut(4) {
                chunk.copy_from_slice(&px);
            }
        }
    }

    /// Composites the `src_w × src_h` top-left sub-rect of `src` source-over
    /// at `(dx, dy)`, clipped to both buffers.
    pub fn blit_over(&mut self, src: &RasterImage, dx: i32, dy: i32, src_w: u32, src_h: u32) {
        let sw = src_w.min(src.width);
        let sh = src_h.min(src.height);
        let Some((x0, y0, x1, y1)) = self.clip(dx, dy, sw, sh) else {
            return;
        };

        let span = (x1 - x0) as usize * 4;
        for row in y0..y1 {
            let sx = x0 as i64 - i64::from(dx);
            let sy = i64::from(row) - i64::from(dy);
            let si = src.index(sx as u32, sy as u32);
            let di = self.index(x0, row);
            for k in 0..span / 4 {
                let d = di + k * 4;
                let s = si + k * 4;
                let out = composite::over(
                    [
                        self.data[d],
                        self.data[d + 1],
                        self.data[d + 2],
                        self.data[d + 3],
                    ],
                    [
                        src.data[s],
                        src.data[s + 1],
                        src.data[s + 2],
                        src.data[s + 3],
                    ],
                );
                self.data[d..d + 4].copy_from_slice(&out);
            }
        }
    }

    /// Intersects a signed-origin rect with the buffer, returning pixel
    /// bounds `(x0, y0, x1, y1)` with exclusive ends, or `None` when empty.
    fn clip(&self, x: i32, y: i32, w: u32, h: u32) -> Option<(u32, u32, u32, u32)> {
        let x0 = i64::from(x).max(0);
        let y0 = i64::from(y).max(0);
        let x1 = (i64::from(x) + i64::from(w)).min(i64::from(self.width));
        let y1 = (i64::from(y) + i64::from(h)).min(i64::from(self.height));
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn index(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }
}
