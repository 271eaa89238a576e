//! Render-once / blit-many orchestration over [`ImageCache`].

use tracing::trace;

use crate::cache::ImageCache;
use crate::error::GlazeResult;
use crate::params::PaintParams;
use crate::raster::RasterImage;
use crate::surface::Surface;

/// A piece of vector art that can be rasterized on demand.
///
/// One implementation exists per icon/border/fill kind. The painter calls
/// [`render`](Artwork::render) only on a cache miss, against an offscreen
/// raster of [`natural_size`](Artwork::natural_size). Everything that
/// changes the produced pixels must be part of [`Artwork::Params`]; the
/// callback must not trigger a repaint of its own painter.
pub trait Artwork {
    /// Paint-relevant state for this artwork.
    type Params: PaintParams;

    /// Raster size to render for a `width × height` paint request.
    ///
    /// Tileable artwork (gradient strips) returns something smaller than the
    /// request; the painter repeats the raster to cover the region.
    fn natural_size(&self, width: u32, height: u32) -> (u32, u32) {
        (width, height)
    }

    /// Rasterize into `raster`. Called only on a cache miss.
    fn render(&self, raster: &mut RasterImage, params: &Self::Params) -> GlazeResult<()>;
}

/// Paints an [`Artwork`] through a private per-instance bitmap cache.
///
/// The artwork is rasterized at most once per (surface descriptor ×
/// parameter key); later paints reuse the cached raster via clipped,
/// non-overlapping tiled blits. Each painter owns its cache and is accessed
/// from the single UI thread only (`&mut self`, no interior mutability, no
/// locks).
#[derive(Clone, Debug)]
pub struct CachedPainter<A: Artwork> {
    artwork: A,
    cache: Option<ImageCache>,
}

impl<A: Artwork> CachedPainter<A> {
    pub fn new(artwork: A) -> Self {
        Self {
            artwork,
            cache: None,
        }
    }

    pub fn artwork(&self) -> &A {
        &self.artwork
    }

    /// Drops every cached raster; the next paint re-renders.
    ///
    /// For state the owner tracks in [`Artwork::Params`] this happens
    /// automatically; `invalidate` covers external changes the parameter
    /// vector does not encode.
    pub fn invalidate(&mut self) {
        if let Some(cache) = &mut self.cache {
            cache.clear();
        }
    }

    /// Paints the artwork into `target` at `(x, y)`, covering `width × height`.
    ///
    /// Renders on the first call per (descriptor, params) and blits from
    /// cache afterwards. When the cached raster is smaller than the request
    /// it is repeated in non-overlapping tiles, the last tile on each axis
    /// clipped to the remainder. An `Err` from the artwork propagates and
    /// caches nothing.
    #[tracing::instrument(skip(self, target, surface, params))]
    pub fn paint(
        &mut self,
        target: &mut RasterImage,
        surface: &dyn Surface,
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        params: &A::Params,
    ) -> GlazeResult<()> {
        if width == 0 || height == 0 {
            return Ok(());
        }

        let descriptor = surface.descriptor();
        let key = params.key();
        let cache = self.cache.get_or_insert_with(ImageCache::new);

        let hit = cache.lookup(descriptor).is_some_and(|e| e.params() == key);
        if !hit {
            let (tile_w, tile_h) = self.artwork.natural_size(width, height);
            let mut raster = surface
                .create_compatible_raster(tile_w, tile_h)
                .unwrap_or_else(|| RasterImage::new(tile_w, tile_h));
            self.artwork.render(&mut raster, params)?;
            trace!(?descriptor, tile_w, tile_h, "cache miss, rendered artwork");
            cache.store(raster, descriptor, key);
        }

        // lookup/store above left the right tile at the front.
        let Some(tile) = cache.front() else {
            return Ok(());
        };
        blit_tiled(target, tile, x, y, width, height);
        Ok(())
    }
}

/// Repeats `tile` over the `width × height` region at `(x, y)`.
///
/// Tiles never overlap and the last tile on each axis is clipped to the
/// remainder, so the union of blits covers the region exactly once and
/// never touches pixels outside it.
fn blit_tiled(
    target: &mut RasterImage,
    tile: &RasterImage,
    x: i32,
    y: i32,
    width: u32,
    height: u32,
) {
    let tile_w = tile.width();
    let tile_h = tile.height();
    if tile_w == 0 || tile_h == 0 {
        return;
    }

    let mut ty = 0u32;
    while ty < height {
        let clip_h = tile_h.min(height - ty);
        let mut tx = 0u32;
        while tx < width {
            let clip_w = tile_w.min(width - tx);
            target.blit_over(
                tile,
                x.saturating_add_unsigned(tx),
                y.saturating_add_unsigned(ty),
                clip_w,
                clip_h,
            );
            tx += tile_w;
        }
        ty += tile_h;
    }
}
