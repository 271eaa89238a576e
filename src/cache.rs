//! Surface-keyed storage of rendered artwork.

use smallvec::SmallVec;

use crate::params::ParamKey;
use crate::raster::RasterImage;
use crate::surface::SurfaceDescriptor;

/// A rendered bitmap together with the state it was rendered under.
#[derive(Clone, Debug)]
pub struct CacheEntry {
    descriptor: SurfaceDescriptor,
    params: ParamKey,
    image: RasterImage,
}

impl CacheEntry {
    pub fn descriptor(&self) -> SurfaceDescriptor {
        self.descriptor
    }

    /// Parameter fingerprint the bitmap was rendered under.
    pub fn params(&self) -> ParamKey {
        self.params
    }

    pub fn image(&self) -> &RasterImage {
        &self.image
    }
}

/// Per-painter store of rendered bitmaps, one per surface configuration.
///
/// Entries are ordered most-recently-used first, so the common case — a
/// widget repainting on the same display — is a single comparison. There is
/// no eviction: one widget instance sees at most a handful of distinct
/// configurations over its lifetime (typically one, occasionally two on
/// multi-monitor setups).
#[derive(Clone, Debug, Default)]
pub struct ImageCache {
    entries: SmallVec<[CacheEntry; 2]>,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Entry rendered for `descriptor`, or `None` on a miss.
    ///
    /// A hit is promoted to most-recently-used.
    pub fn lookup(&mut self, descriptor: SurfaceDescriptor) -> Option<&CacheEntry> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.descriptor == descriptor)?;
        if pos != 0 {
            let entry = self.entries.remove(pos);
            self.entries.insert(0, entry);
        }
        self.entries.first()
    }

    /// Stores `image` for `descriptor`, replacing any previous entry of the
    /// same class, and makes it most-recently-used.
    pub fn store(
        &mut self,
        image: RasterImage,
        descriptor: SurfaceDescriptor,
        params: ParamKey,
    ) -> &RasterImage {
        if let Some(pos) = self
            .entries
            .iter()
            .position(|e| e.descriptor == descriptor)
        {
            self.entries.remove(pos);
        }
        self.entries.insert(
            0,
            CacheEntry {
                descriptor,
                params,
                image,
            },
        );
        &self.entries[0].image
    }

    /// Most-recently-used image, if any entry exists.
    pub fn front(&self) -> Option<&RasterImage> {
        self.entries.first().map(CacheEntry::image)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
