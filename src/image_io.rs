//! PNG import/export for rasters.
//!
//! PNG bytes are straight-alpha; rasters are premultiplied. Decoding
//! premultiplies in place, encoding unpremultiplies, so files on disk look
//! right in any external viewer.

use std::io::Cursor;

use anyhow::Context;

use crate::color::Rgba8Premul;
use crate::error::{GlazeError, GlazeResult};
use crate::raster::RasterImage;

pub fn decode_png(bytes: &[u8]) -> GlazeResult<RasterImage> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut data = rgba.into_raw();
    premultiply_rgba8_in_place(&mut data);
    RasterImage::from_premul_vec(width, height, data)
}

pub fn encode_png(raster: &RasterImage) -> GlazeResult<Vec<u8>> {
    if raster.width() == 0 || raster.height() == 0 {
        return Err(GlazeError::validation("cannot encode a zero-sized raster"));
    }

    let mut straight = raster.data().to_vec();
    unpremultiply_rgba8_in_place(&mut straight);

    let img = image::RgbaImage::from_raw(raster.width(), raster.height(), straight)
        .ok_or_else(|| GlazeError::validation("raster byte length does not match dimensions"))?;

    let mut buf = Vec::new();
    image::DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let c = Rgba8Premul::from_straight_rgba(px[0], px[1], px[2], px[3]);
        px.copy_from_slice(&c.to_array());
    }
}

fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let c = Rgba8Premul::from_array([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&c.to_straight_rgba());
    }
}
