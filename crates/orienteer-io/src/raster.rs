use std::path::Path;

use image::RgbImage;
use orienteer_core::{Rgb, TerrainRaster};

use crate::IoError;

/// Decode an image file into a terrain raster. Alpha is discarded.
pub fn load_raster(path: impl AsRef<Path>) -> Result<TerrainRaster, IoError> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|source| IoError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    let raster = from_image(&img.to_rgb8())?;
    log::debug!(
        "loaded {}x{} terrain raster from {}",
        raster.width(),
        raster.height(),
        path.display()
    );
    Ok(raster)
}

/// Encode `raster`; the format follows the extension of `path`.
pub fn save_raster(raster: &TerrainRaster, path: impl AsRef<Path>) -> Result<(), IoError> {
    let path = path.as_ref();
    to_image(raster)
        .save(path)
        .map_err(|source| IoError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Convert a decoded RGB image into a raster.
pub fn from_image(img: &RgbImage) -> Result<TerrainRaster, IoError> {
    let (w, h) = img.dimensions();
    let too_large = || IoError::TooLarge {
        width: w,
        height: h,
    };
    let width = i32::try_from(w).map_err(|_| too_large())?;
    let height = i32::try_from(h).map_err(|_| too_large())?;
    let pixels = img.pixels().map(|p| Rgb(p.0)).collect();
    Ok(TerrainRaster::from_pixels(width, height, pixels)?)
}

/// Convert a raster back into an RGB image.
pub fn to_image(raster: &TerrainRaster) -> RgbImage {
    let w = raster.width() as u32;
    RgbImage::from_fn(w, raster.height() as u32, |x, y| {
        image::Rgb(raster.pixels()[(y * w + x) as usize].0)
    })
}
