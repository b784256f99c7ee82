/// Interactive photo cropping
///
/// Turns a pixel-space rectangle selected over one photo into a new
/// encoded payload that replaces the photo in place. The cropper UI
/// presents a fixed aspect per slot: 16:9 for the cover, square for
/// everything else.
use crate::error::PhotoError;
use crate::photos::encode::EncodedPhoto;
use crate::photos::pipeline::{downscale_to_width, JPEG_QUALITY, MAX_PHOTO_WIDTH};

/// Pixel-space rectangle over the source photo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl CropRegion {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersect with the image bounds. Returns None when nothing is left.
    fn clamped_to(&self, image_width: u32, image_height: u32) -> Option<CropRegion> {
        if self.x >= image_width || self.y >= image_height {
            return None;
        }
        let width = self.width.min(image_width - self.x);
        let height = self.height.min(image_height - self.y);
        if width == 0 || height == 0 {
            return None;
        }
        Some(CropRegion {
            x: self.x,
            y: self.y,
            width,
            height,
        })
    }
}

/// Aspect ratio the cropper locks to for a given slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CropAspect {
    /// 16:9, used for the cover photo
    Cover,
    /// 1:1, used for every other slot
    Square,
}

impl CropAspect {
    /// Cover slot (index 0) crops wide; the grid slots crop square.
    pub fn for_slot(index: usize) -> Self {
        if index == 0 {
            CropAspect::Cover
        } else {
            CropAspect::Square
        }
    }

    pub fn ratio(&self) -> f64 {
        match self {
            CropAspect::Cover => 16.0 / 9.0,
            CropAspect::Square => 1.0,
        }
    }
}

/// Crop a photo to `region`, cap the result width at the pipeline bound,
/// and re-encode. The caller replaces the photo at the same index, so
/// ordering never changes.
pub fn crop_photo(photo: &EncodedPhoto, region: CropRegion) -> Result<EncodedPhoto, PhotoError> {
    let image = photo.decode()?;
    let clamped = region
        .clamped_to(image.width(), image.height())
        .ok_or(PhotoError::EmptyCrop)?;

    let cropped = image.crop_imm(clamped.x, clamped.y, clamped.width, clamped.height);
    let bounded = downscale_to_width(cropped, MAX_PHOTO_WIDTH);
    EncodedPhoto::from_image(&bounded, JPEG_QUALITY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{DynamicImage, Rgba, RgbaImage};

    fn photo(width: u32, height: u32) -> EncodedPhoto {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([90, 90, 90, 255]),
        ));
        EncodedPhoto::from_image(&img, JPEG_QUALITY).unwrap()
    }

    #[test]
    fn test_crop_to_region() {
        let source = photo(400, 300);
        let cropped = crop_photo(&source, CropRegion::new(10, 10, 160, 90)).unwrap();

        let decoded = cropped.decode().unwrap();
        assert_eq!((decoded.width(), decoded.height()), (160, 90));
    }

    #[test]
    fn test_crop_clamps_to_bounds() {
        let source = photo(100, 100);
        let cropped = crop_photo(&source, CropRegion::new(60, 60, 500, 500)).unwrap();

        let decoded = cropped.decode().unwrap();
        assert_eq!((decoded.width(), decoded.height()), (40, 40));
    }

    #[test]
    fn test_crop_outside_image_fails() {
        let source = photo(100, 100);
        let err = crop_photo(&source, CropRegion::new(200, 0, 50, 50)).unwrap_err();
        assert!(matches!(err, PhotoError::EmptyCrop));
    }

    #[test]
    fn test_wide_crop_is_downscaled() {
        let source = photo(2000, 800);
        let cropped = crop_photo(&source, CropRegion::new(0, 0, 1600, 900)).unwrap();

        let decoded = cropped.decode().unwrap();
        assert_eq!(decoded.width(), 1200);
        assert_eq!(decoded.height(), 600);
    }

    #[test]
    fn test_aspect_per_slot() {
        assert_eq!(CropAspect::for_slot(0), CropAspect::Cover);
        assert_eq!(CropAspect::for_slot(1), CropAspect::Square);
        assert_eq!(CropAspect::for_slot(9), CropAspect::Square);
        assert!((CropAspect::Cover.ratio() - 16.0 / 9.0).abs() < f64::EPSILON);
    }
}
