/// Encoded photo payloads
///
/// Photos travel through the wizard as JPEG data URLs
/// (`data:image/jpeg;base64,...`) so the draft serializes to a single
/// JSON document with no side files.
use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;
use serde::{Deserialize, Serialize};

use crate::error::PhotoError;

const DATA_URL_PREFIX: &str = "data:image/jpeg;base64,";

/// A processed listing photo, stored as a JPEG data URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EncodedPhoto(String);

impl EncodedPhoto {
    /// Encode pixels as a JPEG data URL at the given quality
    pub fn from_image(image: &DynamicImage, quality: u8) -> Result<Self, PhotoError> {
        let rgb = image.to_rgb8();
        let mut jpeg = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, quality);
        encoder
            .encode_image(&rgb)
            .map_err(PhotoError::EncodeFailed)?;

        Ok(Self(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(&jpeg))))
    }

    /// Wrap an existing data URL. Only the scheme prefix is checked; the
    /// payload is validated when it is decoded.
    pub fn from_data_url(url: impl Into<String>) -> Result<Self, PhotoError> {
        let url = url.into();
        if !url.starts_with(DATA_URL_PREFIX) {
            return Err(PhotoError::InvalidPayload);
        }
        Ok(Self(url))
    }

    /// Decode back into pixels, e.g. for cropping
    pub fn decode(&self) -> Result<DynamicImage, PhotoError> {
        let b64 = self
            .0
            .strip_prefix(DATA_URL_PREFIX)
            .ok_or(PhotoError::InvalidPayload)?;
        let jpeg = STANDARD
            .decode(b64)
            .map_err(|_| PhotoError::InvalidPayload)?;
        image::load_from_memory(&jpeg).map_err(PhotoError::DecodeFailed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    #[test]
    fn test_encode_produces_data_url() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            8,
            8,
            image::Rgba([200, 100, 50, 255]),
        ));
        let photo = EncodedPhoto::from_image(&img, 85).unwrap();
        assert!(photo.as_str().starts_with("data:image/jpeg;base64,"));
    }

    #[test]
    fn test_roundtrip_preserves_dimensions() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            20,
            10,
            image::Rgba([10, 20, 30, 255]),
        ));
        let photo = EncodedPhoto::from_image(&img, 85).unwrap();

        let decoded = photo.decode().unwrap();
        assert_eq!(decoded.width(), 20);
        assert_eq!(decoded.height(), 10);
    }

    #[test]
    fn test_rejects_foreign_payload() {
        assert!(EncodedPhoto::from_data_url("https://example.com/a.jpg").is_err());

        let bogus = EncodedPhoto::from_data_url("data:image/jpeg;base64,!!!").unwrap();
        assert!(bogus.decode().is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let photo = EncodedPhoto::from_data_url("data:image/jpeg;base64,QUJD").unwrap();
        let json = serde_json::to_string(&photo).unwrap();
        assert_eq!(json, "\"data:image/jpeg;base64,QUJD\"");

        let back: EncodedPhoto = serde_json::from_str(&json).unwrap();
        assert_eq!(back, photo);
    }
}
