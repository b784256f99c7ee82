/// Photo ingestion pipeline
///
/// Accepts candidate image files, validates type and size, normalizes
/// accepted candidates (downscale + JPEG re-encode), and maintains the
/// ordered photo sequence. The first element of the sequence is always
/// the cover photo.
use image::imageops::FilterType;
use image::DynamicImage;
use rayon::prelude::*;

use crate::error::PhotoError;
use crate::photos::encode::EncodedPhoto;

/// Hard cap on the photo sequence length
pub const MAX_PHOTOS: usize = 10;

/// Soft "ready to publish" threshold shown as a hint, never enforced
pub const RECOMMENDED_PHOTOS: usize = 5;

/// Largest accepted candidate file, in bytes (10 MiB)
pub const MAX_CANDIDATE_BYTES: usize = 10 * 1024 * 1024;

/// Photos wider than this are proportionally downscaled
pub const MAX_PHOTO_WIDTH: u32 = 1200;

/// JPEG re-encode quality
pub const JPEG_QUALITY: u8 = 85;

/// A candidate file handed to the pipeline: a name for reporting and the
/// raw bytes. Media type is sniffed from the bytes, never trusted from
/// the name.
#[derive(Debug, Clone)]
pub struct PhotoCandidate {
    pub name: String,
    pub bytes: Vec<u8>,
}

impl PhotoCandidate {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes,
        }
    }
}

/// Why a candidate did not make it into the sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    NotAnImage,
    TooLarge,
    ProcessingFailed,
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::NotAnImage => write!(f, "not an image"),
            RejectReason::TooLarge => write!(f, "too large"),
            RejectReason::ProcessingFailed => write!(f, "could not be processed"),
        }
    }
}

/// A rejected candidate with its reason, reported per file
#[derive(Debug, Clone)]
pub struct RejectedCandidate {
    pub name: String,
    pub reason: RejectReason,
}

/// Result of one ingestion batch.
///
/// The batch is best-effort: candidates that fail to decode or encode are
/// reported here while the rest of the batch still commits.
#[derive(Debug, Default)]
pub struct BatchOutcome {
    /// Processed photos, in submission order
    pub accepted: Vec<EncodedPhoto>,
    /// Per-file rejections, in submission order
    pub rejected: Vec<RejectedCandidate>,
    /// Valid candidates dropped because the sequence was full
    pub dropped_over_capacity: usize,
}

impl BatchOutcome {
    pub fn added(&self) -> usize {
        self.accepted.len()
    }
}

/// Normalizes candidate images into the bounded photo sequence
#[derive(Debug, Clone)]
pub struct PhotoPipeline {
    max_photos: usize,
    max_candidate_bytes: usize,
    max_width: u32,
    quality: u8,
}

impl Default for PhotoPipeline {
    fn default() -> Self {
        Self {
            max_photos: MAX_PHOTOS,
            max_candidate_bytes: MAX_CANDIDATE_BYTES,
            max_width: MAX_PHOTO_WIDTH,
            quality: JPEG_QUALITY,
        }
    }
}

impl PhotoPipeline {
    /// Validate and process one batch of candidates against a sequence
    /// that already holds `current_count` photos.
    ///
    /// Validation order per candidate: media type, then size. Accepted
    /// candidates beyond the remaining capacity are dropped, not
    /// processed. Processing runs in parallel but the output preserves
    /// submission order.
    pub fn process_batch(
        &self,
        current_count: usize,
        candidates: Vec<PhotoCandidate>,
    ) -> BatchOutcome {
        let mut outcome = BatchOutcome::default();
        let mut valid = Vec::new();

        for candidate in candidates {
            match self.validate(&candidate) {
                Ok(()) => valid.push(candidate),
                Err(reason) => {
                    tracing::debug!(name = %candidate.name, %reason, "rejecting photo candidate");
                    outcome.rejected.push(RejectedCandidate {
                        name: candidate.name,
                        reason,
                    });
                }
            }
        }

        let remaining = self.max_photos.saturating_sub(current_count);
        if valid.len() > remaining {
            outcome.dropped_over_capacity = valid.len() - remaining;
            valid.truncate(remaining);
        }

        let processed: Vec<(String, Result<EncodedPhoto, PhotoError>)> = valid
            .into_par_iter()
            .map(|candidate| {
                let result = self.process_one(&candidate.bytes);
                (candidate.name, result)
            })
            .collect();

        for (name, result) in processed {
            match result {
                Ok(photo) => outcome.accepted.push(photo),
                Err(err) => {
                    tracing::warn!(name = %name, error = %err, "photo processing failed");
                    outcome.rejected.push(RejectedCandidate {
                        name,
                        reason: RejectReason::ProcessingFailed,
                    });
                }
            }
        }

        outcome
    }

    fn validate(&self, candidate: &PhotoCandidate) -> Result<(), RejectReason> {
        if image::guess_format(&candidate.bytes).is_err() {
            return Err(RejectReason::NotAnImage);
        }
        if candidate.bytes.len() > self.max_candidate_bytes {
            return Err(RejectReason::TooLarge);
        }
        Ok(())
    }

    fn process_one(&self, bytes: &[u8]) -> Result<EncodedPhoto, PhotoError> {
        let image = image::load_from_memory(bytes).map_err(PhotoError::DecodeFailed)?;
        let image = downscale_to_width(image, self.max_width);
        EncodedPhoto::from_image(&image, self.quality)
    }
}

/// Proportionally downscale so width does not exceed `max_width`.
/// Never upscales.
pub(crate) fn downscale_to_width(image: DynamicImage, max_width: u32) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width <= max_width {
        return image;
    }
    let scaled_height = ((height as u64 * max_width as u64) / width as u64).max(1) as u32;
    image.resize_exact(max_width, scaled_height, FilterType::Triangle)
}

/// Move one photo to a new position, shifting intermediates. Pure
/// permutation: no element is created, destroyed, or mutated.
pub fn reorder(photos: &mut Vec<EncodedPhoto>, from: usize, to: usize) -> Result<(), PhotoError> {
    let len = photos.len();
    if from >= len {
        return Err(PhotoError::IndexOutOfBounds { index: from, len });
    }
    if to >= len {
        return Err(PhotoError::IndexOutOfBounds { index: to, len });
    }
    let photo = photos.remove(from);
    photos.insert(to, photo);
    Ok(())
}

/// Delete one photo; later photos shift down. Removing index 0 makes the
/// next photo the cover implicitly.
pub fn remove(photos: &mut Vec<EncodedPhoto>, index: usize) -> Result<EncodedPhoto, PhotoError> {
    let len = photos.len();
    if index >= len {
        return Err(PhotoError::IndexOutOfBounds { index, len });
    }
    Ok(photos.remove(index))
}
