/// Photo pipeline module
///
/// Ingests candidate image files, normalizes them to bounded JPEG
/// payloads, and maintains the ordered photo sequence for the listing
/// draft.
///
/// ## Architecture
///
/// ```text
/// PhotoPipeline
///   ├── PhotoCandidate (name + raw bytes, type sniffed)
///   ├── BatchOutcome (accepted photos, per-file rejections, capacity drops)
///   ├── EncodedPhoto (JPEG data URL payload)
///   └── crop / reorder / remove (in-place sequence edits)
/// ```
///
/// The sequence is capped at [`MAX_PHOTOS`]; position 0 is the cover
/// photo. Cover-ness is derived from position, never stored.

pub mod crop;
pub mod encode;
pub mod pipeline;

// Re-export commonly used types
pub use crop::{crop_photo, CropAspect, CropRegion};
pub use encode::EncodedPhoto;
pub use pipeline::{
    remove, reorder, BatchOutcome, PhotoCandidate, PhotoPipeline, RejectReason,
    RejectedCandidate, JPEG_QUALITY, MAX_CANDIDATE_BYTES, MAX_PHOTOS, MAX_PHOTO_WIDTH,
    RECOMMENDED_PHOTOS,
};
