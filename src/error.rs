use thiserror::Error;

/// Application-level errors using thiserror for structured error handling.
///
/// These errors represent domain-specific failures that can occur while
/// building a listing. They provide context and can be chained with anyhow.

#[derive(Error, Debug)]
pub enum PhotoError {
    #[error("File is not an image")]
    NotAnImage,

    #[error("File is too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("Failed to decode image")]
    DecodeFailed(#[source] image::ImageError),

    #[error("Failed to encode image")]
    EncodeFailed(#[source] image::ImageError),

    #[error("Photo payload is not a valid data URL")]
    InvalidPayload,

    #[error("Photo index out of bounds: {index} (have {len})")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Crop region does not overlap the image")]
    EmptyCrop,
}

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to read draft from {path}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write draft to {path}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to clear draft at {path}")]
    ClearFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("No config directory available on this platform")]
    NoStorageDir,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlowError {
    #[error("Current step is not complete")]
    StepInvalid,

    #[error("A step transition is already in progress")]
    Animating,

    #[error("Already publishing")]
    AlreadyPublishing,

    #[error("Already at the first step")]
    AtFirstStep,

    #[error("Cannot skip ahead to step {requested} from step {current}")]
    CannotSkipAhead { requested: u8, current: u8 },

    #[error("Intro screen is not active")]
    NotAtIntro,

    #[error("Unknown amenity: {0}")]
    UnknownAmenity(String),
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;
