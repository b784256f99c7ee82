//! Listing-creation wizard core for a short-term-rental hosting platform.
//!
//! Two cooperating units:
//!
//! - [`wizard`] is the step state machine: it owns the accumulating
//!   [`listing::ListingDraft`], validates each step, animates transitions,
//!   mirrors progress to an injected store, and runs the simulated
//!   publish action.
//! - [`photos`] is the photo pipeline: it ingests candidate image files,
//!   normalizes them to bounded JPEG payloads, and keeps the ordered
//!   sequence whose first element is the cover photo.
//!
//! Hosts wire in three ports: a [`wizard::DraftStore`] for the saved
//! draft, a [`navigation::Navigator`] for completion routing, and a
//! [`notify::NotificationHub`] for user-facing messages.

pub mod error;
pub mod listing;
pub mod navigation;
pub mod notify;
pub mod photos;
pub mod wizard;

pub use error::{AppResult, FlowError, PhotoError, StoreError};
pub use listing::{
    Amenity, Basics, BasicsField, ListingDraft, ListingSummary, Location, PlaceType,
    PriceBreakdown, Pricing, PropertyType, AMENITIES,
};
pub use navigation::{Destination, Navigator, RecordingNavigator};
pub use notify::{Notification, NotificationHub, Severity};
pub use photos::{
    BatchOutcome, CropAspect, CropRegion, EncodedPhoto, PhotoCandidate, PhotoPipeline,
};
pub use wizard::{NavigationResult, WizardFlow, WizardStep};
