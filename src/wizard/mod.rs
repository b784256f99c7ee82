/// Listing-creation wizard module
///
/// Drives a host through ten sequential steps from property type to
/// publish, owning the draft and its persistence along the way.
///
/// ## Architecture
///
/// ```text
/// WizardFlow
///   ├── WizardState (active step, intro gate, transition + publish machines)
///   ├── WizardStep (enum of all ten steps)
///   ├── validation (pure per-step predicates, step-dot statuses)
///   └── persistence (DraftStore port, WizardProgress slot)
/// ```
///
/// ## Usage
///
/// ```rust,ignore
/// use listing_wizard::wizard::{WizardFlow, WizardStep};
///
/// let mut flow = WizardFlow::new(store, navigator, hub);
///
/// if flow.intro_active() {
///     flow.start()?;
/// }
///
/// flow.set_property_type(PropertyType::House);
/// flow.next(Instant::now());
/// // ... host timer loop ...
/// flow.tick(Instant::now());
/// ```
///
/// ## Steps
///
/// 1. **PropertyType** - What type of property is being listed
/// 2. **PlaceType** - What kind of space guests get
/// 3. **Location** - Where the place is
/// 4. **Basics** - Guest capacity counters
/// 5. **Amenities** - Amenity selection (optional)
/// 6. **Photos** - Photo upload and arrangement
/// 7. **Title** - Listing title
/// 8. **Description** - Listing description
/// 9. **Pricing** - Nightly price
/// 10. **Review** - Final review, then publish

pub mod flow;
pub mod persistence;
pub mod state;
pub mod steps;
pub mod validation;

// Re-export commonly used types
pub use flow::{NavigationResult, TickOutcome, WizardFlow};
pub use persistence::{DraftStore, JsonFileStore, MemoryStore, WizardProgress};
pub use state::{Direction, PublishState, Transition, WizardState, PUBLISH_DELAY, STEP_TRANSITION};
pub use steps::WizardStep;
pub use validation::{is_step_valid, step_status, step_statuses, StepStatus};
