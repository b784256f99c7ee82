/// Per-step validity
///
/// Each step's validity is a pure function of the draft alone. It gates
/// forward navigation and feeds the step-dot progress indicator;
/// navigation history never affects the verdict.
use crate::listing::ListingDraft;
use crate::wizard::steps::WizardStep;

/// Minimum title length before the title step is complete
pub const TITLE_MIN_CHARS: usize = 5;

/// Minimum description length before the description step is complete
pub const DESCRIPTION_MIN_CHARS: usize = 20;

/// Whether the given step's requirements are met by the draft
pub fn is_step_valid(step: WizardStep, draft: &ListingDraft) -> bool {
    match step {
        WizardStep::PropertyType => draft.property_type.is_some(),
        WizardStep::PlaceType => draft.place_type.is_some(),
        WizardStep::Location => draft.location.is_complete(),
        WizardStep::Basics => draft.basics.guests > 0,
        WizardStep::Amenities => true, // Amenities are optional
        WizardStep::Photos => !draft.photos.is_empty(),
        WizardStep::Title => draft.title.chars().count() >= TITLE_MIN_CHARS,
        WizardStep::Description => draft.description.chars().count() >= DESCRIPTION_MIN_CHARS,
        WizardStep::Pricing => draft.pricing.base_price >= crate::listing::PRICE_MIN,
        WizardStep::Review => true,
    }
}

/// Step-dot state for the progress indicator.
///
/// A previously visited step can be `Incomplete` (its requirements no
/// longer hold); the indicator lets the user see and revisit it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    /// The active step
    Current,
    /// Ahead of the active step; not yet visitable
    Upcoming,
    /// Behind the active step with its requirements met
    Complete,
    /// Behind the active step with its requirements unmet
    Incomplete,
}

/// Status of one step relative to the active step and the draft
pub fn step_status(step: WizardStep, active: WizardStep, draft: &ListingDraft) -> StepStatus {
    if step == active {
        StepStatus::Current
    } else if step.number() > active.number() {
        StepStatus::Upcoming
    } else if is_step_valid(step, draft) {
        StepStatus::Complete
    } else {
        StepStatus::Incomplete
    }
}

/// Statuses for all ten steps, in order
pub fn step_statuses(active: WizardStep, draft: &ListingDraft) -> Vec<(WizardStep, StepStatus)> {
    WizardStep::all_steps()
        .into_iter()
        .map(|step| (step, step_status(step, active, draft)))
        .collect()
}
