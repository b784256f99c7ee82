/// Wizard flow management
///
/// The flow owns the listing draft and the wizard state, and wires in
/// the injected ports: draft storage, navigation, and the notification
/// hub. Step views mutate the draft only through the updater methods
/// here; every mutation mirrors the progress to storage.
use std::time::Instant;

use crate::error::{FlowError, PhotoError};
use crate::listing::{BasicsField, ListingDraft, ListingSummary, Location, PlaceType, PropertyType};
use crate::navigation::{Destination, Navigator};
use crate::notify::{Notification, NotificationHub};
use crate::photos::{self, BatchOutcome, CropRegion, PhotoCandidate, PhotoPipeline};
use crate::wizard::persistence::{DraftStore, WizardProgress};
use crate::wizard::state::{Direction, WizardState};
use crate::wizard::steps::WizardStep;
use crate::wizard::validation::{self, StepStatus};

/// Navigation result
#[derive(Debug, PartialEq, Eq)]
pub enum NavigationResult {
    /// Transition armed; the step index moves when the animation window
    /// elapses (see [`WizardFlow::tick`])
    Transitioning(WizardStep),

    /// Navigation refused (validation failed, boundary, or busy)
    Blocked(FlowError),

    /// The publish wait started instead of a step change
    Publishing,
}

/// What a tick committed
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Step that became active on this tick, if a transition was due
    pub committed_step: Option<WizardStep>,

    /// Whether the publish wait completed on this tick
    pub published: bool,
}

/// Wizard flow manager
pub struct WizardFlow<S: DraftStore, N: Navigator> {
    draft: ListingDraft,
    state: WizardState,
    store: S,
    navigator: N,
    notifications: NotificationHub,
    pipeline: PhotoPipeline,
    published: bool,
}

impl<S: DraftStore, N: Navigator> WizardFlow<S, N> {
    /// Create a flow, resuming saved progress when the store holds any.
    /// Absent or unreadable progress starts a fresh session with the
    /// intro screen up.
    pub fn new(store: S, navigator: N, notifications: NotificationHub) -> Self {
        let resumed = Self::load_progress(&store);
        let (state, draft) = match resumed {
            Some((step, listing)) => {
                tracing::info!(step = step.number(), "resuming saved draft");
                (WizardState::resumed(step), listing)
            }
            None => (WizardState::new(), ListingDraft::default()),
        };

        Self {
            draft,
            state,
            store,
            navigator,
            notifications,
            pipeline: PhotoPipeline::default(),
            published: false,
        }
    }

    fn load_progress(store: &S) -> Option<(WizardStep, ListingDraft)> {
        let payload = match store.read() {
            Ok(payload) => payload?,
            Err(err) => {
                tracing::warn!(error = %err, "draft store unreadable, starting fresh");
                return None;
            }
        };
        let progress = WizardProgress::from_json(&payload)?;
        match WizardStep::from_number(progress.step) {
            Some(step) => Some((step, progress.listing)),
            None => {
                tracing::warn!(step = progress.step, "saved step out of range, starting fresh");
                None
            }
        }
    }

    // --- accessors ---

    pub fn draft(&self) -> &ListingDraft {
        &self.draft
    }

    pub fn current_step(&self) -> WizardStep {
        self.state.current_step()
    }

    pub fn intro_active(&self) -> bool {
        self.state.intro_active()
    }

    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    pub fn is_publishing(&self) -> bool {
        self.state.is_publishing()
    }

    /// Whether the publish action has completed. The flow is terminal
    /// once this is set.
    pub fn is_published(&self) -> bool {
        self.published
    }

    pub fn notifications(&self) -> &NotificationHub {
        &self.notifications
    }

    /// Whether the active step's requirements are met
    pub fn can_proceed(&self) -> bool {
        validation::is_step_valid(self.current_step(), &self.draft)
    }

    /// Step-dot statuses for the progress indicator
    pub fn step_statuses(&self) -> Vec<(WizardStep, StepStatus)> {
        validation::step_statuses(self.current_step(), &self.draft)
    }

    /// Review-step summary of the draft
    pub fn summary(&self) -> ListingSummary {
        self.draft.summary()
    }

    // --- navigation ---

    /// Leave the intro screen. Only meaningful on a fresh session.
    pub fn start(&mut self) -> Result<(), FlowError> {
        if !self.state.intro_active() {
            return Err(FlowError::NotAtIntro);
        }
        self.state.dismiss_intro();
        tracing::info!("intro dismissed, wizard started");
        Ok(())
    }

    /// Advance to the next step, or start publishing from the review
    /// step. Forward navigation requires the active step to be valid.
    pub fn next(&mut self, now: Instant) -> NavigationResult {
        if let Err(err) = self.ensure_idle() {
            return NavigationResult::Blocked(err);
        }
        if !self.can_proceed() {
            return NavigationResult::Blocked(FlowError::StepInvalid);
        }

        let current = self.current_step();
        match current.next() {
            Some(target) => {
                self.state.begin_transition(Direction::Forward, target, now);
                NavigationResult::Transitioning(target)
            }
            None => {
                self.state.begin_publish(now);
                tracing::info!("publishing listing");
                NavigationResult::Publishing
            }
        }
    }

    /// Go back one step. Always allowed above step 1 when idle.
    pub fn back(&mut self, now: Instant) -> NavigationResult {
        if let Err(err) = self.ensure_idle() {
            return NavigationResult::Blocked(err);
        }

        match self.current_step().previous() {
            Some(target) => {
                self.state.begin_transition(Direction::Backward, target, now);
                NavigationResult::Transitioning(target)
            }
            None => NavigationResult::Blocked(FlowError::AtFirstStep),
        }
    }

    /// Jump to an already-visited step. Skipping ahead is refused.
    pub fn jump_to(&mut self, step: WizardStep, now: Instant) -> NavigationResult {
        if let Err(err) = self.ensure_idle() {
            return NavigationResult::Blocked(err);
        }

        let current = self.current_step();
        if step.number() > current.number() {
            return NavigationResult::Blocked(FlowError::CannotSkipAhead {
                requested: step.number(),
                current: current.number(),
            });
        }

        let direction = if step.number() < current.number() {
            Direction::Backward
        } else {
            Direction::Forward
        };
        self.state.begin_transition(direction, step, now);
        NavigationResult::Transitioning(step)
    }

    fn ensure_idle(&self) -> Result<(), FlowError> {
        if self.state.is_publishing() {
            return Err(FlowError::AlreadyPublishing);
        }
        if self.state.is_animating() {
            return Err(FlowError::Animating);
        }
        Ok(())
    }

    /// Advance the timed machines. Hosts call this from their frame or
    /// timer loop; tests pass explicit instants.
    pub fn tick(&mut self, now: Instant) -> TickOutcome {
        let mut outcome = TickOutcome::default();

        if let Some(step) = self.state.take_due_transition(now) {
            tracing::info!(step = step.number(), label = %step, "step changed");
            self.save();
            outcome.committed_step = Some(step);
        }

        if self.state.publish_due(now) {
            self.state.finish_publish();
            self.complete_publish();
            outcome.published = true;
        }

        outcome
    }

    /// Cancel any pending transition or publish wait, e.g. when the
    /// hosting view unmounts. The saved draft is kept.
    pub fn abandon(&mut self) {
        if self.state.is_publishing() {
            tracing::debug!("publish abandoned before completion");
        }
        self.state.cancel_transition();
        self.state.cancel_publish();
    }

    /// Start over: erase the saved draft and return to a fresh session.
    pub fn reset(&mut self) {
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear saved draft");
        }
        self.draft = ListingDraft::default();
        self.state.reset();
        self.published = false;
        tracing::info!("draft reset");
    }

    fn complete_publish(&mut self) {
        // Publish is unconditionally successful; a failing store clear
        // degrades to a logged warning.
        if let Err(err) = self.store.clear() {
            tracing::warn!(error = %err, "failed to clear saved draft after publish");
        }
        self.published = true;
        self.notifications.publish(
            Notification::success("Congratulations! Your listing is now live!")
                .with_description("Guests can now discover and book your place."),
        );
        self.navigator.navigate(Destination::Confirmation);
        tracing::info!("listing published");
    }

    // --- draft updaters ---

    pub fn set_property_type(&mut self, property_type: PropertyType) {
        self.draft.property_type = Some(property_type);
        self.save();
    }

    pub fn set_place_type(&mut self, place_type: PlaceType) {
        self.draft.place_type = Some(place_type);
        self.save();
    }

    pub fn set_location(&mut self, location: Location) {
        self.draft.location = location;
        self.save();
    }

    pub fn increment_basic(&mut self, field: BasicsField) {
        self.draft.basics.increment(field);
        self.save();
    }

    pub fn decrement_basic(&mut self, field: BasicsField) {
        self.draft.basics.decrement(field);
        self.save();
    }

    /// Toggle amenity membership; returns whether it is now selected
    pub fn toggle_amenity(&mut self, id: &str) -> Result<bool, FlowError> {
        let selected = self.draft.toggle_amenity(id)?;
        self.save();
        Ok(selected)
    }

    pub fn set_title(&mut self, title: &str) {
        self.draft.set_title(title);
        self.save();
    }

    pub fn set_description(&mut self, description: &str) {
        self.draft.set_description(description);
        self.save();
    }

    /// Adjust the nightly price by a signed amount (the pricing step
    /// uses ±5), clamped to the allowed range
    pub fn adjust_price(&mut self, amount: i32) {
        self.draft.pricing.adjust(amount);
        self.save();
    }

    /// Select one of the preset price points
    pub fn set_price(&mut self, price: u32) {
        self.draft.pricing.set_base_price(price);
        self.save();
    }

    // --- photo pipeline ---

    /// Run one ingestion batch and append the results to the draft.
    /// Outcomes are surfaced through the notification hub: one success
    /// with the count added, one warning if capacity dropped candidates,
    /// and one error per rejected file.
    pub fn add_photos(&mut self, candidates: Vec<PhotoCandidate>) -> BatchOutcome {
        let outcome = self
            .pipeline
            .process_batch(self.draft.photos.len(), candidates);

        for rejected in &outcome.rejected {
            self.notifications.publish(
                Notification::error(format!("Couldn't add {}", rejected.name))
                    .with_description(rejected.reason.to_string()),
            );
        }

        if outcome.dropped_over_capacity > 0 {
            self.notifications.publish(
                Notification::warning("Photo limit reached").with_description(format!(
                    "{} photo(s) were not added; listings hold up to {}.",
                    outcome.dropped_over_capacity,
                    photos::MAX_PHOTOS
                )),
            );
        }

        if outcome.added() > 0 {
            self.draft.photos.extend(outcome.accepted.iter().cloned());
            self.notifications
                .publish(Notification::success(format!(
                    "{} photo(s) added",
                    outcome.added()
                )));
            self.save();
        }

        outcome
    }

    /// Crop one photo in place; its position is unchanged
    pub fn crop_photo(&mut self, index: usize, region: CropRegion) -> Result<(), PhotoError> {
        let photo = self
            .draft
            .photos
            .get(index)
            .ok_or(PhotoError::IndexOutOfBounds {
                index,
                len: self.draft.photos.len(),
            })?;
        let cropped = photos::crop_photo(photo, region)?;
        self.draft.photos[index] = cropped;
        self.save();
        Ok(())
    }

    /// Move a photo to a new position; position 0 becomes the cover
    pub fn reorder_photos(&mut self, from: usize, to: usize) -> Result<(), PhotoError> {
        photos::reorder(&mut self.draft.photos, from, to)?;
        self.save();
        Ok(())
    }

    /// Remove a photo; later photos shift down
    pub fn remove_photo(&mut self, index: usize) -> Result<(), PhotoError> {
        photos::remove(&mut self.draft.photos, index)?;
        self.save();
        Ok(())
    }

    // --- persistence side effect ---

    fn save(&self) {
        let progress = WizardProgress {
            step: self.current_step().number(),
            listing: self.draft.clone(),
        };
        let payload = match progress.to_json() {
            Ok(payload) => payload,
            Err(err) => {
                tracing::warn!(error = %err, "failed to serialize draft");
                return;
            }
        };
        if let Err(err) = self.store.write(&payload) {
            tracing::warn!(error = %err, "failed to save draft");
        }
    }
}
