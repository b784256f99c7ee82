// Integration tests for the listing wizard
// These tests drive the public API the way a hosting UI would.

use std::io::Cursor;
use std::time::Instant;

use image::{DynamicImage, Rgba, RgbaImage};

use listing_wizard::wizard::{
    DraftStore, MemoryStore, NavigationResult, WizardProgress, PUBLISH_DELAY, STEP_TRANSITION,
};
use listing_wizard::{
    Destination, Location, NotificationHub, PhotoCandidate, PlaceType, PropertyType,
    RecordingNavigator, Severity, WizardFlow, WizardStep,
};

/// Helper to create a PNG candidate of the given size
fn png_candidate(name: &str, width: u32, height: u32) -> PhotoCandidate {
    let img = RgbaImage::from_pixel(width, height, Rgba([140, 120, 100, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .unwrap();
    PhotoCandidate::new(name, bytes)
}

/// Helper to advance one step and commit the transition
fn advance(flow: &mut WizardFlow<MemoryStore, RecordingNavigator>, now: Instant) -> Instant {
    match flow.next(now) {
        NavigationResult::Transitioning(_) => {}
        other => panic!("expected a step transition, got {other:?}"),
    }
    let later = now + STEP_TRANSITION;
    flow.tick(later);
    later
}

#[test]
fn test_end_to_end_publish() {
    let store = MemoryStore::new();
    let navigator = RecordingNavigator::new();
    let hub = NotificationHub::new();
    let (toasts, _id) = hub.subscribe();

    let mut flow = WizardFlow::new(store.clone(), navigator.clone(), hub);

    assert!(flow.intro_active());
    flow.start().unwrap();

    let mut now = Instant::now();

    flow.set_property_type(PropertyType::House);
    now = advance(&mut flow, now);

    flow.set_place_type(PlaceType::Entire);
    now = advance(&mut flow, now);

    flow.set_location(Location {
        address: "1 Main St".to_string(),
        city: "Paris".to_string(),
        country: "France".to_string(),
    });
    now = advance(&mut flow, now);

    // Basics stay at their defaults
    now = advance(&mut flow, now);

    // Amenities are optional
    now = advance(&mut flow, now);

    let outcome = flow.add_photos(vec![png_candidate("flat.png", 800, 600)]);
    assert_eq!(outcome.added(), 1);
    now = advance(&mut flow, now);

    flow.set_title("Cozy flat in Paris");
    now = advance(&mut flow, now);

    flow.set_description("A lovely place to stay");
    assert_eq!(flow.draft().description.chars().count(), 22);
    now = advance(&mut flow, now);

    // Price stays at the default 100
    now = advance(&mut flow, now);
    assert_eq!(flow.current_step(), WizardStep::Review);

    // Publishing runs the simulated delay, then clears the saved draft,
    // fires a success toast, and navigates to the confirmation view.
    assert_eq!(flow.next(now), NavigationResult::Publishing);
    assert!(flow.is_publishing());
    assert!(store.read().unwrap().is_some());

    let outcome = flow.tick(now + PUBLISH_DELAY);
    assert!(outcome.published);
    assert!(flow.is_published());
    assert!(store.read().unwrap().is_none());

    let success: Vec<_> = toasts
        .try_iter()
        .filter(|n| n.severity == Severity::Success)
        .collect();
    assert!(success
        .iter()
        .any(|n| n.message == "Congratulations! Your listing is now live!"));

    assert_eq!(navigator.visits(), vec![Destination::Confirmation]);
}

#[test]
fn test_resume_fills_missing_fields_with_defaults() {
    let store = MemoryStore::with_payload(
        r#"{
            "step": 4,
            "listing": {
                "propertyType": "house",
                "placeType": "entire",
                "location": {"address": "1 Main St", "city": "Paris", "country": "France"}
            }
        }"#,
    );

    let flow = WizardFlow::new(store, RecordingNavigator::new(), NotificationHub::new());

    assert!(!flow.intro_active());
    assert_eq!(flow.current_step(), WizardStep::Basics);
    assert_eq!(flow.draft().property_type, Some(PropertyType::House));
    assert_eq!(flow.draft().basics.guests, 4);
    assert_eq!(flow.draft().pricing.base_price, 100);
    assert_eq!(flow.draft().pricing.currency, "USD");
}

#[test]
fn test_capacity_limit_with_warning() {
    let hub = NotificationHub::new();
    let (toasts, _id) = hub.subscribe();
    let mut flow = WizardFlow::new(MemoryStore::new(), RecordingNavigator::new(), hub);
    flow.start().unwrap();

    let first: Vec<_> = (0..8)
        .map(|i| png_candidate(&format!("a{i}.png"), 60, 40))
        .collect();
    assert_eq!(flow.add_photos(first).added(), 8);

    let second: Vec<_> = (0..4)
        .map(|i| png_candidate(&format!("b{i}.png"), 60, 40))
        .collect();
    let outcome = flow.add_photos(second);

    assert_eq!(outcome.added(), 2);
    assert_eq!(outcome.dropped_over_capacity, 2);
    assert_eq!(flow.draft().photos.len(), 10);

    assert!(toasts
        .try_iter()
        .any(|n| n.severity == Severity::Warning && n.message == "Photo limit reached"));
}

#[test]
fn test_reorder_and_remove_through_flow() {
    let mut flow = WizardFlow::new(
        MemoryStore::new(),
        RecordingNavigator::new(),
        NotificationHub::new(),
    );
    flow.start().unwrap();

    flow.add_photos(vec![
        png_candidate("a.png", 30, 30),
        png_candidate("b.png", 40, 40),
        png_candidate("c.png", 50, 50),
    ]);

    let widths = |flow: &WizardFlow<MemoryStore, RecordingNavigator>| -> Vec<u32> {
        flow.draft()
            .photos
            .iter()
            .map(|p| p.decode().unwrap().width())
            .collect()
    };
    assert_eq!(widths(&flow), vec![30, 40, 50]);

    // Promote the last photo to cover
    flow.reorder_photos(2, 0).unwrap();
    assert_eq!(widths(&flow), vec![50, 30, 40]);

    // Remove the cover; the next photo takes its place
    flow.remove_photo(0).unwrap();
    assert_eq!(widths(&flow), vec![30, 40]);

    assert!(flow.remove_photo(7).is_err());
}

#[test]
fn test_price_adjustment_clamps_at_minimum() {
    let mut flow = WizardFlow::new(
        MemoryStore::new(),
        RecordingNavigator::new(),
        NotificationHub::new(),
    );
    flow.start().unwrap();

    flow.set_price(10);
    flow.adjust_price(-5);
    assert_eq!(flow.draft().pricing.base_price, 10);

    flow.set_price(9_999);
    flow.adjust_price(5);
    assert_eq!(flow.draft().pricing.base_price, 10_000);
}

#[test]
fn test_jump_ahead_is_refused_jump_back_allowed() {
    let mut flow = WizardFlow::new(
        MemoryStore::new(),
        RecordingNavigator::new(),
        NotificationHub::new(),
    );
    flow.start().unwrap();
    flow.set_property_type(PropertyType::Apartment);

    let mut now = Instant::now();
    now = advance(&mut flow, now);
    flow.set_place_type(PlaceType::Room);
    now = advance(&mut flow, now);
    assert_eq!(flow.current_step(), WizardStep::Location);

    assert!(matches!(
        flow.jump_to(WizardStep::Pricing, now),
        NavigationResult::Blocked(_)
    ));
    assert_eq!(flow.current_step(), WizardStep::Location);

    assert!(matches!(
        flow.jump_to(WizardStep::PropertyType, now),
        NavigationResult::Transitioning(WizardStep::PropertyType)
    ));
    flow.tick(now + STEP_TRANSITION);
    assert_eq!(flow.current_step(), WizardStep::PropertyType);
}

#[test]
fn test_saved_draft_tracks_every_change() {
    let store = MemoryStore::new();
    let mut flow = WizardFlow::new(
        store.clone(),
        RecordingNavigator::new(),
        NotificationHub::new(),
    );
    flow.start().unwrap();

    flow.set_property_type(PropertyType::Guesthouse);
    flow.set_title("Garden guesthouse");

    let progress =
        WizardProgress::from_json(&store.read().unwrap().expect("saved draft")).unwrap();
    assert_eq!(progress.step, 1);
    assert_eq!(progress.listing.property_type, Some(PropertyType::Guesthouse));
    assert_eq!(progress.listing.title, "Garden guesthouse");
}
