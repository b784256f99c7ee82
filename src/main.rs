//! Headless walkthrough of the listing wizard.
//!
//! Runs a complete scripted session: fills every step, ingests photos
//! from an optional directory argument (or a generated placeholder),
//! publishes, and logs the notifications a UI would render as toasts.

use std::io::Cursor;
use std::time::Instant;

use anyhow::Context;
use image::{DynamicImage, Rgba, RgbaImage};

use listing_wizard::listing::PRICE_PRESETS;
use listing_wizard::wizard::{JsonFileStore, PUBLISH_DELAY, STEP_TRANSITION};
use listing_wizard::{
    AppResult, BasicsField, CropAspect, CropRegion, Destination, Location, Navigator,
    NotificationHub, PhotoCandidate, PlaceType, PropertyType, WizardFlow,
};

/// Initialize tracing with file rotation
///
/// Logs are written to the `logs/` folder next to the saved draft:
/// - macOS: ~/Library/Application Support/ListingWizard/logs/
/// - Windows: %APPDATA%/ListingWizard/logs/
/// - Linux: ~/.config/ListingWizard/logs/
fn initialize_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let log_dir = dirs::config_dir()
        .map(|dir| dir.join("ListingWizard").join("logs"))
        .unwrap_or_else(|| std::path::PathBuf::from("logs"));

    if let Err(e) = std::fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create log directory: {}", e);
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "listing-wizard.log");

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_target(true);

    let console_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_ansi(true)
        .with_target(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(console_layer)
        .init();
}

/// Navigator that logs requested destinations instead of routing
struct LoggingNavigator;

impl Navigator for LoggingNavigator {
    fn navigate(&self, destination: Destination) {
        tracing::info!(?destination, "navigation requested");
    }
}

/// Load photo candidates from a directory, or synthesize one placeholder
fn load_candidates(dir: Option<&str>) -> AppResult<Vec<PhotoCandidate>> {
    let Some(dir) = dir else {
        return Ok(vec![placeholder_candidate()]);
    };

    let mut candidates = Vec::new();
    for entry in std::fs::read_dir(dir).with_context(|| format!("reading photo dir {dir}"))? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        let bytes = std::fs::read(entry.path())
            .with_context(|| format!("reading {}", entry.path().display()))?;
        candidates.push(PhotoCandidate::new(name, bytes));
    }

    if candidates.is_empty() {
        candidates.push(placeholder_candidate());
    }
    Ok(candidates)
}

fn placeholder_candidate() -> PhotoCandidate {
    let img = RgbaImage::from_pixel(1600, 1000, Rgba([180, 160, 140, 255]));
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(img)
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("placeholder encodes");
    PhotoCandidate::new("placeholder.png", bytes)
}

/// Let a pending step transition play out and commit it
fn settle(flow: &mut WizardFlow<JsonFileStore, LoggingNavigator>) {
    std::thread::sleep(STEP_TRANSITION);
    flow.tick(Instant::now());
}

fn main() -> AppResult<()> {
    initialize_tracing();

    let photo_dir = std::env::args().nth(1);

    let store = JsonFileStore::at_default_location().context("locating draft storage")?;
    tracing::info!(path = %store.path().display(), "draft slot");

    let hub = NotificationHub::new();
    let (toasts, _id) = hub.subscribe();

    let mut flow = WizardFlow::new(store, LoggingNavigator, hub);

    if flow.intro_active() {
        flow.start()?;
    } else {
        tracing::info!(
            step = flow.current_step().number(),
            "found a saved draft, starting over for the walkthrough"
        );
        flow.reset();
        flow.start()?;
    }

    // Step 1-2: property and place type
    flow.set_property_type(PropertyType::House);
    flow.next(Instant::now());
    settle(&mut flow);

    flow.set_place_type(PlaceType::Entire);
    flow.next(Instant::now());
    settle(&mut flow);

    // Step 3: location
    flow.set_location(Location {
        address: "1 Main St".to_string(),
        city: "Paris".to_string(),
        country: "France".to_string(),
    });
    flow.next(Instant::now());
    settle(&mut flow);

    // Step 4: defaults plus one extra bed
    flow.increment_basic(BasicsField::Beds);
    flow.next(Instant::now());
    settle(&mut flow);

    // Step 5: a few amenities
    for amenity in ["wifi", "kitchen", "workspace"] {
        flow.toggle_amenity(amenity)?;
    }
    flow.next(Instant::now());
    settle(&mut flow);

    // Step 6: photos
    let outcome = flow.add_photos(load_candidates(photo_dir.as_deref())?);
    tracing::info!(
        added = outcome.added(),
        rejected = outcome.rejected.len(),
        dropped = outcome.dropped_over_capacity,
        "photo batch finished"
    );

    // Trim the cover to the 16:9 frame the cover slot displays
    let cover_dims = match flow.draft().cover_photo() {
        Some(photo) => {
            let img = photo.decode()?;
            Some((img.width(), img.height()))
        }
        None => None,
    };
    if let Some((width, height)) = cover_dims {
        let ratio = CropAspect::for_slot(0).ratio();
        let crop_height = ((width as f64 / ratio) as u32).min(height);
        flow.crop_photo(0, CropRegion::new(0, 0, width, crop_height))?;
    }

    flow.next(Instant::now());
    settle(&mut flow);

    // Steps 7-9: words and price
    flow.set_title("Cozy flat in Paris");
    flow.next(Instant::now());
    settle(&mut flow);

    flow.set_description("A sunlit one-bedroom a short walk from the river.");
    flow.next(Instant::now());
    settle(&mut flow);

    flow.set_price(PRICE_PRESETS[3]);
    flow.adjust_price(5);
    flow.next(Instant::now());
    settle(&mut flow);

    // Step 10: review, then publish
    let summary = flow.summary();
    tracing::info!(
        title = %summary.title,
        photos = summary.photo_count,
        nightly = summary.price.base_price,
        earns = summary.price.host_earnings,
        "review"
    );

    flow.next(Instant::now());
    std::thread::sleep(PUBLISH_DELAY);
    let outcome = flow.tick(Instant::now());
    anyhow::ensure!(outcome.published, "publish did not complete");

    while let Ok(toast) = toasts.try_recv() {
        tracing::info!(severity = ?toast.severity, message = %toast.message, "toast");
    }

    Ok(())
}
