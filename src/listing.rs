/// Listing draft domain model
///
/// Contains the in-progress listing record with catalogs, defaults, and
/// clamped mutators. The draft is owned by the wizard flow; step views
/// mutate it only through the flow's updater methods.
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use unicode_normalization::UnicodeNormalization;

use crate::error::FlowError;
use crate::photos::EncodedPhoto;

/// Maximum title length, enforced at input time
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum description length, enforced at input time
pub const DESCRIPTION_MAX_CHARS: usize = 500;

/// Nightly price bounds in whole currency units
pub const PRICE_MIN: u32 = 10;
pub const PRICE_MAX: u32 = 10_000;

/// Quick-select price points shown on the pricing step
pub const PRICE_PRESETS: [u32; 5] = [50, 75, 100, 150, 200];

/// Upper bound for all capacity counters
pub const COUNTER_MAX: u32 = 16;

/// Property type offered on step 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    House,
    Apartment,
    Guesthouse,
    Hotel,
}

impl PropertyType {
    pub fn label(&self) -> &'static str {
        match self {
            PropertyType::House => "House",
            PropertyType::Apartment => "Apartment",
            PropertyType::Guesthouse => "Guesthouse",
            PropertyType::Hotel => "Hotel",
        }
    }

    pub fn all() -> [PropertyType; 4] {
        [
            PropertyType::House,
            PropertyType::Apartment,
            PropertyType::Guesthouse,
            PropertyType::Hotel,
        ]
    }
}

/// Kind of space guests get, offered on step 2
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaceType {
    Entire,
    Room,
    Shared,
}

impl PlaceType {
    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::Entire => "An entire place",
            PlaceType::Room => "A room",
            PlaceType::Shared => "A shared room",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PlaceType::Entire => "Guests have the whole place to themselves",
            PlaceType::Room => {
                "Guests have their own room in a home, plus access to shared spaces"
            }
            PlaceType::Shared => {
                "Guests sleep in a room or common area that may be shared with you or others"
            }
        }
    }

    pub fn all() -> [PlaceType; 3] {
        [PlaceType::Entire, PlaceType::Room, PlaceType::Shared]
    }
}

/// One entry in the amenity catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amenity {
    pub id: &'static str,
    pub label: &'static str,
}

/// Amenities offered on step 5. Membership is stored by id.
pub const AMENITIES: [Amenity; 16] = [
    Amenity { id: "wifi", label: "Wifi" },
    Amenity { id: "tv", label: "TV" },
    Amenity { id: "kitchen", label: "Kitchen" },
    Amenity { id: "washer", label: "Washer" },
    Amenity { id: "parking", label: "Free parking" },
    Amenity { id: "ac", label: "Air conditioning" },
    Amenity { id: "workspace", label: "Dedicated workspace" },
    Amenity { id: "pool", label: "Pool" },
    Amenity { id: "hottub", label: "Hot tub" },
    Amenity { id: "patio", label: "Patio" },
    Amenity { id: "bbq", label: "BBQ grill" },
    Amenity { id: "firepit", label: "Fire pit" },
    Amenity { id: "gym", label: "Gym" },
    Amenity { id: "breakfast", label: "Breakfast" },
    Amenity { id: "smoking", label: "Smoking allowed" },
    Amenity { id: "pets", label: "Pets allowed" },
];

/// Look up an amenity by id
pub fn amenity_by_id(id: &str) -> Option<&'static Amenity> {
    AMENITIES.iter().find(|a| a.id == id)
}

/// Where the place is, collected on step 3
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
}

impl Location {
    pub fn is_complete(&self) -> bool {
        !self.address.is_empty() && !self.city.is_empty() && !self.country.is_empty()
    }
}

/// Capacity counter identifiers for the basics step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BasicsField {
    Guests,
    Bedrooms,
    Beds,
    Bathrooms,
}

impl BasicsField {
    pub fn label(&self) -> &'static str {
        match self {
            BasicsField::Guests => "Guests",
            BasicsField::Bedrooms => "Bedrooms",
            BasicsField::Beds => "Beds",
            BasicsField::Bathrooms => "Bathrooms",
        }
    }

    /// Lower bound for this counter. Guests and beds can never reach zero.
    pub fn min(&self) -> u32 {
        match self {
            BasicsField::Guests | BasicsField::Beds => 1,
            BasicsField::Bedrooms | BasicsField::Bathrooms => 0,
        }
    }
}

fn default_guests() -> u32 {
    4
}

fn default_one() -> u32 {
    1
}

/// Capacity counters collected on step 4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Basics {
    #[serde(default = "default_guests")]
    pub guests: u32,
    #[serde(default = "default_one")]
    pub bedrooms: u32,
    #[serde(default = "default_one")]
    pub beds: u32,
    #[serde(default = "default_one")]
    pub bathrooms: u32,
}

impl Default for Basics {
    fn default() -> Self {
        Self {
            guests: default_guests(),
            bedrooms: 1,
            beds: 1,
            bathrooms: 1,
        }
    }
}

impl Basics {
    fn value_mut(&mut self, field: BasicsField) -> &mut u32 {
        match field {
            BasicsField::Guests => &mut self.guests,
            BasicsField::Bedrooms => &mut self.bedrooms,
            BasicsField::Beds => &mut self.beds,
            BasicsField::Bathrooms => &mut self.bathrooms,
        }
    }

    pub fn value(&self, field: BasicsField) -> u32 {
        match field {
            BasicsField::Guests => self.guests,
            BasicsField::Bedrooms => self.bedrooms,
            BasicsField::Beds => self.beds,
            BasicsField::Bathrooms => self.bathrooms,
        }
    }

    /// Increment a counter, saturating at the shared upper bound
    pub fn increment(&mut self, field: BasicsField) {
        let value = self.value_mut(field);
        *value = (*value + 1).min(COUNTER_MAX);
    }

    /// Decrement a counter, saturating at the field's lower bound
    pub fn decrement(&mut self, field: BasicsField) {
        let min = field.min();
        let value = self.value_mut(field);
        *value = value.saturating_sub(1).max(min);
    }
}

fn default_base_price() -> u32 {
    100
}

fn default_currency() -> String {
    "USD".to_string()
}

/// Nightly pricing collected on step 9
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pricing {
    #[serde(default = "default_base_price")]
    pub base_price: u32,
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for Pricing {
    fn default() -> Self {
        Self {
            base_price: default_base_price(),
            currency: default_currency(),
        }
    }
}

impl Pricing {
    /// Adjust the nightly price by a signed amount, clamped to the
    /// allowed range. Decrementing from the minimum stays at the minimum.
    pub fn adjust(&mut self, amount: i32) {
        let adjusted = self.base_price as i64 + amount as i64;
        self.base_price = adjusted.clamp(PRICE_MIN as i64, PRICE_MAX as i64) as u32;
    }

    /// Set the nightly price directly, clamped to the allowed range
    pub fn set_base_price(&mut self, price: u32) {
        self.base_price = price.clamp(PRICE_MIN, PRICE_MAX);
    }

    pub fn breakdown(&self) -> PriceBreakdown {
        PriceBreakdown::for_base_price(self.base_price)
    }
}

/// Fee breakdown shown on the pricing and review steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceBreakdown {
    pub base_price: u32,
    pub guest_service_fee: u32,
    pub guest_total: u32,
    pub host_service_fee: u32,
    pub host_earnings: u32,
}

impl PriceBreakdown {
    /// Guest service fee is 14% of base, host service fee is 3%,
    /// both rounded to whole units.
    pub fn for_base_price(base_price: u32) -> Self {
        let guest_service_fee = (base_price as f64 * 0.14).round() as u32;
        let host_service_fee = (base_price as f64 * 0.03).round() as u32;
        Self {
            base_price,
            guest_service_fee,
            guest_total: base_price + guest_service_fee,
            host_service_fee,
            host_earnings: base_price - host_service_fee,
        }
    }
}

/// The in-progress, not-yet-published listing record.
///
/// Every field carries a serde default so drafts persisted by older
/// versions deserialize with missing fields filled from the documented
/// defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingDraft {
    #[serde(default)]
    pub property_type: Option<PropertyType>,
    #[serde(default)]
    pub place_type: Option<PlaceType>,
    #[serde(default)]
    pub location: Location,
    #[serde(default)]
    pub basics: Basics,
    #[serde(default)]
    pub amenities: BTreeSet<String>,
    #[serde(default)]
    pub photos: Vec<EncodedPhoto>,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub pricing: Pricing,
}

impl Default for ListingDraft {
    fn default() -> Self {
        Self {
            property_type: None,
            place_type: None,
            location: Location::default(),
            basics: Basics::default(),
            amenities: BTreeSet::new(),
            photos: Vec::new(),
            title: String::new(),
            description: String::new(),
            pricing: Pricing::default(),
        }
    }
}

impl ListingDraft {
    /// Set the title, NFC-normalized and truncated to the input cap
    pub fn set_title(&mut self, title: &str) {
        self.title = clamp_text(title, TITLE_MAX_CHARS);
    }

    /// Set the description, NFC-normalized and truncated to the input cap
    pub fn set_description(&mut self, description: &str) {
        self.description = clamp_text(description, DESCRIPTION_MAX_CHARS);
    }

    /// Toggle amenity membership. Returns whether the amenity is now
    /// present. Ids outside the catalog are rejected.
    pub fn toggle_amenity(&mut self, id: &str) -> Result<bool, FlowError> {
        if amenity_by_id(id).is_none() {
            return Err(FlowError::UnknownAmenity(id.to_string()));
        }
        if self.amenities.remove(id) {
            Ok(false)
        } else {
            self.amenities.insert(id.to_string());
            Ok(true)
        }
    }

    /// The photo shown as the primary image. Cover-ness is positional,
    /// never stored.
    pub fn cover_photo(&self) -> Option<&EncodedPhoto> {
        self.photos.first()
    }

    /// Read-only summary for the review step
    pub fn summary(&self) -> ListingSummary {
        ListingSummary {
            property_label: self.property_type.map(|p| p.label()),
            place_label: self.place_type.map(|p| p.label()),
            location_line: if self.location.is_complete() {
                Some(format!(
                    "{}, {}, {}",
                    self.location.address, self.location.city, self.location.country
                ))
            } else {
                None
            },
            capacity_line: format!(
                "{} guests · {} bedrooms · {} beds · {} bathrooms",
                self.basics.guests, self.basics.bedrooms, self.basics.beds, self.basics.bathrooms
            ),
            amenity_labels: self
                .amenities
                .iter()
                .filter_map(|id| amenity_by_id(id).map(|a| a.label))
                .collect(),
            photo_count: self.photos.len(),
            has_cover: !self.photos.is_empty(),
            photos_ready: self.photos.len() >= crate::photos::RECOMMENDED_PHOTOS,
            title: self.title.clone(),
            description: self.description.clone(),
            price: self.pricing.breakdown(),
        }
    }
}

fn clamp_text(input: &str, max_chars: usize) -> String {
    input.nfc().take(max_chars).collect()
}

/// What the review step shows to the host before publishing
#[derive(Debug, Clone)]
pub struct ListingSummary {
    pub property_label: Option<&'static str>,
    pub place_label: Option<&'static str>,
    pub location_line: Option<String>,
    pub capacity_line: String,
    pub amenity_labels: Vec<&'static str>,
    pub photo_count: usize,
    pub has_cover: bool,
    /// Whether the recommended photo count has been reached. A hint
    /// only; the hard gate is one photo.
    pub photos_ready: bool,
    pub title: String,
    pub description: String,
    pub price: PriceBreakdown,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_draft() {
        let draft = ListingDraft::default();
        assert_eq!(draft.basics.guests, 4);
        assert_eq!(draft.basics.bedrooms, 1);
        assert_eq!(draft.basics.beds, 1);
        assert_eq!(draft.basics.bathrooms, 1);
        assert_eq!(draft.pricing.base_price, 100);
        assert_eq!(draft.pricing.currency, "USD");
        assert!(draft.property_type.is_none());
        assert!(draft.photos.is_empty());
    }

    #[test]
    fn test_counter_bounds() {
        let mut basics = Basics::default();

        basics.guests = 1;
        basics.decrement(BasicsField::Guests);
        assert_eq!(basics.guests, 1);

        basics.bedrooms = 0;
        basics.decrement(BasicsField::Bedrooms);
        assert_eq!(basics.bedrooms, 0);

        basics.beds = COUNTER_MAX;
        basics.increment(BasicsField::Beds);
        assert_eq!(basics.beds, COUNTER_MAX);
    }

    #[test]
    fn test_price_clamping() {
        let mut pricing = Pricing::default();

        pricing.base_price = 10;
        pricing.adjust(-5);
        assert_eq!(pricing.base_price, 10);

        pricing.base_price = 9998;
        pricing.adjust(5);
        assert_eq!(pricing.base_price, 10_000);

        pricing.set_base_price(3);
        assert_eq!(pricing.base_price, 10);
    }

    #[test]
    fn test_price_breakdown() {
        let breakdown = PriceBreakdown::for_base_price(100);
        assert_eq!(breakdown.guest_service_fee, 14);
        assert_eq!(breakdown.guest_total, 114);
        assert_eq!(breakdown.host_service_fee, 3);
        assert_eq!(breakdown.host_earnings, 97);
    }

    #[test]
    fn test_text_caps() {
        let mut draft = ListingDraft::default();

        draft.set_title(&"x".repeat(80));
        assert_eq!(draft.title.chars().count(), TITLE_MAX_CHARS);

        draft.set_description(&"y".repeat(600));
        assert_eq!(draft.description.chars().count(), DESCRIPTION_MAX_CHARS);
    }

    #[test]
    fn test_amenity_toggle() {
        let mut draft = ListingDraft::default();

        assert!(draft.toggle_amenity("wifi").unwrap());
        assert!(draft.amenities.contains("wifi"));
        assert!(!draft.toggle_amenity("wifi").unwrap());
        assert!(draft.amenities.is_empty());

        assert!(draft.toggle_amenity("helipad").is_err());
    }

    #[test]
    fn test_partial_deserialization_takes_defaults() {
        let json = r#"{"title":"Cozy flat","basics":{"guests":2}}"#;
        let draft: ListingDraft = serde_json::from_str(json).unwrap();

        assert_eq!(draft.title, "Cozy flat");
        assert_eq!(draft.basics.guests, 2);
        assert_eq!(draft.basics.bedrooms, 1);
        assert_eq!(draft.pricing.base_price, 100);
        assert_eq!(draft.pricing.currency, "USD");
    }

    #[test]
    fn test_property_type_ids() {
        let json = serde_json::to_string(&PropertyType::Guesthouse).unwrap();
        assert_eq!(json, "\"guesthouse\"");

        let place: PlaceType = serde_json::from_str("\"entire\"").unwrap();
        assert_eq!(place, PlaceType::Entire);
    }
}
