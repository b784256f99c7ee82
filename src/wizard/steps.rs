/// Wizard step definitions
///
/// Defines the ten sequential steps of the listing-creation flow.

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WizardStep {
    /// What type of property is being listed
    PropertyType,

    /// What kind of space guests get
    PlaceType,

    /// Where the place is
    Location,

    /// Guest capacity counters
    Basics,

    /// Amenity selection (optional)
    Amenities,

    /// Photo upload and arrangement
    Photos,

    /// Listing title
    Title,

    /// Listing description
    Description,

    /// Nightly price
    Pricing,

    /// Final review before publishing
    Review,
}

impl WizardStep {
    /// Short label used by the progress indicator
    pub fn label(&self) -> &'static str {
        match self {
            WizardStep::PropertyType => "Property",
            WizardStep::PlaceType => "Place type",
            WizardStep::Location => "Location",
            WizardStep::Basics => "Basics",
            WizardStep::Amenities => "Amenities",
            WizardStep::Photos => "Photos",
            WizardStep::Title => "Title",
            WizardStep::Description => "Description",
            WizardStep::Pricing => "Pricing",
            WizardStep::Review => "Review",
        }
    }

    /// Heading shown at the top of the step view
    pub fn title(&self) -> &'static str {
        match self {
            WizardStep::PropertyType => "What type of place will guests have?",
            WizardStep::PlaceType => "What type of place will guests have?",
            WizardStep::Location => "Where's your place located?",
            WizardStep::Basics => "Share some basics about your place",
            WizardStep::Amenities => "Tell guests what your place has to offer",
            WizardStep::Photos => "Add some photos of your place",
            WizardStep::Title => "Now, let's give your place a title",
            WizardStep::Description => "Create your description",
            WizardStep::Pricing => "Now, set your price",
            WizardStep::Review => "Review your listing",
        }
    }

    /// Supporting line under the heading
    pub fn subtitle(&self) -> &'static str {
        match self {
            WizardStep::PropertyType => "Choose the option that best describes your place",
            WizardStep::PlaceType => "Choose the type of space guests will stay in",
            WizardStep::Location => {
                "Your address is only shared with guests after they've made a reservation"
            }
            WizardStep::Basics => "You'll add more details later, like bed types",
            WizardStep::Amenities => "You can add more amenities after you publish",
            WizardStep::Photos => {
                "You'll need 5 photos to get started. You can add more or make changes later."
            }
            WizardStep::Title => {
                "Short titles work best. Have fun with it—you can always change it later."
            }
            WizardStep::Description => "Share what makes your place special.",
            WizardStep::Pricing => "You can change it anytime.",
            WizardStep::Review => "Here's what we'll show to guests. Make sure everything looks good.",
        }
    }

    /// Get step number (1-indexed)
    pub fn number(&self) -> u8 {
        match self {
            WizardStep::PropertyType => 1,
            WizardStep::PlaceType => 2,
            WizardStep::Location => 3,
            WizardStep::Basics => 4,
            WizardStep::Amenities => 5,
            WizardStep::Photos => 6,
            WizardStep::Title => 7,
            WizardStep::Description => 8,
            WizardStep::Pricing => 9,
            WizardStep::Review => 10,
        }
    }

    /// Look up a step by its 1-indexed number
    pub fn from_number(number: u8) -> Option<WizardStep> {
        Self::all_steps().into_iter().find(|s| s.number() == number)
    }

    /// Get total number of steps
    pub fn total_steps() -> u8 {
        10
    }

    /// Check if this is the first step
    pub fn is_first(&self) -> bool {
        matches!(self, WizardStep::PropertyType)
    }

    /// Check if this is the last step
    pub fn is_last(&self) -> bool {
        matches!(self, WizardStep::Review)
    }

    /// Get next step
    pub fn next(&self) -> Option<WizardStep> {
        Self::from_number(self.number() + 1)
    }

    /// Get previous step
    pub fn previous(&self) -> Option<WizardStep> {
        self.number().checked_sub(1).and_then(Self::from_number)
    }

    /// Get all steps in order
    pub fn all_steps() -> [WizardStep; 10] {
        [
            WizardStep::PropertyType,
            WizardStep::PlaceType,
            WizardStep::Location,
            WizardStep::Basics,
            WizardStep::Amenities,
            WizardStep::Photos,
            WizardStep::Title,
            WizardStep::Description,
            WizardStep::Pricing,
            WizardStep::Review,
        ]
    }

    /// Completed fraction of the flow, for the progress bar
    pub fn progress(&self) -> f32 {
        self.number() as f32 / Self::total_steps() as f32
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        WizardStep::PropertyType
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}
