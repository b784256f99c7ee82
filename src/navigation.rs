/// Navigation port
///
/// The wizard never touches routing directly; on completion or reset it
/// asks an injected navigator for a named destination.
use parking_lot::Mutex;
use std::sync::Arc;

/// Named destinations the wizard can request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// Post-publish confirmation view
    Confirmation,
    /// Hosting home
    Home,
}

/// Opaque navigation capability
pub trait Navigator {
    fn navigate(&self, destination: Destination);
}

/// Navigator that records requested destinations. Used by tests and
/// headless hosts.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    visits: Arc<Mutex<Vec<Destination>>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visits(&self) -> Vec<Destination> {
        self.visits.lock().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, destination: Destination) {
        self.visits.lock().push(destination);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_navigator() {
        let navigator = RecordingNavigator::new();
        navigator.navigate(Destination::Confirmation);
        navigator.navigate(Destination::Home);

        assert_eq!(
            navigator.visits(),
            vec![Destination::Confirmation, Destination::Home]
        );
    }

    #[test]
    fn test_clone_shares_recording() {
        let navigator = RecordingNavigator::new();
        let clone = navigator.clone();

        clone.navigate(Destination::Home);
        assert_eq!(navigator.visits(), vec![Destination::Home]);
    }
}
