use catfact::facts::FactSource;
use catfact::profile::UserProfile;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub user: UserProfile,
    pub facts: Arc<dyn FactSource>,
}

impl AppState {
    pub fn new(user: UserProfile, facts: impl FactSource + 'static) -> Self {
        Self {
            user,
            facts: Arc::new(facts),
        }
    }
}
