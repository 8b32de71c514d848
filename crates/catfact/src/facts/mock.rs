use async_trait::async_trait;
use std::sync::Arc;
use std::sync::Mutex;

use crate::errors::{FactError, FactResult};
use crate::facts::base::FactSource;

/// A mock source that returns pre-configured results for testing
pub struct MockFactSource {
    results: Arc<Mutex<Vec<FactResult<String>>>>,
    calls: Arc<Mutex<usize>>,
}

impl MockFactSource {
    /// Create a new mock source with a sequence of results
    pub fn new(results: Vec<FactResult<String>>) -> Self {
        Self {
            results: Arc::new(Mutex::new(results)),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn calls(&self) -> usize {
        *self.calls.lock().unwrap()
    }
}

#[async_trait]
impl FactSource for MockFactSource {
    async fn fetch(&self) -> FactResult<String> {
        *self.calls.lock().unwrap() += 1;
        let mut results = self.results.lock().unwrap();
        if results.is_empty() {
            // Behave like an upstream that answered without a fact
            Err(FactError::MissingField("fact".to_string()))
        } else {
            results.remove(0)
        }
    }
}
