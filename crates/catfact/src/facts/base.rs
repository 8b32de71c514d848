use async_trait::async_trait;

use crate::errors::FactResult;

/// Base trait for sources of random facts
#[async_trait]
pub trait FactSource: Send + Sync {
    /// Fetch a single fact, making at most one upstream request
    async fn fetch(&self) -> FactResult<String>;
}

/// Fetch a fact from the source, substituting the matching fallback text on failure.
///
/// This never fails: every [`FactError`](crate::errors::FactError) is absorbed here
/// so callers can always serve a response.
pub async fn get_fact(source: &dyn FactSource) -> String {
    match source.fetch().await {
        Ok(fact) => fact,
        Err(err) => {
            tracing::warn!("Serving fallback fact: {}", err);
            err.fallback().to_string()
        }
    }
}
