/// Sentinel-on-failure compatibility layer.
///
/// The original bindings for this service never surfaced request failures:
/// callers got an empty list, `false`, or `-1` instead. `LenientClient`
/// reproduces that contract on top of the typed client for code migrating
/// from those bindings. Precondition errors (missing identity, oversized
/// recent window) still surface, exactly as they did upstream; every
/// swallowed failure is logged.
use tracing::warn;

use crate::client::PhishingClient;
use crate::error::PhishingError;
use crate::types::ChangeRecord;

/// [`PhishingClient`] wrapper with the legacy failure-swallowing contract.
pub struct LenientClient {
    inner: PhishingClient,
}

impl LenientClient {
    pub fn new(inner: PhishingClient) -> Self {
        Self { inner }
    }

    /// Unwrap back into the typed client.
    pub fn into_inner(self) -> PhishingClient {
        self.inner
    }

    /// All listed domains; empty on any request failure.
    pub async fn all_domains(&self) -> Result<Vec<String>, PhishingError> {
        swallow(self.inner.all_domains().await, Vec::new)
    }

    /// Membership check; `false` on any request failure.
    pub async fn check_domain(&self, domain: &str) -> Result<bool, PhishingError> {
        swallow(self.inner.check_domain(domain).await, || false)
    }

    /// Database size; `-1` on any request failure.
    pub async fn db_size(&self) -> Result<i64, PhishingError> {
        swallow(self.inner.db_size().await.map(|n| n as i64), || -1)
    }

    /// Recent change feed; empty on any request failure.
    pub async fn recent_changes(&self, seconds: u64) -> Result<Vec<ChangeRecord>, PhishingError> {
        swallow(self.inner.recent_changes(seconds).await, Vec::new)
    }

    /// Recently added domains; empty on any request failure.
    pub async fn recent_additions(&self, seconds: u64) -> Result<Vec<String>, PhishingError> {
        swallow(self.inner.recent_additions(seconds).await, Vec::new)
    }

    /// Recently removed domains; empty on any request failure.
    pub async fn recent_removals(&self, seconds: u64) -> Result<Vec<String>, PhishingError> {
        swallow(self.inner.recent_removals(seconds).await, Vec::new)
    }
}

/// Collapse request failures to a fallback value, keeping precondition errors.
fn swallow<T>(
    result: Result<T, PhishingError>,
    fallback: impl FnOnce() -> T,
) -> Result<T, PhishingError> {
    match result {
        Ok(value) => Ok(value),
        Err(e) if e.is_precondition() => Err(e),
        Err(e) => {
            warn!(error = %e, "request failed, substituting sentinel value");
            Ok(fallback())
        }
    }
}
