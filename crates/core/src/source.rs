use crate::domain::ProfileStatistics;
use crate::error::FetchError;
use async_trait::async_trait;

/// Anything able to resolve a URL into profile statistics.
///
/// Native sources must be `Send` so submits can run on a multi-threaded
/// runtime; in the browser everything lives on one thread.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait StatsSource {
    async fn fetch(&self, url: &str) -> Result<ProfileStatistics, FetchError>;
}

