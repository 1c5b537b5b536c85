use crate::endpoint::EndpointTemplate;
use crate::error::{FetchError, SubmitError};
use crate::port::UiPort;
use crate::render::ChartRenderer;
use crate::source::StatsSource;
use std::fmt;
use std::str::FromStr;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use thiserror::Error;

/// How overlapping submits are handled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestPolicy {
    /// Every submit runs on its own; the last one to complete wins.
    #[default]
    Concurrent,
    /// Submits wait for the previous one and complete in submit order.
    Serialize,
    /// Every submit runs, but only the most recent one may render.
    LatestOnly,
}

impl RequestPolicy {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Concurrent => "concurrent",
            Self::Serialize => "serialize",
            Self::LatestOnly => "latest",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown request policy `{0}` (expected concurrent, serialize or latest)")]
pub struct UnknownPolicy(pub String);

impl FromStr for RequestPolicy {
    type Err = UnknownPolicy;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "concurrent" => Ok(Self::Concurrent),
            "serialize" | "serial" => Ok(Self::Serialize),
            "latest" | "latest-only" | "cancel-previous" => Ok(Self::LatestOnly),
            other => Err(UnknownPolicy(other.to_string())),
        }
    }
}

impl fmt::Display for RequestPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Rendered,
    Failed(FetchError),
    /// A newer submit started before this one completed.
    Superseded,
}

/// Owns the submit operation: validate, fetch, render, toggle loading.
pub struct RequestController<S> {
    source: S,
    endpoint: EndpointTemplate,
    policy: RequestPolicy,
    renderer: Mutex<ChartRenderer>,
    queue: tokio::sync::Mutex<()>,
    generation: AtomicU64,
}

impl<S: StatsSource> RequestController<S> {
    pub fn new(source: S, endpoint: EndpointTemplate, policy: RequestPolicy) -> Self {
        Self {
            source,
            endpoint,
            policy,
            renderer: Mutex::new(ChartRenderer::new()),
            queue: tokio::sync::Mutex::new(()),
            generation: AtomicU64::new(0),
        }
    }

    pub async fn submit<P: UiPort + ?Sized>(
        &self,
        username: &str,
        port: &P,
    ) -> Result<SubmitOutcome, SubmitError> {
        let username = username.trim();
        if username.is_empty() {
            port.alert(&SubmitError::EmptyUsername.to_string());
            return Err(SubmitError::EmptyUsername);
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        port.show_loading();
        port.hide_results();

        let url = self.endpoint.url_for(username);
        tracing::info!(%url, policy = %self.policy, generation, "fetching profile statistics");

        let outcome = match self.policy {
            RequestPolicy::Serialize => {
                let _turn = self.queue.lock().await;
                self.fetch_and_render(&url, generation, port).await
            }
            RequestPolicy::Concurrent | RequestPolicy::LatestOnly => {
                self.fetch_and_render(&url, generation, port).await
            }
        };

        port.hide_loading();
        Ok(outcome)
    }

    async fn fetch_and_render<P: UiPort + ?Sized>(
        &self,
        url: &str,
        generation: u64,
        port: &P,
    ) -> SubmitOutcome {
        let fetched = self.source.fetch(url).await;

        if self.is_superseded(generation) {
            match &fetched {
                Ok(_) => tracing::debug!(%url, generation, "discarding superseded response"),
                Err(error) => {
                    tracing::debug!(%url, generation, %error, "discarding superseded failure");
                }
            }
            return SubmitOutcome::Superseded;
        }

        let stats = match fetched {
            Ok(stats) => stats,
            Err(error) => {
                tracing::error!(%url, %error, "error fetching stats");
                port.report_failure(&error);
                return SubmitOutcome::Failed(error);
            }
        };

        port.show_results();
        match self.renderer.lock() {
            Ok(mut renderer) => renderer.render(&stats, port),
            Err(poisoned) => poisoned.into_inner().render(&stats, port),
        }
        port.clear_input();

        tracing::debug!(%url, ranking = stats.ranking, "profile rendered");
        SubmitOutcome::Rendered
    }

    fn is_superseded(&self, generation: u64) -> bool {
        self.policy == RequestPolicy::LatestOnly
            && self.generation.load(Ordering::SeqCst) != generation
    }

    /// Destroys every chart instance mounted so far.
    pub fn teardown<P: UiPort + ?Sized>(&self, port: &P) {
        match self.renderer.lock() {
            Ok(mut renderer) => renderer.teardown(port),
            Err(poisoned) => poisoned.into_inner().teardown(port),
        }
    }
}
