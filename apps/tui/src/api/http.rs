use async_trait::async_trait;
use judge_stats_core::{FetchError, ProfileStatistics, StatsSource};

/// Fetches statistics over HTTP. No timeout and no retry: a hung endpoint
/// keeps its submit in flight until the server answers or the app exits.
#[derive(Debug, Clone)]
pub struct HttpStatsSource {
    client: reqwest::Client,
}

impl HttpStatsSource {
    pub fn new() -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl StatsSource for HttpStatsSource {
    async fn fetch(&self, url: &str) -> Result<ProfileStatistics, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        Ok(ProfileStatistics::from_json(&body)?)
    }
}
