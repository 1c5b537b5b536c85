use async_trait::async_trait;
use judge_stats_core::{FetchError, ProfileStatistics, StatsSource};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// Statistics fetched with the browser's `fetch`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserStatsSource;

fn transport(value: &JsValue) -> FetchError {
    FetchError::Transport(
        value
            .as_string()
            .unwrap_or_else(|| format!("{value:?}")),
    )
}

#[async_trait(?Send)]
impl StatsSource for BrowserStatsSource {
    async fn fetch(&self, url: &str) -> Result<ProfileStatistics, FetchError> {
        let window = web_sys::window()
            .ok_or_else(|| FetchError::Transport("no browser window".to_string()))?;

        let opts = RequestInit::new();
        opts.set_method("GET");
        opts.set_mode(RequestMode::Cors);

        let request = Request::new_with_str_and_init(url, &opts).map_err(|e| transport(&e))?;

        let response_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| transport(&e))?;
        let response = response_value
            .dyn_into::<Response>()
            .map_err(|e| transport(&e))?;

        if !response.ok() {
            return Err(FetchError::Status(response.status()));
        }

        let text = JsFuture::from(response.text().map_err(|e| transport(&e))?)
            .await
            .map_err(|e| transport(&e))?;
        let body = text
            .as_string()
            .ok_or_else(|| FetchError::Decode("response body is not text".to_string()))?;

        Ok(ProfileStatistics::from_json(&body)?)
    }
}
