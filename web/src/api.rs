use http::StatusCode;
use map_core::{decode_locations, CategoryMap, FetchError};

/// One attempt, no retry, no timeout.
pub async fn fetch_locations(url: &str) -> Result<CategoryMap, FetchError> {
    log::debug!("Fetching locations from {url}");
    let response = reqwest::get(url)
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;

    // ensure we've got 2xx status
    let status: StatusCode = response.status();
    if !status.is_success() {
        log::error!("Location request failed with {status}");
        return Err(FetchError::Status {
            status: status.as_u16(),
            reason: status.canonical_reason().unwrap_or_default().to_string(),
        });
    }

    let body = response
        .text()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;
    decode_locations(&body).inspect_err(|err| log::error!("{err}"))
}
