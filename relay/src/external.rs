use std::time::Duration;

use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::errors::RelayError;

pub fn http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder().timeout(timeout).build()
}

/// Appends percent-encoded path segments to `base`.
pub fn endpoint<'a>(
    base: &Url,
    segments: impl IntoIterator<Item = &'a str>,
) -> Result<Url, RelayError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| RelayError::Configuration(format!("{base} cannot be a base url")))?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// JSON when the text parses, the raw text otherwise.
pub fn parse_lenient(text: &str) -> Value {
    serde_json::from_str(text).unwrap_or_else(|_| Value::String(text.to_string()))
}

/// Reads the whole body of a downstream response, failing with the downstream
/// status and payload unless it was a success.
pub async fn read_body(response: Response) -> Result<Value, RelayError> {
    let status = response.status();
    let text = response.text().await?;
    if status.is_success() {
        return Ok(parse_lenient(&text));
    }
    let body = if text.trim().is_empty() {
        Value::String(crate::errors::UNKNOWN_EXTERNAL_ERROR.to_string())
    } else {
        parse_lenient(&text)
    };
    Err(RelayError::ExternalService { status, body })
}
