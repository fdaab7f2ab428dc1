use super::constants::{CONNECT_TIMEOUT, USER_AGENT};
use crate::error::{LookupError, LookupResult};
use log::debug;
use serde_json::Value;
use std::time::Duration;

/// Shared HTTP client for the remote stores
pub fn build_client(timeout: Duration) -> LookupResult<reqwest::Client> {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(CONNECT_TIMEOUT.min(timeout))
        .user_agent(USER_AGENT)
        .build()
        .map_err(LookupError::from)
}

/// GET `url` and decode the body as JSON.
///
/// Any non-success status and any body that is not JSON is a transport error.
pub async fn get_json(client: &reqwest::Client, url: &str) -> LookupResult<Value> {
    let response = client.get(url).send().await?;
    let status = response.status();
    debug!("GET {} -> {}", redact_key(url), status);

    if !status.is_success() {
        let reason = status.canonical_reason().unwrap_or("unknown status");
        return Err(LookupError::Transport(format!(
            "{} {}",
            status.as_u16(),
            reason
        )));
    }

    let body = response.text().await?;
    serde_json::from_str(&body)
        .map_err(|e| LookupError::Transport(format!("malformed response body: {}", e)))
}

/// Render a JSON cell the way the sheet shows it
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Hide the API key when logging a URL
fn redact_key(url: &str) -> String {
    match url.find("key=") {
        Some(pos) => {
            let end = url[pos..].find('&').map(|e| pos + e).unwrap_or(url.len());
            format!("{}key=***{}", &url[..pos], &url[end..])
        }
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_to_string() {
        assert_eq!(cell_to_string(&json!("a")), "a");
        assert_eq!(cell_to_string(&json!(123456789)), "123456789");
        assert_eq!(cell_to_string(&json!(true)), "true");
        assert_eq!(cell_to_string(&Value::Null), "");
    }

    #[test]
    fn test_redact_key() {
        assert_eq!(redact_key("http://x/v?key=secret"), "http://x/v?key=***");
        assert_eq!(redact_key("http://x/v?key=secret&a=1"), "http://x/v?key=***&a=1");
        assert_eq!(redact_key("http://x/v?id=1"), "http://x/v?id=1");
    }
}
