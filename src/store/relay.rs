//! Relay endpoint store
//!
//! A relay is a small web app sitting next to the sheet (an Apps Script
//! deployment in practice). It answers `GET <url>?id=<id>` with the matched
//! row as a flat JSON object, or with `{"error": "..."}` and HTTP 200 when
//! it has nothing to return.

use super::RecordStore;
use super::constants::{RELAY_ERROR_KEY, relay_url};
use super::http::{cell_to_string, get_json};
use crate::error::{LookupError, LookupResult};
use crate::record::Record;
use async_trait::async_trait;
use log::{debug, warn};
use serde_json::Value;

pub struct RelayStore {
    url: String,
    http: reqwest::Client,
}

impl RelayStore {
    pub fn new(url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            http,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl RecordStore for RelayStore {
    fn name(&self) -> &str {
        "relay"
    }

    async fn fetch(&self, id: &str) -> LookupResult<Record> {
        let url = relay_url(&self.url, id);
        let body = get_json(&self.http, &url).await?;
        parse_relay_body(id, body)
    }
}

/// Turn a relay response body into a row.
///
/// The relay folds every failure into one `error` payload, so a truthy
/// `error` value is reported as "not found" with the relay's message
/// attached. A falsy one (`""`, `false`, `0`, `null`) is an ordinary column.
pub fn parse_relay_body(id: &str, body: Value) -> LookupResult<Record> {
    let Value::Object(fields) = body else {
        return Err(LookupError::Transport(
            "relay response is not a JSON object".to_string(),
        ));
    };

    if let Some(error) = fields.get(RELAY_ERROR_KEY).filter(|v| is_truthy(v)) {
        let message = cell_to_string(error);
        warn!("Relay returned an error for '{}': {}", id, message);
        return Err(LookupError::NotFound {
            id: id.to_string(),
            message,
        });
    }

    let record: Record = fields
        .iter()
        .map(|(header, value)| (header.clone(), cell_to_string(value)))
        .collect();
    debug!("Relay returned {} fields", record.len());
    Ok(record)
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
