/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! HTTP transport layer: the single dispatcher every endpoint goes through.
//!
//! A dispatch builds the absolute URL, serializes the body, attaches the
//! three fixed headers, sends the request and classifies the status code
//! into a value or a typed [`Error`]. Each dispatch also produces a
//! [`CallRecord`]; the latest one is kept for introspection.

use crate::method::HttpMethod;
use crate::record::CallRecord;
use ecomail_core::{Config, Error, Result, TransportFault, API_KEY_HEADER};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::Client;
use serde_json::Value;
use std::fmt;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;
use tracing::{debug, error, instrument, warn};
use url::form_urlencoded;

/// How a status code is handled. Closed: every status maps to exactly one class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseClass {
  /// 200, 201, 204: decode the body
  Success,
  /// 400
  BadRequest,
  /// 401
  InvalidCredentials,
  /// 404
  NotFound,
  /// Everything else
  Unknown,
}

impl ResponseClass {
  pub fn from_status(status: u16) -> Self {
    match status {
      200 | 201 | 204 => ResponseClass::Success,
      400 => ResponseClass::BadRequest,
      401 => ResponseClass::InvalidCredentials,
      404 => ResponseClass::NotFound,
      _ => ResponseClass::Unknown,
    }
  }
}

/// Turn a status code and raw body into the dispatch outcome.
///
/// An empty or whitespace-only success body decodes to `Value::Null` rather
/// than failing as `InvalidResponse`, so bodiless 204 replies count as success.
pub fn classify(status: u16, body: &[u8]) -> Result<Value> {
  match ResponseClass::from_status(status) {
    ResponseClass::Success => decode_json(status, body),
    ResponseClass::BadRequest => {
      Err(Error::BadRequest { message: String::from_utf8_lossy(body).into_owned() })
    }
    ResponseClass::InvalidCredentials => Err(Error::InvalidCredentials),
    ResponseClass::NotFound => {
      let message = std::str::from_utf8(body).map(str::to_owned).unwrap_or_default();
      Err(Error::NotFound { message })
    }
    ResponseClass::Unknown => Err(Error::UnknownResponse { status }),
  }
}

// An empty success body (204) decodes to null.
fn decode_json(status: u16, body: &[u8]) -> Result<Value> {
  if body.iter().all(u8::is_ascii_whitespace) {
    return Ok(Value::Null);
  }
  serde_json::from_slice(body).map_err(|source| Error::InvalidResponse { status, source })
}

fn transport_error(err: reqwest::Error) -> Error {
  let kind = if err.is_timeout() {
    TransportFault::Timeout
  } else if err.is_connect() {
    TransportFault::Connect
  } else if err.is_body() || err.is_decode() {
    TransportFault::Body
  } else if err.is_request() || err.is_builder() {
    TransportFault::Request
  } else {
    TransportFault::Other
  };

  Error::Transport { kind, message: err.to_string() }
}

/// Outcome of one dispatch together with its diagnostic record
#[derive(Debug)]
pub struct Exchange {
  pub record: CallRecord,
  pub outcome: Result<Value>,
}

impl Exchange {
  pub fn into_result(self) -> Result<Value> {
    self.outcome
  }
}

/// HTTP transport layer for making requests to the Ecomail API
pub struct Transport {
  client: Client,
  base_url: String,
  headers: HeaderMap,
  timeout: Option<Duration>,
  last_call: Mutex<Option<CallRecord>>,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    // 3xx responses are classified like any other status; following one would
    // also carry the key header to the redirect target.
    let mut builder = Client::builder().redirect(Policy::none());
    if let Some(timeout) = config.timeout {
      builder = builder.timeout(timeout);
    }
    let client =
      builder.build().map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    let mut key = HeaderValue::from_str(config.api_key.expose())
      .map_err(|_| Error::Config("API key is not a valid header value".to_string()))?;
    key.set_sensitive(true);

    let mut headers = HeaderMap::with_capacity(3);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static(API_KEY_HEADER), key);

    Ok(Self {
      client,
      base_url: config.base_url.clone(),
      headers,
      timeout: config.timeout,
      last_call: Mutex::new(None),
    })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    let config = Config::new("test_key")
      .and_then(|c| c.with_base_url("https://mock.ecomailapp.cz"))
      .expect("static mock config is valid");
    Self::new(&config).expect("mock transport builds")
  }

  /// `base_url/path`, plus `?query` when parameters are given.
  ///
  /// Parameters are form-urlencoded in the order supplied.
  pub fn build_url(&self, path: &str, query: Option<&[(&str, &str)]>) -> String {
    let mut url = format!("{}/{}", self.base_url, path);

    if let Some(params) = query {
      let encoded = form_urlencoded::Serializer::new(String::new()).extend_pairs(params).finish();
      url.push('?');
      url.push_str(&encoded);
    }

    url
  }

  /// Send one request and return its outcome plus the full call record.
  ///
  /// Never short-circuits past the record: whatever fails, the returned
  /// record holds what was sent and whatever was received.
  #[instrument(skip_all, fields(method = %method))]
  pub async fn exchange(
    &self,
    method: HttpMethod,
    path: &str,
    query: Option<&[(&str, &str)]>,
    body: Option<Value>,
  ) -> Exchange {
    let url = self.build_url(path, query);
    let mut record = CallRecord::new(method, url, self.headers.clone());

    if let Some(body) = body {
      match serde_json::to_string(&body) {
        Ok(json) => {
          record.body = Some(body);
          record.body_json = Some(json);
        }
        Err(e) => return self.finish(record, Err(Error::Serialize(e))),
      }
    }

    let outcome = self.execute(&mut record).await;
    self.finish(record, outcome)
  }

  /// Send one request and return the decoded response
  pub async fn dispatch(
    &self,
    method: HttpMethod,
    path: &str,
    query: Option<&[(&str, &str)]>,
    body: Option<Value>,
  ) -> Result<Value> {
    self.exchange(method, path, query, body).await.into_result()
  }

  async fn execute(&self, record: &mut CallRecord) -> Result<Value> {
    debug!("Making request to: {} {}", record.method, record.url);

    let mut request =
      self.client.request(record.method.into(), record.url.as_str()).headers(record.headers.clone());
    if let Some(json) = &record.body_json {
      request = request.body(json.clone());
    }

    let response = request.send().await.map_err(|e| {
      error!("Request failed: {}", e);
      transport_error(e)
    })?;

    let status = response.status().as_u16();
    record.status = Some(status);

    let raw = response.bytes().await.map_err(|e| {
      error!("Failed to read response body: {}", e);
      transport_error(e)
    })?;
    debug!("Response status {} with {} bytes", status, raw.len());
    record.response_raw = Some(raw.to_vec());

    let outcome = classify(status, &raw);
    match &outcome {
      Ok(value) => record.response = Some(value.clone()),
      Err(Error::InvalidCredentials) => warn!("API key rejected"),
      Err(e) => debug!("Request classified as failure: {}", e),
    }
    outcome
  }

  fn finish(&self, record: CallRecord, outcome: Result<Value>) -> Exchange {
    *self.last_call.lock().unwrap_or_else(PoisonError::into_inner) = Some(record.clone());
    Exchange { record, outcome }
  }

  /// Record of the most recently completed dispatch
  pub fn last_call(&self) -> Option<CallRecord> {
    self.last_call.lock().unwrap_or_else(PoisonError::into_inner).clone()
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration, if one was configured
  pub fn timeout(&self) -> Option<Duration> {
    self.timeout
  }
}

impl fmt::Debug for Transport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("headers", &self.headers)
      .field("timeout", &self.timeout)
      .finish()
  }
}
