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

//! Diagnostic record of a single request/response exchange

use crate::method::HttpMethod;
use reqwest::header::HeaderMap;
use serde_json::Value;

/// Everything sent and received in one dispatch.
///
/// Request-side fields are filled before the request leaves; response-side
/// fields stay `None` when the exchange failed before a response arrived.
/// The API key header is marked sensitive, so `Debug` output shows
/// `Sensitive` in its place.
#[derive(Debug, Clone)]
pub struct CallRecord {
  pub method: HttpMethod,

  /// Absolute URL including the query string
  pub url: String,

  pub headers: HeaderMap,

  /// Request body as structured data
  pub body: Option<Value>,

  /// Request body exactly as sent on the wire
  pub body_json: Option<String>,

  pub status: Option<u16>,

  /// Response body bytes as received
  pub response_raw: Option<Vec<u8>>,

  /// Decoded response; only set for a successful exchange
  pub response: Option<Value>,
}

impl CallRecord {
  pub(crate) fn new(method: HttpMethod, url: String, headers: HeaderMap) -> Self {
    Self {
      method,
      url,
      headers,
      body: None,
      body_json: None,
      status: None,
      response_raw: None,
      response: None,
    }
  }

  /// A status arrived and it is below 300
  pub fn is_ok(&self) -> bool {
    matches!(self.status, Some(status) if status < 300)
  }

  /// Raw response body as text, when it is valid UTF-8
  pub fn response_text(&self) -> Option<&str> {
    self.response_raw.as_deref().and_then(|raw| std::str::from_utf8(raw).ok())
  }
}
