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

//! Configuration for the Ecomail client

use crate::credential::Credential;
use crate::error::{Error, Result};
use std::time::Duration;

/// Construction-time settings for the client.
///
/// Nothing here is read from the environment; callers that want env-driven
/// settings (the CLI does) build a `Config` themselves.
#[derive(Debug, Clone)]
pub struct Config {
  /// Ecomail API key
  pub api_key: Credential,

  /// Base URL for the Ecomail API, without trailing slash
  pub base_url: String,

  /// Request timeout; `None` leaves the HTTP client default in place
  pub timeout: Option<Duration>,
}

impl Config {
  /// Config with the production base URL and no explicit timeout
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Ok(Config {
      api_key: Credential::new(api_key)?,
      base_url: crate::ECOMAIL_BASE_URL.to_string(),
      timeout: None,
    })
  }

  /// Point the client at a different host (staging, a mock server)
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Result<Self> {
    let base_url = base_url.into();
    let trimmed = base_url.trim_end_matches('/');

    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
      return Err(Error::Config(format!("Invalid base URL: {}", base_url)));
    }

    self.base_url = trimmed.to_string();
    Ok(self)
  }

  /// Bound every request to `timeout`
  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = Some(timeout);
    self
  }
}
