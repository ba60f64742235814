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

use anyhow::{Context, Result};
use ecomail_core::Config as CoreConfig;
use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "ECOMAIL_API_KEY";
pub const BASE_URL_VAR: &str = "ECOMAIL_BASE_URL";
pub const TIMEOUT_VAR: &str = "ECOMAIL_TIMEOUT_SECS";

#[derive(Debug, Clone)]
pub struct Config {
  pub api_config: CoreConfig,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|name| env::var(name).ok())
  }

  /// Build the config from any variable source
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let api_key = lookup(API_KEY_VAR).context("ECOMAIL_API_KEY environment variable not set")?;

    let mut api_config = CoreConfig::new(api_key).context("ECOMAIL_API_KEY is not a usable API key")?;

    if let Some(base_url) = lookup(BASE_URL_VAR) {
      api_config = api_config.with_base_url(base_url).context("ECOMAIL_BASE_URL is not a valid URL")?;
    }

    if let Some(raw) = lookup(TIMEOUT_VAR) {
      let secs: u64 =
        raw.trim().parse().with_context(|| format!("ECOMAIL_TIMEOUT_SECS must be whole seconds, got {:?}", raw))?;
      api_config = api_config.with_timeout(Duration::from_secs(secs));
    }

    Ok(Self { api_config })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
    move |name| map.get(name).cloned()
  }

  #[test]
  fn test_defaults_with_key_only() {
    let config = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "abc123")])).unwrap();
    assert_eq!(config.api_config.api_key.expose(), "abc123");
    assert_eq!(config.api_config.base_url, ecomail_core::ECOMAIL_BASE_URL);
    assert!(config.api_config.timeout.is_none());
  }

  #[test]
  fn test_missing_key_is_an_error() {
    let err = Config::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(err.to_string().contains("ECOMAIL_API_KEY"));
  }

  #[test]
  fn test_overrides() {
    let config = Config::from_lookup(lookup_from(&[
      (API_KEY_VAR, "abc123"),
      (BASE_URL_VAR, "http://localhost:8080/"),
      (TIMEOUT_VAR, "15"),
    ]))
    .unwrap();

    assert_eq!(config.api_config.base_url, "http://localhost:8080");
    assert_eq!(config.api_config.timeout, Some(Duration::from_secs(15)));
  }

  #[test]
  fn test_bad_timeout_names_variable() {
    let err =
      Config::from_lookup(lookup_from(&[(API_KEY_VAR, "abc123"), (TIMEOUT_VAR, "soon")])).unwrap_err();
    assert!(err.to_string().contains("ECOMAIL_TIMEOUT_SECS"));
  }

  #[test]
  fn test_key_never_in_error_chain() {
    let err = Config::from_lookup(lookup_from(&[(API_KEY_VAR, "secret-key"), (BASE_URL_VAR, "not a url")]))
      .unwrap_err();
    assert!(!format!("{:#}", err).contains("secret-key"));
  }
}
