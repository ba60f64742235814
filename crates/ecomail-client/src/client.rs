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

use crate::endpoints::{
  automations::AutomationEndpoints, campaigns::CampaignEndpoints, domains::DomainEndpoints,
  lists::ListEndpoints, templates::TemplateEndpoints, tracker::TrackerEndpoints,
  transactional::TransactionalEndpoints,
};
use crate::method::HttpMethod;
use crate::record::CallRecord;
use crate::transport::{Exchange, Transport};
use ecomail_core::{Config, Error, Result};
use reqwest::header::HeaderMap;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Main Ecomail API client
///
/// Provides access to all Ecomail resources through endpoint groups that
/// share one transport. Every call goes through the same dispatcher, so
/// failures always arrive as one of the typed [`Error`] kinds.
///
/// # Examples
///
/// ```rust,no_run
/// use ecomail_client::EcomailClient;
/// use ecomail_models::{SubscribeRequest, SubscriberData};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = EcomailClient::new("your-api-key")?;
///
///     if !client.ping().await? {
///         eprintln!("API key rejected");
///         return Ok(());
///     }
///
///     let request = SubscribeRequest::new(SubscriberData::with_email("a@b.com"));
///     let response = client.lists().subscribe("42", &request).await?;
///     println!("{}", response);
///
///     Ok(())
/// }
/// ```
pub struct EcomailClient {
  transport: Arc<Transport>,
}

impl EcomailClient {
  /// Create a client for the production API with the given key
  ///
  /// # Errors
  ///
  /// Returns `Error::Config` if the key is empty or cannot be sent as a header.
  pub fn new(api_key: impl Into<String>) -> Result<Self> {
    Self::with_config(Config::new(api_key)?)
  }

  /// Create a client from an explicit configuration
  pub fn with_config(config: Config) -> Result<Self> {
    Ok(Self { transport: Arc::new(Transport::new(&config)?) })
  }

  /// Contact lists and their subscribers
  pub fn lists(&self) -> ListEndpoints {
    ListEndpoints::new(self.transport.clone())
  }

  /// Campaigns
  pub fn campaigns(&self) -> CampaignEndpoints {
    CampaignEndpoints::new(self.transport.clone())
  }

  /// Automations
  pub fn automations(&self) -> AutomationEndpoints {
    AutomationEndpoints::new(self.transport.clone())
  }

  /// Email templates
  pub fn templates(&self) -> TemplateEndpoints {
    TemplateEndpoints::new(self.transport.clone())
  }

  /// Sending domains
  pub fn domains(&self) -> DomainEndpoints {
    DomainEndpoints::new(self.transport.clone())
  }

  /// Transactional email
  pub fn transactional(&self) -> TransactionalEndpoints {
    TransactionalEndpoints::new(self.transport.clone())
  }

  /// E-commerce tracking
  pub fn tracker(&self) -> TrackerEndpoints {
    TrackerEndpoints::new(self.transport.clone())
  }

  /// Check that the API is reachable with this key.
  ///
  /// Fetches at most one list. A rejected key yields `Ok(false)`; every other
  /// failure, transport faults included, is returned as the error it is.
  #[instrument(skip(self))]
  pub async fn ping(&self) -> Result<bool> {
    match self.transport.dispatch(HttpMethod::Get, "lists", Some(&[("per_page", "1")]), None).await {
      Ok(_) => Ok(true),
      Err(Error::InvalidCredentials) => {
        debug!("Ping rejected: invalid credentials");
        Ok(false)
      }
      Err(e) => Err(e),
    }
  }

  /// Call an endpoint this crate does not wrap
  pub async fn dispatch(
    &self,
    method: HttpMethod,
    path: &str,
    query: Option<&[(&str, &str)]>,
    body: Option<Value>,
  ) -> Result<Value> {
    self.transport.dispatch(method, path, query, body).await
  }

  /// Like [`EcomailClient::dispatch`], returning the call record alongside the outcome
  pub async fn exchange(
    &self,
    method: HttpMethod,
    path: &str,
    query: Option<&[(&str, &str)]>,
    body: Option<Value>,
  ) -> Exchange {
    self.transport.exchange(method, path, query, body).await
  }

  /// Record of the most recent call made through this client.
  ///
  /// With concurrent calls this is whichever finished last; use
  /// [`EcomailClient::exchange`] to get the record of a specific call.
  pub fn last_call(&self) -> Option<CallRecord> {
    self.transport.last_call()
  }

  pub fn last_called_url(&self) -> Option<String> {
    self.last_call().map(|record| record.url)
  }

  pub fn last_called_body(&self) -> Option<Value> {
    self.last_call().and_then(|record| record.body)
  }

  pub fn last_called_body_json(&self) -> Option<String> {
    self.last_call().and_then(|record| record.body_json)
  }

  pub fn last_headers(&self) -> Option<HeaderMap> {
    self.last_call().map(|record| record.headers)
  }

  pub fn last_status_code(&self) -> Option<u16> {
    self.last_call().and_then(|record| record.status)
  }

  pub fn last_response_raw(&self) -> Option<Vec<u8>> {
    self.last_call().and_then(|record| record.response_raw)
  }

  pub fn last_response(&self) -> Option<Value> {
    self.last_call().and_then(|record| record.response)
  }

  /// Whether the last call received a status below 300
  pub fn is_last_response_ok(&self) -> bool {
    self.last_call().is_some_and(|record| record.is_ok())
  }

  /// Get the transport shared by all endpoint groups
  pub fn transport(&self) -> &Arc<Transport> {
    &self.transport
  }
}

impl std::fmt::Debug for EcomailClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("EcomailClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::time::Duration;

  #[test]
  fn test_client_creation() {
    let client = EcomailClient::new("test_key").expect("Failed to create client");
    assert_eq!(client.transport().base_url(), ecomail_core::ECOMAIL_BASE_URL);
    assert!(client.transport().timeout().is_none());
  }

  #[test]
  fn test_client_with_config() {
    let config = Config::new("test_key")
      .unwrap()
      .with_base_url("http://127.0.0.1:9999")
      .unwrap()
      .with_timeout(Duration::from_secs(3));

    let client = EcomailClient::with_config(config).expect("Failed to create client");
    assert_eq!(client.transport().base_url(), "http://127.0.0.1:9999");
    assert_eq!(client.transport().timeout(), Some(Duration::from_secs(3)));
  }

  #[test]
  fn test_empty_key_rejected() {
    assert!(matches!(EcomailClient::new(""), Err(Error::Config(_))));
  }

  #[test]
  fn test_no_diagnostics_before_first_call() {
    let client = EcomailClient::new("test_key").unwrap();
    assert!(client.last_call().is_none());
    assert!(client.last_status_code().is_none());
    assert!(!client.is_last_response_ok());
  }

  #[test]
  fn test_debug_does_not_leak_key() {
    let client = EcomailClient::new("very-secret-key").unwrap();
    assert!(!format!("{:?}", client).contains("very-secret-key"));
  }
}
