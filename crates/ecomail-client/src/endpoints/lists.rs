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

use super::payload;
use crate::method::HttpMethod;
use crate::transport::Transport;
use ecomail_core::Result;
use ecomail_models::SubscriberQuery;
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::instrument;

/// Contact list and subscriber endpoints
pub struct ListEndpoints {
  transport: Arc<Transport>,
}

impl ListEndpoints {
  /// Create a new list endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// All contact lists of the account
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<Value> {
    self.transport.dispatch(HttpMethod::Get, "lists", None, None).await
  }

  /// Create a contact list
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use ecomail_client::EcomailClient;
  /// # use ecomail_models::NewList;
  /// # async fn run(client: EcomailClient) -> ecomail_core::Result<()> {
  /// let list = NewList {
  ///   name: "Newsletter".to_string(),
  ///   from_name: "Shop".to_string(),
  ///   from_email: "shop@example.com".to_string(),
  ///   reply_to: None,
  /// };
  /// let created = client.lists().create(&list).await?;
  /// println!("created list {}", created["id"]);
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, data))]
  pub async fn create<B>(&self, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    self.transport.dispatch(HttpMethod::Post, "lists", None, Some(payload(data)?)).await
  }

  /// Detail of one list
  #[instrument(skip(self))]
  pub async fn show(&self, list_id: &str) -> Result<Value> {
    let path = format!("lists/{}", list_id);
    self.transport.dispatch(HttpMethod::Get, &path, None, None).await
  }

  /// Update list settings
  #[instrument(skip(self, data))]
  pub async fn update<B>(&self, list_id: &str, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    let path = format!("lists/{}", list_id);
    self.transport.dispatch(HttpMethod::Put, &path, None, Some(payload(data)?)).await
  }

  /// Subscribers of a list, one page at a time.
  ///
  /// An empty query sends no query string at all.
  #[instrument(skip(self))]
  pub async fn subscribers(&self, list_id: &str, query: &SubscriberQuery) -> Result<Value> {
    let path = format!("lists/{}/subscribers", list_id);
    let pairs = query.to_pairs();
    let params: Vec<(&str, &str)> = pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
    let params = if params.is_empty() { None } else { Some(params.as_slice()) };

    self.transport.dispatch(HttpMethod::Get, &path, params, None).await
  }

  /// One subscriber of a list, looked up by address
  #[instrument(skip(self, email))]
  pub async fn subscriber(&self, list_id: &str, email: &str) -> Result<Value> {
    let path = format!("lists/{}/subscriber/{}", list_id, email);
    self.transport.dispatch(HttpMethod::Get, &path, None, None).await
  }

  /// Add a subscriber to a list
  #[instrument(skip(self, data))]
  pub async fn subscribe<B>(&self, list_id: &str, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    let path = format!("lists/{}/subscribe", list_id);
    self.transport.dispatch(HttpMethod::Post, &path, None, Some(payload(data)?)).await
  }

  /// Add many subscribers in one call.
  ///
  /// The remote service caps a call at `MAX_BULK_SUBSCRIBERS` contacts; split
  /// larger sets with `BulkSubscribeRequest::batches`.
  #[instrument(skip(self, data))]
  pub async fn subscribe_bulk<B>(&self, list_id: &str, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    let path = format!("lists/{}/subscribe-bulk", list_id);
    self.transport.dispatch(HttpMethod::Post, &path, None, Some(payload(data)?)).await
  }

  /// Remove a subscriber from a list
  #[instrument(skip(self, email))]
  pub async fn unsubscribe(&self, list_id: &str, email: &str) -> Result<Value> {
    let path = format!("lists/{}/unsubscribe", list_id);
    self.transport.dispatch(HttpMethod::Delete, &path, None, Some(json!({ "email": email }))).await
  }

  /// Update a subscriber's fields
  #[instrument(skip(self, data))]
  pub async fn update_subscriber<B>(&self, list_id: &str, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    let path = format!("lists/{}/update-subscriber", list_id);
    self.transport.dispatch(HttpMethod::Put, &path, None, Some(payload(data)?)).await
  }
}
