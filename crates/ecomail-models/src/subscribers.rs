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

//! Subscriber payloads and query parameters

use ecomail_core::MAX_BULK_SUBSCRIBERS;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Subscription state the remote service tracks per contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MarketingConsent {
  /// Subscribed, accepts marketing mail
  Accepts,
  /// Unsubscribed
  DoesNotAccept,
}

impl From<MarketingConsent> for u8 {
  fn from(consent: MarketingConsent) -> Self {
    match consent {
      MarketingConsent::Accepts => 1,
      MarketingConsent::DoesNotAccept => 2,
    }
  }
}

impl TryFrom<u8> for MarketingConsent {
  type Error = String;

  fn try_from(value: u8) -> Result<Self, Self::Error> {
    match value {
      1 => Ok(MarketingConsent::Accepts),
      2 => Ok(MarketingConsent::DoesNotAccept),
      other => Err(format!("unknown marketing consent code: {}", other)),
    }
  }
}

/// Contact fields.
///
/// Only `email` is required by the remote service. Fields the API knows
/// about but this struct does not can go in `extra`; they are flattened into
/// the same JSON object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubscriberData {
  pub email: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub surname: Option<String>,

  /// Czech vocative form of the first name
  #[serde(skip_serializing_if = "Option::is_none")]
  pub vokativ: Option<String>,

  /// Czech vocative form of the surname
  #[serde(skip_serializing_if = "Option::is_none")]
  pub vokativ_s: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub company: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub city: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub street: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub zip: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub phone: Option<String>,

  /// Date of birth, `YYYY-MM-DD`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub birthday: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub source: Option<String>,

  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub tags: Vec<String>,

  #[serde(skip_serializing_if = "Map::is_empty", default)]
  pub custom_fields: Map<String, Value>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl SubscriberData {
  /// Contact with only an address set
  pub fn with_email(email: impl Into<String>) -> Self {
    Self { email: email.into(), ..Default::default() }
  }
}

/// Body of `lists/{id}/subscribe`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscribeRequest {
  pub subscriber_data: SubscriberData,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub trigger_autoresponders: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_existing: Option<bool>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub resubscribe: Option<bool>,

  /// Skip the double opt-in confirmation mail
  #[serde(skip_serializing_if = "Option::is_none")]
  pub skip_confirmation: Option<bool>,
}

impl SubscribeRequest {
  pub fn new(subscriber_data: SubscriberData) -> Self {
    Self {
      subscriber_data,
      trigger_autoresponders: None,
      update_existing: None,
      resubscribe: None,
      skip_confirmation: None,
    }
  }

  pub fn trigger_autoresponders(mut self, value: bool) -> Self {
    self.trigger_autoresponders = Some(value);
    self
  }

  pub fn update_existing(mut self, value: bool) -> Self {
    self.update_existing = Some(value);
    self
  }

  pub fn resubscribe(mut self, value: bool) -> Self {
    self.resubscribe = Some(value);
    self
  }

  pub fn skip_confirmation(mut self, value: bool) -> Self {
    self.skip_confirmation = Some(value);
    self
  }
}

/// Body of `lists/{id}/subscribe-bulk`.
///
/// The remote service accepts at most [`MAX_BULK_SUBSCRIBERS`] contacts per
/// call; [`BulkSubscribeRequest::batches`] splits a larger set accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkSubscribeRequest {
  pub subscriber_data: Vec<SubscriberData>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_existing: Option<bool>,
}

impl BulkSubscribeRequest {
  pub fn new(subscriber_data: Vec<SubscriberData>) -> Self {
    Self { subscriber_data, update_existing: None }
  }

  pub fn update_existing(mut self, value: bool) -> Self {
    self.update_existing = Some(value);
    self
  }

  /// Split into requests of at most `MAX_BULK_SUBSCRIBERS` contacts each,
  /// preserving order and the `update_existing` flag.
  pub fn batches(self) -> Vec<BulkSubscribeRequest> {
    let update_existing = self.update_existing;
    self
      .subscriber_data
      .chunks(MAX_BULK_SUBSCRIBERS)
      .map(|chunk| BulkSubscribeRequest { subscriber_data: chunk.to_vec(), update_existing })
      .collect()
  }

  pub fn len(&self) -> usize {
    self.subscriber_data.len()
  }

  pub fn is_empty(&self) -> bool {
    self.subscriber_data.is_empty()
  }
}

/// Body of `lists/{id}/update-subscriber`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubscriberUpdate {
  /// Address identifying the contact to update
  pub email: String,

  pub subscriber_data: SubscriberData,
}

/// Query parameters for `lists/{id}/subscribers`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubscriberQuery {
  pub page: Option<u32>,
  pub per_page: Option<u32>,
  pub status: Option<MarketingConsent>,
}

impl SubscriberQuery {
  /// Parameters in the order they are appended to the URL
  pub fn to_pairs(&self) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(page) = self.page {
      pairs.push(("page", page.to_string()));
    }
    if let Some(per_page) = self.per_page {
      pairs.push(("per_page", per_page.to_string()));
    }
    if let Some(status) = self.status {
      pairs.push(("status", u8::from(status).to_string()));
    }
    pairs
  }

  pub fn is_empty(&self) -> bool {
    self.page.is_none() && self.per_page.is_none() && self.status.is_none()
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_consent_codes() {
    assert_eq!(serde_json::to_value(MarketingConsent::Accepts).unwrap(), json!(1));
    assert_eq!(serde_json::to_value(MarketingConsent::DoesNotAccept).unwrap(), json!(2));
    assert_eq!(serde_json::from_value::<MarketingConsent>(json!(2)).unwrap(), MarketingConsent::DoesNotAccept);
    assert!(serde_json::from_value::<MarketingConsent>(json!(7)).is_err());
  }

  #[test]
  fn test_subscribe_request_shape() {
    let mut data = SubscriberData::with_email("a@b.com");
    data.name = Some("Jan".to_string());
    data.tags = vec!["vip".to_string()];
    data.custom_fields.insert("shoe_size".to_string(), json!(42));

    let request = SubscribeRequest::new(data).update_existing(true).skip_confirmation(true);

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "subscriber_data": {
          "email": "a@b.com",
          "name": "Jan",
          "tags": ["vip"],
          "custom_fields": {"shoe_size": 42}
        },
        "update_existing": true,
        "skip_confirmation": true
      })
    );
  }

  #[test]
  fn test_extra_fields_are_flattened() {
    let mut data = SubscriberData::with_email("a@b.com");
    data.extra.insert("pretitle".to_string(), json!("Ing."));

    let value = serde_json::to_value(&data).unwrap();
    assert_eq!(value["pretitle"], "Ing.");
    assert_eq!(value["email"], "a@b.com");
  }

  #[test]
  fn test_batches_respect_remote_cap() {
    let contacts: Vec<_> =
      (0..MAX_BULK_SUBSCRIBERS * 2 + 5).map(|i| SubscriberData::with_email(format!("{}@example.com", i))).collect();

    let batches = BulkSubscribeRequest::new(contacts).update_existing(false).batches();

    assert_eq!(batches.len(), 3);
    assert_eq!(batches[0].len(), MAX_BULK_SUBSCRIBERS);
    assert_eq!(batches[1].len(), MAX_BULK_SUBSCRIBERS);
    assert_eq!(batches[2].len(), 5);
    assert_eq!(batches[2].subscriber_data[0].email, format!("{}@example.com", MAX_BULK_SUBSCRIBERS * 2));
    assert!(batches.iter().all(|b| b.update_existing == Some(false)));
  }

  #[test]
  fn test_empty_bulk_has_no_batches() {
    assert!(BulkSubscribeRequest::new(Vec::new()).batches().is_empty());
  }

  #[test]
  fn test_query_pairs_keep_order() {
    let query = SubscriberQuery { page: Some(2), per_page: Some(50), status: Some(MarketingConsent::Accepts) };
    assert_eq!(
      query.to_pairs(),
      vec![("page", "2".to_string()), ("per_page", "50".to_string()), ("status", "1".to_string())]
    );
    assert!(SubscriberQuery::default().is_empty());
  }
}
