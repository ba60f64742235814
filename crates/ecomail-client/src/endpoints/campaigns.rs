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
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tracing::{instrument, warn};

/// Campaign endpoints
pub struct CampaignEndpoints {
  transport: Arc<Transport>,
}

impl CampaignEndpoints {
  /// Create a new campaign endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List campaigns
  ///
  /// # Arguments
  ///
  /// * `filters` - Optional filter expression passed through as the `filters` query parameter
  #[instrument(skip(self))]
  pub async fn all(&self, filters: Option<&str>) -> Result<Value> {
    match filters {
      Some(filters) => {
        self.transport.dispatch(HttpMethod::Get, "campaigns", Some(&[("filters", filters)]), None).await
      }
      None => self.transport.dispatch(HttpMethod::Get, "campaigns", None, None).await,
    }
  }

  /// Create a campaign
  #[instrument(skip(self, data))]
  pub async fn create<B>(&self, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    self.transport.dispatch(HttpMethod::Post, "campaigns", None, Some(payload(data)?)).await
  }

  /// Update a campaign that has not been sent yet
  #[instrument(skip(self, data))]
  pub async fn update<B>(&self, campaign_id: u64, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    let path = format!("campaigns/{}", campaign_id);
    self.transport.dispatch(HttpMethod::Put, &path, None, Some(payload(data)?)).await
  }

  /// Queue a campaign for sending.
  ///
  /// This cannot be undone: once the call succeeds the campaign goes out.
  #[instrument(skip(self))]
  pub async fn send(&self, campaign_id: u64) -> Result<Value> {
    warn!("Queueing campaign {} for sending", campaign_id);
    let path = format!("campaigns/{}/send", campaign_id);
    self.transport.dispatch(HttpMethod::Get, &path, None, None).await
  }
}
