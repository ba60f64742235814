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
use tracing::instrument;

/// Sending domain endpoints
pub struct DomainEndpoints {
  transport: Arc<Transport>,
}

impl DomainEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Registered sending domains
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<Value> {
    self.transport.dispatch(HttpMethod::Get, "domains", None, None).await
  }

  /// Register a sending domain
  #[instrument(skip(self, data))]
  pub async fn create<B>(&self, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    self.transport.dispatch(HttpMethod::Post, "domains", None, Some(payload(data)?)).await
  }

  /// Remove a sending domain
  #[instrument(skip(self))]
  pub async fn delete(&self, domain_id: u64) -> Result<Value> {
    let path = format!("domains/{}", domain_id);
    self.transport.dispatch(HttpMethod::Delete, &path, None, None).await
  }
}
