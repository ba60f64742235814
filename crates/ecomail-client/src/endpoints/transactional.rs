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

/// Transactional email endpoints
pub struct TransactionalEndpoints {
  transport: Arc<Transport>,
}

impl TransactionalEndpoints {
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Send a one-off message with inline content
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use ecomail_client::EcomailClient;
  /// # use ecomail_models::{MessageEnvelope, Recipient, TransactionalMessage};
  /// # async fn run(client: EcomailClient) -> ecomail_core::Result<()> {
  /// let message = TransactionalMessage {
  ///   subject: "Your order".to_string(),
  ///   from_name: "Shop".to_string(),
  ///   from_email: "shop@example.com".to_string(),
  ///   html: Some("<p>Thanks!</p>".to_string()),
  ///   to: vec![Recipient::new("a@b.com")],
  ///   ..Default::default()
  /// };
  /// client.transactional().send_message(&MessageEnvelope::new(message)).await?;
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, data))]
  pub async fn send_message<B>(&self, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    self.transport.dispatch(HttpMethod::Post, "transactional/send-message", None, Some(payload(data)?)).await
  }

  /// Send a message rendered from a stored template
  #[instrument(skip(self, data))]
  pub async fn send_template<B>(&self, data: &B) -> Result<Value>
  where
    B: Serialize + ?Sized,
  {
    self.transport.dispatch(HttpMethod::Post, "transactional/send-template", None, Some(payload(data)?)).await
  }
}
