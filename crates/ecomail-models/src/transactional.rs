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

//! Transactional email payloads
//!
//! Both transactional endpoints wrap their payload in a top-level
//! `{"message": ...}` object; [`MessageEnvelope`] provides that wrapper.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Top-level body of the transactional endpoints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageEnvelope<M> {
  pub message: M,
}

impl<M> MessageEnvelope<M> {
  pub fn new(message: M) -> Self {
    Self { message }
  }
}

/// Single recipient of a transactional message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipient {
  pub email: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

impl Recipient {
  pub fn new(email: impl Into<String>) -> Self {
    Self { email: email.into(), name: None }
  }
}

/// File attached to a transactional message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Attachment {
  /// MIME type, e.g. `application/pdf`
  #[serde(rename = "type")]
  pub mime_type: String,

  pub name: String,

  /// Base64-encoded file content
  pub content: String,
}

/// Message body for `transactional/send-message`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionalMessage {
  pub subject: String,
  pub from_name: String,
  pub from_email: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub text: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub html: Option<String>,

  pub to: Vec<Recipient>,

  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub attachments: Vec<Attachment>,

  /// Merge variables applied to every recipient
  #[serde(skip_serializing_if = "Map::is_empty", default)]
  pub global_merge_vars: Map<String, Value>,
}

/// Message body for `transactional/send-template`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemplateMessage {
  pub template_id: u64,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub subject: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_email: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<String>,

  pub to: Vec<Recipient>,

  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub attachments: Vec<Attachment>,

  #[serde(skip_serializing_if = "Map::is_empty", default)]
  pub global_merge_vars: Map<String, Value>,
}
