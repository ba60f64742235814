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

//! Campaign payloads

use serde::{Deserialize, Serialize};

/// Campaign fields for `campaigns` (create) and `campaigns/{id}` (update).
///
/// All fields are optional so the same type serves partial updates.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub title: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_email: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub subject: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_text: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub template_id: Option<u64>,

  /// Target list ids
  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub recipient_lists: Vec<u64>,
}
