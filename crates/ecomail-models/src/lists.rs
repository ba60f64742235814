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

//! Contact list payloads

use serde::{Deserialize, Serialize};

/// Payload for creating a contact list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewList {
  /// List name
  pub name: String,

  /// Sender name used for campaigns to this list
  pub from_name: String,

  /// Sender address used for campaigns to this list
  pub from_email: String,

  /// Reply-to address
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<String>,
}

/// Partial update of a contact list; unset fields are left unchanged remotely
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListUpdate {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_name: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub from_email: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<String>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_new_list_skips_missing_reply_to() {
    let list = NewList {
      name: "Newsletter".to_string(),
      from_name: "Shop".to_string(),
      from_email: "shop@example.com".to_string(),
      reply_to: None,
    };

    assert_eq!(
      serde_json::to_value(&list).unwrap(),
      json!({"name": "Newsletter", "from_name": "Shop", "from_email": "shop@example.com"})
    );
  }

  #[test]
  fn test_empty_update_is_empty_object() {
    assert_eq!(serde_json::to_value(ListUpdate::default()).unwrap(), json!({}));
  }
}
