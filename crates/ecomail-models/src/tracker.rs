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

//! E-commerce tracking payloads for `tracker/transaction`

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order-level data of a tracked transaction
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
  pub order_id: String,

  /// Customer address the order is attributed to
  pub email: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub shop: Option<String>,

  /// Order total
  pub amount: f64,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub tax: Option<f64>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub shipping: Option<f64>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub city: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub county: Option<String>,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub country: Option<String>,

  /// Order time, sent as unix seconds
  #[serde(with = "chrono::serde::ts_seconds_option", skip_serializing_if = "Option::is_none", default)]
  pub timestamp: Option<DateTime<Utc>>,
}

/// One order line
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionItem {
  /// Product code / SKU
  pub code: String,

  pub title: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub category: Option<String>,

  /// Unit price
  pub price: f64,

  /// Quantity
  pub amount: u32,

  #[serde(skip_serializing_if = "Vec::is_empty", default)]
  pub tags: Vec<String>,
}

/// Body of `tracker/transaction`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransactionRequest {
  pub transaction: Transaction,
  pub transaction_items: Vec<TransactionItem>,
}
