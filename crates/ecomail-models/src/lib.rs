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

//! # ecomail-models
//!
//! Request payloads for the Ecomail API.
//!
//! Every endpoint in `ecomail-client` accepts any `Serialize` value, so these
//! types are a convenience: they spell out the field names the remote service
//! expects and skip unset optional fields.
//!
//! ## Usage
//!
//! ```ignore
//! use ecomail_models::{SubscribeRequest, SubscriberData};
//!
//! let request = SubscribeRequest::new(SubscriberData::with_email("a@b.com"))
//!   .update_existing(true);
//! let response = client.lists().subscribe("42", &request).await?;
//! ```

#![warn(clippy::all)]

pub mod campaigns;
pub mod domains;
pub mod lists;
pub mod subscribers;
pub mod templates;
pub mod tracker;
pub mod transactional;

pub use campaigns::*;
pub use domains::*;
pub use lists::*;
pub use subscribers::*;
pub use templates::*;
pub use tracker::*;
pub use transactional::*;
