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

//! # ecomail-client
//!
//! Async client for the Ecomail email-marketing REST API.
//!
//! ## Features
//!
//! - **Single dispatcher**: every endpoint funnels through [`Transport`], which
//!   builds the request, attaches the API key and classifies the response
//! - **Typed failures**: transport faults, malformed payloads, 400, 401, 404
//!   and unknown statuses are distinct [`Error`] variants
//! - **Call records**: what was sent and received is kept for inspection,
//!   even when the call fails
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ecomail_client::EcomailClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EcomailClient::new("your-api-key")?;
//!
//!     match client.lists().show("999").await {
//!         Ok(list) => println!("{}", list),
//!         Err(ecomail_client::Error::NotFound { message }) => println!("missing: {}", message),
//!         Err(e) => return Err(e.into()),
//!     }
//!
//!     println!("last status: {:?}", client.last_status_code());
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All methods return `Result<T, ecomail_core::Error>`. Only
//! [`EcomailClient::ping`] turns a failure (a rejected key) into a value.

#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod method;
pub mod record;
pub mod transport;

// Re-export the main client and common types
pub use client::EcomailClient;
pub use ecomail_core::{Config, Credential, Error, Result, TransportFault};
pub use method::HttpMethod;
pub use record::CallRecord;
pub use transport::{classify, Exchange, ResponseClass, Transport};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  automations::AutomationEndpoints, campaigns::CampaignEndpoints, domains::DomainEndpoints,
  lists::ListEndpoints, templates::TemplateEndpoints, tracker::TrackerEndpoints,
  transactional::TransactionalEndpoints,
};
