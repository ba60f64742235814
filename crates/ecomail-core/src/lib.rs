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

//! Core types shared by the ecomail-* crates.
//!
//! - [`Error`] / [`Result`]: the failure taxonomy every API call resolves to
//! - [`Credential`]: the API key, held so that it can never be printed
//! - [`Config`]: construction-time settings for the client

pub mod config;
pub mod credential;
pub mod error;

pub use config::Config;
pub use credential::Credential;
pub use error::{Error, Result, TransportFault};

/// Base URL for the Ecomail REST API
pub const ECOMAIL_BASE_URL: &str = "https://api2.ecomailapp.cz";

/// Name of the header carrying the API key
pub const API_KEY_HEADER: &str = "key";

/// Largest number of subscribers the remote service accepts in one bulk call
pub const MAX_BULK_SUBSCRIBERS: usize = 3000;
