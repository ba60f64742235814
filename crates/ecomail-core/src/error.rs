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

use std::fmt;
use thiserror::Error;

/// Coarse category of a transport-level fault.
///
/// Stands in for the numeric error code a socket library would report; the
/// HTTP client exposes the same information as predicates on its error type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransportFault {
  /// Connection could not be established (refused, DNS, TLS handshake)
  Connect,
  /// The request or response did not complete in time
  Timeout,
  /// The request could not be built or sent
  Request,
  /// The response body could not be read
  Body,
  /// Anything the HTTP client does not categorise
  Other,
}

impl TransportFault {
  /// Stable numeric code for the fault category
  pub fn code(&self) -> u16 {
    match self {
      TransportFault::Connect => 7,
      TransportFault::Timeout => 28,
      TransportFault::Request => 3,
      TransportFault::Body => 56,
      TransportFault::Other => 1,
    }
  }
}

impl fmt::Display for TransportFault {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      TransportFault::Connect => write!(f, "connect"),
      TransportFault::Timeout => write!(f, "timeout"),
      TransportFault::Request => write!(f, "request"),
      TransportFault::Body => write!(f, "body"),
      TransportFault::Other => write!(f, "other"),
    }
  }
}

/// The main error type for ecomail-* crates
///
/// The first six variants are the outcomes of a completed dispatch and are
/// decided only by the transport result and the HTTP status. `Serialize` and
/// `Config` are raised before any request leaves the process.
#[derive(Error, Debug)]
pub enum Error {
  /// The HTTP exchange failed below the protocol level
  #[error("transport error {} ({kind}): {message}", .kind.code())]
  Transport { kind: TransportFault, message: String },

  /// A success status arrived with a body that is not JSON
  #[error("response is not valid JSON")]
  InvalidResponse {
    status: u16,
    #[source]
    source: serde_json::Error,
  },

  /// HTTP 400; the message is the raw response body
  #[error("{message}")]
  BadRequest { message: String },

  /// HTTP 401. Carries nothing from the response.
  #[error("invalid credentials")]
  InvalidCredentials,

  /// HTTP 404; the message is the response body when it is text
  #[error("{message}")]
  NotFound { message: String },

  /// Any status outside the handled set
  #[error("unknown response code")]
  UnknownResponse { status: u16 },

  /// The request body could not be encoded as JSON
  #[error("failed to serialize request body: {0}")]
  Serialize(#[from] serde_json::Error),

  /// Invalid construction input
  #[error("Configuration error: {0}")]
  Config(String),
}

impl Error {
  /// Numeric code attached to the failure.
  ///
  /// HTTP kinds return their status, transport faults return the fault code,
  /// pre-flight errors have none.
  pub fn code(&self) -> Option<u16> {
    match self {
      Error::Transport { kind, .. } => Some(kind.code()),
      Error::InvalidResponse { status, .. } => Some(*status),
      Error::BadRequest { .. } => Some(400),
      Error::InvalidCredentials => Some(401),
      Error::NotFound { .. } => Some(404),
      Error::UnknownResponse { status } => Some(*status),
      Error::Serialize(_) | Error::Config(_) => None,
    }
  }

  /// True for the bad-key outcome
  pub fn is_invalid_credentials(&self) -> bool {
    matches!(self, Error::InvalidCredentials)
  }

  /// True when the failure happened below HTTP
  pub fn is_transport(&self) -> bool {
    matches!(self, Error::Transport { .. })
  }
}

/// Result type alias for ecomail-* crates
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_http_codes() {
    assert_eq!(Error::BadRequest { message: "x".into() }.code(), Some(400));
    assert_eq!(Error::InvalidCredentials.code(), Some(401));
    assert_eq!(Error::NotFound { message: String::new() }.code(), Some(404));
    assert_eq!(Error::UnknownResponse { status: 503 }.code(), Some(503));
    assert_eq!(Error::Config("bad".into()).code(), None);
  }

  #[test]
  fn test_messages_are_fixed_where_required() {
    assert_eq!(Error::InvalidCredentials.to_string(), "invalid credentials");
    assert_eq!(Error::UnknownResponse { status: 418 }.to_string(), "unknown response code");

    let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
    let err = Error::InvalidResponse { status: 200, source };
    assert_eq!(err.to_string(), "response is not valid JSON");
  }

  #[test]
  fn test_bad_request_and_not_found_echo_body() {
    let err = Error::BadRequest { message: "{\"errors\":[\"email\"]}".into() };
    assert_eq!(err.to_string(), "{\"errors\":[\"email\"]}");

    let err = Error::NotFound { message: "List not found".into() };
    assert_eq!(err.to_string(), "List not found");
  }

  #[test]
  fn test_transport_display_includes_code() {
    let err = Error::Transport { kind: TransportFault::Timeout, message: "operation timed out".into() };
    assert_eq!(err.to_string(), "transport error 28 (timeout): operation timed out");
    assert!(err.is_transport());
    assert!(!err.is_invalid_credentials());
  }
}
