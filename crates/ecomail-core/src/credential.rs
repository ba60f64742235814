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

//! API key wrapper.
//!
//! The key is sent on every request but must never reach a log line, a
//! `Debug` dump or an error message. `Credential` has no `Display` impl and its
//! `Debug` output is redacted; the only way to the raw value is [`Credential::expose`].

use crate::error::{Error, Result};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Opaque API key, zeroed from memory on drop.
///
/// Only this wrapper is zeroized. The `key` header built from it by the
/// transport, and the copies kept in call records, are ordinary
/// `HeaderValue`s that are marked sensitive but not wiped.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
  /// Wrap an API key.
  ///
  /// Rejects keys that are empty or that could not be sent as an HTTP header
  /// value (control characters, non-ASCII). The rejection message never
  /// contains the key itself.
  pub fn new(key: impl Into<String>) -> Result<Self> {
    let key = key.into();
    let credential = Self(key);

    if credential.0.trim().is_empty() {
      return Err(Error::Config("API key must not be empty".to_string()));
    }

    if !credential.0.bytes().all(|b| b == b'\t' || (0x20..0x7f).contains(&b)) {
      return Err(Error::Config("API key contains characters not allowed in a header".to_string()));
    }

    Ok(credential)
  }

  /// Raw key, for building the request header only
  pub fn expose(&self) -> &str {
    &self.0
  }
}

impl fmt::Debug for Credential {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_tuple("Credential").field(&"[REDACTED]").finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_debug_is_redacted() {
    let credential = Credential::new("abc123").unwrap();
    let printed = format!("{:?}", credential);
    assert!(!printed.contains("abc123"));
    assert!(printed.contains("[REDACTED]"));
  }

  #[test]
  fn test_expose_returns_key() {
    let credential = Credential::new("abc123").unwrap();
    assert_eq!(credential.expose(), "abc123");
  }

  #[test]
  fn test_empty_key_rejected() {
    assert!(matches!(Credential::new(""), Err(Error::Config(_))));
    assert!(matches!(Credential::new("   "), Err(Error::Config(_))));
  }

  #[test]
  fn test_invalid_header_key_rejected_without_echo() {
    let err = Credential::new("sec\nret").unwrap_err();
    assert!(!err.to_string().contains("sec"));
  }
}
