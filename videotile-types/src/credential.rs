/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Join credential for a vendor-hosted session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A signed join token plus the session it was issued for.
///
/// Supplied by the credential provider once per page load and never mutated.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionCredential {
    /// Session name (the room slug from the URL).
    pub session_name: String,
    /// Signed JWT accepted by the video SDK's `join`.
    pub token: String,
}

impl SessionCredential {
    pub fn new(session_name: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            session_name: session_name.into(),
            token: token.into(),
        }
    }
}

// The token is a bearer credential; keep it out of logs.
impl fmt::Debug for SessionCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredential")
            .field("session_name", &self.session_name)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Body returned by `GET /api/token?session=<slug>`.
///
/// ```json
/// { "token": "eyJhbGciOi..." }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TokenResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_hides_token() {
        let credential = SessionCredential::new("standup", "secret.jwt.value");
        let printed = format!("{credential:?}");
        assert!(printed.contains("standup"));
        assert!(!printed.contains("secret.jwt.value"));
    }

    #[test]
    fn token_response_parses() {
        let parsed: TokenResponse = serde_json::from_str(r#"{"token":"abc"}"#).unwrap();
        assert_eq!(parsed.token, "abc");
    }
}
