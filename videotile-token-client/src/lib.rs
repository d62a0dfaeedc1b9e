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
 */

//! REST client for the service that signs video SDK join tokens.
//!
//! # Example
//!
//! ```no_run
//! use videotile_token_client::TokenApiClient;
//!
//! # async fn example() -> Result<(), videotile_token_client::TokenError> {
//! let client = TokenApiClient::new("http://localhost:8080")?;
//! let credential = client.fetch_credential("standup").await?;
//! assert_eq!(credential.session_name, "standup");
//! # Ok(())
//! # }
//! ```

pub mod error;

pub use error::TokenError;

use log::{debug, warn};
use reqwest::Client;
use videotile_types::{SessionCredential, TokenResponse};

const TOKEN_PATH: &str = "/api/token";

/// Fetches a [`SessionCredential`] for a session name.
#[derive(Debug, Clone)]
pub struct TokenApiClient {
    base_url: String,
    http: Client,
}

impl TokenApiClient {
    /// Create a client pointing at the token provider, e.g. `"http://localhost:8080"`.
    pub fn new(base_url: &str) -> Result<Self, TokenError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(TokenError::Config("token API base URL is empty".into()));
        }
        Ok(Self {
            base_url: base_url.to_string(),
            http: Client::new(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Ask the provider for a join token.
    ///
    /// Calls `GET /api/token?session={session}`.
    pub async fn fetch_credential(&self, session: &str) -> Result<SessionCredential, TokenError> {
        debug!("requesting token for session {session}");
        let response = self
            .http
            .get(format!("{}{TOKEN_PATH}", self.base_url))
            .query(&[("session", session)])
            .send()
            .await?;
        let status = response.status().as_u16();
        let body = response.text().await?;
        parse_token_response(session, status, &body)
    }
}

/// Map a token provider response to a credential or a [`TokenError`].
pub fn parse_token_response(
    session: &str,
    status: u16,
    body: &str,
) -> Result<SessionCredential, TokenError> {
    match status {
        200..=299 => {
            let parsed: TokenResponse = serde_json::from_str(body)
                .map_err(|e| TokenError::InvalidResponse(e.to_string()))?;
            if parsed.token.trim().is_empty() {
                return Err(TokenError::InvalidResponse("empty token".into()));
            }
            Ok(SessionCredential::new(session, parsed.token))
        }
        401 => Err(TokenError::NotAuthenticated),
        404 => Err(TokenError::SessionNotFound(session.to_string())),
        _ => {
            warn!("token provider returned {status} for session {session}");
            Err(TokenError::ServerError {
                status,
                body: body.to_string(),
            })
        }
    }
}
