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

//! Error types for the token client.

use thiserror::Error;

/// Errors returned by [`TokenApiClient`](crate::TokenApiClient).
#[derive(Debug, Error)]
pub enum TokenError {
    /// The provider refused to sign a token for this caller (HTTP 401).
    #[error("Not authenticated with the token provider.")]
    NotAuthenticated,

    /// The provider does not know the requested session (HTTP 404).
    #[error("Session not found: {0}")]
    SessionNotFound(String),

    /// A server error with status code and body.
    #[error("Server error ({status}): {body}")]
    ServerError { status: u16, body: String },

    /// The body was not a usable token response.
    #[error("Invalid token response: {0}")]
    InvalidResponse(String),

    /// A network or transport error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The client was built with an unusable base URL.
    #[error("Configuration error: {0}")]
    Config(String),
}
