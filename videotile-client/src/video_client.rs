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

//! The capability the session needs from a vendor video SDK.
//!
//! Everything behind this trait (signaling, capture, encoding, transport,
//! rendering) belongs to the vendor. The session only sequences calls and
//! routes the surfaces it gets back.

use crate::constants::{
    DEFAULT_SDK_DEPENDENT_ASSETS, DEFAULT_SDK_LANGUAGE, VIDEO_HEIGHT, VIDEO_WIDTH,
};
use crate::surface::VideoSurface;
use futures::channel::mpsc::UnboundedSender;
use serde::Serialize;
use thiserror::Error;
use videotile_types::{ParticipantId, VendorEvent, VideoQuality};

/// Where a [`VideoClient`] delivers SDK events.
pub type EventSender = UnboundedSender<VendorEvent>;

/// Errors reported by a [`VideoClient`] or a surface sink.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClientError {
    /// The SDK rejected or failed an operation.
    #[error("video SDK failed to {operation}: {reason}")]
    Vendor {
        operation: &'static str,
        reason: String,
    },

    /// The SDK could not be reached at all (e.g. the script is not loaded).
    #[error("video SDK is not available: {0}")]
    Unavailable(String),

    /// An operation needed the current user but the session is not joined.
    #[error("no current user; the session has not been joined")]
    NotJoined,

    /// A surface could not be placed into its container.
    #[error("failed to place video surface: {0}")]
    Surface(String),
}

impl ClientError {
    pub fn vendor(operation: &'static str, reason: impl Into<String>) -> Self {
        ClientError::Vendor {
            operation,
            reason: reason.into(),
        }
    }
}

/// Arguments to the SDK's one-time `init`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    pub language: String,
    pub dependent_assets: String,
    pub patch_js_media: bool,
    pub enforce_multiple_videos: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            language: DEFAULT_SDK_LANGUAGE.to_string(),
            dependent_assets: DEFAULT_SDK_DEPENDENT_ASSETS.to_string(),
            patch_js_media: true,
            enforce_multiple_videos: true,
        }
    }
}

/// Local capture request passed to `startVideo`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    pub capture_width: u32,
    pub capture_height: u32,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            capture_width: VIDEO_WIDTH,
            capture_height: VIDEO_HEIGHT,
        }
    }
}

/// A vendor video client, owned by exactly one session.
///
/// Implementations are single-threaded: every future runs on the UI event
/// loop and none of them needs to be `Send`.
#[allow(async_fn_in_trait)]
pub trait VideoClient {
    /// Renderable handle for one participant's video.
    type Surface: VideoSurface;
    /// Keeps the event handlers registered by [`subscribe`](Self::subscribe) alive.
    type Subscription;

    async fn init(&self, options: &InitOptions) -> Result<(), ClientError>;

    /// Forward `peer-video-state-change` and `video-aspect-ratio-change` to
    /// `events` until [`unsubscribe`](Self::unsubscribe) is called.
    fn subscribe(&self, events: EventSender) -> Result<Self::Subscription, ClientError>;

    fn unsubscribe(&self, subscription: Self::Subscription);

    async fn join(
        &self,
        session_name: &str,
        token: &str,
        display_name: &str,
    ) -> Result<(), ClientError>;

    async fn start_video(&self, options: &CaptureOptions) -> Result<(), ClientError>;

    async fn stop_video(&self) -> Result<(), ClientError>;

    async fn attach_video(
        &self,
        participant: ParticipantId,
        quality: VideoQuality,
    ) -> Result<Self::Surface, ClientError>;

    /// Detach a participant's video. The SDK may hand back one element or
    /// several; all of them are returned.
    async fn detach_video(
        &self,
        participant: ParticipantId,
    ) -> Result<Vec<Self::Surface>, ClientError>;

    /// Id of the local participant, once joined.
    fn current_user(&self) -> Option<ParticipantId>;

    async fn leave(&self) -> Result<(), ClientError>;
}
