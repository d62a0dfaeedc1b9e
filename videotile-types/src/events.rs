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

//! Payloads of the two SDK events the session page listens to.
//!
//! Field names follow the SDK's JSON shape (`userId`, `aspectRatio`) so the
//! payloads can be deserialized straight from the JS event object.

use crate::participant::ParticipantId;
use serde::{Deserialize, Serialize};

/// SDK event name for [`PeerVideoStateChange`].
pub const PEER_VIDEO_STATE_CHANGE: &str = "peer-video-state-change";

/// SDK event name for [`VideoAspectRatioChange`].
pub const VIDEO_ASPECT_RATIO_CHANGE: &str = "video-aspect-ratio-change";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum VideoAction {
    Start,
    Stop,
}

/// A participant's video started or stopped.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeerVideoStateChange {
    pub action: VideoAction,
    pub user_id: ParticipantId,
}

impl PeerVideoStateChange {
    pub fn start(user_id: ParticipantId) -> Self {
        Self {
            action: VideoAction::Start,
            user_id,
        }
    }

    pub fn stop(user_id: ParticipantId) -> Self {
        Self {
            action: VideoAction::Stop,
            user_id,
        }
    }
}

/// The native aspect ratio (width / height) of a participant's video changed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoAspectRatioChange {
    pub user_id: ParticipantId,
    pub aspect_ratio: f64,
}

/// Every SDK event the session reacts to.
#[derive(Clone, Debug, PartialEq)]
pub enum VendorEvent {
    PeerVideoStateChange(PeerVideoStateChange),
    VideoAspectRatioChange(VideoAspectRatioChange),
}

impl VendorEvent {
    /// SDK event name this event was delivered under.
    pub fn name(&self) -> &'static str {
        match self {
            VendorEvent::PeerVideoStateChange(_) => PEER_VIDEO_STATE_CHANGE,
            VendorEvent::VideoAspectRatioChange(_) => VIDEO_ASPECT_RATIO_CHANGE,
        }
    }

    pub fn participant(&self) -> ParticipantId {
        match self {
            VendorEvent::PeerVideoStateChange(e) => e.user_id,
            VendorEvent::VideoAspectRatioChange(e) => e.user_id,
        }
    }
}

impl From<PeerVideoStateChange> for VendorEvent {
    fn from(event: PeerVideoStateChange) -> Self {
        VendorEvent::PeerVideoStateChange(event)
    }
}

impl From<VideoAspectRatioChange> for VendorEvent {
    fn from(event: VideoAspectRatioChange) -> Self {
        VendorEvent::VideoAspectRatioChange(event)
    }
}
