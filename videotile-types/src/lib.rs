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

//! Data model shared by the videotile crates.
//!
//! Nothing in here talks to the browser or the video SDK. The types describe
//! what the SDK hands us (participant ids, event payloads, quality tiers) and
//! what the credential provider hands us (the join credential).

pub mod credential;
pub mod events;
pub mod participant;
pub mod quality;

pub use credential::{SessionCredential, TokenResponse};
pub use events::{PeerVideoStateChange, VendorEvent, VideoAction, VideoAspectRatioChange};
pub use participant::ParticipantId;
pub use quality::VideoQuality;

/// Interprets a config string the way the rest of the stack does: `"true"` or
/// `"1"` (any case) is on, everything else is off.
pub fn truthy(s: Option<&str>) -> bool {
    if let Some(s) = s {
        ["true".to_string(), "1".to_string()].contains(&s.to_lowercase())
    } else {
        false
    }
}
