//! This crate joins a vendor-hosted video session and keeps two video tiles
//! in sync with it: the local participant's camera and everyone else's.
//!
//! The vendor SDK does all of the media work. What lives here is the glue:
//!
//! * [`RoomSession`] sequences the one-time init, event subscription, join and
//!   camera start, and tears all of it down again on [`RoomSession::leave`].
//! * [`SurfaceManager`] reacts to `peer-video-state-change` by attaching or
//!   detaching the participant's video in the right tile, and to
//!   `video-aspect-ratio-change` by recomputing the remote tile's scale.
//! * [`scale`] holds the cover-style scale calculation.
//!
//! The SDK is reached through the [`VideoClient`] trait and the tiles through
//! [`SurfaceSink`], so the crate makes no assumptions about the UI framework.
//! With the `wasm` feature, [`zoom`] provides the browser implementations: a
//! binding to the Zoom Video SDK global and a DOM element sink.
//!
//! # Outline of usage
//!
//! ```ignore
//! let client = Rc::new(ZoomVideoClient::new()?);
//! let session = RoomSession::new(
//!     client,
//!     DomSurfaceSink::new(local_container),
//!     DomSurfaceSink::new(remote_container),
//!     SessionOptions::default(),
//!     SessionCallbacks::default(),
//! );
//!
//! let events = session.clone();
//! wasm_bindgen_futures::spawn_local(async move { events.run_event_loop().await });
//! session.start(&credential).await?;
//! // ...
//! session.leave().await;
//! ```

pub mod constants;
pub mod scale;
mod session;
mod surface;
mod surface_manager;
mod utils;
mod video_client;

#[cfg(feature = "wasm")]
pub mod zoom;

#[cfg(test)]
mod tests;

pub use scale::{cover_scale, scale_transform, TileSize};
pub use session::{RoomSession, SessionCallbacks, SessionError, SessionOptions, SessionState};
pub use surface::{Placement, SurfaceSink, VideoSurface};
pub use surface_manager::{route, ScaleListener, SurfaceManager};
pub use utils::{display_name_from_millis, generate_display_name};
pub use video_client::{CaptureOptions, ClientError, EventSender, InitOptions, VideoClient};
pub use videotile_types::{
    ParticipantId, PeerVideoStateChange, SessionCredential, VendorEvent, VideoAction,
    VideoAspectRatioChange, VideoQuality,
};
