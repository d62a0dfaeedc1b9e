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

//! Attaches and detaches participant videos in response to SDK events, and
//! tracks the remote aspect ratio that drives the remote tile's scale.
//!
//! Events must be handled one at a time; [`RoomSession`](crate::RoomSession)
//! guarantees that by draining a single queue.

use crate::scale::{cover_scale, TileSize};
use crate::surface::{Placement, SurfaceSink, VideoSurface};
use crate::video_client::VideoClient;
use log::{debug, error, info, warn};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use videotile_types::{
    ParticipantId, PeerVideoStateChange, VideoAction, VideoAspectRatioChange, VideoQuality,
};

/// Called with the new remote scale whenever it changes.
pub type ScaleListener = Rc<dyn Fn(f64)>;

/// Local tile for the current user, remote tile for everyone else.
pub fn route(participant: ParticipantId, current_user: Option<ParticipantId>) -> Placement {
    if Some(participant) == current_user {
        Placement::Local
    } else {
        Placement::Remote
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Slot {
    /// `attachVideo` is in flight.
    Attaching,
    Attached(Placement),
}

pub struct SurfaceManager<C: VideoClient, K: SurfaceSink<C::Surface>> {
    client: Rc<C>,
    local: K,
    remote: K,
    quality: VideoQuality,
    tile: TileSize,
    slots: RefCell<HashMap<ParticipantId, Slot>>,
    remote_aspect_ratio: Cell<Option<f64>>,
    scale: Cell<f64>,
    on_scale_change: Option<ScaleListener>,
}

impl<C: VideoClient, K: SurfaceSink<C::Surface>> SurfaceManager<C, K> {
    pub fn new(client: Rc<C>, local: K, remote: K, quality: VideoQuality, tile: TileSize) -> Self {
        Self {
            client,
            local,
            remote,
            quality,
            tile,
            slots: RefCell::new(HashMap::new()),
            remote_aspect_ratio: Cell::new(None),
            scale: Cell::new(cover_scale(tile, None)),
            on_scale_change: None,
        }
    }

    pub fn with_scale_listener(mut self, listener: Option<ScaleListener>) -> Self {
        self.on_scale_change = listener;
        self
    }

    fn sink(&self, placement: Placement) -> &K {
        match placement {
            Placement::Local => &self.local,
            Placement::Remote => &self.remote,
        }
    }

    pub async fn on_peer_video_state_change(&self, event: PeerVideoStateChange) {
        match event.action {
            VideoAction::Start => self.attach(event.user_id).await,
            VideoAction::Stop => self.detach(event.user_id).await,
        }
    }

    async fn attach(&self, participant: ParticipantId) {
        {
            let mut slots = self.slots.borrow_mut();
            if let Some(slot) = slots.get(&participant) {
                debug!("ignoring Start for {participant}: already {slot:?}");
                return;
            }
            slots.insert(participant, Slot::Attaching);
        }

        let surface = match self.client.attach_video(participant, self.quality).await {
            Ok(surface) => surface,
            Err(e) => {
                error!("failed to attach video for {participant}: {e}");
                self.slots.borrow_mut().remove(&participant);
                return;
            }
        };

        // A Stop or teardown while attaching drops the slot.
        if self.slots.borrow().get(&participant) != Some(&Slot::Attaching) {
            debug!("video for {participant} was stopped while attaching");
            surface.remove();
            return;
        }

        let placement = route(participant, self.client.current_user());
        if let Err(e) = self.sink(placement).attach(&surface) {
            error!("failed to place video for {participant} in {placement} tile: {e}");
            surface.remove();
            self.slots.borrow_mut().remove(&participant);
            return;
        }

        info!("attached {} video for {participant} in {placement} tile", self.quality);
        self.slots
            .borrow_mut()
            .insert(participant, Slot::Attached(placement));
    }

    async fn detach(&self, participant: ParticipantId) {
        if self.slots.borrow_mut().remove(&participant).is_none() {
            debug!("ignoring Stop for {participant}: nothing attached");
            return;
        }

        match self.client.detach_video(participant).await {
            Ok(surfaces) => {
                for surface in &surfaces {
                    surface.remove();
                }
                info!(
                    "detached video for {participant} ({} element(s))",
                    surfaces.len()
                );
            }
            Err(e) => warn!("detach for {participant} failed, treating as detached: {e}"),
        }
    }

    /// Returns the new scale if the event changed the remote aspect ratio.
    pub fn on_video_aspect_ratio_change(&self, event: VideoAspectRatioChange) -> Option<f64> {
        if Some(event.user_id) == self.client.current_user() {
            return None;
        }

        debug!(
            "remote video aspect ratio changed to {} ({})",
            event.aspect_ratio, event.user_id
        );
        self.remote_aspect_ratio.set(Some(event.aspect_ratio));
        let scale = cover_scale(self.tile, Some(event.aspect_ratio));
        if scale != self.scale.replace(scale) {
            if let Some(listener) = &self.on_scale_change {
                listener(scale);
            }
        }
        Some(scale)
    }

    /// Detach every participant and empty both tiles.
    pub async fn detach_all(&self) {
        let attached: Vec<ParticipantId> =
            self.slots.borrow_mut().drain().map(|(id, _)| id).collect();
        for participant in attached {
            match self.client.detach_video(participant).await {
                Ok(surfaces) => surfaces.iter().for_each(|s| s.remove()),
                Err(e) => warn!("detach for {participant} during teardown failed: {e}"),
            }
        }
        self.local.clear();
        self.remote.clear();
    }

    /// Current scale of the remote tile.
    pub fn scale(&self) -> f64 {
        self.scale.get()
    }

    pub fn remote_aspect_ratio(&self) -> Option<f64> {
        self.remote_aspect_ratio.get()
    }

    /// Tile the participant's video is attached to, if any.
    pub fn placement(&self, participant: ParticipantId) -> Option<Placement> {
        match self.slots.borrow().get(&participant) {
            Some(Slot::Attached(placement)) => Some(*placement),
            _ => None,
        }
    }

    pub fn attached_count(&self) -> usize {
        self.slots
            .borrow()
            .values()
            .filter(|slot| matches!(slot, Slot::Attached(_)))
            .count()
    }
}
