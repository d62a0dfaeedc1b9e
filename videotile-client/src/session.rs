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

//! One page's membership in a vendor session.
//!
//! [`RoomSession::start`] runs the one-shot sequence
//! init → subscribe → join → start capture, and [`RoomSession::leave`] undoes
//! it. SDK events are queued on an unbounded channel and handled one at a
//! time by [`RoomSession::run_event_loop`], which the host spawns on its
//! executor next to `start`:
//!
//! ```ignore
//! let session = RoomSession::new(client, local, remote, options, callbacks);
//! let events = session.clone();
//! wasm_bindgen_futures::spawn_local(async move { events.run_event_loop().await });
//! wasm_bindgen_futures::spawn_local(async move {
//!     if let Err(e) = session.start(&credential).await {
//!         // show e to the user
//!     }
//! });
//! ```

use crate::constants::VIDEO_QUALITY;
use crate::scale::TileSize;
use crate::surface::SurfaceSink;
use crate::surface_manager::{ScaleListener, SurfaceManager};
use crate::utils::generate_display_name;
use crate::video_client::{CaptureOptions, ClientError, InitOptions, VideoClient};
use futures::channel::mpsc::{unbounded, UnboundedReceiver, UnboundedSender};
use futures::StreamExt;
use log::{debug, error, info, warn};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use thiserror::Error;
use videotile_types::{PeerVideoStateChange, SessionCredential, VendorEvent, VideoQuality};

/// Where the session is in its one-shot lifecycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Initializing,
    Joining,
    StartingVideo,
    Live,
    Failed(String),
    Left,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Idle => write!(f, "Idle"),
            SessionState::Initializing => write!(f, "Initializing video client"),
            SessionState::Joining => write!(f, "Joining session"),
            SessionState::StartingVideo => write!(f, "Starting camera"),
            SessionState::Live => write!(f, "Live"),
            SessionState::Failed(reason) => write!(f, "Failed: {reason}"),
            SessionState::Left => write!(f, "Left"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error("could not initialize the video client: {0}")]
    Init(ClientError),

    #[error("could not subscribe to video events: {0}")]
    Subscribe(ClientError),

    #[error("could not join the session: {0}")]
    Join(ClientError),

    #[error("could not start the camera: {0}")]
    StartVideo(ClientError),

    #[error("the session was left before it finished starting")]
    Closed,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionOptions {
    pub init: InitOptions,
    pub capture: CaptureOptions,
    pub quality: VideoQuality,
    pub tile: TileSize,
    pub display_name: String,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self {
            init: InitOptions::default(),
            capture: CaptureOptions::default(),
            quality: VIDEO_QUALITY,
            tile: TileSize::default(),
            display_name: generate_display_name(),
        }
    }
}

/// Observers for changes the UI has to render.
#[derive(Clone, Default)]
pub struct SessionCallbacks {
    pub on_state_change: Option<Rc<dyn Fn(SessionState)>>,
    pub on_scale_change: Option<ScaleListener>,
}

struct Inner<C: VideoClient, K: SurfaceSink<C::Surface>> {
    client: Rc<C>,
    surfaces: SurfaceManager<C, K>,
    options: SessionOptions,
    state: RefCell<SessionState>,
    on_state_change: Option<Rc<dyn Fn(SessionState)>>,
    events_tx: UnboundedSender<VendorEvent>,
    events_rx: RefCell<Option<UnboundedReceiver<VendorEvent>>>,
    subscription: RefCell<Option<C::Subscription>>,
    joined: Cell<bool>,
    capturing: Cell<bool>,
}

/// Handle to a session. Clones share the same session.
pub struct RoomSession<C: VideoClient, K: SurfaceSink<C::Surface>> {
    inner: Rc<Inner<C, K>>,
}

impl<C: VideoClient, K: SurfaceSink<C::Surface>> Clone for RoomSession<C, K> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C: VideoClient, K: SurfaceSink<C::Surface>> PartialEq for RoomSession<C, K> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C: VideoClient, K: SurfaceSink<C::Surface>> RoomSession<C, K> {
    pub fn new(
        client: Rc<C>,
        local: K,
        remote: K,
        options: SessionOptions,
        callbacks: SessionCallbacks,
    ) -> Self {
        let (events_tx, events_rx) = unbounded();
        let surfaces =
            SurfaceManager::new(Rc::clone(&client), local, remote, options.quality, options.tile)
                .with_scale_listener(callbacks.on_scale_change);
        Self {
            inner: Rc::new(Inner {
                client,
                surfaces,
                options,
                state: RefCell::new(SessionState::Idle),
                on_state_change: callbacks.on_state_change,
                events_tx,
                events_rx: RefCell::new(Some(events_rx)),
                subscription: RefCell::new(None),
                joined: Cell::new(false),
                capturing: Cell::new(false),
            }),
        }
    }

    pub fn state(&self) -> SessionState {
        self.inner.state.borrow().clone()
    }

    pub fn display_name(&self) -> &str {
        &self.inner.options.display_name
    }

    pub fn surfaces(&self) -> &SurfaceManager<C, K> {
        &self.inner.surfaces
    }

    fn set_state(&self, state: SessionState) {
        debug!("session state: {state}");
        *self.inner.state.borrow_mut() = state.clone();
        if let Some(listener) = &self.inner.on_state_change {
            listener(state);
        }
    }

    fn fail(&self, err: SessionError) -> SessionError {
        error!("{err}");
        if self.is_left() {
            return err;
        }
        self.set_state(SessionState::Failed(err.to_string()));
        err
    }

    fn is_left(&self) -> bool {
        *self.inner.state.borrow() == SessionState::Left
    }

    /// Release the camera and the SDK session if they were acquired.
    ///
    /// `start` suspends at every SDK call and `leave` may run in between, so
    /// `start` calls this too when it finds the session already left.
    async fn abandon(&self) -> SessionError {
        let client = &self.inner.client;
        if self.inner.capturing.replace(false) {
            if let Err(e) = client.stop_video().await {
                warn!("failed to stop local video: {e}");
            }
        }
        if self.inner.joined.replace(false) {
            if let Err(e) = client.leave().await {
                warn!("failed to leave session: {e}");
            }
        }
        SessionError::Closed
    }

    /// Initialize the client, subscribe to its events, join the session and
    /// start the local camera.
    ///
    /// Runs at most once; later calls return `Ok(())` without touching the
    /// client. On failure the session moves to [`SessionState::Failed`] and
    /// the error is returned for the UI to show.
    pub async fn start(&self, credential: &SessionCredential) -> Result<(), SessionError> {
        if *self.inner.state.borrow() != SessionState::Idle {
            debug!("session already started, ignoring start");
            return Ok(());
        }
        let client = &self.inner.client;
        let options = &self.inner.options;

        self.set_state(SessionState::Initializing);
        client
            .init(&options.init)
            .await
            .map_err(|e| self.fail(SessionError::Init(e)))?;
        if self.is_left() {
            return Err(self.abandon().await);
        }
        debug!("video client initialized");

        // Subscribe before joining so no event emitted during join is lost.
        let subscription = client
            .subscribe(self.inner.events_tx.clone())
            .map_err(|e| self.fail(SessionError::Subscribe(e)))?;
        *self.inner.subscription.borrow_mut() = Some(subscription);

        self.set_state(SessionState::Joining);
        debug!(
            "joining {} as {}",
            credential.session_name, options.display_name
        );
        client
            .join(&credential.session_name, &credential.token, &options.display_name)
            .await
            .map_err(|e| self.fail(SessionError::Join(e)))?;
        self.inner.joined.set(true);
        if self.is_left() {
            return Err(self.abandon().await);
        }
        info!("joined session {}", credential.session_name);

        self.set_state(SessionState::StartingVideo);
        client
            .start_video(&options.capture)
            .await
            .map_err(|e| self.fail(SessionError::StartVideo(e)))?;
        self.inner.capturing.set(true);
        if self.is_left() {
            return Err(self.abandon().await);
        }

        // The SDK emits no state change for our own initial video.
        let me = client
            .current_user()
            .ok_or_else(|| self.fail(SessionError::StartVideo(ClientError::NotJoined)))?;
        debug!("video started for {me}");
        if self
            .inner
            .events_tx
            .unbounded_send(PeerVideoStateChange::start(me).into())
            .is_err()
        {
            warn!("event queue closed before the local video could be attached");
        }

        self.set_state(SessionState::Live);
        Ok(())
    }

    /// Handle one SDK event.
    pub async fn dispatch(&self, event: VendorEvent) {
        if self.is_left() {
            debug!(
                "dropping {} for {} after leave",
                event.name(),
                event.participant()
            );
            return;
        }
        match event {
            VendorEvent::PeerVideoStateChange(change) => {
                self.inner.surfaces.on_peer_video_state_change(change).await
            }
            VendorEvent::VideoAspectRatioChange(change) => {
                self.inner.surfaces.on_video_aspect_ratio_change(change);
            }
        }
    }

    /// Handle queued events in order until the session is left.
    ///
    /// Only one loop runs per session; a second call returns immediately.
    pub async fn run_event_loop(&self) {
        let Some(mut events) = self.inner.events_rx.borrow_mut().take() else {
            warn!("event loop already running");
            return;
        };
        while let Some(event) = events.next().await {
            self.dispatch(event).await;
        }
        debug!("event loop finished");
    }

    /// Handle the events queued right now, then return.
    pub async fn process_pending(&self) {
        let Some(mut events) = self.inner.events_rx.borrow_mut().take() else {
            return;
        };
        while let Ok(event) = events.try_recv() {
            self.dispatch(event).await;
        }
        *self.inner.events_rx.borrow_mut() = Some(events);
    }

    /// Tear everything down: stop the event loop, unsubscribe, remove every
    /// video, stop the camera and leave the SDK session. Safe to call more
    /// than once; failures are logged.
    pub async fn leave(&self) {
        if self.is_left() {
            return;
        }
        self.set_state(SessionState::Left);
        self.inner.events_tx.close_channel();

        if let Some(subscription) = self.inner.subscription.borrow_mut().take() {
            self.inner.client.unsubscribe(subscription);
        }

        self.inner.surfaces.detach_all().await;
        self.abandon().await;
        info!("left session");
    }
}
