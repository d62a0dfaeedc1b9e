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

//! The two video tiles and the session that feeds them.
//!
//! The SDK appends its own `<video-player>` elements into the
//! `<video-player-container>` nodes rendered here, so the session is only
//! created once those nodes exist (first `rendered`) and torn down in
//! `destroy`.

use log::{error, info};
use std::rc::Rc;
use videotile_client::constants::{VIDEO_HEIGHT, VIDEO_WIDTH};
use videotile_client::zoom::{DomSurfaceSink, ZoomVideoClient};
use videotile_client::{
    scale_transform, InitOptions, RoomSession, SessionCallbacks, SessionOptions, SessionState,
};
use videotile_types::SessionCredential;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;

type ZoomSession = RoomSession<ZoomVideoClient, DomSurfaceSink>;

pub enum Msg {
    StateChanged(SessionState),
    ScaleChanged(f64),
    StartFailed(String),
}

#[derive(Properties, Debug, PartialEq)]
pub struct VideoRoomProps {
    pub credential: SessionCredential,
    #[prop_or_default]
    pub init: InitOptions,
}

pub struct VideoRoom {
    local_ref: NodeRef,
    remote_ref: NodeRef,
    session: Option<ZoomSession>,
    state: SessionState,
    scale: f64,
    error: Option<String>,
}

impl VideoRoom {
    fn start(&mut self, ctx: &Context<Self>) {
        let (Some(local), Some(remote)) = (
            self.local_ref.cast::<Element>(),
            self.remote_ref.cast::<Element>(),
        ) else {
            error!("video containers were not rendered");
            return;
        };
        let client = match ZoomVideoClient::new() {
            Ok(client) => Rc::new(client),
            Err(e) => {
                ctx.link().send_message(Msg::StartFailed(e.to_string()));
                return;
            }
        };

        let on_state = ctx.link().callback(Msg::StateChanged);
        let on_scale = ctx.link().callback(Msg::ScaleChanged);
        let options = SessionOptions {
            init: ctx.props().init.clone(),
            ..SessionOptions::default()
        };
        let session = RoomSession::new(
            client,
            DomSurfaceSink::new(local),
            DomSurfaceSink::new(remote),
            options,
            SessionCallbacks {
                on_state_change: Some(Rc::new(move |state| on_state.emit(state))),
                on_scale_change: Some(Rc::new(move |scale| on_scale.emit(scale))),
            },
        );

        info!("joining as {}", session.display_name());

        let events = session.clone();
        spawn_local(async move { events.run_event_loop().await });

        let starter = session.clone();
        let credential = ctx.props().credential.clone();
        let on_failed = ctx.link().callback(Msg::StartFailed);
        spawn_local(async move {
            if let Err(e) = starter.start(&credential).await {
                on_failed.emit(e.to_string());
            }
        });
        self.session = Some(session);
    }

    fn tile_style(extra: &str) -> String {
        format!("width: {VIDEO_WIDTH}px; height: {VIDEO_HEIGHT}px; background-color: black; {extra}")
    }
}

impl Component for VideoRoom {
    type Message = Msg;
    type Properties = VideoRoomProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            local_ref: NodeRef::default(),
            remote_ref: NodeRef::default(),
            session: None,
            state: SessionState::Idle,
            scale: 1.0,
            error: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.start(ctx);
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::StateChanged(state) => {
                self.state = state;
                true
            }
            Msg::ScaleChanged(scale) => {
                self.scale = scale;
                true
            }
            Msg::StartFailed(reason) => {
                error!("video session failed: {reason}");
                self.error = Some(reason);
                true
            }
        }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <div class="video-room" style="display: flex; flex-direction: column; align-items: flex-start;">
                <p class="session-status">{ self.state.to_string() }</p>
                if let Some(error) = &self.error {
                    <p class="session-error" role="alert">{ error.clone() }</p>
                }
                <h2 class="tile-heading">{ "Local" }</h2>
                <div class="video-tile local-tile" style={Self::tile_style("margin-bottom: 20px;")}>
                    <video-player-container ref={self.local_ref.clone()}></video-player-container>
                </div>
                <h2 class="tile-heading">{ "Remote" }</h2>
                <div class="video-tile remote-tile" style={Self::tile_style("overflow: hidden;")}>
                    <div class="remote-scale" style={format!("transform: {};", scale_transform(self.scale))}>
                        <video-player-container ref={self.remote_ref.clone()}></video-player-container>
                    </div>
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        if let Some(session) = self.session.take() {
            spawn_local(async move { session.leave().await });
        }
    }
}
