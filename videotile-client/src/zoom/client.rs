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

use super::bindings::{create_client, JsVideoClient};
use crate::video_client::{CaptureOptions, ClientError, EventSender, InitOptions, VideoClient};
use js_sys::{Array, Function, Promise, Reflect};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use videotile_types::events::{PEER_VIDEO_STATE_CHANGE, VIDEO_ASPECT_RATIO_CHANGE};
use videotile_types::{
    ParticipantId, PeerVideoStateChange, VendorEvent, VideoAspectRatioChange, VideoQuality,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Element;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsInitOptions {
    patch_js_media: bool,
    enforce_multiple_videos: bool,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CurrentUserInfo {
    user_id: ParticipantId,
}

/// Best human-readable reason out of whatever the SDK rejected with.
///
/// SDK errors are plain objects shaped like
/// `{ type: "INVALID_OPERATION", reason: "...", errorCode: 200 }`.
pub(crate) fn describe_js_error(value: &JsValue) -> String {
    if let Some(text) = value.as_string() {
        return text;
    }
    for key in ["reason", "message", "type"] {
        if let Some(text) = Reflect::get(value, &JsValue::from_str(key))
            .ok()
            .and_then(|v| v.as_string())
        {
            return text;
        }
    }
    format!("{value:?}")
}

async fn settle(
    operation: &'static str,
    promise: Result<Promise, JsValue>,
) -> Result<JsValue, ClientError> {
    let promise = promise.map_err(|e| ClientError::vendor(operation, describe_js_error(&e)))?;
    JsFuture::from(promise)
        .await
        .map_err(|e| ClientError::vendor(operation, describe_js_error(&e)))
}

/// Registered SDK handlers. Dropping this without
/// [`unsubscribe`](VideoClient::unsubscribe) leaves dangling listeners.
pub struct ZoomSubscription {
    peer_video_state_change: Closure<dyn FnMut(JsValue)>,
    video_aspect_ratio_change: Closure<dyn FnMut(JsValue)>,
}

fn forward<T>(events: EventSender, name: &'static str) -> Closure<dyn FnMut(JsValue)>
where
    T: DeserializeOwned + Into<VendorEvent> + 'static,
{
    Closure::wrap(Box::new(move |payload: JsValue| {
        match serde_wasm_bindgen::from_value::<T>(payload) {
            Ok(event) => {
                if events.unbounded_send(event.into()).is_err() {
                    debug!("{name} received after the session was left");
                }
            }
            Err(e) => warn!("ignoring malformed {name} payload: {e}"),
        }
    }) as Box<dyn FnMut(JsValue)>)
}

/// [`VideoClient`] backed by the Zoom Video SDK.
#[derive(Clone, Debug)]
pub struct ZoomVideoClient {
    client: JsVideoClient,
}

impl ZoomVideoClient {
    /// Create the SDK client. Fails if the SDK script has not been loaded.
    pub fn new() -> Result<Self, ClientError> {
        let client = create_client().map_err(|e| ClientError::Unavailable(describe_js_error(&e)))?;
        Ok(Self { client })
    }
}

impl VideoClient for ZoomVideoClient {
    type Surface = Element;
    type Subscription = ZoomSubscription;

    async fn init(&self, options: &InitOptions) -> Result<(), ClientError> {
        let js_options = serde_wasm_bindgen::to_value(&JsInitOptions {
            patch_js_media: options.patch_js_media,
            enforce_multiple_videos: options.enforce_multiple_videos,
        })
        .map_err(|e| ClientError::vendor("init", e.to_string()))?;
        settle(
            "init",
            self.client
                .init(&options.language, &options.dependent_assets, &js_options),
        )
        .await?;
        Ok(())
    }

    fn subscribe(&self, events: EventSender) -> Result<ZoomSubscription, ClientError> {
        let subscription = ZoomSubscription {
            peer_video_state_change: forward::<PeerVideoStateChange>(
                events.clone(),
                PEER_VIDEO_STATE_CHANGE,
            ),
            video_aspect_ratio_change: forward::<VideoAspectRatioChange>(
                events,
                VIDEO_ASPECT_RATIO_CHANGE,
            ),
        };
        self.client.on(
            PEER_VIDEO_STATE_CHANGE,
            subscription.peer_video_state_change.as_ref().unchecked_ref::<Function>(),
        );
        self.client.on(
            VIDEO_ASPECT_RATIO_CHANGE,
            subscription
                .video_aspect_ratio_change
                .as_ref()
                .unchecked_ref::<Function>(),
        );
        Ok(subscription)
    }

    fn unsubscribe(&self, subscription: ZoomSubscription) {
        self.client.off(
            PEER_VIDEO_STATE_CHANGE,
            subscription.peer_video_state_change.as_ref().unchecked_ref::<Function>(),
        );
        self.client.off(
            VIDEO_ASPECT_RATIO_CHANGE,
            subscription
                .video_aspect_ratio_change
                .as_ref()
                .unchecked_ref::<Function>(),
        );
    }

    async fn join(
        &self,
        session_name: &str,
        token: &str,
        display_name: &str,
    ) -> Result<(), ClientError> {
        settle("join", self.client.join(session_name, token, display_name)).await?;
        Ok(())
    }

    async fn start_video(&self, options: &CaptureOptions) -> Result<(), ClientError> {
        let js_options = serde_wasm_bindgen::to_value(options)
            .map_err(|e| ClientError::vendor("start video", e.to_string()))?;
        let stream = self.client.get_media_stream();
        settle("start video", stream.start_video(&js_options)).await?;
        Ok(())
    }

    async fn stop_video(&self) -> Result<(), ClientError> {
        let stream = self.client.get_media_stream();
        settle("stop video", stream.stop_video()).await?;
        Ok(())
    }

    async fn attach_video(
        &self,
        participant: ParticipantId,
        quality: VideoQuality,
    ) -> Result<Element, ClientError> {
        let stream = self.client.get_media_stream();
        let value = settle(
            "attach video",
            stream.attach_video(participant.0, quality.as_sdk_value()),
        )
        .await?;
        value
            .dyn_into::<Element>()
            .map_err(|v| ClientError::vendor("attach video", format!("not an element: {v:?}")))
    }

    async fn detach_video(&self, participant: ParticipantId) -> Result<Vec<Element>, ClientError> {
        let stream = self.client.get_media_stream();
        let value = settle("detach video", stream.detach_video(participant.0)).await?;
        let elements = if Array::is_array(&value) {
            Array::from(&value)
                .iter()
                .filter_map(|v| v.dyn_into::<Element>().ok())
                .collect()
        } else {
            value.dyn_into::<Element>().into_iter().collect()
        };
        Ok(elements)
    }

    fn current_user(&self) -> Option<ParticipantId> {
        let info = self.client.get_current_user_info();
        if info.is_undefined() || info.is_null() {
            return None;
        }
        serde_wasm_bindgen::from_value::<CurrentUserInfo>(info)
            .map(|info| info.user_id)
            .ok()
    }

    async fn leave(&self) -> Result<(), ClientError> {
        settle("leave", self.client.leave()).await?;
        Ok(())
    }
}
