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

//! Raw bindings to the Zoom Video SDK for Web.
//!
//! The SDK is expected as the `WebVideoSDK` global that its CDN bundle
//! installs (`<script src="https://source.zoom.us/videosdk/zoom-video-x.y.z.min.js">`).
//! Only the calls the session needs are bound.

use js_sys::{Function, Promise};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// `VideoClient` returned by `ZoomVideo.createClient()`.
    #[derive(Clone, Debug)]
    pub type JsVideoClient;

    /// `Stream` returned by `client.getMediaStream()`.
    #[derive(Clone, Debug)]
    pub type JsMediaStream;

    #[wasm_bindgen(catch, js_namespace = ["WebVideoSDK", "default"], js_name = createClient)]
    pub fn create_client() -> Result<JsVideoClient, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn init(
        this: &JsVideoClient,
        language: &str,
        dependent_assets: &str,
        options: &JsValue,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn join(
        this: &JsVideoClient,
        topic: &str,
        token: &str,
        user_name: &str,
    ) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch)]
    pub fn leave(this: &JsVideoClient) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, js_name = getMediaStream)]
    pub fn get_media_stream(this: &JsVideoClient) -> JsMediaStream;

    /// `undefined` until the client has joined.
    #[wasm_bindgen(method, js_name = getCurrentUserInfo)]
    pub fn get_current_user_info(this: &JsVideoClient) -> JsValue;

    #[wasm_bindgen(method)]
    pub fn on(this: &JsVideoClient, event: &str, callback: &Function);

    #[wasm_bindgen(method)]
    pub fn off(this: &JsVideoClient, event: &str, callback: &Function);

    #[wasm_bindgen(method, catch, js_name = startVideo)]
    pub fn start_video(this: &JsMediaStream, options: &JsValue) -> Result<Promise, JsValue>;

    #[wasm_bindgen(method, catch, js_name = stopVideo)]
    pub fn stop_video(this: &JsMediaStream) -> Result<Promise, JsValue>;

    /// Resolves to the `video-player` element rendering the participant.
    #[wasm_bindgen(method, catch, js_name = attachVideo)]
    pub fn attach_video(
        this: &JsMediaStream,
        user_id: u32,
        video_quality: u8,
    ) -> Result<Promise, JsValue>;

    /// Resolves to one `video-player` element or an array of them.
    #[wasm_bindgen(method, catch, js_name = detachVideo)]
    pub fn detach_video(this: &JsMediaStream, user_id: u32) -> Result<Promise, JsValue>;
}
