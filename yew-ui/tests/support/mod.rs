// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Shared test harness for videotile-ui component tests.
//
// Provides mount/cleanup helpers, runtime config injection, and an in-page
// stand-in for the `WebVideoSDK` global so the room component can run its
// whole lifecycle without the real SDK.
//
// Each test file that does `mod support;` compiles its own copy, so not every
// function is used in every compilation unit.
#![allow(dead_code)]

use wasm_bindgen::JsValue;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Create a fresh `<div>`, attach it to `<body>`, and return it.
pub fn create_mount_point() -> web_sys::Element {
    let document = gloo_utils::document();
    let div = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&div).unwrap();
    div
}

/// Remove the mount-point from `<body>` so subsequent tests start clean.
pub fn cleanup(mount: &web_sys::Element) {
    gloo_utils::document()
        .body()
        .unwrap()
        .remove_child(mount)
        .ok();
}

// ---------------------------------------------------------------------------
// Runtime config injection
// ---------------------------------------------------------------------------

/// Inject a `window.__APP_CONFIG` with every key set.
pub fn inject_app_config() {
    let config = js_sys::Object::new();
    let set = |key: &str, val: &JsValue| {
        js_sys::Reflect::set(&config, &key.into(), val).unwrap();
    };
    set("tokenApiBaseUrl", &"http://test:8080".into());
    set("sdkLanguage", &"en-US".into());
    set("sdkRegion", &"Global".into());
    set("logLevel", &"debug".into());
    set("patchJsMedia", &"true".into());

    let frozen = js_sys::Object::freeze(&config);
    js_sys::Reflect::set(&gloo_utils::window(), &"__APP_CONFIG".into(), &frozen).unwrap();
}

/// Remove `window.__APP_CONFIG` so tests don't leak state.
pub fn remove_app_config() {
    let window = gloo_utils::window();
    let _ = js_sys::Reflect::delete_property(&window.into(), &"__APP_CONFIG".into());
}

// ---------------------------------------------------------------------------
// Fake video SDK
// ---------------------------------------------------------------------------

const FAKE_SDK: &str = r#"
const handlers = {};
const calls = [];
const stream = {
  startVideo: (options) => { calls.push("startVideo"); return Promise.resolve(); },
  stopVideo: () => { calls.push("stopVideo"); return Promise.resolve(); },
  attachVideo: (userId, quality) => {
    calls.push("attachVideo:" + userId + ":" + quality);
    const el = document.createElement("video-player");
    el.setAttribute("data-user", String(userId));
    return Promise.resolve(el);
  },
  detachVideo: (userId) => {
    calls.push("detachVideo:" + userId);
    return Promise.resolve(
      Array.from(document.querySelectorAll('video-player[data-user="' + userId + '"]'))
    );
  },
};
let joined = false;
const client = {
  init: () => { calls.push("init"); return Promise.resolve(); },
  join: (topic, token, name) => {
    calls.push("join:" + topic);
    if (token === "bad-token") {
      return Promise.reject({ type: "INVALID_PARAMETERS", reason: "Invalid token" });
    }
    joined = true;
    return Promise.resolve();
  },
  leave: () => { calls.push("leave"); joined = false; return Promise.resolve(); },
  getMediaStream: () => stream,
  getCurrentUserInfo: () => (joined ? { userId: 1 } : undefined),
  on: (name, fn) => { calls.push("on:" + name); handlers[name] = fn; },
  off: (name) => { calls.push("off:" + name); delete handlers[name]; },
};
window.__fakeZoom = {
  calls,
  emit: (name, payload) => { if (handlers[name]) handlers[name](payload); },
};
window.WebVideoSDK = { default: { createClient: () => client } };
"#;

/// Install the fake SDK as `window.WebVideoSDK`. The session's own id is 1.
pub fn install_fake_sdk() {
    js_sys::Function::new_no_args(FAKE_SDK).call0(&JsValue::NULL).unwrap();
}

pub fn remove_fake_sdk() {
    let window: js_sys::Object = gloo_utils::window().into();
    let _ = js_sys::Reflect::delete_property(&window, &"WebVideoSDK".into());
    let _ = js_sys::Reflect::delete_property(&window, &"__fakeZoom".into());
}

fn fake_zoom() -> JsValue {
    js_sys::Reflect::get(&gloo_utils::window(), &"__fakeZoom".into()).unwrap()
}

/// Fire an SDK event at whatever handler the session registered.
pub fn emit_sdk_event(name: &str, payload: &JsValue) {
    let emit: js_sys::Function = js_sys::Reflect::get(&fake_zoom(), &"emit".into())
        .unwrap()
        .into();
    emit.call2(&JsValue::NULL, &name.into(), payload).unwrap();
}

/// Every SDK call made so far, e.g. `"attachVideo:2:2"`.
pub fn sdk_calls() -> Vec<String> {
    let calls: js_sys::Array = js_sys::Reflect::get(&fake_zoom(), &"calls".into())
        .unwrap()
        .into();
    calls.iter().filter_map(|c| c.as_string()).collect()
}

pub fn peer_video_event(action: &str, user_id: u32) -> JsValue {
    let payload = js_sys::Object::new();
    js_sys::Reflect::set(&payload, &"action".into(), &action.into()).unwrap();
    js_sys::Reflect::set(&payload, &"userId".into(), &user_id.into()).unwrap();
    payload.into()
}

pub fn aspect_ratio_event(user_id: u32, aspect_ratio: f64) -> JsValue {
    let payload = js_sys::Object::new();
    js_sys::Reflect::set(&payload, &"userId".into(), &user_id.into()).unwrap();
    js_sys::Reflect::set(&payload, &"aspectRatio".into(), &aspect_ratio.into()).unwrap();
    payload.into()
}

// ---------------------------------------------------------------------------
// Fake token provider
// ---------------------------------------------------------------------------

const FAKE_FETCH: &str = r#"
window.__realFetch = window.__realFetch || window.fetch;
window.fetch = (input) => {
  const url = typeof input === "string" ? input : input.url;
  const session = new URL(url).searchParams.get("session");
  const delay = session === "slow-room" ? 60 : 0;
  const body = JSON.stringify({ token: "token-for-" + session });
  return new Promise((resolve) =>
    setTimeout(() => resolve(new Response(body, { status: 200 })), delay)
  );
};
"#;

/// Answer every token request with `token-for-<session>`. Requests for
/// `slow-room` resolve 60ms late.
pub fn install_fake_token_api() {
    js_sys::Function::new_no_args(FAKE_FETCH)
        .call0(&JsValue::NULL)
        .unwrap();
}

pub fn remove_fake_token_api() {
    js_sys::Function::new_no_args(
        "if (window.__realFetch) { window.fetch = window.__realFetch; delete window.__realFetch; }",
    )
    .call0(&JsValue::NULL)
    .unwrap();
}
