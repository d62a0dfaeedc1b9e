// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Integration tests for RoomPage credential loading.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{
    cleanup, create_mount_point, inject_app_config, install_fake_token_api, remove_app_config,
    remove_fake_sdk, remove_fake_token_api,
};
use videotile_ui::pages::room::{RoomPage, RoomPageProps};
use wasm_bindgen_test::*;
use yew::platform::time::sleep;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn session_label(mount: &web_sys::Element) -> Option<String> {
    mount
        .query_selector(".room-session")
        .unwrap()
        .and_then(|el| el.text_content())
}

#[wasm_bindgen_test]
async fn shows_room_once_token_arrives() {
    inject_app_config();
    install_fake_token_api();
    remove_fake_sdk();
    let mount = create_mount_point();
    yew::Renderer::<RoomPage>::with_root_and_props(
        mount.clone(),
        RoomPageProps {
            slug: "standup".into(),
        },
    )
    .render();
    sleep(Duration::from_millis(20)).await;

    assert_eq!(session_label(&mount).as_deref(), Some("Session: standup"));
    assert_eq!(
        mount
            .query_selector_all("video-player-container")
            .unwrap()
            .length(),
        2
    );

    cleanup(&mount);
    remove_fake_token_api();
    remove_app_config();
}

#[wasm_bindgen_test]
async fn late_token_for_previous_room_is_discarded() {
    inject_app_config();
    install_fake_token_api();
    remove_fake_sdk();
    let mount = create_mount_point();
    let mut app = yew::Renderer::<RoomPage>::with_root_and_props(
        mount.clone(),
        RoomPageProps {
            slug: "slow-room".into(),
        },
    )
    .render();
    sleep(Duration::from_millis(5)).await;

    app.update(RoomPageProps {
        slug: "fast-room".into(),
    });
    sleep(Duration::from_millis(120)).await;

    assert_eq!(session_label(&mount).as_deref(), Some("Session: fast-room"));

    cleanup(&mount);
    remove_fake_token_api();
    remove_app_config();
}
