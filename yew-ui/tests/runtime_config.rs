// Copyright 2025 Security Union LLC
// Licensed under MIT OR Apache-2.0
//
// Tests for reading `window.__APP_CONFIG` and the ConfigError fallback.

#![cfg(all(target_arch = "wasm32", not(target_os = "wasi")))]

mod support;

use std::time::Duration;

use support::{cleanup, create_mount_point, inject_app_config, remove_app_config};
use videotile_ui::components::config_error::ConfigError;
use videotile_ui::constants::app_config;
use wasm_bindgen_test::*;
use yew::platform::time::sleep;
use yew::prelude::*;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn reads_injected_config() {
    inject_app_config();

    let config = app_config().expect("config should parse");
    assert_eq!(config.log_level(), log::Level::Debug);
    assert_eq!(config.token_api_base_url, "http://test:8080");
    let init = config.init_options();
    assert_eq!(init.language, "en-US");
    assert_eq!(init.dependent_assets, "Global");
    assert!(init.patch_js_media);

    remove_app_config();
}

#[wasm_bindgen_test]
fn missing_config_is_an_error() {
    remove_app_config();
    let err = app_config().unwrap_err();
    assert!(err.contains("__APP_CONFIG"));
}

#[wasm_bindgen_test]
async fn config_error_shows_message() {
    #[function_component(Wrapper)]
    fn wrapper() -> Html {
        html! { <ConfigError message={"tokenApiBaseUrl must not be empty"} /> }
    }

    let mount = create_mount_point();
    yew::Renderer::<Wrapper>::with_root(mount.clone()).render();
    sleep(Duration::ZERO).await;

    let message = mount
        .query_selector(".error-message")
        .unwrap()
        .expect("should render the error message");
    assert_eq!(
        message.text_content().unwrap_or_default(),
        "tokenApiBaseUrl must not be empty"
    );

    cleanup(&mount);
}
