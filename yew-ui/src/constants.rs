// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::Deserialize;
use serde_wasm_bindgen::from_value as from_js_value;
use videotile_client::constants::{DEFAULT_SDK_DEPENDENT_ASSETS, DEFAULT_SDK_LANGUAGE};
use videotile_client::InitOptions;
use videotile_types::truthy;
use wasm_bindgen::JsValue;

/// Deployment settings injected as `window.__APP_CONFIG` by `config.js`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RuntimeConfig {
    #[serde(rename = "tokenApiBaseUrl")]
    pub token_api_base_url: String,
    #[serde(rename = "sdkLanguage")]
    #[serde(default)]
    pub sdk_language: Option<String>,
    #[serde(rename = "sdkRegion")]
    #[serde(default)]
    pub sdk_region: Option<String>,
    #[serde(rename = "logLevel")]
    #[serde(default)]
    pub log_level: Option<String>,
    #[serde(rename = "patchJsMedia")]
    #[serde(default)]
    pub patch_js_media: Option<String>,
}

impl RuntimeConfig {
    pub fn init_options(&self) -> InitOptions {
        InitOptions {
            language: non_empty(&self.sdk_language)
                .unwrap_or(DEFAULT_SDK_LANGUAGE)
                .to_string(),
            dependent_assets: non_empty(&self.sdk_region)
                .unwrap_or(DEFAULT_SDK_DEPENDENT_ASSETS)
                .to_string(),
            patch_js_media: non_empty(&self.patch_js_media).map_or(true, |v| truthy(Some(v))),
            ..InitOptions::default()
        }
    }

    /// Console log level; unknown or missing values fall back to `info`.
    pub fn log_level(&self) -> log::Level {
        non_empty(&self.log_level)
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::Level::Info)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub fn app_config() -> Result<RuntimeConfig, String> {
    let win = gloo_utils::window();
    let config = js_sys::Reflect::get(&win, &JsValue::from_str("__APP_CONFIG"))
        .unwrap_or(JsValue::UNDEFINED);
    if config.is_undefined() || config.is_null() {
        return Err("Runtime configuration not found (window.__APP_CONFIG missing)".to_string());
    }
    let config = from_js_value::<RuntimeConfig>(config)
        .map_err(|e| format!("Failed to parse __APP_CONFIG: {e:?}"))?;
    if config.token_api_base_url.trim().is_empty() {
        return Err("tokenApiBaseUrl must not be empty".to_string());
    }
    Ok(config)
}
