// Native-only: these drive the session with tokio's current-thread runtime.
#[cfg(not(target_arch = "wasm32"))]
mod fake_client;
