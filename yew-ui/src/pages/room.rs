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

use log::{debug, error, info};
use std::cell::Cell;
use std::rc::Rc;
use videotile_client::InitOptions;
use videotile_token_client::TokenApiClient;
use videotile_types::SessionCredential;
use yew::prelude::*;

use crate::components::config_error::ConfigError;
use crate::components::video_room::VideoRoom;
use crate::constants::app_config;

#[derive(Clone, Debug, PartialEq)]
enum CredentialState {
    Loading,
    Ready(SessionCredential),
    Failed(String),
}

#[derive(Properties, PartialEq, Clone)]
pub struct RoomPageProps {
    pub slug: String,
}

#[function_component(RoomPage)]
pub fn room_page(props: &RoomPageProps) -> Html {
    let credential = use_state(|| CredentialState::Loading);
    let config = use_memo((), |_| app_config());

    {
        let credential = credential.clone();
        let config = config.clone();
        use_effect_with(props.slug.clone(), move |slug| {
            credential.set(CredentialState::Loading);
            // Set when the slug changes or the page unmounts.
            let superseded = Rc::new(Cell::new(false));
            if let Ok(config) = &*config {
                let slug = slug.clone();
                let base_url = config.token_api_base_url.clone();
                let superseded = superseded.clone();
                wasm_bindgen_futures::spawn_local(async move {
                    let result = match TokenApiClient::new(&base_url) {
                        Ok(client) => client.fetch_credential(&slug).await,
                        Err(e) => Err(e),
                    };
                    if superseded.get() {
                        debug!("discarding token response for {slug}");
                        return;
                    }
                    match result {
                        Ok(fetched) => {
                            info!("fetched a join token for session {slug}");
                            credential.set(CredentialState::Ready(fetched));
                        }
                        Err(e) => {
                            error!("could not fetch a join token for {slug}: {e}");
                            credential.set(CredentialState::Failed(e.to_string()));
                        }
                    }
                });
            }
            move || superseded.set(true)
        });
    }

    let init = match &*config {
        Ok(config) => config.init_options(),
        Err(message) => return html! { <ConfigError message={message.clone()} /> },
    };

    html! {
        <main class="room-page">
            <h1 class="room-title">{ "Zoom Video Experiment" }</h1>
            <hr />
            { room_body(&credential, init) }
        </main>
    }
}

fn room_body(credential: &CredentialState, init: InitOptions) -> Html {
    match credential {
        CredentialState::Loading => html! {
            <p class="room-loading">{ "Fetching session token..." }</p>
        },
        CredentialState::Failed(message) => html! {
            <p class="session-error" role="alert">{ format!("Could not join: {message}") }</p>
        },
        CredentialState::Ready(credential) => html! {
            <>
                <p class="room-session">{ format!("Session: {}", credential.session_name) }</p>
                <VideoRoom credential={credential.clone()} {init} />
            </>
        },
    }
}
