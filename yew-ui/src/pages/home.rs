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

use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::routing::Route;

/// Session names become a URL path segment; keep them to a safe alphabet.
pub fn is_valid_session_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}

#[function_component(Home)]
pub fn home() -> Html {
    let navigator = use_navigator();
    let input_ref = use_node_ref();
    let error = use_state(|| None as Option<String>);

    let onsubmit = {
        let input_ref = input_ref.clone();
        let error = error.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let Some(input) = input_ref.cast::<HtmlInputElement>() else {
                return;
            };
            let slug = input.value().trim().to_string();
            if !is_valid_session_name(&slug) {
                error.set(Some(
                    "Session names may only contain letters, numbers, '-' and '_'".to_string(),
                ));
                return;
            }
            error.set(None);
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Room { slug });
            }
        })
    };

    html! {
        <main class="home-page">
            <h1>{ "Zoom Video Experiment" }</h1>
            <form {onsubmit}>
                <input
                    id="session-name"
                    type="text"
                    placeholder="Session name"
                    ref={input_ref}
                    required=true
                />
                <input type="submit" value="Join" />
            </form>
            if let Some(message) = &*error {
                <p class="error-message">{ message.clone() }</p>
            }
        </main>
    }
}
