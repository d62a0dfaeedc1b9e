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

use videotile_ui::components::config_error::ConfigError;
use videotile_ui::constants::app_config;
use videotile_ui::pages::home::Home;
use videotile_ui::pages::room::RoomPage;
use videotile_ui::routing::Route;
use yew::prelude::*;
use yew_router::prelude::*;

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <Home /> },
        Route::Room { slug } => html! { <RoomPage {slug} /> },
        Route::NotFound => html! { <h1>{ "404" }</h1> },
    }
}

#[function_component(App)]
fn app() -> Html {
    if let Err(e) = app_config() {
        return html! { <ConfigError message={e} /> };
    }
    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

fn main() {
    let level = app_config()
        .map(|c| c.log_level())
        .unwrap_or(log::Level::Info);
    let _ = console_log::init_with_level(level);
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
