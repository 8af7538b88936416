use yew::prelude::*;

use super::{LaunchCard, LaunchModal};
use crate::config::CONFIG;
use crate::hooks::use_launches;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let launches = use_launches();
    let state = &*launches.state;

    html! {
        <div class="container">
            <h1 class="page-title">{format!("SpaceX Launches {}", CONFIG.launch_year)}</h1>

            if state.is_loading {
                <div class="loader-row">
                    <div class="loader"></div>
                    <span>{"Loading..."}</span>
                </div>
            }

            if let Some(error) = &state.error {
                <div class="alert alert-error" role="alert">
                    <div class="alert-title">{"ERROR!"}</div>
                    <div class="alert-body">{format!("Failed to load data: {}", error)}</div>
                </div>
            }

            if state.shows_grid() {
                <div class="launch-grid">
                    { for state.launches.iter().map(|launch| html! {
                        <LaunchCard
                            key={launch.mission_name.clone()}
                            launch={launch.clone()}
                            on_see_more={launches.open_modal.clone()}
                        />
                    }) }
                </div>
            }

            if let Some(selected) = state.modal_launch() {
                <LaunchModal launch={selected.clone()} on_close={launches.close_modal.clone()} />
            }
        </div>
    }
}
