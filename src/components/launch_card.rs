use yew::prelude::*;

use crate::hooks::use_patch_image;
use crate::models::Launch;

#[derive(Properties, PartialEq, Clone)]
pub struct LaunchCardProps {
    pub launch: Launch,
    pub on_see_more: Callback<Launch>,
}

/// Grid card. Props are compared, so an unchanged card is not re-rendered.
#[function_component(LaunchCard)]
pub fn launch_card(props: &LaunchCardProps) -> Html {
    let launch = &props.launch;
    let patch = use_patch_image(launch.card_patch_url().to_string());

    let on_see_more = {
        let launch = launch.clone();
        let cb = props.on_see_more.clone();
        Callback::from(move |_: MouseEvent| cb.emit(launch.clone()))
    };

    html! {
        <div class="launch-card">
            <div class="launch-card-body">
                <div class="launch-card-image">
                    <img
                        src={patch.src.clone()}
                        onerror={patch.on_error.clone()}
                        alt={launch.mission_name.clone()}
                        height="100"
                    />
                </div>

                <p class="launch-card-title line-clamp-1">{&launch.mission_name}</p>

                <p class="launch-card-rocket dimmed">
                    {launch.rocket_name().unwrap_or_default()}
                </p>

                <button class="btn-primary btn-full" onclick={on_see_more}>
                    {"See more"}
                </button>
            </div>
        </div>
    }
}
