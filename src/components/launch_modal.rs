// ============================================================================
// LAUNCH MODAL - mission details
// ============================================================================
// Portalled into #modal. Escape and the scroll lock live in a ModalGuard
// that is dropped on unmount.
// ============================================================================

use yew::prelude::*;

use super::Overlay;
use crate::dom::ModalGuard;
use crate::hooks::use_patch_image;
use crate::models::Launch;
use crate::utils::constants::MODAL_HOST_ID;

#[derive(Properties, PartialEq)]
pub struct LaunchModalProps {
    pub launch: Launch,
    pub on_close: Callback<()>,
}

#[function_component(LaunchModal)]
pub fn launch_modal(props: &LaunchModalProps) -> Html {
    // Re-acquired only when on_close changes
    use_effect_with(props.on_close.clone(), move |on_close| {
        let on_close = on_close.clone();
        let guard = ModalGuard::acquire(move || on_close.emit(()));
        log::debug!("🪟 Modal resources acquired");
        move || {
            drop(guard);
            log::debug!("🪟 Modal resources released");
        }
    });

    let launch = &props.launch;
    let patch = use_patch_image(launch.modal_patch_url().to_string());
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let content = html! {
        <>
            <div class="modal" role="dialog">
                <div class="modal-header">
                    <h2 class="modal-title">{&launch.mission_name}</h2>
                    <button class="btn-close" onclick={close}>{"✕"}</button>
                </div>

                <div class="modal-body">
                    <div class="modal-image">
                        <img
                            src={patch.src.clone()}
                            onerror={patch.on_error.clone()}
                            alt={format!("{} patch", launch.mission_name)}
                            height="150"
                        />
                    </div>

                    <div class="detail-section">
                        <h3 class="detail-label">{"Mission name: "}</h3>
                        <p class="detail-value dimmed">{launch.mission_name_or_unknown()}</p>
                    </div>

                    <div class="detail-section">
                        <h3 class="detail-label">{"Rocket name: "}</h3>
                        <p class="detail-value dimmed">{launch.rocket_name_or_unknown()}</p>
                    </div>

                    <div class="detail-section">
                        <h3 class="detail-label">{"Details: "}</h3>
                        <p class="detail-value dimmed">{launch.details_or_unknown()}</p>
                    </div>
                </div>
            </div>
            <Overlay on_close={props.on_close.clone()} />
        </>
    };

    match modal_host() {
        Some(host) => yew::create_portal(content, host),
        None => content,
    }
}

fn modal_host() -> Option<web_sys::Element> {
    web_sys::window()?
        .document()?
        .get_element_by_id(MODAL_HOST_ID)
}
