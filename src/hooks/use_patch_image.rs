use yew::prelude::*;

use crate::models::patch_src;

pub struct UsePatchImageHandle {
    pub src: String,
    pub on_error: Callback<Event>,
}

/// Mission patch `src` that falls back once the browser fails to load `url`
#[hook]
pub fn use_patch_image(url: String) -> UsePatchImageHandle {
    let load_failed = use_state_eq(|| false);

    // New url, new attempt
    {
        let load_failed = load_failed.clone();
        use_effect_with(url.clone(), move |_| {
            load_failed.set(false);
            || ()
        });
    }

    let on_error = {
        let load_failed = load_failed.clone();
        let url = url.clone();
        Callback::from(move |_: Event| {
            log::warn!("🖼️ Patch image failed to load, using fallback: {}", url);
            load_failed.set(true);
        })
    };

    UsePatchImageHandle {
        src: patch_src(&url, *load_failed).to_string(),
        on_error,
    }
}
