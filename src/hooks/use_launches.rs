// ============================================================================
// USE LAUNCHES HOOK - binds LaunchesViewModel to a use_reducer store
// ============================================================================

use std::rc::Rc;

use yew::prelude::*;

use crate::models::Launch;
use crate::services::LaunchService;
use crate::state::{LaunchesAction, LaunchesState};
use crate::viewmodels::LaunchesViewModel;

#[derive(Clone)]
pub struct UseLaunchesHandle {
    pub state: UseReducerHandle<LaunchesState>,
    pub open_modal: Callback<Launch>,
    pub close_modal: Callback<()>,
}

#[hook]
pub fn use_launches() -> UseLaunchesHandle {
    let state = use_reducer(LaunchesState::default);
    let viewmodel: Rc<LaunchesViewModel<LaunchService>> =
        use_memo((), |_| LaunchesViewModel::new(LaunchService::from_config()));

    // Fetch once per mount, not on re-render
    {
        let dispatcher = state.dispatcher();
        let viewmodel = viewmodel.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                viewmodel
                    .start_session(move |action: LaunchesAction| dispatcher.dispatch(action))
                    .await;
            });
            || ()
        });
    }

    // Stable callbacks so memoized cards don't re-render on every dispatch
    let open_modal = {
        let dispatcher = state.dispatcher();
        let viewmodel = viewmodel.clone();
        use_callback((), move |launch: Launch, _| {
            viewmodel.open_modal(&|action: LaunchesAction| dispatcher.dispatch(action), launch);
        })
    };

    let close_modal = {
        let dispatcher = state.dispatcher();
        use_callback((), move |_: (), _| {
            viewmodel.close_modal(&|action: LaunchesAction| dispatcher.dispatch(action));
        })
    };

    UseLaunchesHandle {
        state,
        open_modal,
        close_modal,
    }
}
