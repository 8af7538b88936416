// ============================================================================
// LAUNCHES VIEWMODEL - session orchestration
// ============================================================================
// Holds nothing but the fetcher. All state lives in the reducer store; the
// caller hands in a dispatch function for it.
// ============================================================================

use crate::models::Launch;
use crate::services::{FetchError, LaunchFetcher};
use crate::state::LaunchesAction;
use crate::utils::constants::GENERIC_FAILURE_MESSAGE;

pub struct LaunchesViewModel<F> {
    fetcher: F,
}

impl<F: LaunchFetcher> LaunchesViewModel<F> {
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// Runs the fetch lifecycle once: `fetch_init`, then exactly one of
    /// `fetch_success` / `fetch_failure`. No retry.
    pub async fn start_session(&self, dispatch: impl Fn(LaunchesAction)) {
        log::info!("🛰️ Launch session started");
        dispatch(LaunchesAction::FetchInit);

        match self.fetcher.fetch_launches().await {
            Ok(launches) => {
                log::info!("📦 Launches loaded: {}", launches.len());
                dispatch(LaunchesAction::FetchSuccess(launches));
            }
            Err(e) => {
                log::error!("❌ Error loading launches: {:?}", e);
                dispatch(LaunchesAction::FetchFailure(failure_message(&e)));
            }
        }
    }

    pub fn open_modal(&self, dispatch: &impl Fn(LaunchesAction), launch: Launch) {
        log::debug!("🔍 Opening details for {}", launch.mission_name);
        dispatch(LaunchesAction::OpenModal(launch));
    }

    pub fn close_modal(&self, dispatch: &impl Fn(LaunchesAction)) {
        log::debug!("✕ Closing details");
        dispatch(LaunchesAction::CloseModal);
    }
}

/// User-visible text for a failed fetch
pub fn failure_message(error: &FetchError) -> String {
    let message = error.to_string();
    if message.trim().is_empty() {
        GENERIC_FAILURE_MESSAGE.to_string()
    } else {
        message
    }
}
