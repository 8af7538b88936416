// ============================================================================
// LAUNCHES STATE - snapshot + pure reducer
// ============================================================================
// Every transition builds a new snapshot; nothing is mutated in place.
// The Yew store (`use_reducer`) goes through `Reducible`, tests call
// `reduce` directly.
// ============================================================================

use std::rc::Rc;

use serde::{Deserialize, Serialize};
use yew::Reducible;

use crate::models::Launch;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct LaunchesState {
    pub launches: Vec<Launch>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub selected_launch: Option<Launch>,
    pub is_modal_open: bool,
}

/// Tagged like `{"type": "open_modal", "payload": {...}}`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "snake_case")]
pub enum LaunchesAction {
    FetchInit,
    FetchSuccess(Vec<Launch>),
    FetchFailure(String),
    OpenModal(Launch),
    CloseModal,
    /// Any tag not listed above
    #[serde(other)]
    Unknown,
}

/// Applies one action to the previous snapshot.
pub fn reduce(state: &Rc<LaunchesState>, action: LaunchesAction) -> Rc<LaunchesState> {
    let next = match action {
        LaunchesAction::FetchInit => LaunchesState {
            is_loading: true,
            error: None,
            ..(**state).clone()
        },
        // error is left as is
        LaunchesAction::FetchSuccess(launches) => LaunchesState {
            is_loading: false,
            launches,
            ..(**state).clone()
        },
        LaunchesAction::FetchFailure(message) => LaunchesState {
            is_loading: false,
            error: Some(message),
            ..(**state).clone()
        },
        LaunchesAction::OpenModal(launch) => LaunchesState {
            is_modal_open: true,
            selected_launch: Some(launch),
            ..(**state).clone()
        },
        LaunchesAction::CloseModal => LaunchesState {
            is_modal_open: false,
            selected_launch: None,
            ..(**state).clone()
        },
        LaunchesAction::Unknown => return Rc::clone(state),
    };
    Rc::new(next)
}

impl Reducible for LaunchesState {
    type Action = LaunchesAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        reduce(&self, action)
    }
}

impl LaunchesState {
    /// The grid is hidden while loading or when an error is shown
    pub fn shows_grid(&self) -> bool {
        !self.is_loading && self.error.is_none()
    }

    /// Launch to render in the modal; both the flag and the selection must be set
    pub fn modal_launch(&self) -> Option<&Launch> {
        if self.is_modal_open {
            self.selected_launch.as_ref()
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{LaunchLinks, LaunchRocket};

    fn mock_launch(name: &str) -> Launch {
        Launch {
            mission_name: name.to_string(),
            details: Some("Test details".to_string()),
            links: Some(LaunchLinks {
                mission_patch: Some("patch.jpg".to_string()),
                mission_patch_small: Some("patch_small.jpg".to_string()),
            }),
            rocket: Some(LaunchRocket {
                rocket_name: Some("Falcon 9".to_string()),
            }),
        }
    }

    fn initial() -> Rc<LaunchesState> {
        Rc::new(LaunchesState::default())
    }

    #[test]
    fn test_initial_snapshot() {
        let state = LaunchesState::default();
        assert!(state.launches.is_empty());
        assert!(!state.is_loading);
        assert_eq!(state.error, None);
        assert_eq!(state.selected_launch, None);
        assert!(!state.is_modal_open);
    }

    #[test]
    fn test_unknown_action_returns_same_snapshot() {
        let states = [
            initial(),
            reduce(&initial(), LaunchesAction::FetchInit),
            reduce(&initial(), LaunchesAction::OpenModal(mock_launch("Crew-1"))),
        ];
        for state in states {
            let next = reduce(&state, LaunchesAction::Unknown);
            assert!(Rc::ptr_eq(&state, &next));
        }
    }

    #[test]
    fn test_unrecognized_tag_deserializes_to_unknown() {
        let action: LaunchesAction = serde_json::from_str(r#"{"type": "unknown"}"#).unwrap();
        assert_eq!(action, LaunchesAction::Unknown);

        let action: LaunchesAction =
            serde_json::from_str(r#"{"type": "fetch_failure", "payload": "boom"}"#).unwrap();
        assert_eq!(action, LaunchesAction::FetchFailure("boom".to_string()));

        let action: LaunchesAction = serde_json::from_str(r#"{"type": "close_modal"}"#).unwrap();
        assert_eq!(action, LaunchesAction::CloseModal);
    }

    #[test]
    fn test_fetch_init_clears_error() {
        let failed = reduce(&initial(), LaunchesAction::FetchFailure("Network error".into()));
        let next = reduce(&failed, LaunchesAction::FetchInit);

        assert!(next.is_loading);
        assert_eq!(next.error, None);
        assert!(next.launches.is_empty());
    }

    #[test]
    fn test_fetch_success() {
        let loading = reduce(&initial(), LaunchesAction::FetchInit);
        let launches = vec![mock_launch("Crew-1")];
        let next = reduce(&loading, LaunchesAction::FetchSuccess(launches.clone()));

        assert_eq!(
            *next,
            LaunchesState {
                launches,
                ..LaunchesState::default()
            }
        );
    }

    #[test]
    fn test_fetch_success_keeps_stale_error() {
        let failed = reduce(&initial(), LaunchesAction::FetchFailure("HTTP 500".into()));
        let next = reduce(&failed, LaunchesAction::FetchSuccess(vec![mock_launch("Crew-1")]));

        assert_eq!(next.launches.len(), 1);
        assert_eq!(next.error.as_deref(), Some("HTTP 500"));
    }

    #[test]
    fn test_fetch_failure_keeps_launches() {
        let loaded = reduce(&initial(), LaunchesAction::FetchSuccess(vec![mock_launch("Crew-1")]));
        let loading = reduce(&loaded, LaunchesAction::FetchInit);
        let next = reduce(&loading, LaunchesAction::FetchFailure("Network error".into()));

        assert!(!next.is_loading);
        assert_eq!(next.error.as_deref(), Some("Network error"));
        assert_eq!(next.launches, vec![mock_launch("Crew-1")]);
    }

    #[test]
    fn test_open_modal_replaces_selection() {
        let first = reduce(&initial(), LaunchesAction::OpenModal(mock_launch("Crew-1")));
        let second = reduce(&first, LaunchesAction::OpenModal(mock_launch("Starlink-15")));

        assert!(second.is_modal_open);
        assert_eq!(second.selected_launch, Some(mock_launch("Starlink-15")));
    }

    #[test]
    fn test_close_modal_without_open_modal() {
        let next = reduce(&initial(), LaunchesAction::CloseModal);
        assert!(!next.is_modal_open);
        assert_eq!(next.selected_launch, None);
        assert_eq!(*next, LaunchesState::default());
    }

    #[test]
    fn test_transitions_never_mutate_previous_snapshot() {
        let before = initial();
        let _ = reduce(&before, LaunchesAction::FetchInit);
        let _ = reduce(&before, LaunchesAction::OpenModal(mock_launch("Crew-1")));
        assert_eq!(*before, LaunchesState::default());
    }

    #[test]
    fn test_sequence_matches_direct_deltas() {
        let launches = vec![mock_launch("Crew-1"), mock_launch("Starlink-15")];
        let actions = vec![
            LaunchesAction::FetchInit,
            LaunchesAction::OpenModal(mock_launch("GPS III-04")),
            LaunchesAction::FetchSuccess(launches.clone()),
            LaunchesAction::Unknown,
            LaunchesAction::CloseModal,
            LaunchesAction::OpenModal(launches[1].clone()),
        ];
        let end = actions
            .into_iter()
            .fold(initial(), |state, action| reduce(&state, action));

        assert_eq!(
            *end,
            LaunchesState {
                launches: launches.clone(),
                is_loading: false,
                error: None,
                selected_launch: Some(launches[1].clone()),
                is_modal_open: true,
            }
        );
    }

    #[test]
    fn test_reducible_delegates_to_reduce() {
        let state = Reducible::reduce(initial(), LaunchesAction::FetchInit);
        assert!(state.is_loading);
    }

    #[test]
    fn test_derived_view_flags() {
        let mut state = LaunchesState::default();
        assert!(state.shows_grid());

        state.is_loading = true;
        assert!(!state.shows_grid());

        state.is_loading = false;
        state.error = Some("Network error".into());
        assert!(!state.shows_grid());

        // flag without selection renders nothing
        state.is_modal_open = true;
        assert_eq!(state.modal_launch(), None);

        state.selected_launch = Some(mock_launch("Crew-1"));
        assert_eq!(state.modal_launch().map(|l| l.mission_name.as_str()), Some("Crew-1"));

        state.is_modal_open = false;
        assert_eq!(state.modal_launch(), None);
    }
}
