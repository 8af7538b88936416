pub mod launches_state;

pub use launches_state::{reduce, LaunchesAction, LaunchesState};
