pub mod launches_viewmodel;

pub use launches_viewmodel::{failure_message, LaunchesViewModel};
