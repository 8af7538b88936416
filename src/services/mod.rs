pub mod launch_service;

pub use launch_service::{FetchError, LaunchFetcher, LaunchService};
