pub mod launch;

pub use launch::{fallback_patch_url, patch_src, Launch, LaunchLinks, LaunchRocket};
