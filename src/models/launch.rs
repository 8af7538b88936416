// ============================================================================
// LAUNCH MODEL - record returned by the SpaceX v3 API
// ============================================================================
// Read-only once received. Every optional field degrades to a placeholder
// on its own; a missing field is never an error.
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::config::CONFIG;
use crate::utils::constants::UNKNOWN_PLACEHOLDER;

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LaunchLinks {
    #[serde(default)]
    pub mission_patch: Option<String>,
    #[serde(default)]
    pub mission_patch_small: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LaunchRocket {
    #[serde(default)]
    pub rocket_name: Option<String>,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct Launch {
    /// Display name, also the list key (unique within one batch)
    pub mission_name: String,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub links: Option<LaunchLinks>,
    #[serde(default)]
    pub rocket: Option<LaunchRocket>,
}

impl Launch {
    #[cfg(test)]
    pub(crate) fn new(mission_name: impl Into<String>) -> Self {
        Self {
            mission_name: mission_name.into(),
            details: None,
            links: None,
            rocket: None,
        }
    }

    /// Image for the grid card
    pub fn card_patch_url(&self) -> &str {
        self.card_patch_url_or(fallback_patch_url())
    }

    /// Image for the details modal
    pub fn modal_patch_url(&self) -> &str {
        self.modal_patch_url_or(fallback_patch_url())
    }

    pub fn card_patch_url_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let small = self.links.as_ref().and_then(|l| present(&l.mission_patch_small));
        small.unwrap_or(fallback)
    }

    pub fn modal_patch_url_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        let large = self.links.as_ref().and_then(|l| present(&l.mission_patch));
        large.unwrap_or(fallback)
    }

    pub fn rocket_name(&self) -> Option<&str> {
        self.rocket.as_ref().and_then(|r| present(&r.rocket_name))
    }

    pub fn details(&self) -> Option<&str> {
        present(&self.details)
    }

    pub fn mission_name_or_unknown(&self) -> &str {
        if self.mission_name.trim().is_empty() {
            UNKNOWN_PLACEHOLDER
        } else {
            &self.mission_name
        }
    }

    pub fn rocket_name_or_unknown(&self) -> &str {
        self.rocket_name().unwrap_or(UNKNOWN_PLACEHOLDER)
    }

    pub fn details_or_unknown(&self) -> &str {
        self.details().unwrap_or(UNKNOWN_PLACEHOLDER)
    }
}

/// Configured image for missing or broken mission patches
pub fn fallback_patch_url() -> &'static str {
    &CONFIG.fallback_patch_url
}

/// `src` to render for a patch; switches to the fallback once the image failed to load
pub fn patch_src(url: &str, load_failed: bool) -> &str {
    if load_failed {
        fallback_patch_url()
    } else {
        url
    }
}

// Empty strings count as absent
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.trim().is_empty())
}
