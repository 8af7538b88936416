/// Default base URL of the SpaceX REST API (v3); SPACEX_API_URL overrides it in config
pub const SPACEX_API_URL: &str = "https://api.spacexdata.com/v3";

/// Year whose launches are listed
pub const DEFAULT_LAUNCH_YEAR: u16 = 2020;

/// Bounded wait for the launches request (ms)
pub const FETCH_TIMEOUT_MS: u32 = 10_000;

/// Default image for missing or broken mission patches
pub const FALLBACK_PATCH_URL: &str =
    "https://www.primarymarkets.com/wp-content/uploads/2024/04/Spacex-Circle-Logo.png";

/// Placeholder for absent text fields in the details modal
pub const UNKNOWN_PLACEHOLDER: &str = "Unknown";

/// Message stored when a failure carries no text of its own
pub const GENERIC_FAILURE_MESSAGE: &str = "error";

/// Id of the element that hosts the modal portal
pub const MODAL_HOST_ID: &str = "modal";

/// `KeyboardEvent.code` that closes the modal
pub const ESCAPE_KEY_CODE: &str = "Escape";
