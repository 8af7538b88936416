// ============================================================================
// LAUNCH SERVICE - HTTP only (stateless)
// ============================================================================
// One GET per call, bounded by an AbortController wired to a gloo timer.
// The timer is cancelled as soon as the transport settles, before the
// status or the body are looked at.
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use async_trait::async_trait;
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use thiserror::Error;
use web_sys::AbortController;

use crate::config::CONFIG;
use crate::models::Launch;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Server request failed with status {status}")]
    Http { status: u16 },

    #[error("Request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u32 },

    /// Transport failure, shown as the underlying cause
    #[error("{0}")]
    Network(String),

    #[error("Failed to parse launches: {0}")]
    Parse(String),
}

impl FetchError {
    /// A transport error raised after our own timer fired is a timeout,
    /// anything else is a plain network failure.
    pub fn from_transport(cause: impl ToString, timed_out: bool, timeout_ms: u32) -> Self {
        if timed_out {
            FetchError::Timeout { timeout_ms }
        } else {
            FetchError::Network(cause.to_string())
        }
    }

    pub fn from_status(status: u16) -> Option<Self> {
        if (200..300).contains(&status) {
            None
        } else {
            Some(FetchError::Http { status })
        }
    }
}

/// Source of launches for a session
#[async_trait(?Send)]
pub trait LaunchFetcher {
    async fn fetch_launches(&self) -> Result<Vec<Launch>, FetchError>;
}

/// Fetches launches from the SpaceX REST API
#[derive(Clone, Debug)]
pub struct LaunchService {
    url: String,
    timeout_ms: u32,
}

impl LaunchService {
    pub fn new(url: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            url: url.into(),
            timeout_ms,
        }
    }

    pub fn from_config() -> Self {
        Self::new(CONFIG.launches_url(), CONFIG.request_timeout_ms)
    }
}

#[async_trait(?Send)]
impl LaunchFetcher for LaunchService {
    async fn fetch_launches(&self) -> Result<Vec<Launch>, FetchError> {
        log::info!("🚀 GET {} (timeout {} ms)", self.url, self.timeout_ms);

        let controller = AbortController::new()
            .map_err(|e| FetchError::Network(format!("AbortController unavailable: {:?}", e)))?;

        let timed_out = Rc::new(Cell::new(false));
        let timer = {
            let controller = controller.clone();
            let timed_out = timed_out.clone();
            let timeout_ms = self.timeout_ms;
            Timeout::new(timeout_ms, move || {
                log::warn!("⏱️ Launches request exceeded {} ms, aborting", timeout_ms);
                timed_out.set(true);
                controller.abort();
            })
        };

        let sent = Request::get(&self.url)
            .abort_signal(Some(&controller.signal()))
            .send()
            .await;

        // Clear the timer on every path before touching the response
        let _ = timer.cancel();

        let response = sent.map_err(|e| {
            let error = FetchError::from_transport(e, timed_out.get(), self.timeout_ms);
            log::error!("❌ Launches request failed: {}", error);
            error
        })?;

        if let Some(error) = FetchError::from_status(response.status()) {
            log::error!("❌ {}", error);
            return Err(error);
        }

        let launches = response
            .json::<Vec<Launch>>()
            .await
            .map_err(|e| FetchError::Parse(e.to_string()))?;

        log::info!("✅ {} launches received", launches.len());
        Ok(launches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status() {
        let error = FetchError::from_status(404).unwrap();
        assert_eq!(error, FetchError::Http { status: 404 });
        assert!(error.to_string().contains("404"));
    }

    #[test]
    fn test_success_statuses_are_not_errors() {
        assert_eq!(FetchError::from_status(200), None);
        assert_eq!(FetchError::from_status(204), None);
        assert!(FetchError::from_status(301).is_some());
        assert!(FetchError::from_status(500).is_some());
    }

    #[test]
    fn test_transport_failure_after_timer_is_timeout() {
        let error = FetchError::from_transport("AbortError: The user aborted a request.", true, 10_000);
        assert_eq!(error, FetchError::Timeout { timeout_ms: 10_000 });
        assert_eq!(error.to_string(), "Request timed out after 10000 ms");
    }

    #[test]
    fn test_transport_failure_without_timer_is_network() {
        let error = FetchError::from_transport("Network error", false, 10_000);
        assert_eq!(error, FetchError::Network("Network error".to_string()));
        assert_eq!(error.to_string(), "Network error");
    }

    #[test]
    fn test_service_from_config_uses_endpoint_and_bounded_wait() {
        let service = LaunchService::from_config();
        assert_eq!(service.url, CONFIG.launches_url());
        assert!(service.url.contains("/launches?launch_year="));
        assert_eq!(service.timeout_ms, CONFIG.request_timeout_ms);
    }
}
