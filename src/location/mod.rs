//! Geolocation capability acquirer.
//!
//! Wraps the fallible, asynchronous device geolocation capability with a
//! hard deadline and a cached-fix freshness policy. The deadline is the
//! only cancellation boundary in the crate: when it elapses the pending
//! capability future is dropped, so a late fix can never be applied to a
//! draft that has moved on.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::error::CapabilityError;

/// Policy default: wait up to ten seconds for a fix.
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;
/// Policy default: accept a cached fix up to five minutes old.
pub const DEFAULT_MAX_CACHE_AGE_MS: u64 = 300_000;

/// Options passed through to the device capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AcquireOptions {
    /// Request a best-effort high-accuracy fix.
    pub enable_high_accuracy: bool,
    /// Deadline for the whole acquisition.
    pub timeout_ms: u64,
    /// Maximum age of an acceptable cached fix.
    pub max_cache_age_ms: u64,
}

impl Default for AcquireOptions {
    fn default() -> Self {
        AcquireOptions {
            enable_high_accuracy: true,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            max_cache_age_ms: DEFAULT_MAX_CACHE_AGE_MS,
        }
    }
}

/// A successful device fix.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PositionFix {
    pub latitude: f64,
    pub longitude: f64,
}

impl PositionFix {
    /// Render as `"<lat>, <lon>"` with six decimal places, the format the
    /// draft's location field carries for auto-detected positions.
    pub fn to_location_string(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// Native error signal of the device capability.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PositionErrorCode {
    PermissionDenied,
    PositionUnavailable,
    Timeout,
    Unknown,
}

/// The device geolocation capability, as the hosting platform provides it.
#[async_trait]
pub trait GeolocationCapability: Send + Sync {
    /// Whether the platform offers geolocation at all.
    fn supported(&self) -> bool {
        true
    }

    /// Request a position fix. May take arbitrarily long; the acquirer
    /// enforces the deadline externally.
    async fn request_position(
        &self,
        options: AcquireOptions,
    ) -> Result<PositionFix, PositionErrorCode>;
}

/// Acquires a device position with timeout and error mapping.
///
/// One outstanding request at a time: a second `acquire` while one is
/// pending is undefined — callers disable the triggering affordance while
/// a request is in flight.
pub struct LocationAcquirer {
    capability: Arc<dyn GeolocationCapability>,
}

impl LocationAcquirer {
    pub fn new(capability: Arc<dyn GeolocationCapability>) -> Self {
        LocationAcquirer { capability }
    }

    /// Request a fix, waiting at most `options.timeout_ms`.
    ///
    /// An unsupported platform resolves immediately with
    /// [`CapabilityError::Unknown`]. An elapsed deadline drops the pending
    /// capability call and resolves with [`CapabilityError::Timeout`];
    /// native error codes map 1:1 onto the remaining kinds. Failures are
    /// data for the caller to render — the draft is never touched here.
    pub async fn acquire(&self, options: AcquireOptions) -> Result<PositionFix, CapabilityError> {
        if !self.capability.supported() {
            return Err(CapabilityError::Unknown(
                "geolocation is not supported".into(),
            ));
        }

        let deadline = Duration::from_millis(options.timeout_ms);
        match tokio::time::timeout(deadline, self.capability.request_position(options)).await {
            Ok(Ok(fix)) => Ok(fix),
            Ok(Err(code)) => Err(map_error_code(code)),
            Err(_) => {
                tracing::debug!(
                    timeout_ms = options.timeout_ms,
                    "geolocation request abandoned at deadline"
                );
                Err(CapabilityError::Timeout)
            }
        }
    }
}

fn map_error_code(code: PositionErrorCode) -> CapabilityError {
    match code {
        PositionErrorCode::PermissionDenied => CapabilityError::PermissionDenied,
        PositionErrorCode::PositionUnavailable => CapabilityError::Unavailable,
        PositionErrorCode::Timeout => CapabilityError::Timeout,
        PositionErrorCode::Unknown => {
            CapabilityError::Unknown("an unknown error occurred".into())
        }
    }
}
