//! Geolocation capability errors.

use thiserror::Error;

/// Outcome of a failed location acquisition, mapped 1:1 from the device's
/// native error signal.
///
/// These never propagate past the acquirer boundary as faults — the draft's
/// `location` field is left unchanged and the hosting layer renders a human
/// message per kind.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CapabilityError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("location information unavailable")]
    Unavailable,
    #[error("location request timed out")]
    Timeout,
    #[error("unknown location error: {0}")]
    Unknown(String),
}
