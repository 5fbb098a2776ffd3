//! User-facing advisories for actions that could not be carried out.

use thiserror::Error;

/// Why a click or a drive request was refused.
///
/// The `Display` text is the message shown to the user.  A refused action
/// never changes the session's route, traversal, or odometer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Advisory {
    #[error("Turn on roads layer first!")]
    EnableRoadLayer,

    #[error("Select start and end points!")]
    SelectTwoPoints,

    #[error("No path found along roads!")]
    NoPathFound,
}
