//! Operating modes and the easing/collision policy each one carries.
use glam::Vec2;
use serde::Deserialize;

use crate::geometry::CollisionBoundary;
use crate::{FAR_EASING, MEDIUM_EASING, MIN_EASING, NEAR_EASING, PING_PONG_EASING};

/// How the umbrella tracks its destination and deflects falling objects.
///
/// Chosen once when the umbrella is created.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UmbrellaMode {
    /// Distance-tiered easing and the notched canopy loop.
    #[default]
    Normal,
    /// Fixed fast easing and the canopy's own silhouette, for bouncing
    /// objects back and forth.
    PingPong,
}

impl UmbrellaMode {
    /// Maps the legacy boolean flag onto a mode.
    #[must_use]
    pub const fn from_ping_pong(ping_pong: bool) -> Self {
        if ping_pong {
            Self::PingPong
        } else {
            Self::Normal
        }
    }

    /// Whether this is [`UmbrellaMode::PingPong`].
    #[must_use]
    pub const fn is_ping_pong(self) -> bool {
        matches!(self, Self::PingPong)
    }

    /// Easing coefficient for a freshly set destination.
    ///
    /// `distance` is measured from the current position to the clamped
    /// destination and tiered against `reference_width`. `floor_hugging`
    /// halves the tier, never below [`MIN_EASING`].
    ///
    /// # Examples
    ///
    /// ```
    /// use brolly::UmbrellaMode;
    ///
    /// assert_eq!(UmbrellaMode::Normal.easing_for(200.0, 320.0, false), 0.04);
    /// assert_eq!(UmbrellaMode::Normal.easing_for(100.0, 320.0, true), 0.05);
    /// assert_eq!(UmbrellaMode::PingPong.easing_for(1000.0, 320.0, true), 0.3);
    /// ```
    #[must_use]
    pub fn easing_for(self, distance: f32, reference_width: f32, floor_hugging: bool) -> f32 {
        match self {
            Self::PingPong => PING_PONG_EASING,
            Self::Normal => {
                let tier = if distance > reference_width / 2.0 {
                    FAR_EASING
                } else if distance > reference_width / 4.0 {
                    MEDIUM_EASING
                } else {
                    NEAR_EASING
                };
                if floor_hugging {
                    (tier / 2.0).max(MIN_EASING)
                } else {
                    tier
                }
            }
        }
    }

    /// Contact boundary for a canopy of `canopy_size`.
    #[must_use]
    pub fn collision_boundary(self, canopy_size: Vec2) -> CollisionBoundary {
        match self {
            Self::Normal => CollisionBoundary::notched_canopy(canopy_size),
            Self::PingPong => CollisionBoundary::silhouette(canopy_size),
        }
    }
}
