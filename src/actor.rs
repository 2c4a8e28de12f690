//! The umbrella actor: eased destination tracking with a floor clamp.
//!
//! [`UmbrellaActor`] holds no engine state, so it can be driven directly
//! in tests or wrapped in the [`Umbrella`](crate::components::Umbrella)
//! component by the plugin.
use glam::Vec2;
use log::debug;

use crate::components::UmbrellaLayout;
use crate::geometry::CollisionBoundary;
use crate::mode::UmbrellaMode;
use crate::{DEFAULT_EASING, FLOOR_DAMPING_TOLERANCE, SNAP_DISTANCE};

/// A movable umbrella that chases its destination.
#[derive(Debug, Clone, PartialEq)]
pub struct UmbrellaActor {
    position: Vec2,
    destination: Vec2,
    easing: f32,
    minimum_height: f32,
    mode: UmbrellaMode,
    canopy_size: Vec2,
    handle_size: Vec2,
    boundary: CollisionBoundary,
}

impl UmbrellaActor {
    /// Creates an actor at the origin with its boundary derived from `mode`.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use brolly::{UmbrellaActor, UmbrellaMode};
    ///
    /// let actor = UmbrellaActor::new(UmbrellaMode::Normal, Vec2::new(180.0, 64.0), Vec2::new(40.0, 100.0));
    /// assert_eq!(actor.height(), 164.0);
    /// assert_eq!(actor.boundary().vertices().len(), 6);
    /// ```
    #[must_use]
    pub fn new(mode: UmbrellaMode, canopy_size: Vec2, handle_size: Vec2) -> Self {
        debug!("Creating {mode:?} umbrella with canopy {canopy_size} and handle {handle_size}");
        Self {
            position: Vec2::ZERO,
            destination: Vec2::ZERO,
            easing: DEFAULT_EASING,
            minimum_height: 0.0,
            mode,
            canopy_size,
            handle_size,
            boundary: mode.collision_boundary(canopy_size),
        }
    }

    /// Builder-style variant of [`UmbrellaActor::set_minimum_height`].
    #[must_use]
    pub fn with_minimum_height(mut self, minimum_height: f32) -> Self {
        self.minimum_height = minimum_height;
        self
    }

    /// Moves the actor instantly, cancelling any pending approach.
    ///
    /// Neither the floor clamp nor the easing are touched.
    pub fn teleport(&mut self, point: Vec2) {
        debug!("Teleporting umbrella to {point}");
        self.position = point;
        self.destination = point;
    }

    /// Sets a new destination and picks the easing to approach it with.
    ///
    /// The destination never sits below the minimum height. Easing is
    /// chosen by the mode from the distance still to cover, measured
    /// against `reference_width`.
    pub fn set_destination(&mut self, target: Vec2, reference_width: f32) {
        self.destination = Vec2::new(target.x, target.y.max(self.minimum_height));

        let distance = self.destination.distance(self.position);
        #[expect(
            clippy::float_cmp,
            reason = "The clamp assigns minimum_height verbatim, so equality is exact."
        )]
        let floor_hugging = self.destination.y == self.minimum_height
            && self.position.y <= self.minimum_height + FLOOR_DAMPING_TOLERANCE;

        let easing = self
            .mode
            .easing_for(distance, reference_width, floor_hugging);
        if (easing - self.easing).abs() > f32::EPSILON {
            debug!(
                "Umbrella easing {:.3} -> {easing:.3} at distance {distance:.1}",
                self.easing
            );
        }
        self.easing = easing;
    }

    /// Advances one tick towards the destination.
    ///
    /// Closes `easing` of the remaining gap, or snaps onto the destination
    /// once within [`SNAP_DISTANCE`]. The step counts ticks, not seconds, so
    /// `_delta_secs` is not consulted.
    pub fn update(&mut self, _delta_secs: f32) {
        let remaining = self.destination - self.position;
        if remaining.length() > SNAP_DISTANCE {
            self.position += remaining * self.easing;
        } else {
            self.position = self.destination;
        }
    }

    /// Remaining displacement to the destination.
    ///
    /// This is a direction and urgency signal, not a per-tick speed.
    #[must_use]
    pub fn velocity(&self) -> Vec2 {
        self.destination - self.position
    }

    /// Combined height of canopy and handle.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.canopy_size.y + self.handle_size.y
    }

    /// Sets the floor applied to future destinations.
    pub const fn set_minimum_height(&mut self, minimum_height: f32) {
        self.minimum_height = minimum_height;
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Clamped destination.
    #[must_use]
    pub const fn destination(&self) -> Vec2 {
        self.destination
    }

    /// Fraction of the remaining distance closed per tick.
    #[must_use]
    pub const fn easing(&self) -> f32 {
        self.easing
    }

    /// Floor applied to destinations.
    #[must_use]
    pub const fn minimum_height(&self) -> f32 {
        self.minimum_height
    }

    /// Mode chosen at construction.
    #[must_use]
    pub const fn mode(&self) -> UmbrellaMode {
        self.mode
    }

    /// Canopy art dimensions.
    #[must_use]
    pub const fn canopy_size(&self) -> Vec2 {
        self.canopy_size
    }

    /// Handle art dimensions.
    #[must_use]
    pub const fn handle_size(&self) -> Vec2 {
        self.handle_size
    }

    /// Contact boundary of the canopy.
    #[must_use]
    pub const fn boundary(&self) -> &CollisionBoundary {
        &self.boundary
    }

    /// Part placement for this actor's sizes.
    #[must_use]
    pub fn layout(&self) -> UmbrellaLayout {
        UmbrellaLayout::from_sizes(self.canopy_size, self.handle_size)
    }
}
