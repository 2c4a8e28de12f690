//! Contact description handed to the physics collaborator.
//!
//! The umbrella is a passive geometry provider: the physics step reads
//! [`UmbrellaBody`] from the canopy entity and contact-tests it against
//! falling objects. No contact callbacks flow back into this crate.

use bevy::prelude::*;

use crate::geometry::CollisionBoundary;
use crate::{FALLING_OBJECT_CATEGORY, UMBRELLA_CATEGORY, UMBRELLA_RESTITUTION};

/// Static collision body attached to the canopy.
///
/// The body never moves or rotates on its own; it follows the canopy's
/// transform.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct UmbrellaBody {
    /// Shape in canopy-local coordinates.
    pub boundary: CollisionBoundary,
    /// Category bits identifying this body.
    pub category: u32,
    /// Categories the physics step should report contacts against.
    pub contact_test_mask: u32,
    /// Bounciness applied to deflected objects.
    pub restitution: f32,
    /// Always `false`: the canopy is not simulated.
    pub is_dynamic: bool,
}

impl UmbrellaBody {
    /// Wraps `boundary` with the umbrella's contact settings.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use brolly::geometry::CollisionBoundary;
    /// use brolly::physics::UmbrellaBody;
    /// use brolly::FALLING_OBJECT_CATEGORY;
    ///
    /// let body = UmbrellaBody::new(CollisionBoundary::silhouette(Vec2::new(80.0, 40.0)));
    /// assert!(body.tests_against(FALLING_OBJECT_CATEGORY));
    /// assert!(!body.is_dynamic);
    /// ```
    #[must_use]
    pub const fn new(boundary: CollisionBoundary) -> Self {
        Self {
            boundary,
            category: UMBRELLA_CATEGORY,
            contact_test_mask: FALLING_OBJECT_CATEGORY,
            restitution: UMBRELLA_RESTITUTION,
            is_dynamic: false,
        }
    }

    /// Whether contacts with `category` should be reported.
    #[must_use]
    pub const fn tests_against(&self, category: u32) -> bool {
        self.contact_test_mask & category != 0
    }
}
