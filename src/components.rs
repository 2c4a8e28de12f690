//! ECS component types for the umbrella and its two visual parts.
use bevy::prelude::*;

use crate::actor::UmbrellaActor;
use crate::{CANOPY_Z, FULL_COLOR_BLEND, HANDLE_Z};

/// Root component of a spawned umbrella.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Umbrella(pub UmbrellaActor);

/// Which half of the umbrella a child entity draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartKind {
    /// Top piece; carries the collision body.
    Canopy,
    /// Bottom piece; never collides.
    Handle,
}

/// A visual part parented to an [`Umbrella`].
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct UmbrellaPart {
    /// Which part this is.
    pub kind: PartKind,
    /// Art dimensions supplied by the renderer.
    pub size: Vec2,
}

/// Current tint of a part.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct PartTint {
    /// Colour multiplied into the part's art.
    pub color: Color,
    /// How much of the base texture colour the tint replaces.
    pub blend_factor: f32,
}

impl PartTint {
    /// A tint that fully replaces the texture colour.
    #[must_use]
    pub const fn full(color: Color) -> Self {
        Self {
            color,
            blend_factor: FULL_COLOR_BLEND,
        }
    }
}

/// Local offset and draw depth of one part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PartPlacement {
    /// Offset from the umbrella origin.
    pub offset: Vec2,
    /// Draw depth; larger draws in front.
    pub z: f32,
}

impl PartPlacement {
    /// Local transform for this placement.
    #[must_use]
    pub fn transform(self) -> Transform {
        Transform::from_translation(self.offset.extend(self.z))
    }
}

/// Where the canopy and handle sit relative to the umbrella origin.
///
/// The canopy stacks on the handle by half their combined height. The
/// handle shifts left by a quarter of its own width so the hook reads
/// as centred under the canopy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UmbrellaLayout {
    /// Placement of the canopy.
    pub canopy: PartPlacement,
    /// Placement of the handle.
    pub handle: PartPlacement,
}

impl UmbrellaLayout {
    /// Lays out parts of the given art sizes.
    ///
    /// # Examples
    ///
    /// ```
    /// use glam::Vec2;
    /// use brolly::components::UmbrellaLayout;
    ///
    /// let layout = UmbrellaLayout::from_sizes(Vec2::new(180.0, 60.0), Vec2::new(40.0, 100.0));
    /// assert_eq!(layout.canopy.offset, Vec2::new(0.0, 80.0));
    /// assert_eq!(layout.handle.offset, Vec2::new(-10.0, 0.0));
    /// assert!(layout.canopy.z > layout.handle.z);
    /// ```
    #[must_use]
    pub fn from_sizes(canopy_size: Vec2, handle_size: Vec2) -> Self {
        Self {
            canopy: PartPlacement {
                offset: Vec2::new(0.0, (canopy_size.y + handle_size.y) / 2.0),
                z: CANOPY_Z,
            },
            handle: PartPlacement {
                offset: Vec2::new(-handle_size.x / 4.0, 0.0),
                z: HANDLE_Z,
            },
        }
    }

    /// Placement of the given part.
    #[must_use]
    pub const fn placement(&self, kind: PartKind) -> PartPlacement {
        match kind {
            PartKind::Canopy => self.canopy,
            PartKind::Handle => self.handle,
        }
    }
}
