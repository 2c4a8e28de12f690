//! Tuning constants shared by the umbrella actor and its systems.
//!
//! The easing tiers and canopy geometry are gameplay tuning: changing them
//! alters how falling objects slide off the umbrella.

/// Easing applied when the destination is more than half a screen away.
pub const FAR_EASING: f32 = 0.04;
/// Easing applied between a quarter and half a screen away.
pub const MEDIUM_EASING: f32 = 0.1;
/// Easing applied within a quarter screen of the destination.
pub const NEAR_EASING: f32 = 0.15;
/// Fixed easing used while in ping-pong mode.
pub const PING_PONG_EASING: f32 = 0.3;
/// Easing before the first destination is set.
pub const DEFAULT_EASING: f32 = MEDIUM_EASING;
/// Lower bound for floor-damped easing.
pub const MIN_EASING: f32 = FAR_EASING;

/// Vertical band above the minimum height treated as "resting on the floor".
pub const FLOOR_DAMPING_TOLERANCE: f32 = 5.0;
/// Distance at or below which `update` snaps onto the destination.
pub const SNAP_DISTANCE: f32 = 1.0;

/// Inset of the lower canopy notches, in world units.
pub const CANOPY_NOTCH_INSET: f32 = 10.0;
/// Bounciness of the canopy boundary.
pub const UMBRELLA_RESTITUTION: f32 = 0.9;

/// Draw depth of the canopy; above the handle.
pub const CANOPY_Z: f32 = 4.0;
/// Draw depth of the handle.
pub const HANDLE_Z: f32 = 2.0;
/// Tint fully replaces the base texture colour.
pub const FULL_COLOR_BLEND: f32 = 1.0;

/// Seconds a palette change takes to fade in.
pub const DEFAULT_COLOR_CHANGE_DURATION_SECS: f32 = 0.25;
/// Screen width assumed when no primary window exists.
pub const DEFAULT_REFERENCE_SCREEN_WIDTH: f32 = 320.0;
/// Art width and height of the canopy sprite.
pub const DEFAULT_CANOPY_SIZE: [f32; 2] = [180.0, 64.0];
/// Art width and height of the handle sprite.
pub const DEFAULT_HANDLE_SIZE: [f32; 2] = [40.0, 100.0];

/// Contact category of falling objects such as raindrops.
pub const FALLING_OBJECT_CATEGORY: u32 = 1 << 1;
/// Contact category of the umbrella canopy.
pub const UMBRELLA_CATEGORY: u32 = 1 << 3;
