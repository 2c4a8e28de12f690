//! Utility helpers for tests.
//!
//! Shared by the integration suites: a thread-safe wrapper that lets rspec
//! fixtures own a Bevy `App`, and a headless umbrella app with a fixed
//! time step.

pub mod app;

use bevy::math::Vec2;

/// Assert that two points are within `tolerance` of each other.
///
/// # Panics
/// Panics with both points when they are further apart than `tolerance`.
pub fn assert_vec2_near(actual: Vec2, expected: Vec2, tolerance: f32) {
    assert!(
        actual.distance(expected) <= tolerance,
        "expected {expected:?}, got {actual:?} (tolerance {tolerance})"
    );
}
