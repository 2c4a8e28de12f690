//! Per-frame systems driving spawned umbrellas.
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::components::Umbrella;

/// Reference width used to tier easing distances.
///
/// Seeded from settings and refreshed from the primary window when one
/// exists.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenMetrics {
    /// Width in world units.
    pub width: f32,
}

/// Copies the primary window's width into [`ScreenMetrics`].
///
/// Headless apps have no window and keep the configured width.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn refresh_screen_metrics_system(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut metrics: ResMut<ScreenMetrics>,
) {
    let Ok(window) = windows.single() else {
        return;
    };
    let width = window.width();
    if width > 0.0 && (width - metrics.width).abs() > f32::EPSILON {
        metrics.width = width;
    }
}

/// Steps every umbrella once and mirrors its position into `Transform`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn update_umbrellas_system(
    time: Res<Time>,
    mut umbrellas: Query<(&mut Umbrella, &mut Transform)>,
) {
    let delta = time.delta_secs();
    for (mut umbrella, mut transform) in &mut umbrellas {
        umbrella.update(delta);
        sync_translation(&umbrella, &mut transform);
    }
}

/// Writes the actor position into the planar part of `transform`.
pub(crate) fn sync_translation(umbrella: &Umbrella, transform: &mut Transform) {
    let position = umbrella.position();
    transform.translation.x = position.x;
    transform.translation.y = position.y;
}
