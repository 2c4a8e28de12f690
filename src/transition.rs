//! Timed colour fades for umbrella parts.
//!
//! A palette change attaches a [`ColorTransition`] to each part and returns
//! straight away; [`advance_color_transitions_system`] then fades the tint
//! over the following frames. Attaching a new transition replaces the one
//! in flight, starting from whatever colour the part shows at that moment.
use bevy::color::Mix;
use bevy::prelude::*;

use crate::components::PartTint;

/// An in-flight fade from one tint to another.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ColorTransition {
    from: Color,
    to: Color,
    duration_secs: f32,
    elapsed_secs: f32,
}

impl ColorTransition {
    /// Starts a fade lasting `duration_secs`.
    ///
    /// A non-positive duration finishes on the first advance.
    #[must_use]
    pub const fn new(from: Color, to: Color, duration_secs: f32) -> Self {
        Self {
            from,
            to,
            duration_secs,
            elapsed_secs: 0.0,
        }
    }

    /// Colour the fade ends on.
    #[must_use]
    pub const fn target(&self) -> Color {
        self.to
    }

    /// Completed fraction in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.duration_secs <= 0.0 {
            1.0
        } else {
            (self.elapsed_secs / self.duration_secs).clamp(0.0, 1.0)
        }
    }

    /// Whether the fade has reached its target.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Colour at the current progress, interpolated in sRGB space.
    #[must_use]
    pub fn current(&self) -> Color {
        if self.is_finished() {
            return self.to;
        }
        self.from
            .to_srgba()
            .mix(&self.to.to_srgba(), self.progress())
            .into()
    }

    /// Moves the fade forward and returns the colour to show.
    ///
    /// # Examples
    ///
    /// ```
    /// use bevy::prelude::Color;
    /// use brolly::transition::ColorTransition;
    ///
    /// let mut fade = ColorTransition::new(Color::BLACK, Color::WHITE, 0.5);
    /// fade.advance(0.25);
    /// assert!(!fade.is_finished());
    /// assert_eq!(fade.advance(0.5), Color::WHITE);
    /// assert!(fade.is_finished());
    /// ```
    pub fn advance(&mut self, delta_secs: f32) -> Color {
        self.elapsed_secs += delta_secs.max(0.0);
        self.current()
    }
}

/// Advances every fade and writes the result into the part's tint.
///
/// Finished fades are removed.
#[expect(
    clippy::needless_pass_by_value,
    reason = "Bevy systems require parameters by value, not by reference."
)]
pub fn advance_color_transitions_system(
    mut commands: Commands,
    time: Res<Time>,
    mut parts: Query<(Entity, &mut ColorTransition, &mut PartTint)>,
) {
    let delta = time.delta_secs();
    for (entity, mut transition, mut tint) in &mut parts {
        tint.color = transition.advance(delta);
        if transition.is_finished() {
            commands.entity(entity).remove::<ColorTransition>();
        }
    }
}
