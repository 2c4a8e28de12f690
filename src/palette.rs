//! Colour palette consumed when tinting the umbrella parts.
use bevy::prelude::*;

use crate::components::PartKind;

/// The two umbrella colours of a theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorPalette {
    /// Tint of the canopy.
    pub umbrella_top: Color,
    /// Tint of the handle.
    pub umbrella_bottom: Color,
}

impl ColorPalette {
    /// Colour assigned to a given umbrella part.
    #[must_use]
    pub const fn color_for(&self, kind: PartKind) -> Color {
        match kind {
            PartKind::Canopy => self.umbrella_top,
            PartKind::Handle => self.umbrella_bottom,
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            umbrella_top: Color::srgb_u8(0xe3, 0x4f, 0x4f),
            umbrella_bottom: Color::srgb_u8(0x2f, 0x2f, 0x3a),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parts_pick_their_colour() {
        let palette = ColorPalette {
            umbrella_top: Color::WHITE,
            umbrella_bottom: Color::BLACK,
        };
        assert_eq!(palette.color_for(PartKind::Canopy), Color::WHITE);
        assert_eq!(palette.color_for(PartKind::Handle), Color::BLACK);
    }

    #[test]
    fn default_palette_tints_parts_differently() {
        let palette = ColorPalette::default();
        assert_ne!(
            palette.color_for(PartKind::Canopy),
            palette.color_for(PartKind::Handle)
        );
    }
}
