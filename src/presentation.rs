//! Sprite presentation for umbrella parts.
//!
//! Only compiled with the `render` feature. The simulation never reads
//! sprites: [`PartTint`] stays the source of truth and is copied into each
//! part's `Sprite` whenever it changes.

use bevy::prelude::*;

use crate::components::{PartTint, Umbrella, UmbrellaPart};

/// Gives newly spawned umbrella roots a visibility so their sprites draw.
fn attach_umbrella_visibility(mut commands: Commands, roots: Query<Entity, Added<Umbrella>>) {
    for entity in &roots {
        commands.entity(entity).insert(Visibility::default());
    }
}

/// Adds an untextured sprite sized to each new part.
fn attach_part_sprites(
    mut commands: Commands,
    parts: Query<(Entity, &UmbrellaPart, &PartTint), Added<UmbrellaPart>>,
) {
    for (entity, part, tint) in &parts {
        commands.entity(entity).insert(Sprite {
            color: tint.color,
            custom_size: Some(part.size),
            ..default()
        });
    }
}

/// Copies changed tints into sprite colours.
fn sync_part_tints(mut parts: Query<(&PartTint, &mut Sprite), Changed<PartTint>>) {
    for (tint, mut sprite) in &mut parts {
        sprite.color = tint.color;
    }
}

/// Plugin drawing umbrella parts as sprites.
///
/// Added automatically by [`UmbrellaPlugin`](crate::UmbrellaPlugin) when the
/// `render` feature is enabled.
#[derive(Debug)]
pub struct PresentationPlugin;

impl Plugin for PresentationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            PostUpdate,
            (
                (attach_umbrella_visibility, attach_part_sprites),
                sync_part_tints,
            )
                .chain(),
        );
    }
}
