//! Factory that assembles an umbrella entity hierarchy.
use bevy::prelude::*;
use log::info;

use crate::actor::UmbrellaActor;
use crate::components::{PartKind, PartTint, Umbrella, UmbrellaPart};
use crate::mode::UmbrellaMode;
use crate::palette::ColorPalette;
use crate::physics::UmbrellaBody;
use crate::settings::UmbrellaSettings;

/// Spawns an umbrella at `position` with its canopy and handle children.
///
/// The canopy carries the [`UmbrellaBody`] derived from `mode`; the handle
/// has no collision. Both parts are tinted from `palette` and laid out by
/// [`UmbrellaLayout`](crate::components::UmbrellaLayout).
pub fn spawn_umbrella(
    commands: &mut Commands,
    settings: &UmbrellaSettings,
    palette: &ColorPalette,
    mode: UmbrellaMode,
    position: Vec2,
) -> Entity {
    let mut actor = UmbrellaActor::new(mode, settings.canopy_size(), settings.handle_size())
        .with_minimum_height(settings.minimum_height);
    actor.teleport(position);

    let layout = actor.layout();
    let body = UmbrellaBody::new(actor.boundary().clone());
    let canopy = UmbrellaPart {
        kind: PartKind::Canopy,
        size: actor.canopy_size(),
    };
    let handle = UmbrellaPart {
        kind: PartKind::Handle,
        size: actor.handle_size(),
    };

    let entity = commands
        .spawn((
            Name::new("Umbrella"),
            Transform::from_translation(position.extend(0.0)),
            Umbrella(actor),
        ))
        .with_children(|parent| {
            parent.spawn((
                Name::new("UmbrellaCanopy"),
                canopy,
                PartTint::full(palette.color_for(PartKind::Canopy)),
                body,
                layout.placement(PartKind::Canopy).transform(),
            ));
            parent.spawn((
                Name::new("UmbrellaHandle"),
                handle,
                PartTint::full(palette.color_for(PartKind::Handle)),
                layout.placement(PartKind::Handle).transform(),
            ));
        })
        .id();

    info!("Spawned {mode:?} umbrella {entity} at {position}");
    entity
}
