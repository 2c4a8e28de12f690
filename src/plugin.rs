//! Bevy plugin wiring umbrella events and systems into the schedule.
//!
//! Drivers talk to umbrellas through triggered events:
//!
//! - [`SpawnUmbrella`] builds a new umbrella from the current settings and
//!   palette.
//! - [`SetUmbrellaDestination`] retargets one umbrella.
//! - [`TeleportUmbrella`] moves one umbrella instantly.
//! - [`PaletteChanged`] fades every umbrella part to a new theme.
//!
//! Insert [`UmbrellaSettings`] before adding the plugin to override the
//! defaults.

use bevy::prelude::*;
use log::{debug, error, warn};

use crate::components::{PartTint, Umbrella, UmbrellaPart};
use crate::mode::UmbrellaMode;
use crate::palette::ColorPalette;
use crate::settings::UmbrellaSettings;
use crate::spawn::spawn_umbrella;
use crate::systems::{
    refresh_screen_metrics_system, sync_translation, update_umbrellas_system, ScreenMetrics,
};
use crate::transition::{advance_color_transitions_system, ColorTransition};

/// Palette the umbrellas are currently tinted with, or fading towards.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deref)]
pub struct ActivePalette(pub ColorPalette);

/// Request to spawn an umbrella.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SpawnUmbrella {
    /// Mode to use; `None` takes the mode from [`UmbrellaSettings`].
    pub mode: Option<UmbrellaMode>,
    /// Starting position.
    pub position: Vec2,
}

/// Request to retarget an umbrella.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct SetUmbrellaDestination {
    /// Umbrella entity to retarget.
    pub umbrella: Entity,
    /// Unclamped target position.
    pub target: Vec2,
}

/// Request to move an umbrella without easing.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct TeleportUmbrella {
    /// Umbrella entity to move.
    pub umbrella: Entity,
    /// New position.
    pub position: Vec2,
}

/// Notification that the game theme changed.
#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub struct PaletteChanged {
    /// Palette to fade to.
    pub palette: ColorPalette,
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn on_spawn_umbrella(
    event: On<SpawnUmbrella>,
    mut commands: Commands,
    settings: Res<UmbrellaSettings>,
    palette: Res<ActivePalette>,
) {
    let SpawnUmbrella {
        mode: requested,
        position,
    } = *event.event();
    let mode = requested.unwrap_or(settings.mode);
    spawn_umbrella(&mut commands, &settings, &palette, mode, position);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn on_set_destination(
    event: On<SetUmbrellaDestination>,
    metrics: Res<ScreenMetrics>,
    mut umbrellas: Query<&mut Umbrella>,
) {
    let SetUmbrellaDestination { umbrella, target } = *event.event();
    let Ok(mut actor) = umbrellas.get_mut(umbrella) else {
        warn!("Ignoring destination for missing umbrella {umbrella}");
        return;
    };
    actor.set_destination(target, metrics.width);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn on_teleport(event: On<TeleportUmbrella>, mut umbrellas: Query<(&mut Umbrella, &mut Transform)>) {
    let TeleportUmbrella { umbrella, position } = *event.event();
    let Ok((mut actor, mut transform)) = umbrellas.get_mut(umbrella) else {
        warn!("Ignoring teleport for missing umbrella {umbrella}");
        return;
    };
    actor.teleport(position);
    sync_translation(&actor, &mut transform);
}

#[expect(
    clippy::needless_pass_by_value,
    reason = "Observer systems must accept On<T> by value for Events V2."
)]
fn on_palette_changed(
    event: On<PaletteChanged>,
    mut commands: Commands,
    settings: Res<UmbrellaSettings>,
    mut active: ResMut<ActivePalette>,
    parts: Query<(Entity, &UmbrellaPart, &PartTint)>,
) {
    let palette = event.event().palette;
    active.0 = palette;
    debug!("Fading umbrella parts to {palette:?}");
    for (entity, part, tint) in &parts {
        commands.entity(entity).insert(ColorTransition::new(
            tint.color,
            palette.color_for(part.kind),
            settings.color_change_duration_secs,
        ));
    }
}

/// Bevy plugin installing umbrella resources, observers and systems.
#[derive(Debug, Default)]
pub struct UmbrellaPlugin;

impl Plugin for UmbrellaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<UmbrellaSettings>();
        let settings = app.world().resource::<UmbrellaSettings>().clone();

        if let Err(e) = settings.validate() {
            error!("Umbrella settings are invalid: {e}");
        }
        let palette = settings.palette.to_palette().unwrap_or_else(|e| {
            error!("Falling back to the default umbrella palette: {e}");
            ColorPalette::default()
        });

        app.insert_resource(ScreenMetrics {
            width: settings.reference_screen_width,
        });
        app.insert_resource(ActivePalette(palette));

        app.add_observer(on_spawn_umbrella);
        app.add_observer(on_set_destination);
        app.add_observer(on_teleport);
        app.add_observer(on_palette_changed);

        app.add_systems(
            Update,
            (
                (refresh_screen_metrics_system, update_umbrellas_system).chain(),
                advance_color_transitions_system,
            ),
        );

        #[cfg(feature = "render")]
        app.add_plugins(crate::presentation::PresentationPlugin);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn plugin_initialises_resources() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(UmbrellaPlugin);
        assert!(app.world().contains_resource::<UmbrellaSettings>());
        assert!(app.world().contains_resource::<ActivePalette>());
        let metrics = app.world().resource::<ScreenMetrics>();
        assert!((metrics.width - crate::DEFAULT_REFERENCE_SCREEN_WIDTH).abs() < f32::EPSILON);
    }

    #[rstest]
    fn plugin_keeps_inserted_settings() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(UmbrellaSettings {
            reference_screen_width: 640.0,
            ..UmbrellaSettings::default()
        });
        app.add_plugins(UmbrellaPlugin);
        let metrics = app.world().resource::<ScreenMetrics>();
        assert!((metrics.width - 640.0).abs() < f32::EPSILON);
    }

    #[rstest]
    fn spawn_event_builds_hierarchy() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(UmbrellaPlugin);
        app.world_mut().trigger(SpawnUmbrella {
            mode: None,
            position: Vec2::new(12.0, 34.0),
        });
        app.world_mut().flush();

        let world = app.world_mut();
        let mut roots = world.query::<(&Umbrella, &Children)>();
        let (umbrella, children) = roots.single(world).expect("one umbrella");
        assert_eq!(umbrella.position(), Vec2::new(12.0, 34.0));
        assert_eq!(children.len(), 2);
    }

    #[rstest]
    fn palette_change_attaches_fades_once_flushed() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(UmbrellaPlugin);
        app.world_mut().trigger(SpawnUmbrella {
            mode: None,
            position: Vec2::ZERO,
        });
        app.world_mut().flush();

        let palette = ColorPalette {
            umbrella_top: Color::WHITE,
            umbrella_bottom: Color::BLACK,
        };
        app.world_mut().trigger(PaletteChanged { palette });
        app.world_mut().flush();

        let world = app.world_mut();
        let mut fades = world.query::<(&UmbrellaPart, &ColorTransition)>();
        let targets: Vec<_> = fades
            .iter(world)
            .map(|(part, fade)| (part.kind, fade.target()))
            .collect();
        assert_eq!(targets.len(), 2);
        for (kind, target) in targets {
            assert_eq!(target, palette.color_for(kind));
        }
        assert_eq!(world.resource::<ActivePalette>().0, palette);
    }
}
