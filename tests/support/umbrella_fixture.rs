//! Shared fixture for umbrella behavioural tests.
//!
//! Each fixture owns one headless app and one spawned umbrella. rspec clones
//! the fixture per example, and the clones share the app, so suites keep to
//! a single example per fixture.
#![allow(
    dead_code,
    reason = "Each test binary uses a different subset of the fixture."
)]

use std::sync::{Arc, Mutex, MutexGuard};

use bevy::prelude::*;
use brolly::{
    ColorPalette, PaletteChanged, PartKind, PartTint, SetUmbrellaDestination, TeleportUmbrella,
    Umbrella, UmbrellaMode, UmbrellaPart, UmbrellaSettings,
};
use test_utils::app::{headless_app, lock_app, spawn_test_umbrella, SharedApp, ThreadSafeApp};

/// One headless app with one umbrella in it.
#[derive(Debug, Clone)]
pub struct UmbrellaFixture {
    app: SharedApp,
    umbrella: Entity,
}

impl UmbrellaFixture {
    /// Builds the app and spawns an umbrella of `mode` at `position`.
    ///
    /// Runs one update before returning. The first update only starts the
    /// clock, so every later tick advances time by a full step.
    pub fn bootstrap(settings: UmbrellaSettings, mode: UmbrellaMode, position: Vec2) -> Self {
        let mut app = headless_app(settings);
        let umbrella = spawn_test_umbrella(&mut app, mode, position);
        app.update();
        Self {
            app: Arc::new(Mutex::new(ThreadSafeApp(app))),
            umbrella,
        }
    }

    /// Locks the underlying `App` for direct inspection or mutation.
    pub fn app_guard(&self) -> MutexGuard<'_, ThreadSafeApp> {
        lock_app(&self.app)
    }

    /// The spawned umbrella entity.
    pub const fn umbrella(&self) -> Entity {
        self.umbrella
    }

    /// Advances the app `ticks` times.
    pub fn tick(&self, ticks: usize) {
        let mut app = self.app_guard();
        for _ in 0..ticks {
            app.update();
        }
    }

    /// Retargets the umbrella through the plugin's event.
    pub fn set_destination(&self, target: Vec2) {
        let umbrella = self.umbrella;
        let mut app = self.app_guard();
        let world = app.world_mut();
        world.trigger(SetUmbrellaDestination { umbrella, target });
        world.flush();
    }

    /// Teleports the umbrella through the plugin's event.
    pub fn teleport(&self, position: Vec2) {
        let umbrella = self.umbrella;
        let mut app = self.app_guard();
        let world = app.world_mut();
        world.trigger(TeleportUmbrella { umbrella, position });
        world.flush();
    }

    /// Announces a new palette and applies the fades it queues.
    pub fn change_palette(&self, palette: ColorPalette) {
        let mut app = self.app_guard();
        let world = app.world_mut();
        world.trigger(PaletteChanged { palette });
        world.flush();
    }

    /// Snapshot of the umbrella component.
    pub fn umbrella_state(&self) -> Umbrella {
        self.app_guard()
            .world()
            .get::<Umbrella>(self.umbrella)
            .cloned()
            .expect("umbrella should exist")
    }

    /// Planar translation of the umbrella root.
    pub fn translation(&self) -> Vec2 {
        self.app_guard()
            .world()
            .get::<Transform>(self.umbrella)
            .map(|transform| transform.translation.truncate())
            .expect("umbrella should have a Transform")
    }

    /// The child entity drawing `kind`.
    pub fn part(&self, kind: PartKind) -> Entity {
        let app = self.app_guard();
        let world = app.world();
        let children = world
            .get::<Children>(self.umbrella)
            .expect("umbrella should have children");
        children
            .to_vec()
            .into_iter()
            .find(|child| {
                world
                    .get::<UmbrellaPart>(*child)
                    .is_some_and(|part| part.kind == kind)
            })
            .expect("part should exist")
    }

    /// Current tint of `kind`.
    pub fn tint(&self, kind: PartKind) -> PartTint {
        let part = self.part(kind);
        *self
            .app_guard()
            .world()
            .get::<PartTint>(part)
            .expect("part should be tinted")
    }

    /// Reads component `C` from the `kind` part, if present.
    pub fn part_component<C: Component + Clone>(&self, kind: PartKind) -> Option<C> {
        let part = self.part(kind);
        self.app_guard().world().get::<C>(part).cloned()
    }
}
