//! Headless Bevy apps for umbrella behaviour tests.

use std::ops::{Deref, DerefMut};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use brolly::{SpawnUmbrella, Umbrella, UmbrellaMode, UmbrellaPlugin, UmbrellaSettings};

/// Fixed step used by [`headless_app`].
pub const TICK: Duration = Duration::from_millis(100);

/// Wrapper that forwards `Send` and `Sync` because access is mutex-guarded.
#[derive(Debug)]
pub struct ThreadSafeApp(pub App);

impl Deref for ThreadSafeApp {
    type Target = App;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ThreadSafeApp {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

// SAFETY: rspec fixtures must implement `Clone + Send + Sync`, and the suites
// run serially. All access to the wrapped `App` goes through the mutex, so
// forwarding `Send`/`Sync` is sound for this test-only wrapper.
unsafe impl Send for ThreadSafeApp {}
unsafe impl Sync for ThreadSafeApp {}

/// Shared pointer type for the wrapped app.
pub type SharedApp = Arc<Mutex<ThreadSafeApp>>;

/// Locks the shared app, recovering from a poisoned mutex.
pub fn lock_app(app: &SharedApp) -> MutexGuard<'_, ThreadSafeApp> {
    app.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Builds an app with `MinimalPlugins`, a fixed [`TICK`], and the umbrella
/// plugin configured by `settings`.
#[must_use]
pub fn headless_app(settings: UmbrellaSettings) -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(TICK))
        .insert_resource(settings)
        .add_plugins(UmbrellaPlugin);
    app
}

/// Spawns an umbrella through the plugin and returns its entity.
///
/// # Panics
/// Panics if the spawn observer did not create exactly one new umbrella.
pub fn spawn_test_umbrella(app: &mut App, mode: UmbrellaMode, position: Vec2) -> Entity {
    let before: Vec<Entity> = umbrella_entities(app);
    app.world_mut().trigger(SpawnUmbrella {
        mode: Some(mode),
        position,
    });
    app.world_mut().flush();
    let mut spawned: Vec<Entity> = umbrella_entities(app)
        .into_iter()
        .filter(|entity| !before.contains(entity))
        .collect();
    assert_eq!(spawned.len(), 1, "expected exactly one new umbrella");
    spawned.remove(0)
}

/// Every entity carrying an [`Umbrella`].
pub fn umbrella_entities(app: &mut App) -> Vec<Entity> {
    let world = app.world_mut();
    let mut query = world.query_filtered::<Entity, With<Umbrella>>();
    query.iter(world).collect()
}
