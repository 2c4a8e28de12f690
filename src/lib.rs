#![cfg_attr(docsrs, feature(doc_cfg))]
//! Library crate providing the umbrella actor.
//!
//! The umbrella chases a destination with distance-tiered easing, stays above
//! a minimum height, and exposes a static canopy boundary that a physics
//! step uses to deflect falling objects. [`UmbrellaActor`] is the engine-free
//! core; [`UmbrellaPlugin`] drives it inside a Bevy app.
pub mod actor;
pub mod components;
pub mod constants;
pub mod geometry;
pub mod logging;
pub mod mode;
pub mod palette;
pub mod physics;
pub mod plugin;
#[cfg(feature = "render")]
#[cfg_attr(docsrs, doc(cfg(feature = "render")))]
pub mod presentation;
pub mod settings;
pub mod spawn;
pub mod systems;
pub mod transition;
pub use constants::*;

// Re-export commonly used items
pub use actor::UmbrellaActor;
pub use components::{PartKind, PartTint, Umbrella, UmbrellaLayout, UmbrellaPart};
pub use geometry::{notched_canopy_loop, CollisionBoundary};
pub use logging::init as init_logging;
pub use mode::UmbrellaMode;
pub use palette::ColorPalette;
pub use physics::UmbrellaBody;
pub use plugin::{
    ActivePalette, PaletteChanged, SetUmbrellaDestination, SpawnUmbrella, TeleportUmbrella,
    UmbrellaPlugin,
};
pub use settings::{PaletteSettings, SettingsError, UmbrellaSettings};
pub use spawn::spawn_umbrella;
pub use systems::ScreenMetrics;
pub use transition::ColorTransition;

pub mod prelude {
    //! Prelude exports used in documentation examples.
    //!
    //! ```rust,no_run
    //! use brolly::prelude::*;
    //! ```

    pub use crate::ColorPalette;
    pub use crate::PaletteChanged;
    pub use crate::SetUmbrellaDestination;
    pub use crate::SpawnUmbrella;
    pub use crate::TeleportUmbrella;
    pub use crate::Umbrella;
    pub use crate::UmbrellaActor;
    pub use crate::UmbrellaMode;
    pub use crate::UmbrellaPlugin;
    pub use crate::UmbrellaSettings;
}
