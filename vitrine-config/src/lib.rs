//! Configuration for the Vitrine storefront engine.
//!
//! Settings come from `$VITRINE_CONFIG_PATH`, `$VITRINE_CONFIG_JSON`, a
//! `vitrine.toml`/`vitrine.json` in the working directory or the built-in
//! defaults, in that order. [`ConfigLoader`] reads an optional `.env` first,
//! applies guard rails and converts the result into
//! [`vitrine_core::StorefrontSettings`].

pub mod error;
pub mod loader;
pub mod models;
pub mod validation;

pub use error::ConfigLoadError;
pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
pub use models::{
    CarouselSection, ImagesSection, ResponsiveSection, RevealSection,
    StorefrontConfig, StorefrontConfigSource,
};
pub use validation::{
    ConfigGuardRailError, ConfigWarning, ConfigWarnings, apply_guard_rails,
};
