//! K-space module: critical k-point paths for photonic band-structure runs and their
//! rendering as MPB control-file expressions.
//!
//! Quick reference
//! - Types: [`KSpacePath`], [`KSpacePathBuilder`], [`KPoint`], [`Component`], [`RawPoint`], [`Attribute`]
//! - Presets: [`triangular`], [`rectangular`], [`rectangular_grid`]
//! - Normalization: [`normalize_point`]
//!
//! See submodules for full details: [`kspace_path`], [`kspace_component`], [`kspace_presets`], [`kspace_attributes`].

// ======================== MODULE DECLARATIONS ========================
pub mod kspace_attributes;
pub mod kspace_component;
pub mod kspace_path;
pub mod kspace_presets;

// Test modules
#[cfg(test)]
mod _tests_log_capture;
mod _tests_kspace_presets;

// ======================== RE-EXPORTED PUBLIC API (curated) ========================
#[doc(inline)]
pub use kspace_path::{KSpacePath, KSpacePathBuilder};

pub use kspace_attributes::Attribute;

pub use kspace_component::{normalize_point, Component, KPoint, RawPoint};

pub use kspace_presets::{
    rectangular, rectangular_grid, rectangular_with, triangular, triangular_with,
};

/// A convenience prelude for importing common k-space items.
pub mod prelude {
    #[doc(no_inline)]
    pub use super::{Component, KPoint, KSpacePath};
}
