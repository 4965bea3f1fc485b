//! K-space paths for photonic band-structure simulations
//!
//! A [`kspace::KSpacePath`] holds the critical k-points of a band-structure run,
//! optional point labels and the interpolation settings, and renders itself as the
//! `k-points` expression of an MPB control file:
//!
//! ```
//! use mpb_kspace::kspace::rectangular;
//!
//! let path = rectangular(Some(0), false);
//! assert!(path.render().starts_with("(list\n    (vector3 0 0 0)  ;Gamma\n"));
//! ```
//!
//! Settings that depend on the targeted MPB version live in [`config::Defaults`].

pub mod config;
pub mod kspace;

pub use config::Defaults;
pub use kspace::{KPoint, KSpacePath};

/// Result type for fallible operations (version parsing, numeric evaluation of points)
pub type Result<T> = std::result::Result<T, anyhow::Error>;

/// Crate version, e.g. for a header comment in generated control files
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_result_carries_context() {
        let err: Result<Defaults> = Defaults::for_mpb_version("one.five");
        let message = err.unwrap_err().to_string();
        assert!(message.contains("one.five"));
        assert!(VERSION.split('.').count() >= 2);
    }
}
