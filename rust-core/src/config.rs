// Constants and the defaults provider

use anyhow::Error;
use serde::{Deserialize, Serialize};

use crate::Result;

// Interpolation
pub const DEFAULT_K_INTERPOLATION: usize = 3; // Points inserted between consecutive critical points
pub const K_INTERPOLATION_FUNCTION: &str = "interpolate";
pub const K_UNIFORM_INTERPOLATION_FUNCTION: &str = "kinterpolate-uniform";
pub const UNIFORM_INTERPOLATION_MIN_MPB_VERSION: (u32, u32) = (1, 5); // kinterpolate-uniform appeared in MPB 1.5

// Grid sampling bounds (fractional reciprocal coordinates)
pub const GRID_K_MIN: f64 = -0.5;
pub const GRID_K_MAX: f64 = 0.5;

/// Settings a k-space path is built against: the default interpolation count,
/// the names of the two MPB interpolation functions, and whether the targeted
/// MPB version provides uniform interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Defaults {
    pub default_k_interpolation: usize,
    pub interpolation_function: String,
    pub uniform_interpolation_function: String,
    pub uniform_interpolation_supported: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            default_k_interpolation: DEFAULT_K_INTERPOLATION,
            interpolation_function: K_INTERPOLATION_FUNCTION.to_string(),
            uniform_interpolation_function: K_UNIFORM_INTERPOLATION_FUNCTION.to_string(),
            uniform_interpolation_supported: true,
        }
    }
}

impl Defaults {
    /// Defaults for MPB releases older than 1.5 (no `kinterpolate-uniform`).
    pub fn legacy() -> Self {
        Self {
            uniform_interpolation_supported: false,
            ..Self::default()
        }
    }

    /// Build defaults for a dotted MPB version string such as `"1.5"` or `"1.11.1"`.
    ///
    /// Only the major and minor components decide the capability flag; a missing
    /// minor component counts as 0. Anything that is not a dotted list of
    /// unsigned integers is rejected.
    pub fn for_mpb_version(version: &str) -> Result<Self> {
        let (major, minor) = parse_version(version)?;
        let supported = (major, minor) >= UNIFORM_INTERPOLATION_MIN_MPB_VERSION;

        Ok(Self {
            uniform_interpolation_supported: supported,
            ..Self::default()
        })
    }

    /// Set the number of interpolated points used when a path does not specify one
    pub fn with_default_k_interpolation(mut self, n: usize) -> Self {
        self.default_k_interpolation = n;
        self
    }

    /// Name of the MPB function a path wraps its point list in
    pub fn interpolation_function_for(&self, uniform: bool) -> &str {
        if uniform {
            &self.uniform_interpolation_function
        } else {
            &self.interpolation_function
        }
    }
}

fn parse_version(version: &str) -> Result<(u32, u32)> {
    let trimmed = version.trim();
    if trimmed.is_empty() {
        return Err(Error::msg("MPB version string is empty."));
    }

    let mut parts = Vec::new();
    for part in trimmed.split('.') {
        let value: u32 = part.parse().map_err(|_| {
            Error::msg(format!(
                "Invalid MPB version '{}': component '{}' is not an unsigned integer.",
                version, part
            ))
        })?;
        parts.push(value);
    }

    let major = parts[0];
    let minor = parts.get(1).copied().unwrap_or(0);
    Ok((major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_provider() {
        let defaults = Defaults::default();
        assert_eq!(defaults.default_k_interpolation, 3);
        assert_eq!(defaults.interpolation_function, "interpolate");
        assert_eq!(defaults.uniform_interpolation_function, "kinterpolate-uniform");
        assert!(defaults.uniform_interpolation_supported);
        assert!(!Defaults::legacy().uniform_interpolation_supported);
    }

    #[test]
    fn test_for_mpb_version() {
        assert!(Defaults::for_mpb_version("1.5").unwrap().uniform_interpolation_supported);
        assert!(Defaults::for_mpb_version("1.11.1").unwrap().uniform_interpolation_supported);
        assert!(Defaults::for_mpb_version("2").unwrap().uniform_interpolation_supported);
        assert!(!Defaults::for_mpb_version("1.4.2").unwrap().uniform_interpolation_supported);
        assert!(!Defaults::for_mpb_version(" 1 ").unwrap().uniform_interpolation_supported);
    }

    #[test]
    fn test_for_mpb_version_rejects_garbage() {
        assert!(Defaults::for_mpb_version("").is_err());
        assert!(Defaults::for_mpb_version("1.x").is_err());
        assert!(Defaults::for_mpb_version("1..5").is_err());
        assert!(Defaults::for_mpb_version("v1.5").is_err());
    }

    #[test]
    fn test_interpolation_function_for() {
        let defaults = Defaults::default().with_default_k_interpolation(7);
        assert_eq!(defaults.default_k_interpolation, 7);
        assert_eq!(defaults.interpolation_function_for(false), "interpolate");
        assert_eq!(defaults.interpolation_function_for(true), "kinterpolate-uniform");
    }
}
