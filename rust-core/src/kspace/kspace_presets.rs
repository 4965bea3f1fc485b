use crate::config::{Defaults, GRID_K_MAX, GRID_K_MIN};
use crate::kspace::kspace_component::KPoint;
use crate::kspace::kspace_path::KSpacePath;

/// Standard path around the irreducible Brillouin zone of the triangular
/// (hexagonal) lattice: Γ → M → K → Γ
///
/// `None` takes the interpolation count from the defaults provider.
pub fn triangular(interpolation: Option<usize>, uniform_interpolation: bool) -> KSpacePath {
    triangular_with(Defaults::default(), interpolation, uniform_interpolation)
}

pub fn triangular_with(
    defaults: Defaults,
    interpolation: Option<usize>,
    uniform_interpolation: bool,
) -> KSpacePath {
    // K = (-1/3, 1/3, 0), left symbolic so MPB evaluates it exactly
    let points = vec![
        KPoint::new(0, 0, 0),
        KPoint::new(0, 0.5, 0),
        KPoint::new("(/ -3)", "(/ 3)", 0),
        KPoint::new(0, 0, 0),
    ];

    let mut builder = KSpacePath::builder(points);
    if let Some(n) = interpolation {
        builder = builder.interpolation(n);
    }

    builder
        .uniform_interpolation(uniform_interpolation)
        .labels(["Gamma", "M", "K", "Gamma"])
        .defaults(defaults)
        .build()
}

/// Standard path around the irreducible Brillouin zone of the rectangular
/// lattice: Γ → X → M → Γ
///
/// `None` takes the interpolation count from the defaults provider.
pub fn rectangular(interpolation: Option<usize>, uniform_interpolation: bool) -> KSpacePath {
    rectangular_with(Defaults::default(), interpolation, uniform_interpolation)
}

pub fn rectangular_with(
    defaults: Defaults,
    interpolation: Option<usize>,
    uniform_interpolation: bool,
) -> KSpacePath {
    let points = vec![
        KPoint::new(0, 0, 0),
        KPoint::new(0.5, 0, 0),
        KPoint::new(0.5, 0.5, 0),
        KPoint::new(0, 0, 0),
    ];

    let mut builder = KSpacePath::builder(points);
    if let Some(n) = interpolation {
        builder = builder.interpolation(n);
    }

    builder
        .uniform_interpolation(uniform_interpolation)
        .labels(["Gamma", "X", "M", "Gamma"])
        .defaults(defaults)
        .build()
}

/// K-points on a rectangular grid in the k_x-k_y plane.
///
/// k_x (k_y) runs over `x_steps` (`y_steps`) samples from -0.5 to 0.5
/// inclusive; rows of constant k_y are emitted one after another. The grid is
/// used as-is, so interpolation is 0. `x_steps` and `y_steps` are kept as
/// extras for band-structure plotting.
pub fn rectangular_grid(x_steps: usize, y_steps: usize) -> KSpacePath {
    let xs = linspace(GRID_K_MIN, GRID_K_MAX, x_steps);
    let ys = linspace(GRID_K_MIN, GRID_K_MAX, y_steps);

    let mut grid = Vec::with_capacity(x_steps * y_steps);
    for &y in &ys {
        for &x in &xs {
            grid.push(KPoint::new(x, y, 0.0));
        }
    }

    KSpacePath::builder(grid)
        .interpolation(0)
        .uniform_interpolation(false)
        .extra("x_steps", x_steps)
        .extra("y_steps", y_steps)
        .build()
}

/// `n` evenly spaced samples over `[start, stop]`, endpoints included.
/// A single sample is `start`; zero samples is empty.
pub(crate) fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { stop } else { start + i as f64 * step })
                .collect()
        }
    }
}
