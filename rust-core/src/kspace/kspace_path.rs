use std::collections::BTreeMap;
use std::fmt;

use anyhow::Error;
use log::{debug, warn};
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::config::Defaults;
use crate::kspace::kspace_attributes::Attribute;
use crate::kspace::kspace_component::{normalize_point, KPoint, RawPoint};
use crate::Result;

/// An ordered sequence of critical k-points for a band-structure run.
///
/// In the simulation the points are expanded by inserting
/// `interpolation_count` points between every consecutive pair. The path
/// renders itself as the `(list ...)` expression MPB expects for `k-points`,
/// wrapped in `interpolate` or `kinterpolate-uniform` when interpolation is
/// requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KSpacePath {
    points: Vec<KPoint>,
    labels: Vec<String>,
    interpolation_count: usize,
    use_uniform_interpolation: bool,
    extras: BTreeMap<String, Attribute>,
    defaults: Defaults,
}

/// Collects the construction parameters of a [`KSpacePath`].
#[derive(Debug, Clone)]
pub struct KSpacePathBuilder {
    points: Vec<RawPoint>,
    interpolation: Option<usize>,
    uniform_interpolation: bool,
    labels: Vec<String>,
    extras: BTreeMap<String, Attribute>,
    defaults: Defaults,
}

impl KSpacePathBuilder {
    /// Number of points inserted between each consecutive pair (default from [`Defaults`])
    pub fn interpolation(mut self, n: usize) -> Self {
        self.interpolation = Some(n);
        self
    }

    /// Request `kinterpolate-uniform`, which spaces the k-vectors uniformly in k-space.
    /// Needs MPB 1.5 or newer; otherwise the path falls back to simple interpolation.
    pub fn uniform_interpolation(mut self, uniform: bool) -> Self {
        self.uniform_interpolation = uniform;
        self
    }

    /// One label per point, e.g. `"Gamma"` for the origin. Labels end up as
    /// comments in the control file and on the k-axis of band plots.
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn extra(mut self, name: impl Into<String>, value: impl Into<Attribute>) -> Self {
        self.extras.insert(name.into(), value.into());
        self
    }

    pub fn defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn build(self) -> KSpacePath {
        let points: Vec<KPoint> = self.points.into_iter().map(normalize_point).collect();

        // Pad short label lists, then cut away excess labels
        let mut labels = self.labels;
        if !labels.is_empty() && labels.len() < points.len() {
            labels.resize(points.len(), String::new());
        }
        labels.truncate(points.len());

        let interpolation_count = self
            .interpolation
            .unwrap_or(self.defaults.default_k_interpolation);

        let mut use_uniform_interpolation = self.uniform_interpolation;
        if use_uniform_interpolation && !self.defaults.uniform_interpolation_supported {
            warn!(
                "Requested {} in KSpacePath, but this is only available starting from MPB v.1.5. Will fall back to {}.",
                self.defaults.uniform_interpolation_function, self.defaults.interpolation_function
            );
            use_uniform_interpolation = false;
        }

        debug!(
            "KSpacePath: {} points, {} labels, interpolation {} (uniform: {})",
            points.len(),
            labels.len(),
            interpolation_count,
            use_uniform_interpolation
        );

        KSpacePath {
            points,
            labels,
            interpolation_count,
            use_uniform_interpolation,
            extras: self.extras,
            defaults: self.defaults,
        }
    }
}

impl KSpacePath {
    /// Start building a path from raw points: scalars, 1-, 2- or 3-tuples, arrays or vectors.
    /// Missing trailing components are filled with zeros, e.g.
    /// `[0.5, (0.5, 1)]` becomes `[(0.5, 0, 0), (0.5, 1, 0)]`.
    pub fn builder<I, P>(points: I) -> KSpacePathBuilder
    where
        I: IntoIterator<Item = P>,
        P: Into<RawPoint>,
    {
        KSpacePathBuilder {
            points: points.into_iter().map(Into::into).collect(),
            interpolation: None,
            uniform_interpolation: false,
            labels: Vec::new(),
            extras: BTreeMap::new(),
            defaults: Defaults::default(),
        }
    }

    /// Path with default interpolation and no labels
    pub fn new<I, P>(points: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<RawPoint>,
    {
        Self::builder(points).build()
    }

    /// The critical points, before any interpolation
    pub fn points(&self) -> &[KPoint] {
        &self.points
    }

    pub fn interpolation_count(&self) -> usize {
        self.interpolation_count
    }

    pub fn use_uniform_interpolation(&self) -> bool {
        self.use_uniform_interpolation
    }

    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Total number of k-vectors after interpolation.
    ///
    /// An empty path yields 0 and a single point yields 1. Saturates at
    /// `usize::MAX` when the count is not representable; see
    /// [`checked_point_count_after_interpolation`](Self::checked_point_count_after_interpolation).
    pub fn point_count_after_interpolation(&self) -> usize {
        self.checked_point_count_after_interpolation()
            .unwrap_or(usize::MAX)
    }

    /// Total number of k-vectors after interpolation, or `None` on overflow
    pub fn checked_point_count_after_interpolation(&self) -> Option<usize> {
        match self.points.len() {
            0 => Some(0),
            1 => Some(1),
            n => self
                .interpolation_count
                .checked_add(1)
                .and_then(|steps| (n - 1).checked_mul(steps))
                .and_then(|count| count.checked_add(1)),
        }
    }

    pub fn has_labels(&self) -> bool {
        !self.labels.is_empty() && self.labels.len() == self.points.len()
    }

    /// One label per point, or an empty list if the path was built without labels
    pub fn labels(&self) -> Vec<String> {
        if self.has_labels() {
            self.labels.clone()
        } else {
            Vec::new()
        }
    }

    pub fn extra(&self, name: &str) -> Option<&Attribute> {
        self.extras.get(name)
    }

    pub fn extras(&self) -> &BTreeMap<String, Attribute> {
        &self.extras
    }

    pub fn set_extra(&mut self, name: impl Into<String>, value: impl Into<Attribute>) {
        self.extras.insert(name.into(), value.into());
    }

    /// Name of the MPB function used to expand the point list
    pub fn interpolation_function(&self) -> &str {
        self.defaults
            .interpolation_function_for(self.use_uniform_interpolation)
    }

    /// Render the path as an MPB control-file expression
    pub fn render(&self) -> String {
        let mut vectors = String::new();
        let labeled = self.has_labels();

        for (i, point) in self.points.iter().enumerate() {
            vectors.push_str(&format!("    (vector3 {})", point));
            if labeled && !self.labels[i].is_empty() {
                vectors.push_str("  ;");
                vectors.push_str(&self.labels[i]);
            }
            vectors.push('\n');
        }

        if self.interpolation_count > 0 {
            format!(
                "({} {} (list\n{}))",
                self.interpolation_function(),
                self.interpolation_count,
                vectors
            )
        } else {
            format!("(list\n{})", vectors)
        }
    }

    /// Every stored attribute as `name=value`, `; `-separated. For diagnostics only.
    pub fn describe(&self) -> String {
        let points = self
            .points
            .iter()
            .map(|p| format!("({})", p))
            .collect::<Vec<_>>()
            .join(", ");

        let mut fields = vec![
            format!("points=[{}]", points),
            format!("labels={:?}", self.labels),
            format!("interpolation_count={}", self.interpolation_count),
            format!("use_uniform_interpolation={}", self.use_uniform_interpolation),
            format!("defaults={:?}", self.defaults),
        ];
        fields.extend(
            self.extras
                .iter()
                .map(|(name, value)| format!("{}={}", name, value)),
        );

        format!("KSpacePath {{ {} }}", fields.join("; "))
    }

    /// The k-vectors MPB evaluates with simple interpolation: between every
    /// consecutive pair, `interpolation_count` evenly spaced points are inserted.
    ///
    /// Uniform interpolation spaces points by arc length in Cartesian k-space,
    /// which needs the reciprocal lattice; this always returns the linear spacing.
    /// Fails if a symbolic component cannot be evaluated or the k-vector count
    /// overflows `usize`.
    pub fn expand(&self) -> Result<Vec<Vector3<f64>>> {
        let total = self.checked_point_count_after_interpolation().ok_or_else(|| {
            Error::msg(format!(
                "Interpolating {} points with {} points per segment overflows the k-vector count.",
                self.points.len(),
                self.interpolation_count
            ))
        })?;

        let critical = self
            .points
            .iter()
            .map(KPoint::to_vector3)
            .collect::<Result<Vec<_>>>()?;

        if self.use_uniform_interpolation {
            debug!("KSpacePath::expand: uniform spacing is left to MPB, returning linear spacing");
        }

        let mut k_points = Vec::new();
        k_points.try_reserve_exact(total).map_err(|e| {
            Error::msg(format!("Cannot allocate {} k-vectors: {}", total, e))
        })?;

        let steps = self.interpolation_count.saturating_add(1);

        for pair in critical.windows(2) {
            let start = pair[0];
            let end = pair[1];

            for j in 0..steps {
                let t = j as f64 / steps as f64;
                k_points.push(start + t * (end - start));
            }
        }

        // Add the final point
        if let Some(last) = critical.last() {
            k_points.push(*last);
        }

        Ok(k_points)
    }
}

impl fmt::Display for KSpacePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
