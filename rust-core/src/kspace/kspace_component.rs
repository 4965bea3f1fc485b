use std::fmt;

use anyhow::Error;
use log::warn;
use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

use crate::Result;

/// A single k-vector coordinate as it appears in a control file.
///
/// Symbolic values are MPB/Scheme expressions such as `"(/ -3)"` and are
/// written out verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Component {
    Integer(i64),
    Float(f64),
    Symbolic(String),
}

impl Component {
    pub fn zero() -> Self {
        Component::Integer(0)
    }

    pub fn is_symbolic(&self) -> bool {
        matches!(self, Component::Symbolic(_))
    }

    /// Numeric value of the component.
    ///
    /// Symbolic components are evaluated when they are a plain number or an MPB
    /// division of numbers: `(/ a)` is `1/a`, `(/ a b c)` is `a/b/c`.
    pub fn to_f64(&self) -> Result<f64> {
        match self {
            Component::Integer(i) => Ok(*i as f64),
            Component::Float(f) => Ok(*f),
            Component::Symbolic(expr) => evaluate_symbolic(expr),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Integer(i) => write!(f, "{}", i),
            // Debug keeps the fractional part (0.0, not 0)
            Component::Float(x) => write!(f, "{:?}", x),
            Component::Symbolic(s) => f.write_str(s),
        }
    }
}

macro_rules! component_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Component {
            fn from(value: $t) -> Self {
                Component::Integer(value as i64)
            }
        })*
    };
}

component_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Component {
    fn from(value: f64) -> Self {
        Component::Float(value)
    }
}

impl From<f32> for Component {
    fn from(value: f32) -> Self {
        // Go through the f32's own shortest form so 0.1f32 stays 0.1, not 0.10000000149011612
        let widened = value.to_string().parse::<f64>().unwrap_or(value as f64);
        Component::Float(widened)
    }
}

impl From<&str> for Component {
    fn from(value: &str) -> Self {
        Component::Symbolic(value.to_string())
    }
}

impl From<String> for Component {
    fn from(value: String) -> Self {
        Component::Symbolic(value)
    }
}

fn evaluate_symbolic(expr: &str) -> Result<f64> {
    let trimmed = expr.trim();

    if let Ok(value) = trimmed.parse::<f64>() {
        return Ok(value);
    }

    let inner = trimmed
        .strip_prefix("(/")
        .and_then(|rest| rest.strip_suffix(')'))
        .ok_or_else(|| {
            Error::msg(format!(
                "Symbolic component '{}' is neither a number nor a (/ ...) division.",
                expr
            ))
        })?;

    let mut operands = Vec::new();
    for token in inner.split_whitespace() {
        let value: f64 = token.parse().map_err(|_| {
            Error::msg(format!(
                "Symbolic component '{}' has non-numeric operand '{}'.",
                expr, token
            ))
        })?;
        operands.push(value);
    }

    // Scheme: (/ a) is the reciprocal, (/ a b ...) divides left to right
    let value = match operands.as_slice() {
        [] => return Err(Error::msg(format!("Division '{}' has no operands.", expr))),
        [single] => 1.0 / single,
        [first, rest @ ..] => rest.iter().fold(*first, |acc, d| acc / d),
    };

    if !value.is_finite() {
        return Err(Error::msg(format!(
            "Division '{}' does not evaluate to a finite number.",
            expr
        )));
    }

    Ok(value)
}

/// A canonical k-point: always exactly three components.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KPoint {
    pub x: Component,
    pub y: Component,
    pub z: Component,
}

impl KPoint {
    pub fn new(x: impl Into<Component>, y: impl Into<Component>, z: impl Into<Component>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
            z: z.into(),
        }
    }

    pub fn components(&self) -> [&Component; 3] {
        [&self.x, &self.y, &self.z]
    }

    pub fn is_symbolic(&self) -> bool {
        self.components().iter().any(|c| c.is_symbolic())
    }

    /// Evaluate all three components into a numeric vector
    pub fn to_vector3(&self) -> Result<Vector3<f64>> {
        Ok(Vector3::new(self.x.to_f64()?, self.y.to_f64()?, self.z.to_f64()?))
    }
}

impl fmt::Display for KPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.x, self.y, self.z)
    }
}

impl From<Vector3<f64>> for KPoint {
    fn from(v: Vector3<f64>) -> Self {
        KPoint::new(v.x, v.y, v.z)
    }
}

/// A point as supplied by the caller, before normalization.
///
/// Strings are always scalars, never sequences of characters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawPoint {
    Scalar(Component),
    Sequence(Vec<Component>),
}

impl RawPoint {
    /// Number of components the caller supplied; scalars count as 0
    pub fn len(&self) -> usize {
        match self {
            RawPoint::Scalar(_) => 0,
            RawPoint::Sequence(items) => items.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

macro_rules! raw_point_from_scalar {
    ($($t:ty),*) => {
        $(impl From<$t> for RawPoint {
            fn from(value: $t) -> Self {
                RawPoint::Scalar(value.into())
            }
        })*
    };
}

raw_point_from_scalar!(i8, i16, i32, i64, u8, u16, u32, f32, f64, &str, String);

impl From<Component> for RawPoint {
    fn from(value: Component) -> Self {
        RawPoint::Scalar(value)
    }
}

impl From<KPoint> for RawPoint {
    fn from(p: KPoint) -> Self {
        RawPoint::Sequence(vec![p.x, p.y, p.z])
    }
}

impl<A: Into<Component>> From<(A,)> for RawPoint {
    fn from(t: (A,)) -> Self {
        RawPoint::Sequence(vec![t.0.into()])
    }
}

impl<A: Into<Component>, B: Into<Component>> From<(A, B)> for RawPoint {
    fn from(t: (A, B)) -> Self {
        RawPoint::Sequence(vec![t.0.into(), t.1.into()])
    }
}

impl<A: Into<Component>, B: Into<Component>, C: Into<Component>> From<(A, B, C)> for RawPoint {
    fn from(t: (A, B, C)) -> Self {
        RawPoint::Sequence(vec![t.0.into(), t.1.into(), t.2.into()])
    }
}

impl<T: Into<Component>, const N: usize> From<[T; N]> for RawPoint {
    fn from(items: [T; N]) -> Self {
        RawPoint::Sequence(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Component>> From<Vec<T>> for RawPoint {
    fn from(items: Vec<T>) -> Self {
        RawPoint::Sequence(items.into_iter().map(Into::into).collect())
    }
}

/// Expand a raw point to three components, zero-filling missing trailing ones.
///
/// Sequences longer than three keep their first three entries and log a warning.
pub fn normalize_point(raw: RawPoint) -> KPoint {
    match raw {
        RawPoint::Scalar(value) => KPoint::new(value, 0, 0),
        RawPoint::Sequence(items) => {
            let supplied = items.len();
            if supplied > 3 {
                warn!(
                    "KSpacePath: a point has been supplied with {} components; only the first 3 are used, {} discarded.",
                    supplied,
                    supplied - 3
                );
            }

            let mut iter = items.into_iter();
            let x = iter.next().unwrap_or_else(Component::zero);
            let y = iter.next().unwrap_or_else(Component::zero);
            let z = iter.next().unwrap_or_else(Component::zero);
            KPoint { x, y, z }
        }
    }
}
