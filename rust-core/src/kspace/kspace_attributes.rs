use std::fmt;

use serde::{Deserialize, Serialize};

/// Extra named metadata carried by a path for downstream consumers
/// (e.g. the grid dimensions a band-structure plot needs).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Attribute {
    Integer(i64),
    Float(f64),
    Text(String),
    Bool(bool),
}

impl Attribute {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Attribute::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Float value; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Attribute::Float(f) => Some(*f),
            Attribute::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Attribute::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Attribute::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Attribute::Integer(i) => write!(f, "{}", i),
            Attribute::Float(x) => write!(f, "{:?}", x),
            Attribute::Text(s) => f.write_str(s),
            Attribute::Bool(b) => write!(f, "{}", b),
        }
    }
}

macro_rules! attribute_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Attribute {
            fn from(value: $t) -> Self {
                Attribute::Integer(value as i64)
            }
        })*
    };
}

attribute_from_int!(i32, i64, u32);

impl From<usize> for Attribute {
    /// Counts above `i64::MAX` saturate
    fn from(value: usize) -> Self {
        Attribute::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Attribute {
    fn from(value: f64) -> Self {
        Attribute::Float(value)
    }
}

impl From<bool> for Attribute {
    fn from(value: bool) -> Self {
        Attribute::Bool(value)
    }
}

impl From<&str> for Attribute {
    fn from(value: &str) -> Self {
        Attribute::Text(value.to_string())
    }
}

impl From<String> for Attribute {
    fn from(value: String) -> Self {
        Attribute::Text(value)
    }
}
