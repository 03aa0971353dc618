use std::fmt::{self, Display};

use serde::de::{self, Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Largest float that still round-trips through an `i64` without losing precision.
const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A single scalar read from a sheet cell.
///
/// Spreadsheet backends produce these; records carry them through to the
/// writer untouched. Only the version filter ever looks at their string form.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    Int(i64),
    Number(f64),
    Text(String),
    Boolean(bool),
    #[default]
    Empty,
}

impl CellValue {
    /// Whether the value counts as present for id detection.
    ///
    /// Empty cells, empty strings, zero, NaN and `false` are all falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            CellValue::Int(i) => *i != 0,
            CellValue::Number(n) => *n != 0.0 && !n.is_nan(),
            CellValue::Text(s) => !s.is_empty(),
            CellValue::Boolean(b) => *b,
            CellValue::Empty => false,
        }
    }

    /// Collapse an integral float into `Int`; anything else is returned as-is.
    pub fn normalized(self) -> Self {
        match self {
            CellValue::Number(n) => match integral(n) {
                Some(i) => CellValue::Int(i),
                None => CellValue::Number(n),
            },
            other => other,
        }
    }
}

fn integral(n: f64) -> Option<i64> {
    if n.is_finite() && n.fract() == 0.0 && n.abs() <= MAX_SAFE_INTEGER {
        Some(n as i64)
    } else {
        None
    }
}

/// Textual form used by the version filter. Non-integral floats use Rust's
/// float formatting, so huge values print as plain digits (`1e21` is
/// `1000000000000000000000`), not in exponent form.
impl Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Int(i) => write!(f, "{i}"),
            CellValue::Number(n) => match integral(*n) {
                Some(i) => write!(f, "{i}"),
                None => write!(f, "{n}"),
            },
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Boolean(b) => write!(f, "{b}"),
            CellValue::Empty => Ok(()),
        }
    }
}

impl Serialize for CellValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            CellValue::Int(i) => serializer.serialize_i64(*i),
            CellValue::Number(n) => match integral(*n) {
                Some(i) => serializer.serialize_i64(i),
                None => serializer.serialize_f64(*n),
            },
            CellValue::Text(s) => serializer.serialize_str(s),
            CellValue::Boolean(b) => serializer.serialize_bool(*b),
            CellValue::Empty => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for CellValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CellValueVisitor;

        impl<'de> Visitor<'de> for CellValueVisitor {
            type Value = CellValue;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a scalar cell value (number, string, boolean or null)")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(CellValue::Boolean(v))
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(CellValue::Int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(match i64::try_from(v) {
                    Ok(i) => CellValue::Int(i),
                    Err(_) => CellValue::Number(v as f64),
                })
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(CellValue::Number(v))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(CellValue::Text(v.to_string()))
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(CellValue::Text(v))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CellValue::Empty)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(CellValue::Empty)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
            where
                D: Deserializer<'de>,
            {
                deserializer.deserialize_any(self)
            }
        }

        deserializer.deserialize_any(CellValueVisitor)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Int(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Int(value as i64)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Number(value)
    }
}

impl From<bool> for CellValue {
    fn from(value: bool) -> Self {
        CellValue::Boolean(value)
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl<'a> From<&'a str> for CellValue {
    fn from(value: &'a str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(CellValue::Empty, Into::into)
    }
}
