use std::{fmt, str::FromStr};

use crate::{
    foundation::{
        core::fmt_number,
        error::{ForgeError, ForgeResult},
    },
    model::numeric::coerce_number,
};

/// A value travelling between an editor widget and a record field.
///
/// `Empty` stands for an optional field that holds nothing (no image URL, no runic element).
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }

    pub fn enum_value(v: impl fmt::Display) -> Self {
        Self::Text(v.to_string())
    }

    pub fn opt_number(v: Option<f64>) -> Self {
        v.map_or(Self::Empty, Self::Number)
    }

    pub fn opt_text(v: Option<&str>) -> Self {
        v.map_or(Self::Empty, |s| Self::Text(s.to_string()))
    }

    pub fn opt_enum<E: fmt::Display>(v: Option<E>) -> Self {
        v.map_or(Self::Empty, |e| Self::Text(e.to_string()))
    }

    /// Number as a number input yields it; text is coerced, nothing becomes NaN.
    pub fn to_number(&self) -> ForgeResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            Self::Text(t) => Ok(coerce_number(t)),
            Self::Empty => Ok(f64::NAN),
            Self::Bool(_) => Err(ForgeError::validation("expected a number, got a toggle")),
        }
    }

    pub fn to_opt_number(&self) -> ForgeResult<Option<f64>> {
        match self {
            Self::Empty => Ok(None),
            other => other.to_number().map(Some),
        }
    }

    pub fn to_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(t) => t.clone(),
            Self::Number(n) => fmt_number(*n),
            Self::Bool(b) => b.to_string(),
        }
    }

    pub fn to_opt_text(&self) -> Option<String> {
        match self {
            Self::Empty => None,
            other => Some(other.to_text()),
        }
    }

    pub fn to_bool(&self) -> ForgeResult<bool> {
        match self {
            Self::Bool(b) => Ok(*b),
            Self::Text(t) => match t.trim() {
                "true" | "on" | "1" => Ok(true),
                "false" | "off" | "0" | "" => Ok(false),
                other => Err(ForgeError::validation(format!("'{other}' is not a toggle value"))),
            },
            Self::Number(n) => Ok(*n != 0.0 && !n.is_nan()),
            Self::Empty => Ok(false),
        }
    }

    pub fn to_enum<E>(&self) -> ForgeResult<E>
    where
        E: FromStr<Err = ForgeError>,
    {
        match self {
            Self::Text(t) => t.trim().parse(),
            other => Err(ForgeError::validation(format!(
                "expected a variant name, got {other:?}"
            ))),
        }
    }

    pub fn to_opt_enum<E>(&self) -> ForgeResult<Option<E>>
    where
        E: FromStr<Err = ForgeError>,
    {
        match self {
            Self::Empty => Ok(None),
            other => other.to_enum().map(Some),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/edit/value.rs"]
mod tests;
