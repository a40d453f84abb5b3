use std::{fmt, str::FromStr};

use crate::foundation::error::{ForgeError, ForgeResult};

/// Dotted address of one record field, e.g. `castGood.effects.1.level`.
///
/// Segments use the serialized (camelCase) names; list elements are addressed by their index.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
}

impl FieldPath {
    pub fn parse(raw: &str) -> ForgeResult<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(ForgeError::validation("field path must be non-empty"));
        }
        if raw.split('.').any(str::is_empty) {
            return Err(ForgeError::validation(format!(
                "field path '{raw}' has an empty segment"
            )));
        }
        Ok(Self {
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> Vec<&str> {
        self.raw.split('.').collect()
    }

    /// Path of a field nested under a cast tier, a list element or another record key.
    pub fn join(&self, tail: impl fmt::Display) -> Self {
        Self {
            raw: format!("{}.{tail}", self.raw),
        }
    }

    pub(crate) fn unknown(&self) -> ForgeError {
        ForgeError::validation(format!("unknown field '{}'", self.raw))
    }
}

impl FromStr for FieldPath {
    type Err = ForgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Parse a list index segment and check it against the list length.
pub(crate) fn index_in(path: &FieldPath, segment: &str, len: usize) -> ForgeResult<usize> {
    let idx: usize = segment.parse().map_err(|_| {
        ForgeError::validation(format!("'{segment}' in '{path}' is not a list index"))
    })?;
    if idx >= len {
        return Err(ForgeError::validation(format!(
            "index {idx} in '{path}' is out of range (len {len})"
        )));
    }
    Ok(idx)
}

#[cfg(test)]
#[path = "../../tests/unit/edit/path.rs"]
mod tests;
