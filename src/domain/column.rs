use std::fmt;

use serde::{Deserialize, Serialize};

const MAX_KEY_LENGTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColumnKeyError {
    #[error("Column key cannot be empty")]
    Empty,
    #[error("Column key too long: {len} chars (max {max})")]
    TooLong { len: usize, max: usize },
}

/// Stable identifier of a table column across re-renders.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ColumnKey(String);

impl ColumnKey {
    pub fn new(key: impl Into<String>) -> Result<Self, ColumnKeyError> {
        let key = key.into();
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return Err(ColumnKeyError::Empty);
        }

        let char_count = trimmed.chars().count();
        if char_count > MAX_KEY_LENGTH {
            return Err(ColumnKeyError::TooLong {
                len: char_count,
                max: MAX_KEY_LENGTH,
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ColumnKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for ColumnKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ColumnKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        ColumnKey::new(s).map_err(serde::de::Error::custom)
    }
}

/// How a column asks for space. Exactly one mode applies per column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SizingMode {
    Fixed(f64),
    MinBound(f64),
    MaxBound(f64),
    Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FixedSide {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ColumnDeclError {
    #[error("Column '{key}': {field} must be a finite, non-negative number (got {value})")]
    InvalidBound {
        key: String,
        field: &'static str,
        value: f64,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDecl {
    pub key: ColumnKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    #[serde(default)]
    pub resizeable: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixed: Option<FixedSide>,
}

impl ColumnDecl {
    pub fn new(key: ColumnKey) -> Self {
        Self {
            key,
            label: None,
            width: None,
            min_width: None,
            max_width: None,
            resizeable: false,
            fixed: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = Some(min_width);
        self
    }

    pub fn with_max_width(mut self, max_width: f64) -> Self {
        self.max_width = Some(max_width);
        self
    }

    pub fn resizeable(mut self) -> Self {
        self.resizeable = true;
        self
    }

    pub fn pinned(mut self, side: FixedSide) -> Self {
        self.fixed = Some(side);
        self
    }

    /// Precedence: width, then min_width, then max_width. Zero counts as undeclared.
    pub fn sizing_mode(&self) -> SizingMode {
        if let Some(width) = declared(self.width) {
            SizingMode::Fixed(width)
        } else if let Some(min) = declared(self.min_width) {
            SizingMode::MinBound(min)
        } else if let Some(max) = declared(self.max_width) {
            SizingMode::MaxBound(max)
        } else {
            SizingMode::Auto
        }
    }

    pub fn title(&self) -> &str {
        self.label.as_deref().unwrap_or_else(|| self.key.as_str())
    }

    pub fn validate(&self) -> Result<(), ColumnDeclError> {
        let bounds = [
            ("width", self.width),
            ("min_width", self.min_width),
            ("max_width", self.max_width),
        ];
        for (field, value) in bounds {
            if let Some(value) = value
                && (!value.is_finite() || value < 0.0)
            {
                return Err(ColumnDeclError::InvalidBound {
                    key: self.key.to_string(),
                    field,
                    value,
                });
            }
        }
        Ok(())
    }
}

fn declared(value: Option<f64>) -> Option<f64> {
    value.filter(|v| *v != 0.0 && !v.is_nan())
}
