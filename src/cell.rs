//! Cell values, kind-tagged templates, and resolved cells.
//!
//! A [`GridCell`] starts life as an empty template for a column kind and is
//! filled with a concrete [`CellValue`] read from the source. Both steps are
//! pure, so the renderer can request the same cell any number of times and
//! in any order.

use std::fmt;

/// The kind of cell a column produces.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellKind {
    /// Identifier cells (index levels and the synthetic fallback column).
    Id,
    /// Plain text cells (value columns).
    Text,
}

impl CellKind {
    /// An empty template cell of this kind.
    pub fn template(self) -> GridCell {
        GridCell {
            kind: self,
            value: None,
        }
    }
}

/// A typed value stored in a tabular source.
#[derive(Clone, Debug, PartialEq)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Text(text) => f.write_str(text),
            CellValue::Number(number) => write!(f, "{number}"),
            CellValue::Bool(flag) => write!(f, "{flag}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(text: &str) -> Self {
        CellValue::Text(text.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(text: String) -> Self {
        CellValue::Text(text)
    }
}

impl From<f64> for CellValue {
    fn from(number: f64) -> Self {
        CellValue::Number(number)
    }
}

impl From<bool> for CellValue {
    fn from(flag: bool) -> Self {
        CellValue::Bool(flag)
    }
}

/// A renderable cell: either an unfilled template or a template populated
/// with a value from the source.
#[derive(Clone, Debug, PartialEq)]
pub struct GridCell {
    pub kind: CellKind,
    pub value: Option<CellValue>,
}

impl GridCell {
    /// Fill this template with a concrete value, keeping the kind.
    pub fn filled(self, value: CellValue) -> GridCell {
        GridCell {
            kind: self.kind,
            value: Some(value),
        }
    }

    /// True if this cell was never filled with a source value.
    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Text shown in the grid for this cell.
    pub fn display(&self) -> String {
        match &self.value {
            Some(value) => value.to_string(),
            None => String::new(),
        }
    }
}
