//! Data view: the columns bound to the text block
//!
//! The block shows a single value. A category column wins over measure
//! columns, and the view must hold exactly one row.

use std::fmt;

use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// Shown when the category column has no values
pub const BLANK: &str = "(blank)";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    #[error("Query returned more than one row, please filter data to return one row")]
    MultipleRows,

    #[error("Query contains null value")]
    NoRows,
}

/// A single cell value
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum DataValue {
    Bool(bool),
    Number(f64),
    Text(String),
}

impl fmt::Display for DataValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataValue::Bool(b) => write!(f, "{}", b),
            DataValue::Number(n) => write!(f, "{}", n),
            DataValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for DataValue {
    fn from(s: &str) -> Self {
        DataValue::Text(s.to_string())
    }
}

impl From<f64> for DataValue {
    fn from(n: f64) -> Self {
        DataValue::Number(n)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Column {
    pub name: String,
    pub values: Vec<DataValue>,
    /// Column carries the click target of the dynamic text
    pub is_url: bool,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<DataValue>) -> Self {
        Self {
            name: name.into(),
            values,
            is_url: false,
        }
    }

    /// Mark the column as a URL column
    pub fn as_url(mut self) -> Self {
        self.is_url = true;
        self
    }
}

/// Categorical columns and measure columns of the query
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct DataView {
    pub categories: Vec<Column>,
    pub values: Vec<Column>,
}

impl DataView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_category(mut self, column: Column) -> Self {
        self.categories.push(column);
        self
    }

    pub fn with_value(mut self, column: Column) -> Self {
        self.values.push(column);
        self
    }

    /// Number of rows in the column that drives the dynamic value
    pub fn row_count(&self) -> usize {
        self.categories
            .first()
            .or_else(|| self.values.first())
            .map_or(0, |column| column.values.len())
    }

    /// Text of the dynamic value.
    ///
    /// Fails unless the driving column holds exactly one row.
    pub fn dynamic_value(&self) -> Result<String, DataError> {
        let text = if let Some(category) = self.categories.first() {
            category
                .values
                .first()
                .map_or_else(|| BLANK.to_string(), DataValue::to_string)
        } else if let Some(measure) = self.values.first() {
            match measure.values.first() {
                Some(value) if !is_empty(value) => value.to_string(),
                _ => "0".to_string(),
            }
        } else {
            String::new()
        };

        match self.row_count() {
            1 => Ok(text),
            0 => {
                warn!("data view has no rows");
                Err(DataError::NoRows)
            }
            rows => {
                warn!("data view has {} rows, expected one", rows);
                Err(DataError::MultipleRows)
            }
        }
    }

    /// Click target from the last URL column, values joined with commas
    pub fn url(&self) -> Option<String> {
        self.categories
            .iter()
            .chain(&self.values)
            .filter(|column| column.is_url)
            .last()
            .map(|column| {
                column
                    .values
                    .iter()
                    .map(DataValue::to_string)
                    .collect::<Vec<_>>()
                    .join(",")
            })
    }
}

/// Falsy measure cells display as zero
fn is_empty(value: &DataValue) -> bool {
    match value {
        DataValue::Bool(b) => !b,
        DataValue::Number(n) => *n == 0.0 || n.is_nan(),
        DataValue::Text(s) => s.is_empty(),
    }
}
