use serde::{Deserialize, Serialize};
use std::fmt;

/// One table cell as handed over by the data layer. Deserialises from JSON
/// strings, numbers and `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    /// Missing values (`null`) paint as an empty cell
    #[default]
    Empty,
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Integer(v) => write!(f, "{v}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Text(v) => f.write_str(v),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        CellValue::Text(value.to_string())
    }
}

impl From<String> for CellValue {
    fn from(value: String) -> Self {
        CellValue::Text(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        CellValue::Integer(value)
    }
}

impl From<i32> for CellValue {
    fn from(value: i32) -> Self {
        CellValue::Integer(value.into())
    }
}

impl From<u32> for CellValue {
    fn from(value: u32) -> Self {
        CellValue::Integer(value.into())
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        CellValue::Float(value)
    }
}

impl<T: Into<CellValue>> From<Option<T>> for CellValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CellValue::Empty)
    }
}

/// A table as produced by a query: column labels plus one row of cells per
/// record. Every row is expected to hold exactly one cell per header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TableData {
    pub headers: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<CellValue>>,
}

impl TableData {
    pub fn new<H: ToString>(headers: &[H]) -> TableData {
        TableData {
            headers: headers.iter().map(ToString::to_string).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row, converting each value into a cell
    pub fn push_row<I, V>(&mut self, row: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<CellValue>,
    {
        self.rows.push(row.into_iter().map(Into::into).collect());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_like_the_data_layer_would() {
        assert_eq!(CellValue::Empty.to_string(), "");
        assert_eq!(CellValue::from(42).to_string(), "42");
        assert_eq!(CellValue::from(3.0).to_string(), "3");
        assert_eq!(CellValue::from(2.5).to_string(), "2.5");
        assert_eq!(CellValue::from(None::<&str>), CellValue::Empty);
        assert_eq!(CellValue::from(Some("Activo")).to_string(), "Activo");
    }

    #[test]
    fn deserialises_mixed_json_rows() {
        let data: TableData = serde_json::from_str(
            r#"{ "headers": ["Nombre Completo", "Días", "Fecha Baja"],
                 "rows": [["Pérez Gil, Ana", 12, null], ["Ruiz, Eva", 1.5, "2024-03-01"]] }"#,
        )
        .unwrap();
        assert_eq!(data.headers.len(), 3);
        assert_eq!(data.rows[0][1], CellValue::Integer(12));
        assert_eq!(data.rows[0][2], CellValue::Empty);
        assert_eq!(data.rows[1][1], CellValue::Float(1.5));
        assert_eq!(data.rows[1][2], CellValue::from("2024-03-01"));
    }

    #[test]
    fn rows_default_to_empty() {
        let data: TableData = serde_json::from_str(r#"{ "headers": ["CIF"] }"#).unwrap();
        assert!(data.rows.is_empty());
    }
}
