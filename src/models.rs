use crate::error::{DataError, ValidationError};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// How every series of a chart is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    #[default]
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Lines => "lines",
            Mode::Markers => "markers",
            Mode::LinesMarkers => "lines+markers",
        }
    }

    pub fn draws_lines(&self) -> bool {
        matches!(self, Mode::Lines | Mode::LinesMarkers)
    }

    pub fn draws_markers(&self) -> bool {
        matches!(self, Mode::Markers | Mode::LinesMarkers)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Exact, case-sensitive parse: `"Lines"` is rejected.
impl FromStr for Mode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validate::validate_mode(&Value::from(s))
    }
}

impl From<Mode> for Value {
    fn from(mode: Mode) -> Self {
        Value::from(mode.as_str())
    }
}

/// One entry of the shared row index (the x-axis of every series).
#[derive(Debug, Clone, PartialEq)]
pub enum IndexValue {
    Int(i64),
    Float(f64),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
    Text(String),
}

const DATETIME_FORMATS: [&str; 3] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M"];
const OFFSET_DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%z"];

impl IndexValue {
    /// Interpret a raw cell: integer, float, date, timestamp, otherwise text.
    ///
    /// Timestamps carrying a UTC offset keep their local wall-clock time,
    /// e.g. `2020-01-02 00:00:00-05:00` becomes `2020-01-02 00:00:00`.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if let Ok(i) = s.parse::<i64>() {
            return IndexValue::Int(i);
        }
        if let Ok(f) = s.parse::<f64>() {
            return IndexValue::Float(f);
        }
        if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return IndexValue::Date(d);
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return IndexValue::DateTime(dt.naive_local());
        }
        for fmt in OFFSET_DATETIME_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(s, fmt) {
                return IndexValue::DateTime(dt.naive_local());
            }
        }
        for fmt in DATETIME_FORMATS {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return IndexValue::DateTime(dt);
            }
        }
        IndexValue::Text(s.to_string())
    }
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexValue::Int(i) => write!(f, "{}", i),
            IndexValue::Float(x) => write!(f, "{}", x),
            IndexValue::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            IndexValue::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            IndexValue::Text(s) => f.write_str(s),
        }
    }
}

/// Numbers stay numbers; dates and text become strings Plotly understands.
impl Serialize for IndexValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            IndexValue::Int(i) => serializer.serialize_i64(*i),
            IndexValue::Float(x) => serializer.serialize_f64(*x),
            other => serializer.collect_str(other),
        }
    }
}

impl<'de> Deserialize<'de> for IndexValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, Visitor};
        struct IndexVisitor;

        impl<'de> Visitor<'de> for IndexVisitor {
            type Value = IndexValue;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, "a number, date or string index entry")
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(IndexValue::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(v)
                    .map(IndexValue::Int)
                    .map_err(|_| E::custom("index entry out of range for i64"))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(IndexValue::Float(v))
            }

            fn visit_str<E>(self, s: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(IndexValue::parse(s))
            }
        }

        deserializer.deserialize_any(IndexVisitor)
    }
}

/// A named column; `None` marks a gap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub values: Vec<Option<f64>>,
}

/// Named, equal-length numeric columns sharing one ordered index.
///
/// Every constructor checks that each column has exactly one value per index
/// entry, so a `Table` is always rectangular.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Table {
    index: Vec<IndexValue>,
    columns: Vec<Column>,
}

fn default_index(rows: usize) -> Vec<IndexValue> {
    (0..rows as i64).map(IndexValue::Int).collect()
}

impl Table {
    /// Mapping of column name to values. The index defaults to `0..n`.
    pub fn from_columns<I, K>(columns: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = (K, Vec<Option<f64>>)>,
        K: Into<String>,
    {
        let columns: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Column {
                name: name.into(),
                values,
            })
            .collect();
        let rows = columns.first().map(|c| c.values.len()).unwrap_or(0);
        if let Some(bad) = columns.iter().find(|c| c.values.len() != rows) {
            return Err(DataError::LengthMismatch {
                column: bad.name.clone(),
                expected: rows,
                found: bad.values.len(),
            });
        }
        Ok(Self {
            index: default_index(rows),
            columns,
        })
    }

    /// Sequence of records. Columns appear in first-seen key order and a key
    /// missing from a record leaves a gap in that row.
    pub fn from_records<I, R, K>(records: I) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = (K, Option<f64>)>,
        K: Into<String>,
    {
        let mut positions: HashMap<String, usize> = HashMap::new();
        let mut columns: Vec<Column> = Vec::new();
        let mut rows = 0usize;
        for record in records {
            for (key, value) in record {
                let key = key.into();
                let pos = match positions.get(&key) {
                    Some(&pos) => pos,
                    None => {
                        positions.insert(key.clone(), columns.len());
                        columns.push(Column {
                            name: key,
                            values: vec![None; rows],
                        });
                        columns.len() - 1
                    }
                };
                let values = &mut columns[pos].values;
                // a repeated key within one record overwrites the earlier cell
                if values.len() > rows {
                    values[rows] = value;
                } else {
                    values.push(value);
                }
            }
            rows += 1;
            for column in &mut columns {
                column.values.resize(rows, None);
            }
        }
        Ok(Self {
            index: default_index(rows),
            columns,
        })
    }

    /// Row-major 2-D array paired with column labels.
    pub fn from_rows<I, K>(rows: I, labels: &[K]) -> Result<Self, DataError>
    where
        I: IntoIterator<Item = Vec<Option<f64>>>,
        K: AsRef<str>,
    {
        let mut columns: Vec<Column> = labels
            .iter()
            .map(|l| Column {
                name: l.as_ref().to_string(),
                values: Vec::new(),
            })
            .collect();
        let mut count = 0usize;
        for (row, cells) in rows.into_iter().enumerate() {
            if cells.len() != labels.len() {
                return Err(DataError::RowWidth {
                    row,
                    expected: labels.len(),
                    found: cells.len(),
                });
            }
            for (column, cell) in columns.iter_mut().zip(cells) {
                column.values.push(cell);
            }
            count += 1;
        }
        Ok(Self {
            index: default_index(count),
            columns,
        })
    }

    /// JSON object of arrays, or JSON array of record objects.
    pub fn from_json(value: &Value) -> Result<Self, DataError> {
        match value {
            Value::Object(map) => {
                let mut columns = Vec::with_capacity(map.len());
                for (name, cells) in map {
                    let cells = cells.as_array().ok_or_else(|| {
                        DataError::Shape(format!("column `{}` is not an array", name))
                    })?;
                    let values = cells
                        .iter()
                        .map(|c| json_cell(name, c))
                        .collect::<Result<Vec<_>, _>>()?;
                    columns.push((name.clone(), values));
                }
                Self::from_columns(columns)
            }
            Value::Array(items) => {
                let mut records = Vec::with_capacity(items.len());
                for (row, item) in items.iter().enumerate() {
                    let obj = item.as_object().ok_or_else(|| {
                        DataError::Shape(format!("record {} is not an object", row))
                    })?;
                    let record = obj
                        .iter()
                        .map(|(k, c)| json_cell(k, c).map(|v| (k.clone(), v)))
                        .collect::<Result<Vec<_>, _>>()?;
                    records.push(record);
                }
                Self::from_records(records)
            }
            other => Err(DataError::Shape(format!(
                "expected an object or an array, got `{}`",
                other
            ))),
        }
    }

    /// Replace the default `0..n` index.
    pub fn with_index(mut self, index: Vec<IndexValue>) -> Result<Self, DataError> {
        if index.len() != self.index.len() {
            return Err(DataError::IndexLength {
                expected: self.index.len(),
                found: index.len(),
            });
        }
        self.index = index;
        Ok(self)
    }

    /// Remove every column called `name`.
    pub fn drop_column(&mut self, name: &str) -> Result<(), DataError> {
        let before = self.columns.len();
        self.columns.retain(|c| c.name != name);
        if self.columns.len() == before {
            return Err(DataError::UnknownColumn(name.to_string()));
        }
        Ok(())
    }

    pub fn index(&self) -> &[IndexValue] {
        &self.index
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

fn json_cell(column: &str, cell: &Value) -> Result<Option<f64>, DataError> {
    match cell {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        other => Err(DataError::NotNumeric {
            column: column.to_string(),
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_index_kinds() {
        assert_eq!(IndexValue::parse("42"), IndexValue::Int(42));
        assert_eq!(IndexValue::parse("2.5"), IndexValue::Float(2.5));
        assert_eq!(
            IndexValue::parse("2021-03-04"),
            IndexValue::Date(NaiveDate::from_ymd_opt(2021, 3, 4).unwrap())
        );
        let midnight = NaiveDate::from_ymd_opt(2020, 1, 2)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(
            IndexValue::parse("2020-01-02 00:00:00-05:00"),
            IndexValue::DateTime(midnight)
        );
        assert_eq!(
            IndexValue::parse("2020-01-02 00:00:00"),
            IndexValue::DateTime(midnight)
        );
        assert_eq!(IndexValue::parse(" Q1 "), IndexValue::Text("Q1".into()));
    }

    #[test]
    fn index_serializes_numbers_and_dates() {
        let idx = vec![
            IndexValue::Int(3),
            IndexValue::Date(NaiveDate::from_ymd_opt(1999, 12, 31).unwrap()),
        ];
        let s = serde_json::to_string(&idx).unwrap();
        assert_eq!(s, r#"[3,"1999-12-31"]"#);
        let back: Vec<IndexValue> = serde_json::from_str(&s).unwrap();
        assert_eq!(back, idx);
    }

    #[test]
    fn mode_parse_rejects_case_variants() {
        assert_eq!("lines+markers".parse::<Mode>().unwrap(), Mode::LinesMarkers);
        assert!("Lines".parse::<Mode>().is_err());
        assert_eq!(Value::from(Mode::Markers), Value::from("markers"));
    }
}
