//! Column schema inference
//!
//! Charts built from arbitrary uploaded tables need to know, per column,
//! what kind of data they hold and which scale suits it. [`schema`] inspects
//! an array of JSON rows: numeric columns get min/max and a linear scale
//! plus a "sequential" flag (consistent gaps, e.g. years), text columns get
//! repeat/longest stats and an ordinal or band scale depending on
//! cardinality.

use std::collections::HashSet;

use serde_json::Value;

/// Primitive type observed in a column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    Number,
    Text,
    Boolean,
}

/// Scale suited to a column
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scale {
    Linear,
    Ordinal,
    Band,
}

/// Format details for a column's primary type
#[derive(Clone, Debug, PartialEq)]
pub enum Format {
    Number {
        min: f64,
        max: f64,
        scale: Scale,
        has_empty_values: bool,
        sequential: bool,
    },
    Text {
        has_repeat: bool,
        longest: usize,
        scale: Scale,
    },
}

/// Inferred schema for one column
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnSchema {
    pub column: String,
    pub index: usize,
    pub label: String,
    pub data_types: Vec<DataType>,
    pub format: Format,
}

/// Infer a schema for each column of a row array
///
/// Columns come from the first row; empty input yields an empty schema.
/// Null and empty-string cells are ignored for inference but counted as
/// missing values for numeric columns.
pub fn schema(rows: &[Value]) -> Vec<ColumnSchema> {
    let Some(Value::Object(first)) = rows.first() else {
        return Vec::new();
    };

    first
        .keys()
        .enumerate()
        .map(|(index, column)| {
            let values: Vec<&Value> = rows
                .iter()
                .filter_map(|row| row.get(column))
                .filter(|v| !v.is_null() && v.as_str() != Some(""))
                .collect();

            if values.is_empty() {
                return empty_column(column, index);
            }

            let mut data_types = Vec::new();
            for value in &values {
                let ty = match value {
                    Value::Number(_) => DataType::Number,
                    Value::String(_) => DataType::Text,
                    Value::Bool(_) => DataType::Boolean,
                    _ => continue,
                };
                if !data_types.contains(&ty) {
                    data_types.push(ty);
                }
            }

            let primary = if data_types.contains(&DataType::Number) {
                DataType::Number
            } else if data_types.contains(&DataType::Text) {
                DataType::Text
            } else {
                data_types.first().copied().unwrap_or(DataType::Text)
            };

            let format = match primary {
                DataType::Number => {
                    let numbers: Vec<f64> =
                        values.iter().filter_map(|v| v.as_f64()).collect();
                    let min = numbers.iter().copied().fold(f64::INFINITY, f64::min);
                    let max = numbers.iter().copied().fold(f64::NEG_INFINITY, f64::max);
                    Format::Number {
                        min,
                        max,
                        scale: Scale::Linear,
                        has_empty_values: values.len() < rows.len(),
                        sequential: is_sequential(&numbers),
                    }
                }
                _ => {
                    let rendered: Vec<String> = values.iter().map(|v| cell_text(v)).collect();
                    let unique: HashSet<&str> =
                        rendered.iter().map(String::as_str).collect();
                    Format::Text {
                        has_repeat: unique.len() < rendered.len(),
                        longest: rendered.iter().map(String::len).max().unwrap_or(0),
                        scale: if unique.len() <= 10 {
                            Scale::Ordinal
                        } else {
                            Scale::Band
                        },
                    }
                }
            };

            ColumnSchema {
                column: column.clone(),
                index,
                label: column.clone(),
                data_types,
                format,
            }
        })
        .collect()
}

fn empty_column(column: &str, index: usize) -> ColumnSchema {
    ColumnSchema {
        column: column.to_string(),
        index,
        label: column.to_string(),
        data_types: vec![DataType::Text],
        format: Format::Text {
            has_repeat: false,
            longest: 0,
            scale: Scale::Ordinal,
        },
    }
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Whether numeric values are evenly spaced (gaps within 10% of the mean
/// gap), e.g. a year column
fn is_sequential(values: &[f64]) -> bool {
    if values.len() < 2 {
        return false;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let diffs: Vec<f64> = sorted.windows(2).map(|w| w[1] - w[0]).collect();
    let mean = diffs.iter().sum::<f64>() / diffs.len() as f64;
    if mean == 0.0 {
        return false;
    }
    diffs.iter().all(|d| ((d - mean) / mean).abs() < 0.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_column_gets_bounds_and_linear_scale() {
        let rows = vec![
            json!({"year": 2019, "seat": "Higgins"}),
            json!({"year": 2022, "seat": "Kooyong"}),
            json!({"year": 2025, "seat": "Bass"}),
        ];
        let cols = schema(&rows);
        let year = cols.iter().find(|c| c.column == "year").unwrap();

        assert_eq!(year.data_types, vec![DataType::Number]);
        assert_eq!(
            year.format,
            Format::Number {
                min: 2019.0,
                max: 2025.0,
                scale: Scale::Linear,
                has_empty_values: false,
                sequential: true,
            }
        );
    }

    #[test]
    fn uneven_gaps_are_not_sequential() {
        assert!(!is_sequential(&[1.0, 2.0, 10.0]));
        assert!(is_sequential(&[10.0, 20.0, 30.0]));
        assert!(!is_sequential(&[5.0]));
        assert!(!is_sequential(&[3.0, 3.0, 3.0]));
    }

    #[test]
    fn text_column_cardinality_picks_scale() {
        let rows: Vec<Value> = (0..12)
            .map(|i| json!({"seat": format!("Seat {i}"), "state": "VIC"}))
            .collect();
        let cols = schema(&rows);

        let seat = cols.iter().find(|c| c.column == "seat").unwrap();
        assert_eq!(
            seat.format,
            Format::Text {
                has_repeat: false,
                longest: 7,
                scale: Scale::Band,
            }
        );

        let state = cols.iter().find(|c| c.column == "state").unwrap();
        assert_eq!(
            state.format,
            Format::Text {
                has_repeat: true,
                longest: 3,
                scale: Scale::Ordinal,
            }
        );
    }

    #[test]
    fn empty_cells_flag_missing_values() {
        let rows = vec![
            json!({"swing": 3.2}),
            json!({"swing": ""}),
            json!({"swing": 1.4}),
        ];
        let cols = schema(&rows);
        let Format::Number { has_empty_values, .. } = cols[0].format else {
            panic!("expected numeric column");
        };
        assert!(has_empty_values);
    }

    #[test]
    fn empty_input_and_empty_columns() {
        assert!(schema(&[]).is_empty());

        let rows = vec![json!({"notes": ""}), json!({"notes": null})];
        let cols = schema(&rows);
        assert_eq!(cols[0].data_types, vec![DataType::Text]);
        assert_eq!(
            cols[0].format,
            Format::Text {
                has_repeat: false,
                longest: 0,
                scale: Scale::Ordinal,
            }
        );
    }
}
