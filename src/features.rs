//! Conversion of raw JSON inputs into numeric features.

use ndarray::Array2;
use serde_json::Value;

use crate::error::{Error, Result};

/// Numeric reading of a scalar input: numbers as-is, booleans as 0/1,
/// strings parsed as finite floats. Arrays, objects, null and strings such
/// as `"nan"` or `"inf"` have none, since JSON cannot carry them.
pub fn scalar(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Build the matrix handed to a [`crate::predictor::Predictor`].
///
/// A sequence of rows becomes an `n x m` matrix; any other sequence is read
/// as a single feature and reshaped into an `n x 1` column.
pub fn feature_matrix(inputs: &[Value]) -> Result<Array2<f64>> {
    if !inputs.is_empty() && inputs.iter().all(Value::is_array) {
        return row_matrix(inputs);
    }
    let column = inputs
        .iter()
        .enumerate()
        .map(|(index, value)| numeric(index, value))
        .collect::<Result<Vec<_>>>()?;
    Ok(Array2::from_shape_vec((column.len(), 1), column)?)
}

fn row_matrix(rows: &[Value]) -> Result<Array2<f64>> {
    let width = rows[0].as_array().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(rows.len() * width);
    for (row, value) in rows.iter().enumerate() {
        let cells = value.as_array().map(Vec::as_slice).unwrap_or_default();
        if cells.len() != width {
            return Err(Error::RaggedRows {
                expected: width,
                row,
                found: cells.len(),
            });
        }
        for cell in cells {
            flat.push(numeric(row, cell)?);
        }
    }
    Ok(Array2::from_shape_vec((rows.len(), width), flat)?)
}

fn numeric(index: usize, value: &Value) -> Result<f64> {
    scalar(value).ok_or_else(|| Error::NotNumeric {
        index,
        value: value.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn flat_inputs_become_a_column() {
        let x = feature_matrix(&[json!(1), json!(2.5), json!("3")]).unwrap();
        assert_eq!(x.shape(), &[3, 1]);
        assert_eq!(x.column(0).to_vec(), vec![1.0, 2.5, 3.0]);
    }

    #[test]
    fn nested_inputs_keep_their_rows() {
        let x = feature_matrix(&[json!([1, 2]), json!([3, 4]), json!([5, 6])]).unwrap();
        assert_eq!(x.shape(), &[3, 2]);
        assert_eq!(x.row(1).to_vec(), vec![3.0, 4.0]);
    }

    #[test]
    fn empty_inputs_give_an_empty_column() {
        let x = feature_matrix(&[]).unwrap();
        assert_eq!(x.shape(), &[0, 1]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = feature_matrix(&[json!([1, 2]), json!([3])]).unwrap_err();
        assert!(matches!(
            err,
            Error::RaggedRows {
                expected: 2,
                row: 1,
                found: 1
            }
        ));
    }

    #[test]
    fn text_is_not_numeric() {
        let err = feature_matrix(&[json!(1), json!("abc")]).unwrap_err();
        assert!(matches!(err, Error::NotNumeric { index: 1, .. }));
    }

    #[test]
    fn scalar_reads_bools_and_rejects_null() {
        assert_eq!(scalar(&json!(true)), Some(1.0));
        assert_eq!(scalar(&json!(false)), Some(0.0));
        assert_eq!(scalar(&Value::Null), None);
    }

    #[test]
    fn scalar_rejects_non_finite_text() {
        assert_eq!(scalar(&json!("nan")), None);
        assert_eq!(scalar(&json!("inf")), None);
        assert_eq!(scalar(&json!("-Infinity")), None);
        assert_eq!(scalar(&json!("1e3")), Some(1000.0));
    }
}
