//! Naive prediction rules used when no model produces an answer.

use serde_json::Value;

use crate::error::{Error, Result};
use crate::features::scalar;

/// Persistence forecast: each prediction is the previous observation and the
/// first one repeats itself. Zero or one inputs pass through unchanged.
/// Values are carried through without conversion.
pub fn persistence(inputs: &[Value]) -> Vec<Value> {
    match inputs.first() {
        None => Vec::new(),
        Some(first) => std::iter::once(first)
            .chain(&inputs[..inputs.len() - 1])
            .cloned()
            .collect(),
    }
}

/// Identity forecast: every input read back as a float.
///
/// Fails on the first input without a numeric reading.
pub fn identity(inputs: &[Value]) -> Result<Vec<Value>> {
    inputs
        .iter()
        .enumerate()
        .map(|(index, value)| {
            scalar(value)
                .map(Value::from)
                .ok_or_else(|| Error::NotNumeric {
                    index,
                    value: value.clone(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn persistence_shifts_by_one() {
        assert_eq!(
            persistence(&[json!(1), json!(2), json!(3)]),
            vec![json!(1), json!(1), json!(2)]
        );
    }

    #[test]
    fn persistence_passes_short_inputs_through() {
        assert_eq!(persistence(&[json!(5)]), vec![json!(5)]);
        assert!(persistence(&[]).is_empty());
    }

    #[test]
    fn persistence_keeps_raw_values() {
        assert_eq!(
            persistence(&[json!("a"), json!(null)]),
            vec![json!("a"), json!("a")]
        );
    }

    #[test]
    fn identity_converts_to_floats() {
        let out = identity(&[json!(1), json!("2.5"), json!(true)]).unwrap();
        assert_eq!(out, vec![json!(1.0), json!(2.5), json!(1.0)]);
    }

    #[test]
    fn identity_rejects_non_finite_text() {
        let err = identity(&[json!("nan"), json!("inf"), json!(2)]).unwrap_err();
        assert!(matches!(err, Error::NotNumeric { index: 0, .. }));
    }

    #[test]
    fn identity_rejects_non_numeric() {
        assert!(identity(&[json!(1), json!({"x": 1})]).is_err());
    }
}
