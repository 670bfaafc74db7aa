//! Typed, per-field access to the aggregator document.

extern crate alloc;

use alloc::string::String;
use serde_json::{Map, Value};

use crate::snapshot::HistorySeries;

/// Outcome of reading one field from the document.
#[derive(Debug, Clone, PartialEq)]
pub enum Field<T> {
    /// The field was present and had the expected shape.
    Value(T),
    /// The key is absent or `null`.
    Missing,
    /// The key is present but its value has the wrong shape.
    Invalid,
}

impl<T> Field<T> {
    /// Assign the value to `target`; missing and invalid fields leave it alone.
    pub fn apply_to(self, target: &mut T) -> bool {
        match self {
            Field::Value(value) => {
                *target = value;
                true
            }
            Field::Missing | Field::Invalid => false,
        }
    }
}

/// Coerce a JSON value into a number, accepting quoted numerals.
pub fn number_from(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    }
}

/// Reads fields from a parsed JSON object and tallies what happened.
pub struct FieldReader<'a> {
    object: &'a Map<String, Value>,
    report: super::IngestReport,
}

impl<'a> FieldReader<'a> {
    pub fn new(object: &'a Map<String, Value>) -> Self {
        Self {
            object,
            report: super::IngestReport::default(),
        }
    }

    fn lookup(&self, key: &str) -> Option<&'a Value> {
        self.object.get(key).filter(|value| !value.is_null())
    }

    pub fn number(&self, key: &str) -> Field<f64> {
        match self.lookup(key) {
            None => Field::Missing,
            Some(value) => number_from(value).map_or(Field::Invalid, Field::Value),
        }
    }

    pub fn text(&self, key: &str) -> Field<String> {
        match self.lookup(key) {
            None => Field::Missing,
            Some(Value::String(s)) => Field::Value(s.clone()),
            Some(_) => Field::Invalid,
        }
    }

    /// Read a numeric field into `target`, recording the outcome.
    pub fn read_number(&mut self, key: &'static str, target: &mut f64) {
        let field = self.number(key);
        self.tally(key, field, target);
    }

    pub fn read_text(&mut self, key: &'static str, target: &mut String) {
        let field = self.text(key);
        self.tally(key, field, target);
    }

    /// Copy array element `i` into slot `i` of `series`.
    ///
    /// Only `min(len, capacity)` slots are touched; non-numeric elements are
    /// skipped and keep their previous sample.
    pub fn read_history(&mut self, key: &'static str, series: &mut HistorySeries) {
        let Some(value) = self.lookup(key) else {
            self.report.missing += 1;
            return;
        };
        let Some(items) = value.as_array() else {
            log::warn!("Field {} is not an array, keeping previous history", key);
            self.report.mark_invalid(key);
            return;
        };

        let mut skipped = 0usize;
        for (index, item) in items.iter().take(series.capacity()).enumerate() {
            match number_from(item) {
                Some(sample) => {
                    // index < capacity by construction
                    let _ = series.record(index, sample as f32);
                }
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            log::warn!("Skipped {} non-numeric entries in {}", skipped, key);
            self.report.mark_invalid(key);
        } else {
            self.report.applied += 1;
        }
    }

    fn tally<T>(&mut self, key: &'static str, field: Field<T>, target: &mut T) {
        match field {
            Field::Invalid => {
                log::warn!("Field {} has an unexpected type, keeping previous value", key);
                self.report.mark_invalid(key);
            }
            Field::Missing => self.report.missing += 1,
            value => {
                value.apply_to(target);
                self.report.applied += 1;
            }
        }
    }

    pub fn finish(self) -> super::IngestReport {
        self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(raw: &str) -> Value {
        serde_json::from_str(raw).unwrap()
    }

    #[test]
    fn test_number_from_accepts_quoted_numerals() {
        assert_eq!(number_from(&parse("21.1")), Some(21.1));
        assert_eq!(number_from(&parse(r#""21.1""#)), Some(21.1));
        assert_eq!(number_from(&parse(r#"" -327 ""#)), Some(-327.0));
        assert_eq!(number_from(&parse(r#""warm""#)), None);
        assert_eq!(number_from(&parse("true")), None);
        assert_eq!(number_from(&parse("[1]")), None);
    }

    #[test]
    fn test_field_outcomes() {
        let doc = parse(r#"{ "a": 1.5, "b": "text", "c": null }"#);
        let object = doc.as_object().unwrap();
        let reader = FieldReader::new(object);

        assert_eq!(reader.number("a"), Field::Value(1.5));
        assert_eq!(reader.number("b"), Field::Invalid);
        assert_eq!(reader.number("c"), Field::Missing);
        assert_eq!(reader.number("d"), Field::Missing);
        assert_eq!(reader.text("b"), Field::Value(String::from("text")));
        assert_eq!(reader.text("a"), Field::Invalid);
    }

    #[test]
    fn test_apply_keeps_previous_on_failure() {
        let mut target = 7.0;
        assert!(!Field::<f64>::Invalid.apply_to(&mut target));
        assert!(!Field::<f64>::Missing.apply_to(&mut target));
        assert_eq!(target, 7.0);
        assert!(Field::Value(3.0).apply_to(&mut target));
        assert_eq!(target, 3.0);
    }
}
