use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::{kind_of, RecordError, RecordResult};

/// The field every record must carry. Its string value is the merge key.
pub const NAME_FIELD: &str = "name";

/// A single exercise entry.
///
/// A `Record` is an ordered JSON object with one validated field, `name`.
/// Every other field is opaque payload and is written back exactly as it was
/// read. Field order is preserved: overwriting a field keeps its position,
/// new fields are appended.
#[derive(Clone, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Record {
    name: String,
    fields: Map<String, Value>,
}

impl Record {
    /// Create a record holding only its `name`.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let mut fields = Map::new();
        fields.insert(NAME_FIELD.to_string(), Value::String(name.clone()));
        Self { name, fields }
    }

    /// Builder-style field setter.
    ///
    /// Setting `name` through this method is ignored; the key is fixed at
    /// construction.
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if key != NAME_FIELD {
            self.fields.insert(key, value.into());
        }
        self
    }

    /// Validate a JSON value and wrap it as a record.
    pub fn from_value(value: Value) -> RecordResult<Self> {
        let fields = match value {
            Value::Object(fields) => fields,
            other => {
                return Err(RecordError::NotAnObject {
                    found: kind_of(&other),
                })
            }
        };
        let name = match fields.get(NAME_FIELD) {
            Some(Value::String(name)) => name.clone(),
            Some(other) => {
                return Err(RecordError::NameNotString {
                    found: kind_of(other),
                })
            }
            None => return Err(RecordError::MissingName),
        };
        Ok(Self { name, fields })
    }

    /// The merge key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// All fields, including `name`, in order.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Write every field of `incoming` onto this record.
    ///
    /// Fields present only on `self` are kept. A `null` in `incoming` is a
    /// value like any other and replaces the existing field. Returns the
    /// number of fields whose value actually changed.
    pub fn overlay(&mut self, incoming: &Record) -> usize {
        debug_assert_eq!(self.name, incoming.name);
        let mut changed = 0;
        for (key, value) in &incoming.fields {
            if self.fields.get(key) != Some(value) {
                changed += 1;
            }
            self.fields.insert(key.clone(), value.clone());
        }
        changed
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> RecordResult<Self> {
        Self::from_value(value)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Record({:?}, {} fields)", self.name, self.fields.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_extracts_name() {
        let rec = Record::from_value(json!({"name": "Squat", "sets": 3})).unwrap();
        assert_eq!(rec.name(), "Squat");
        assert_eq!(rec.get("sets"), Some(&json!(3)));
        assert_eq!(rec.fields().len(), 2);
    }

    #[test]
    fn missing_name_rejected() {
        let err = Record::from_value(json!({"sets": 3})).unwrap_err();
        assert_eq!(err, RecordError::MissingName);
    }

    #[test]
    fn non_string_name_rejected() {
        let err = Record::from_value(json!({"name": 7})).unwrap_err();
        assert_eq!(err, RecordError::NameNotString { found: "number" });
    }

    #[test]
    fn non_object_rejected() {
        let err = Record::from_value(json!("Squat")).unwrap_err();
        assert_eq!(err, RecordError::NotAnObject { found: "string" });
    }

    #[test]
    fn overlay_keeps_old_only_fields() {
        let mut old = Record::new("Bench")
            .with_field("muscle", "chest")
            .with_field("sets", 3);
        let new = Record::new("Bench").with_field("sets", 5).with_field("rest", 90);

        let changed = old.overlay(&new);

        assert_eq!(changed, 2);
        assert_eq!(old.get("muscle"), Some(&json!("chest")));
        assert_eq!(old.get("sets"), Some(&json!(5)));
        assert_eq!(old.get("rest"), Some(&json!(90)));
    }

    #[test]
    fn overlay_preserves_field_positions() {
        let mut old = Record::new("Row").with_field("a", 1).with_field("b", 2);
        let new = Record::new("Row").with_field("c", 3).with_field("a", 10);
        old.overlay(&new);

        let keys: Vec<&str> = old.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "a", "b", "c"]);
    }

    #[test]
    fn overlay_null_overwrites() {
        let mut old = Record::new("Dip").with_field("notes", "slow");
        let new = Record::new("Dip").with_field("notes", Value::Null);
        old.overlay(&new);
        assert_eq!(old.get("notes"), Some(&Value::Null));
    }

    #[test]
    fn identical_overlay_changes_nothing() {
        let mut old = Record::new("Plank").with_field("seconds", 60);
        let same = old.clone();
        assert_eq!(old.overlay(&same), 0);
        assert_eq!(old, same);
    }

    #[test]
    fn with_field_cannot_rename() {
        let rec = Record::new("Lunge").with_field("name", "Other");
        assert_eq!(rec.name(), "Lunge");
        assert_eq!(rec.get("name"), Some(&json!("Lunge")));
    }

    #[test]
    fn large_integers_survive_a_round_trip() {
        let text = r#"{"name":"A","id":123456789012345678901234567890,"ratio":0.1}"#;
        let rec: Record = serde_json::from_str(text).unwrap();
        assert_eq!(serde_json::to_string(&rec).unwrap(), text);
    }

    #[test]
    fn serializes_as_plain_object() {
        let rec = Record::new("Curl").with_field("equipment", json!(["dumbbell"]));
        let text = serde_json::to_string(&rec).unwrap();
        assert_eq!(text, r#"{"name":"Curl","equipment":["dumbbell"]}"#);
    }

    #[test]
    fn deserialize_validates() {
        let ok: Record = serde_json::from_str(r#"{"name":"Pullup","reps":8}"#).unwrap();
        assert_eq!(ok.name(), "Pullup");
        assert!(serde_json::from_str::<Record>(r#"{"reps":8}"#).is_err());
    }
}
