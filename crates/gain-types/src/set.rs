use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::error::{kind_of, RecordError, RecordResult};
use crate::record::Record;

/// An ordered collection of records, serialized as a JSON array.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct RecordSet {
    records: Vec<Record>,
}

impl RecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a JSON array element by element.
    ///
    /// The first invalid element aborts validation and its position is
    /// reported in [`RecordError::InvalidRecord`].
    pub fn from_value(value: Value) -> RecordResult<Self> {
        let items = match value {
            Value::Array(items) => items,
            other => {
                return Err(RecordError::NotAnArray {
                    found: kind_of(&other),
                })
            }
        };
        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                Record::from_value(item).map_err(|e| RecordError::InvalidRecord {
                    index,
                    source: Box::new(e),
                })
            })
            .collect::<RecordResult<Vec<_>>>()?;
        Ok(Self { records })
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&Record> {
        self.records.get(position)
    }

    pub fn get_mut(&mut self, position: usize) -> Option<&mut Record> {
        self.records.get_mut(position)
    }

    /// Append a record and return its position.
    pub fn push(&mut self, record: Record) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Record names in set order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(Record::name)
    }

    /// First record with the given name, by linear scan.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|r| r.name() == name)
    }
}

impl TryFrom<Value> for RecordSet {
    type Error = RecordError;

    fn try_from(value: Value) -> RecordResult<Self> {
        Self::from_value(value)
    }
}

impl Serialize for RecordSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.records.serialize(serializer)
    }
}

impl From<Vec<Record>> for RecordSet {
    fn from(records: Vec<Record>) -> Self {
        Self { records }
    }
}

impl FromIterator<Record> for RecordSet {
    fn from_iter<T: IntoIterator<Item = Record>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type Item = Record;
    type IntoIter = std::vec::IntoIter<Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
