use std::collections::HashMap;

use crate::set::RecordSet;

/// Merge-time lookup from record name to its position in a [`RecordSet`].
///
/// Positions rather than references: the set owns its records, and an update
/// through the index is an in-place mutation of `set.get_mut(position)`.
/// Callers that append to the set must [`insert`](Self::insert) the new
/// position before the next lookup.
#[derive(Clone, Debug, Default)]
pub struct NameIndex {
    positions: HashMap<String, usize>,
    shadowed: Vec<usize>,
}

impl NameIndex {
    /// Index every record in `set`.
    ///
    /// When a name occurs more than once the last position wins; the earlier
    /// positions are reported by [`shadowed`](Self::shadowed).
    pub fn build(set: &RecordSet) -> Self {
        let mut index = Self {
            positions: HashMap::with_capacity(set.len()),
            shadowed: Vec::new(),
        };
        for (position, record) in set.iter().enumerate() {
            if let Some(earlier) = index.positions.insert(record.name().to_string(), position) {
                index.shadowed.push(earlier);
            }
        }
        index.shadowed.sort_unstable();
        index
    }

    pub fn get(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Register a newly appended record.
    pub fn insert(&mut self, name: impl Into<String>, position: usize) {
        self.positions.insert(name.into(), position);
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Positions of duplicate-named records that the index does not point to.
    pub fn shadowed(&self) -> &[usize] {
        &self.shadowed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Record;

    #[test]
    fn build_maps_names_to_positions() {
        let set: RecordSet = vec![Record::new("A"), Record::new("B")].into();
        let index = NameIndex::build(&set);
        assert_eq!(index.get("A"), Some(0));
        assert_eq!(index.get("B"), Some(1));
        assert_eq!(index.get("C"), None);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn empty_set_gives_empty_index() {
        let index = NameIndex::build(&RecordSet::new());
        assert!(index.is_empty());
        assert!(index.shadowed().is_empty());
    }

    #[test]
    fn last_duplicate_wins() {
        let set: RecordSet = vec![
            Record::new("A"),
            Record::new("B"),
            Record::new("A"),
            Record::new("A"),
        ]
        .into();
        let index = NameIndex::build(&set);
        assert_eq!(index.get("A"), Some(3));
        assert_eq!(index.get("B"), Some(1));
        assert_eq!(index.shadowed(), &[0, 2]);
    }

    #[test]
    fn insert_registers_appended_record() {
        let mut set: RecordSet = vec![Record::new("A")].into();
        let mut index = NameIndex::build(&set);
        let pos = set.push(Record::new("B"));
        index.insert("B", pos);
        assert!(index.contains("B"));
        assert_eq!(index.get("B"), Some(1));
    }
}
