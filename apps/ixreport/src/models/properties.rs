//! Insertion-ordered property bag attached to a diagnostic reference.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Key under which the validator reports the offending element's qualified name.
pub const QNAME: &str = "QName";

#[derive(Debug, Default, Clone, PartialEq, Eq)]
/// Ordered `name -> value` mapping.
///
/// Re-inserting a name overwrites the value but keeps the position of the
/// first occurrence, so rendering order is stable.
pub struct OffenderProperties {
    entries: Vec<(String, String)>,
}

impl OffenderProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn qname(&self) -> Option<&str> {
        self.get(QNAME)
    }

    /// Properties other than `QName`, in stored order.
    pub fn others(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter().filter(|(k, _)| *k != QNAME)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for OffenderProperties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Self::new();
        for (k, v) in iter {
            props.insert(k, v);
        }
        props
    }
}

impl Serialize for OffenderProperties {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
