use std::collections::BTreeMap;
use std::collections::btree_map::Iter;

use crate::core::{CardSet, CategoryMap, HandOddsError};

/// Probability of reaching each hand category from one card set.
pub type Probabilities = CategoryMap<f64>;

/// Every card set the enumeration has visited and its probabilities.
///
/// Writing a set that is already present replaces the earlier entry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProbabilityTable {
    entries: BTreeMap<CardSet, Probabilities>,
}

impl ProbabilityTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the probabilities for a set, returning whatever was there.
    pub fn insert(&mut self, set: CardSet, probabilities: Probabilities) -> Option<Probabilities> {
        self.entries.insert(set, probabilities)
    }

    pub fn get(&self, set: &CardSet) -> Option<&Probabilities> {
        self.entries.get(set)
    }

    /// Look up by key. The key does not have to be canonical; `C13C1`
    /// finds the entry stored as `C1C13`.
    pub fn get_key(&self, key: &str) -> Result<&Probabilities, HandOddsError> {
        let set: CardSet = key.parse()?;
        self.get(&set).ok_or_else(|| HandOddsError::MissingKey(set.key()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, CardSet, Probabilities> {
        self.entries.iter()
    }

    /// Write every entry of `other` into this table, later writes winning.
    pub fn merge(&mut self, other: ProbabilityTable) {
        self.entries.extend(other.entries);
    }

    /// Dump the whole table as one JSON object of
    /// `key -> {category -> probability}`.
    #[cfg(feature = "serde")]
    pub fn write_json<W: std::io::Write>(
        &self,
        writer: W,
        pretty: bool,
    ) -> Result<(), HandOddsError> {
        let mut writer = std::io::BufWriter::new(writer);
        if pretty {
            serde_json::to_writer_pretty(&mut writer, self)?;
        } else {
            serde_json::to_writer(&mut writer, self)?;
        }
        std::io::Write::flush(&mut writer)?;
        Ok(())
    }

    /// Load a table previously written by `write_json`.
    #[cfg(feature = "serde")]
    pub fn read_json<R: std::io::Read>(reader: R) -> Result<Self, HandOddsError> {
        Ok(serde_json::from_reader(std::io::BufReader::new(reader))?)
    }
}

impl<'a> IntoIterator for &'a ProbabilityTable {
    type Item = (&'a CardSet, &'a Probabilities);
    type IntoIter = Iter<'a, CardSet, Probabilities>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for ProbabilityTable {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (set, probabilities) in &self.entries {
            map.serialize_entry(&set.key(), probabilities)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct ProbabilityTableVisitor;

#[cfg(feature = "serde")]
impl<'de> serde::de::Visitor<'de> for ProbabilityTableVisitor {
    type Value = ProbabilityTable;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a map from card set keys to hand category probabilities")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        use serde::de::Error;

        let mut table = ProbabilityTable::new();
        while let Some(key) = access.next_key::<String>()? {
            let set: CardSet = key.parse().map_err(A::Error::custom)?;
            let probabilities: Probabilities = access.next_value()?;
            if table.insert(set, probabilities).is_some() {
                return Err(A::Error::custom(format!(
                    "duplicate card set {key} (stored as {set})"
                )));
            }
        }
        Ok(table)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ProbabilityTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(ProbabilityTableVisitor)
    }
}
