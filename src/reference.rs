//! Reference tables fetched from the remote API and the key ranges derived
//! from them.

use crate::utils::parse_int_prefix;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::fmt;

/// Which of the two remote tables an entry or range belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Numerator,
    Denominator,
}

impl Table {
    pub fn path(self) -> &'static str {
        match self {
            Table::Numerator => crate::config::NUMERATOR_PATH,
            Table::Denominator => crate::config::DENOMINATOR_PATH,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Table::Numerator => "Numerator",
            Table::Denominator => "Denominator",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One `{key, value}` pair as served by the API. Both sides stay strings;
/// lookups compare keys verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReferenceEntry {
    #[serde(deserialize_with = "string_or_number")]
    pub key: String,
    #[serde(deserialize_with = "string_or_number")]
    pub value: String,
}

impl ReferenceEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

/// Accept `"85"` as well as `85`; the PHP backend is not strict about it.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number, found {}",
            other
        ))),
    }
}

/// Response body of both `read.php` endpoints.
#[derive(Debug, Deserialize)]
pub struct RecordsEnvelope {
    pub records: Vec<ReferenceEntry>,
}

/// Inclusive bounds of the integer keys in a table. Only used to tell the
/// user what they should have typed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyRange {
    pub min: i64,
    pub max: i64,
}

impl KeyRange {
    /// Min/max over the leading-integer reading of every key. Keys without
    /// one are skipped; `None` if no key has one.
    pub fn from_entries(entries: &[ReferenceEntry]) -> Option<Self> {
        entries
            .iter()
            .filter_map(|e| parse_int_prefix(&e.key))
            .fold(None, |acc, k| match acc {
                None => Some(KeyRange { min: k, max: k }),
                Some(r) => Some(KeyRange {
                    min: r.min.min(k),
                    max: r.max.max(k),
                }),
            })
    }
}

/// An ordered table together with its derived key range.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTable {
    entries: Vec<ReferenceEntry>,
    range: Option<KeyRange>,
}

impl ReferenceTable {
    pub fn new(entries: Vec<ReferenceEntry>) -> Self {
        let range = KeyRange::from_entries(&entries);
        Self { entries, range }
    }

    pub fn entries(&self) -> &[ReferenceEntry] {
        &self.entries
    }

    pub fn range(&self) -> Option<KeyRange> {
        self.range
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// First entry whose key equals `key` exactly.
    pub fn lookup(&self, key: &str) -> Option<&ReferenceEntry> {
        self.entries.iter().find(|e| e.key == key)
    }
}

/// Both tables of a session, replaced together on every successful load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReferenceTables {
    pub numerators: ReferenceTable,
    pub denominators: ReferenceTable,
}

impl ReferenceTables {
    pub fn new(numerators: Vec<ReferenceEntry>, denominators: Vec<ReferenceEntry>) -> Self {
        Self {
            numerators: ReferenceTable::new(numerators),
            denominators: ReferenceTable::new(denominators),
        }
    }

    pub fn table(&self, table: Table) -> &ReferenceTable {
        match table {
            Table::Numerator => &self.numerators,
            Table::Denominator => &self.denominators,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.numerators.is_empty() && self.denominators.is_empty()
    }
}
