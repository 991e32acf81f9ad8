//! One loaded set of records plus its derived field index.

use rayon::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::Record;

/// An immutable sequence of records loaded once at startup.
///
/// Carries the field index: the sorted union of every field name seen across
/// the records, computed once at construction and never updated.
#[derive(Debug, Clone)]
pub struct RecordCollection {
    records: Vec<Record>,
    field_index: BTreeSet<String>,
}

impl RecordCollection {
    /// Build a collection from already-parsed records.
    ///
    /// The field-index union scan is order-independent (set union is
    /// commutative and associative), so it runs as a parallel reduce.
    pub fn new(records: Vec<Record>) -> Self {
        let field_index = records
            .par_iter()
            .map(|record| record.field_names().map(str::to_string).collect::<BTreeSet<_>>())
            .reduce(BTreeSet::new, |mut union, names| {
                union.extend(names);
                union
            });
        Self { records, field_index }
    }

    /// Parse a JSON array of objects. Any other document shape is
    /// malformed content.
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let records: Vec<Record> = serde_json::from_str(raw).map_err(|_| Error::LoadMalformed)?;
        Ok(Self::new(records))
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|_| Error::LoadNotFound)?;
        Self::from_json_str(&raw)
    }

    /// All records in load order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.field_index.contains(name)
    }

    /// All known field names, one per line, ascending.
    pub fn field_listing(&self) -> String {
        let mut listing = String::new();
        for name in &self.field_index {
            listing.push_str(name);
            listing.push('\n');
        }
        listing
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
