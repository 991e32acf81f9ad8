//! Field/value query semantics over one collection.

use crate::collection::RecordCollection;
use crate::error::{Error, Result};
use crate::record::Record;

/// Return every record matching `query` on `field`, in collection order.
///
/// A non-empty query selects records whose field value contains it
/// case-insensitively (substring, unanchored — partial matches favour
/// recall over precision). The empty query inverts into "show me the gaps":
/// records where the field is absent or present with an empty value.
///
/// Fails with [`Error::UnknownField`] before any scan when `field` is not in
/// the collection's field index, and with [`Error::NoMatch`] instead of
/// returning an empty result.
pub fn search(collection: &RecordCollection, field: &str, query: &str) -> Result<Vec<Record>> {
    if !collection.has_field(field) {
        return Err(Error::unknown_field(field));
    }
    let matches: Vec<Record> = if query.is_empty() {
        collection
            .records()
            .iter()
            .filter(|record| match record.get(field) {
                None => true,
                Some(value) => value.to_string().is_empty(),
            })
            .cloned()
            .collect()
    } else {
        let needle = query.to_uppercase();
        collection
            .records()
            .iter()
            .filter(|record| {
                record
                    .get(field)
                    .map_or(false, |value| value.to_string().to_uppercase().contains(&needle))
            })
            .cloned()
            .collect()
    };
    if matches.is_empty() {
        return Err(Error::no_match(field, query));
    }
    Ok(matches)
}
