//! Record-set diff engine.
//!
//! A zone is always mutated as a whole: compute the complete replacement
//! list locally, then submit it in one replace call. There is no partial
//! patch protocol; the zone's version counter is the only concurrency
//! guard. Matching is by structural equality over the record's fields,
//! never by position or identity.

use crate::types::ResourceRecord;

/// Produce the entry list after editing (or adding) one record.
///
/// - `target_slot` present and structurally equal to an element of
///   `current`: that element (first match, in sequence order) is replaced
///   by `replacement`.
/// - `target_slot` present but matching nothing: `replacement` is
///   appended. The slot may have been removed by a concurrent edit, so a
///   stale edit degrades to an insert instead of failing.
/// - `target_slot` absent: pure add, `replacement` is appended.
#[must_use]
pub fn apply_edit(
    current: &[ResourceRecord],
    target_slot: Option<&ResourceRecord>,
    replacement: ResourceRecord,
) -> Vec<ResourceRecord> {
    let mut entries = current.to_vec();

    let slot = target_slot.and_then(|t| entries.iter().position(|e| e == t));
    match slot {
        Some(i) => entries[i] = replacement,
        None => entries.push(replacement),
    }

    entries
}

/// Produce the entry list after deleting a record.
///
/// Every element structurally equal to `target` is removed, not just the
/// first; indistinguishable duplicates cannot be deleted selectively.
#[must_use]
pub fn remove_entry(current: &[ResourceRecord], target: &ResourceRecord) -> Vec<ResourceRecord> {
    current.iter().filter(|e| *e != target).cloned().collect()
}
