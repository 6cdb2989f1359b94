//! Domain-label canonicalization.
//!
//! Everything crossing the directory boundary is in canonical ASCII
//! (punycode) form; human-readable Unicode forms exist only at the
//! presentation edge. Convert here, once, on the way in and out — records
//! compare byte-for-byte, so a name stored in two spellings would
//! accumulate divergent-looking duplicates.

use crate::error::{NameMeshError, Result};

/// Convert a (possibly Unicode) domain name to its canonical ASCII form.
///
/// Rejects names that are syntactically invalid under IDNA.
pub fn to_ascii(name: &str) -> Result<String> {
    if name.is_empty() {
        return Err(NameMeshError::validation("name", "empty domain name"));
    }
    idna::domain_to_ascii(name)
        .map_err(|e| NameMeshError::validation("name", format!("'{name}': {e}")))
}

/// Convert a canonical ASCII domain name to its Unicode display form.
///
/// Display is best-effort: a label that fails to decode is shown as-is.
#[must_use]
pub fn to_unicode(name: &str) -> String {
    let (unicode, _) = idna::domain_to_unicode(name);
    unicode
}
