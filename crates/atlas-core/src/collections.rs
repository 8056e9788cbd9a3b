//! Pure ordering rules behind the three persisted collections.
//!
//! Each operation works on a plain key sequence (philosopher ids or query
//! strings); persistence and change notification are the caller's job.

/// Move-to-front insert with capacity bound, dedup by exact key.
/// Used by recently-viewed: re-adding a key promotes it to the front.
pub fn promote(keys: &mut Vec<String>, key: &str, cap: usize) {
    keys.retain(|k| k != key);
    keys.insert(0, key.to_string());
    keys.truncate(cap);
}

/// Append-or-remove toggle, unbounded, dedup by exact key.
///
/// A re-added key lands at the end, not the front: favorites keep
/// insertion order rather than MRU order. Returns whether the key is
/// present afterwards.
pub fn toggle(keys: &mut Vec<String>, key: &str) -> bool {
    let before = keys.len();
    keys.retain(|k| k != key);
    if keys.len() < before {
        false
    } else {
        keys.push(key.to_string());
        true
    }
}

/// Move-to-front for search queries: trims, ignores blank input, and
/// deduplicates case-insensitively. Returns whether anything was recorded.
pub fn promote_query(keys: &mut Vec<String>, query: &str, cap: usize) -> bool {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        return false;
    }
    let lower = trimmed.to_lowercase();
    keys.retain(|k| k.to_lowercase() != lower);
    keys.insert(0, trimmed.to_string());
    keys.truncate(cap);
    true
}
