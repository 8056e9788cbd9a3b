/// Capacity of the recently-viewed collection.
pub const RECENT_CAPACITY: usize = 5;

/// Capacity of the search-history collection.
pub const HISTORY_CAPACITY: usize = 10;

/// Fuzzy score for a literal substring hit.
pub const SUBSTRING_SCORE: f64 = 1.0;

/// Fuzzy score for an in-order subsequence hit.
pub const SUBSEQUENCE_SCORE: f64 = 0.5;
