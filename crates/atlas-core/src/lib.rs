//! Directory state and search engine for a philosopher atlas.
//!
//! Holds the immutable dataset with its id index, derives filter facets,
//! evaluates the combined search/filter predicate (literal substring with
//! a fuzzy subsequence fallback on the name fields), and provides the
//! pure bounded/deduplicated key-list rules behind the three persisted
//! collections (favorites, recently-viewed, search history).
//!
//! Zero I/O: the durable store, change bus, and session live in
//! atlas-store.

pub mod collections;
pub mod constants;
pub mod dataset;
pub mod facets;
pub mod filter;
pub mod persist;
pub mod philosopher;
pub mod search;

pub use collections::{promote, promote_query, toggle};
pub use constants::{HISTORY_CAPACITY, RECENT_CAPACITY, SUBSEQUENCE_SCORE, SUBSTRING_SCORE};
pub use dataset::{Dataset, DatasetError};
pub use facets::Facets;
pub use filter::{FilterState, Selection, TimeRange};
pub use persist::{decode_keys, encode_keys};
pub use philosopher::{Philosopher, Work};
pub use search::{filter_dataset, filter_indices, fuzzy_score};
