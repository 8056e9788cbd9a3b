use std::sync::Arc;

use atlas_core::{
    Dataset, Facets, FilterState, HISTORY_CAPACITY, Philosopher, RECENT_CAPACITY, TimeRange,
    decode_keys, encode_keys, filter_indices, promote, promote_query, toggle,
};

use crate::bus::{ChangeBus, Subscription};
use crate::error::{Result, StoreError};
use crate::kv::{FAVORITES_KEY, HISTORY_KEY, KvStore, RECENT_KEY};

/// One view's handle on the directory state: the immutable dataset, its
/// derived facets, the live query/filter/range inputs with their filtered
/// result, and the three persisted collections.
///
/// Sessions sharing a store and bus converge through key-name
/// notifications: every collection write publishes its storage key and
/// every session reloads that collection from storage in [`Session::sync`].
/// There is no transactional isolation: two views writing the same key
/// is last-write-wins at the storage layer. Within one view, the filtered
/// result always reflects the latest completed mutation, and every write
/// is immediately readable back.
pub struct Session {
    dataset: Arc<Dataset>,
    facets: Facets,
    store: Arc<KvStore>,
    bus: Arc<ChangeBus>,
    subscription: Subscription,
    query: String,
    filters: FilterState,
    range: TimeRange,
    filtered: Vec<usize>,
    favorites: Vec<String>,
    recent: Vec<String>,
    history: Vec<String>,
}

impl Session {
    /// Open a session: derive facets, rehydrate the three collections
    /// from storage, and subscribe to change notifications. The time
    /// range starts at the full dataset span.
    pub fn open(dataset: Arc<Dataset>, store: Arc<KvStore>, bus: Arc<ChangeBus>) -> Result<Self> {
        let facets = Facets::derive(&dataset);
        let range = TimeRange::new(facets.min_year, facets.max_year);
        let subscription = bus.subscribe();

        let favorites = load_ids(&store, FAVORITES_KEY, &dataset)?;
        let recent = load_ids(&store, RECENT_KEY, &dataset)?;
        let history = load_raw(&store, HISTORY_KEY)?;

        let mut session = Self {
            dataset,
            facets,
            store,
            bus,
            subscription,
            query: String::new(),
            filters: FilterState::default(),
            range,
            filtered: Vec::new(),
            favorites,
            recent,
            history,
        };
        session.refilter();
        Ok(session)
    }

    // --- Read accessors ---

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn facets(&self) -> &Facets {
        &self.facets
    }

    pub fn periods(&self) -> &[String] {
        &self.facets.periods
    }

    pub fn schools(&self) -> &[String] {
        &self.facets.schools
    }

    pub fn cities(&self) -> &[String] {
        &self.facets.cities
    }

    pub fn min_year(&self) -> i32 {
        self.facets.min_year
    }

    pub fn max_year(&self) -> i32 {
        self.facets.max_year
    }

    pub fn search_query(&self) -> &str {
        &self.query
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn time_range(&self) -> TimeRange {
        self.range
    }

    /// The filtered subsequence of the dataset under the current query,
    /// categorical filters, and time range. Dataset order, no duplicates.
    pub fn filtered_philosophers(&self) -> Vec<&Philosopher> {
        self.filtered
            .iter()
            .filter_map(|&i| self.dataset.get(i))
            .collect()
    }

    /// Favorites in insertion order (not MRU: a re-toggled favorite
    /// re-enters at the end).
    pub fn favorites(&self) -> Vec<&Philosopher> {
        self.resolve(&self.favorites)
    }

    pub fn is_favorite(&self, id: &str) -> bool {
        self.favorites.iter().any(|f| f == id)
    }

    /// Recently viewed, most recent first, at most five entries.
    pub fn recently_viewed(&self) -> Vec<&Philosopher> {
        self.resolve(&self.recent)
    }

    /// Submitted queries, most recent first, at most ten entries.
    pub fn search_history(&self) -> &[String] {
        &self.history
    }

    // --- Query/filter/range mutators ---

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refilter();
    }

    pub fn set_filters(&mut self, filters: FilterState) {
        self.filters = filters;
        self.refilter();
    }

    /// Clamps to the facet year bounds and restores ordering, so the
    /// engine never sees an inverted range.
    pub fn set_time_range(&mut self, range: TimeRange) {
        self.range = range.clamped(self.facets.min_year, self.facets.max_year);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_indices(&self.dataset, &self.query, &self.filters, self.range);
    }

    // --- Persisted collection mutators ---

    /// Add or remove a favorite. Returns whether the philosopher is a
    /// favorite afterwards. Toggling twice restores the prior state.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        self.require_known(id)?;
        let now_favorite = toggle(&mut self.favorites, id);
        self.persist(FAVORITES_KEY, &self.favorites)?;
        Ok(now_favorite)
    }

    /// Record a philosopher view: moves (or inserts) the id to the front
    /// of recently-viewed and truncates to capacity. Safe to repeat.
    pub fn add_recently_viewed(&mut self, id: &str) -> Result<()> {
        self.require_known(id)?;
        promote(&mut self.recent, id, RECENT_CAPACITY);
        self.persist(RECENT_KEY, &self.recent)
    }

    /// Record a submitted query. Blank queries are ignored; an existing
    /// case-insensitive match moves to the front.
    pub fn add_search_history(&mut self, query: &str) -> Result<()> {
        if promote_query(&mut self.history, query, HISTORY_CAPACITY) {
            self.persist(HISTORY_KEY, &self.history)?;
        }
        Ok(())
    }

    /// Empty the search history and force every observer, this session
    /// included, to reload it from storage.
    pub fn clear_search_history(&mut self) -> Result<()> {
        self.history.clear();
        self.persist(HISTORY_KEY, &self.history)?;
        self.sync()
    }

    /// Remove the history entry at `index` (0 = most recent).
    pub fn remove_search_history_entry(&mut self, index: usize) -> Result<()> {
        if index >= self.history.len() {
            return Err(StoreError::InvalidIndex(index));
        }
        self.history.remove(index);
        self.persist(HISTORY_KEY, &self.history)
    }

    // --- Synchronization ---

    /// Drain pending change notifications and reload each affected
    /// collection from storage, rehydrating against the current dataset.
    /// The bus deduplicates pending keys, so each collection reloads at
    /// most once per sync.
    pub fn sync(&mut self) -> Result<()> {
        for key in self.subscription.drain() {
            tracing::debug!("reloading '{key}' after change notification");
            match key.as_str() {
                FAVORITES_KEY => {
                    self.favorites = load_ids(&self.store, FAVORITES_KEY, &self.dataset)?;
                }
                RECENT_KEY => {
                    self.recent = load_ids(&self.store, RECENT_KEY, &self.dataset)?;
                }
                HISTORY_KEY => {
                    self.history = load_raw(&self.store, HISTORY_KEY)?;
                }
                other => tracing::debug!("ignoring notification for unknown key '{other}'"),
            }
        }
        Ok(())
    }

    // --- Internals ---

    fn resolve(&self, ids: &[String]) -> Vec<&Philosopher> {
        ids.iter().filter_map(|id| self.dataset.by_id(id)).collect()
    }

    fn require_known(&self, id: &str) -> Result<()> {
        if self.dataset.by_id(id).is_none() {
            return Err(StoreError::UnknownPhilosopher(id.to_string()));
        }
        Ok(())
    }

    fn persist(&self, key: &str, keys: &[String]) -> Result<()> {
        let encoded = encode_keys(keys)?;
        self.store.set(key, &encoded)?;
        self.bus.publish(key);
        Ok(())
    }
}

/// Read one key's id sequence, dropping ids absent from the dataset.
/// Malformed storage degrades to empty.
fn load_ids(store: &KvStore, key: &str, dataset: &Dataset) -> Result<Vec<String>> {
    let ids = load_raw(store, key)?;
    let total = ids.len();
    let resolved: Vec<String> = ids
        .into_iter()
        .filter(|id| dataset.by_id(id).is_some())
        .collect();
    if resolved.len() < total {
        tracing::debug!("dropped {} stale id(s) from '{key}'", total - resolved.len());
    }
    Ok(resolved)
}

fn load_raw(store: &KvStore, key: &str) -> Result<Vec<String>> {
    Ok(match store.get(key)? {
        Some(raw) => decode_keys(&raw),
        None => Vec::new(),
    })
}
