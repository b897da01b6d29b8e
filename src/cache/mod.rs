mod entry;
mod state;
mod weighted;

use std::{
	collections::{HashMap, hash_map::RandomState},
	hash::{Hash, BuildHasher},
	sync::Arc,
};

use log::{debug, trace};
use parking_lot::RwLock;

use crate::{
	cacher::Cacher,
	config::{CacheConfig, Capacity},
	error::CacheError,
	stats::{AtomicStats, Stats},
	cache::state::{CacheState, SetOutcome},
};

pub use crate::cache::weighted::Weighted;

/// A fixed-capacity key-value store which, once full, only admits a new
/// key if its value does not have a lower priority than the current
/// minimum, evicting that minimum to make room.
///
/// Every operation runs under a single reader-writer lock, so the map,
/// the eviction heap and the tracked minimum are never observed out of
/// step with each other.
pub struct WeightedEvictionCache<K, V, S = RandomState> {
	capacity: Capacity,
	state: RwLock<CacheState<K, V, S>>,
	stats: AtomicStats,
}

impl<K, V> WeightedEvictionCache<K, V, RandomState>
where
	K: Eq + Hash + Clone,
	V: Weighted,
{
	/// Creates an empty cache which holds at most `capacity` entries.
	/// If the capacity is zero, a [`CacheError`] will be returned.
	///
	/// # Examples
	///
	/// ```
	/// use weighted_eviction_cache::{WeightedEvictionCache, Weighted};
	///
	/// struct Score(i64);
	///
	/// impl Weighted for Score {
	/// 	fn weight(&self) -> i64 {
	/// 		self.0
	/// 	}
	/// }
	///
	/// assert!(WeightedEvictionCache::<u32, Score>::new(100).is_ok());
	///
	/// // Supplying a capacity of zero will return a CacheError.
	/// assert!(WeightedEvictionCache::<u32, Score>::new(0).is_err());
	/// ```
	pub fn new(capacity: usize) -> Result<Self, CacheError> {
		Self::with_hasher(capacity, RandomState::default())
	}

	#[must_use]
	pub fn from_config(config: &CacheConfig) -> Self {
		Self::with_capacity_and_hasher(config.capacity, RandomState::default())
	}
}

impl<K, V, S> WeightedEvictionCache<K, V, S>
where
	K: Eq + Hash + Clone,
	V: Weighted,
	S: BuildHasher + Clone,
{
	pub fn with_hasher(capacity: usize, hasher: S) -> Result<Self, CacheError> {
		let capacity = Capacity::new(capacity)?;
		Ok(Self::with_capacity_and_hasher(capacity, hasher))
	}

	#[must_use]
	pub fn with_capacity_and_hasher(capacity: Capacity, hasher: S) -> Self {
		debug!("creating weighted eviction cache with capacity {capacity}");

		WeightedEvictionCache {
			capacity,
			state: RwLock::new(CacheState::with_capacity_and_hasher(capacity.get(), hasher)),
			stats: AtomicStats::new(),
		}
	}

	/// Returns the current statistics.
	pub fn stats(&self) -> Stats {
		let len = self.state.read().len();
		self.stats.to_stats(self.capacity.get(), len)
	}

	/// Gets the value associated with the supplied key, or `None` if the
	/// key is not in the cache. Never changes eviction order.
	pub fn get(&self, key: &K) -> Option<Arc<V>> {
		let value = self.state
			.read()
			.get(key)
			.cloned();

		match value {
			Some(_) => self.stats.hit(),
			None => self.stats.miss(),
		}

		value
	}

	/// Sets the supplied key and value in the cache, returning `true` if
	/// the value was stored.
	///
	/// If the key already exists, its value is always replaced. If the key
	/// is new and the cache is full, the value is only stored if it is not
	/// [`Weighted::less`] than the current minimum, which is then evicted.
	///
	/// # Examples
	///
	/// ```
	/// use weighted_eviction_cache::{WeightedEvictionCache, Weighted};
	///
	/// struct Score(i64);
	///
	/// impl Weighted for Score {
	/// 	fn weight(&self) -> i64 {
	/// 		self.0
	/// 	}
	/// }
	///
	/// let cache = WeightedEvictionCache::new(1).unwrap();
	///
	/// assert!(cache.set("a", Score(10)));
	///
	/// // A new key with a lower weight than the minimum is turned away.
	/// assert!(!cache.set("b", Score(5)));
	///
	/// // A new key with a higher weight evicts the minimum.
	/// assert!(cache.set("c", Score(20)));
	/// assert!(!cache.is_exist(&"a"));
	/// ```
	pub fn set(&self, key: K, value: V) -> bool {
		self.stats.set();

		let outcome = self.state
			.write()
			.set(key, Arc::new(value), self.capacity.get());

		match outcome {
			SetOutcome::Evicted => {
				self.stats.evict();
				trace!("evicted the minimum-priority entry");
			},

			SetOutcome::Rejected => {
				self.stats.reject();
				trace!("rejected a value below the minimum priority");
			},

			SetOutcome::Inserted | SetOutcome::Updated => {},
		}

		if outcome.is_accepted() {
			self.stats.accept();
		}

		outcome.is_accepted()
	}

	/// Deletes the entry associated with the supplied key, if any.
	pub fn delete(&self, key: &K) {
		if self.state.write().remove(key) {
			self.stats.del();
		}
	}

	pub fn is_exist(&self, key: &K) -> bool {
		self.state.read().contains(key)
	}

	/// Deletes all entries and releases the storage they used.
	pub fn clear_all(&self) {
		self.state.write().clear(self.capacity.get());
		debug!("cleared weighted eviction cache");
	}

	/// Gets the values associated with the supplied keys. Keys which are
	/// not in the cache are left out of the result.
	pub fn get_multi(&self, keys: &[K]) -> HashMap<K, Arc<V>> {
		let state = self.state.read();
		let mut hits = 0u64;

		let values = keys
			.iter()
			.filter_map(|key| {
				let value = state.get(key)?;
				hits += 1;

				Some((key.clone(), Arc::clone(value)))
			})
			.collect::<HashMap<_, _>>();

		drop(state);

		self.stats.add_hits(hits);
		self.stats.add_misses(keys.len() as u64 - hits);

		values
	}

	/// Sets each pair in turn, returning whether each one was stored. The
	/// batch is not atomic: other writers may interleave between pairs.
	pub fn set_multi<I>(&self, pairs: I) -> Vec<bool>
	where
		I: IntoIterator<Item = (K, V)>,
	{
		pairs
			.into_iter()
			.map(|(key, value)| self.set(key, value))
			.collect()
	}

	/// Deletes every supplied key which is in the cache.
	pub fn delete_multi(&self, keys: &[K]) {
		let mut state = self.state.write();

		for key in keys {
			if state.remove(key) {
				self.stats.del();
			}
		}
	}

	/// Returns an arbitrary value from the cache without affecting eviction
	/// order, or [`CacheError::EmptyCache`] if the cache is empty. The
	/// choice is whatever the map yields first, not uniformly random.
	pub fn peek_random(&self) -> Result<Arc<V>, CacheError> {
		self.state
			.read()
			.values()
			.next()
			.cloned()
			.ok_or(CacheError::EmptyCache)
	}

	/// Returns up to `count` arbitrary values. An empty cache yields an
	/// empty result rather than an error.
	pub fn peek_random_multi(&self, count: usize) -> Result<Vec<Arc<V>>, CacheError> {
		let values = self.state
			.read()
			.values()
			.take(count)
			.cloned()
			.collect();

		Ok(values)
	}

	/// Returns the key and value of the entry which would be evicted next.
	pub fn min(&self) -> Option<(K, Arc<V>)> {
		self.state
			.read()
			.min()
			.map(|entry| (entry.key().clone(), Arc::clone(entry.value())))
	}

	pub fn len(&self) -> usize {
		self.state.read().len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	pub fn cap(&self) -> usize {
		self.capacity.get()
	}
}

impl<K, V, S> Cacher<K, V> for WeightedEvictionCache<K, V, S>
where
	K: Eq + Hash + Clone + Send + Sync,
	V: Weighted + Send + Sync,
	S: BuildHasher + Clone + Send + Sync,
{
	fn get(&self, key: &K) -> Option<Arc<V>> {
		WeightedEvictionCache::get(self, key)
	}

	fn set(&self, key: K, value: V) -> bool {
		WeightedEvictionCache::set(self, key, value)
	}

	fn delete(&self, key: &K) {
		WeightedEvictionCache::delete(self, key);
	}

	fn is_exist(&self, key: &K) -> bool {
		WeightedEvictionCache::is_exist(self, key)
	}

	fn clear_all(&self) {
		WeightedEvictionCache::clear_all(self);
	}

	fn get_multi(&self, keys: &[K]) -> HashMap<K, Arc<V>> {
		WeightedEvictionCache::get_multi(self, keys)
	}

	fn set_multi(&self, pairs: Vec<(K, V)>) -> Vec<bool> {
		WeightedEvictionCache::set_multi(self, pairs)
	}

	fn delete_multi(&self, keys: &[K]) {
		WeightedEvictionCache::delete_multi(self, keys);
	}

	fn peek_random(&self) -> Result<Arc<V>, CacheError> {
		WeightedEvictionCache::peek_random(self)
	}

	fn peek_random_multi(&self, count: usize) -> Result<Vec<Arc<V>>, CacheError> {
		WeightedEvictionCache::peek_random_multi(self, count)
	}

	fn len(&self) -> usize {
		WeightedEvictionCache::len(self)
	}

	fn cap(&self) -> usize {
		WeightedEvictionCache::cap(self)
	}
}
