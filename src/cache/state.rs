use std::{
	collections::HashMap,
	hash::{Hash, BuildHasher},
	sync::Arc,
};

use crate::{
	cache::{Weighted, entry::Entry},
	heap::BinaryHeap,
};

#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub enum SetOutcome {
	Updated,
	Inserted,
	Evicted,
	Rejected,
}

/// The object map, the eviction heap and the tracked minimum. These are
/// only ever mutated together, under one lock.
///
/// Between calls, the heap holds exactly one entry per key in the map and
/// `min` is a copy of the heap's root.
pub struct CacheState<K, V, S> {
	objects: HashMap<K, Arc<V>, S>,
	heap: BinaryHeap<Entry<K, V>>,
	min: Option<Entry<K, V>>,
}

impl SetOutcome {
	pub fn is_accepted(&self) -> bool {
		!matches!(self, SetOutcome::Rejected)
	}
}

impl<K, V, S> CacheState<K, V, S>
where
	K: Eq + Hash + Clone,
	V: Weighted,
	S: BuildHasher + Clone,
{
	pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
		CacheState {
			objects: HashMap::with_capacity_and_hasher(capacity, hasher),
			heap: BinaryHeap::with_capacity(capacity),
			min: None,
		}
	}

	pub fn len(&self) -> usize {
		self.objects.len()
	}

	pub fn get(&self, key: &K) -> Option<&Arc<V>> {
		self.objects.get(key)
	}

	pub fn contains(&self, key: &K) -> bool {
		self.objects.contains_key(key)
	}

	pub fn min(&self) -> Option<&Entry<K, V>> {
		self.min.as_ref()
	}

	pub fn values(&self) -> impl Iterator<Item = &Arc<V>> {
		self.objects.values()
	}

	/// Stores `value` under `key`. An existing key is always updated. A new
	/// key is inserted while there is room; once full, it replaces the
	/// minimum unless it is `less` than the minimum.
	pub fn set(&mut self, key: K, value: Arc<V>, capacity: usize) -> SetOutcome {
		if self.objects.contains_key(&key) {
			self.remove_entry(&key);
			self.insert(key, value);

			return SetOutcome::Updated;
		}

		if self.objects.len() < capacity {
			self.insert(key, value);
			return SetOutcome::Inserted;
		}

		let Some(min) = &self.min else {
			return SetOutcome::Rejected;
		};

		if Weighted::less(&*value, &**min.value()) {
			return SetOutcome::Rejected;
		}

		// the tracked minimum is always the heap's root
		if let Ok(evicted) = self.heap.pop() {
			self.objects.remove(evicted.key());
		}

		self.insert(key, value);

		SetOutcome::Evicted
	}

	/// Returns `true` if `key` was present.
	pub fn remove(&mut self, key: &K) -> bool {
		if self.objects.remove(key).is_none() {
			return false;
		}

		self.remove_entry(key);
		self.refresh_min();

		true
	}

	pub fn clear(&mut self, capacity: usize) {
		let hasher = self.objects.hasher().clone();

		self.objects = HashMap::with_capacity_and_hasher(capacity, hasher);
		self.heap = BinaryHeap::with_capacity(capacity);
		self.min = None;
	}

	fn insert(&mut self, key: K, value: Arc<V>) {
		self.objects.insert(key.clone(), Arc::clone(&value));
		self.heap.push(Entry::new(key, value));
		self.refresh_min();
	}

	fn remove_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
		let position = self.heap.position(|entry| entry.key() == key)?;
		self.heap.remove(position).ok()
	}

	fn refresh_min(&mut self) {
		self.min = self.heap.top().ok().cloned();
	}

	#[cfg(test)]
	pub fn is_consistent(&self) -> bool {
		use crate::heap::Ordered;

		if self.heap.len() != self.objects.len() || !self.heap.is_heap() {
			return false;
		}

		let entries_match = self.heap.iter().all(|entry| {
			self.objects
				.get(entry.key())
				.is_some_and(|value| Arc::ptr_eq(value, entry.value()))
		});

		let min_is_minimal = match &self.min {
			None => self.heap.is_empty(),

			Some(min) => self.heap
				.iter()
				.all(|entry| !Ordered::less(entry, min)),
		};

		entries_match && min_is_minimal
	}
}

#[cfg(test)]
mod tests {
	use std::{collections::hash_map::RandomState, sync::Arc};

	use crate::cache::{
		Weighted,
		state::{CacheState, SetOutcome},
	};

	struct Score(i64);

	impl Weighted for Score {
		fn weight(&self) -> i64 {
			self.0
		}
	}

	fn state() -> CacheState<u32, Score, RandomState> {
		CacheState::with_capacity_and_hasher(3, RandomState::new())
	}

	#[test]
	fn outcomes_are_correct() {
		let mut state = state();

		assert_eq!(state.set(0, Arc::new(Score(10)), 3), SetOutcome::Inserted);
		assert_eq!(state.set(1, Arc::new(Score(20)), 3), SetOutcome::Inserted);
		assert_eq!(state.set(2, Arc::new(Score(30)), 3), SetOutcome::Inserted);
		assert_eq!(state.set(3, Arc::new(Score(5)), 3), SetOutcome::Rejected);
		assert_eq!(state.set(0, Arc::new(Score(1)), 3), SetOutcome::Updated);
		assert_eq!(state.set(4, Arc::new(Score(40)), 3), SetOutcome::Evicted);

		assert!(!state.contains(&0));
		assert_eq!(state.min().map(|min| *min.key()), Some(1));
		assert!(state.is_consistent());
	}

	#[test]
	fn state_stays_consistent() {
		let mut state = state();

		let weights = [7, 3, 9, 3, 1, 12, 8, 2, 15, 6];

		for (index, weight) in weights.iter().enumerate() {
			state.set(index as u32 % 5, Arc::new(Score(*weight)), 3);
			assert!(state.is_consistent());

			if index % 4 == 3 {
				state.remove(&(index as u32 % 5));
				assert!(state.is_consistent());
			}
		}

		state.clear(3);

		assert_eq!(state.len(), 0);
		assert!(state.min().is_none());
		assert!(state.is_consistent());
	}
}
