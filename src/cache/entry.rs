use std::sync::Arc;

use crate::{
	cache::Weighted,
	heap::Ordered,
};

/// A key paired with the snapshot stored under it. The same snapshot is
/// shared by the object map and the eviction heap.
pub struct Entry<K, V> {
	key: K,
	value: Arc<V>,
}

impl<K, V> Entry<K, V> {
	pub fn new(key: K, value: Arc<V>) -> Self {
		Entry {
			key,
			value,
		}
	}

	pub fn key(&self) -> &K {
		&self.key
	}

	pub fn value(&self) -> &Arc<V> {
		&self.value
	}
}

impl<K, V> Ordered for Entry<K, V>
where
	V: Weighted,
{
	fn less(&self, other: &Self) -> bool {
		Weighted::less(&*self.value, &*other.value)
	}
}

impl<K, V> Clone for Entry<K, V>
where
	K: Clone,
{
	fn clone(&self) -> Self {
		Entry {
			key: self.key.clone(),
			value: Arc::clone(&self.value),
		}
	}
}
