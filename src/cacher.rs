use std::{
	collections::HashMap,
	sync::Arc,
};

use crate::error::CacheError;

/// The contract consumers program against, so a cache instance can be
/// constructed once and handed to its users as `&dyn Cacher<K, V>` or
/// `Arc<dyn Cacher<K, V>>`.
pub trait Cacher<K, V>: Send + Sync {
	fn get(&self, key: &K) -> Option<Arc<V>>;

	/// Returns `true` if the value was stored.
	fn set(&self, key: K, value: V) -> bool;

	fn delete(&self, key: &K);
	fn is_exist(&self, key: &K) -> bool;
	fn clear_all(&self);

	/// Returns only the keys which are present.
	fn get_multi(&self, keys: &[K]) -> HashMap<K, Arc<V>>;

	/// Returns one acceptance flag per pair, in input order.
	fn set_multi(&self, pairs: Vec<(K, V)>) -> Vec<bool>;

	fn delete_multi(&self, keys: &[K]);

	fn peek_random(&self) -> Result<Arc<V>, CacheError>;
	fn peek_random_multi(&self, count: usize) -> Result<Vec<Arc<V>>, CacheError>;

	fn len(&self) -> usize;
	fn cap(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}
}
