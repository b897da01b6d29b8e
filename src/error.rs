use thiserror::Error;

#[derive(Debug, PartialEq, Error)]
pub enum CacheError {
	#[error("the cache capacity cannot be zero")]
	ZeroCapacity,

	#[error("the cache capacity must be a positive integer")]
	InvalidCapacity,

	#[error("the heap is empty")]
	EmptyHeap,

	#[error("the position is outside the heap")]
	InvalidPosition,

	#[error("the cache is empty")]
	EmptyCache,
}
