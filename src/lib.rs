mod error;
mod heap;
mod cache;
mod cacher;
mod config;
mod stats;

pub use crate::error::CacheError;
pub use crate::heap::{BinaryHeap, Ordered, HeapOrder, Natural, LessFn};
pub use crate::cache::{WeightedEvictionCache, Weighted};
pub use crate::cacher::Cacher;
pub use crate::config::{CacheConfig, Capacity};
pub use crate::stats::Stats;
