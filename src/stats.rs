use std::sync::atomic::{Ordering, AtomicU64};

use kwik::time;

pub struct AtomicStats {
	total_hits: AtomicU64,
	total_gets: AtomicU64,
	total_sets: AtomicU64,
	total_accepted_sets: AtomicU64,
	total_rejections: AtomicU64,
	total_evictions: AtomicU64,
	total_dels: AtomicU64,

	start_time: AtomicU64,
}

#[derive(Debug, Clone, Copy)]
pub struct Stats {
	capacity: usize,
	len: usize,

	total_hits: u64,
	total_gets: u64,
	total_sets: u64,
	total_accepted_sets: u64,
	total_rejections: u64,
	total_evictions: u64,
	total_dels: u64,

	start_time: u64,
}

/// This struct holds the basic statistical information about a
/// [`WeightedEvictionCache`](crate::WeightedEvictionCache).
impl Stats {
	/// Returns the cache's capacity.
	#[must_use]
	pub fn get_capacity(&self) -> usize {
		self.capacity
	}

	/// Returns the number of entries at the time of the snapshot.
	#[must_use]
	pub fn get_len(&self) -> usize {
		self.len
	}

	#[must_use]
	pub fn get_total_gets(&self) -> u64 {
		self.total_gets
	}

	#[must_use]
	pub fn get_total_hits(&self) -> u64 {
		self.total_hits
	}

	/// Returns the total number of sets, accepted or not.
	#[must_use]
	pub fn get_total_sets(&self) -> u64 {
		self.total_sets
	}

	/// Returns the number of sets which stored their value.
	#[must_use]
	pub fn get_total_accepted_sets(&self) -> u64 {
		self.total_accepted_sets
	}

	/// Returns the number of sets turned away by admission control.
	#[must_use]
	pub fn get_total_rejections(&self) -> u64 {
		self.total_rejections
	}

	#[must_use]
	pub fn get_total_evictions(&self) -> u64 {
		self.total_evictions
	}

	#[must_use]
	pub fn get_total_dels(&self) -> u64 {
		self.total_dels
	}

	/// Returns the cache's current miss ratio.
	#[must_use]
	pub fn get_miss_ratio(&self) -> f64 {
		if self.total_gets == 0 {
			return 1.0;
		}

		1.0 - self.total_hits as f64 / self.total_gets as f64
	}

	/// Returns the cache's current uptime in milliseconds.
	#[must_use]
	pub fn get_uptime(&self) -> u64 {
		time::timestamp().saturating_sub(self.start_time)
	}
}

/// Counters are updated without holding the cache lock, so reads and
/// writes never contend on accounting.
impl AtomicStats {
	#[must_use]
	pub fn new() -> Self {
		AtomicStats {
			total_hits: AtomicU64::default(),
			total_gets: AtomicU64::default(),
			total_sets: AtomicU64::default(),
			total_accepted_sets: AtomicU64::default(),
			total_rejections: AtomicU64::default(),
			total_evictions: AtomicU64::default(),
			total_dels: AtomicU64::default(),

			start_time: AtomicU64::new(time::timestamp()),
		}
	}

	pub fn hit(&self) {
		self.total_gets.fetch_add(1, Ordering::Relaxed);
		self.total_hits.fetch_add(1, Ordering::Relaxed);
	}

	pub fn miss(&self) {
		self.total_gets.fetch_add(1, Ordering::Relaxed);
	}

	pub fn add_hits(&self, count: u64) {
		self.total_gets.fetch_add(count, Ordering::Relaxed);
		self.total_hits.fetch_add(count, Ordering::Relaxed);
	}

	pub fn add_misses(&self, count: u64) {
		self.total_gets.fetch_add(count, Ordering::Relaxed);
	}

	pub fn set(&self) {
		self.total_sets.fetch_add(1, Ordering::Relaxed);
	}

	pub fn accept(&self) {
		self.total_accepted_sets.fetch_add(1, Ordering::Relaxed);
	}

	pub fn reject(&self) {
		self.total_rejections.fetch_add(1, Ordering::Relaxed);
	}

	pub fn evict(&self) {
		self.total_evictions.fetch_add(1, Ordering::Relaxed);
	}

	pub fn del(&self) {
		self.total_dels.fetch_add(1, Ordering::Relaxed);
	}

	#[must_use]
	pub fn to_stats(&self, capacity: usize, len: usize) -> Stats {
		Stats {
			capacity,
			len,

			total_hits: self.total_hits.load(Ordering::Relaxed),
			total_gets: self.total_gets.load(Ordering::Relaxed),
			total_sets: self.total_sets.load(Ordering::Relaxed),
			total_accepted_sets: self.total_accepted_sets.load(Ordering::Relaxed),
			total_rejections: self.total_rejections.load(Ordering::Relaxed),
			total_evictions: self.total_evictions.load(Ordering::Relaxed),
			total_dels: self.total_dels.load(Ordering::Relaxed),

			start_time: self.start_time.load(Ordering::Relaxed),
		}
	}
}

impl Default for AtomicStats {
	fn default() -> Self {
		AtomicStats::new()
	}
}
