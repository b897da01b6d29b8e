use proptest::prelude::*;
use weighted_eviction_cache::{BinaryHeap, Ordered, WeightedEvictionCache, Weighted};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Priority(i32);

impl Ordered for Priority {
	fn less(&self, other: &Self) -> bool {
		self.0 < other.0
	}
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Score(i64);

impl Weighted for Score {
	fn weight(&self) -> i64 {
		self.0
	}
}

#[derive(Debug, Clone)]
enum HeapOp {
	Push(i32),
	Pop,
	Remove(usize),
}

fn heap_op() -> impl Strategy<Value = HeapOp> {
	prop_oneof![
		3 => any::<i32>().prop_map(HeapOp::Push),
		1 => Just(HeapOp::Pop),
		1 => any::<usize>().prop_map(HeapOp::Remove),
	]
}

#[derive(Debug, Clone)]
enum CacheOp {
	Set(u8, i64),
	Delete(u8),
}

fn cache_op() -> impl Strategy<Value = CacheOp> {
	prop_oneof![
		4 => (0u8..32, -50i64..50).prop_map(|(key, weight)| CacheOp::Set(key, weight)),
		1 => (0u8..32).prop_map(CacheOp::Delete),
	]
}

proptest! {
	#[test]
	fn popping_yields_sorted_values(values in prop::collection::vec(any::<i32>(), 0..200)) {
		let natural = values
			.iter()
			.map(|value| Priority(*value))
			.collect::<BinaryHeap<_>>()
			.into_sorted_vec()
			.into_iter()
			.map(|priority| priority.0)
			.collect::<Vec<_>>();

		let mut by_function = BinaryHeap::with_less(|a: &i32, b: &i32| a > b);

		for value in &values {
			by_function.push(*value);
		}

		let mut ascending = values.clone();
		ascending.sort();

		let mut descending = ascending.clone();
		descending.reverse();

		prop_assert_eq!(natural, ascending);
		prop_assert_eq!(by_function.into_sorted_vec(), descending);
	}

	#[test]
	fn heap_property_holds_after_every_operation(ops in prop::collection::vec(heap_op(), 1..200)) {
		let mut heap = BinaryHeap::<Priority>::new();
		let mut len = 0usize;

		for op in ops {
			match op {
				HeapOp::Push(value) => {
					heap.push(Priority(value));
					len += 1;
				},

				HeapOp::Pop => {
					let min = heap.iter().map(|priority| priority.0).min();

					match heap.pop() {
						Ok(popped) => {
							prop_assert_eq!(Some(popped.0), min);
							len -= 1;
						},

						Err(_) => {
							prop_assert_eq!(len, 0);
						},
					}
				},

				HeapOp::Remove(position) if len > 0 => {
					prop_assert!(heap.remove(position % len).is_ok());
					len -= 1;
				},

				HeapOp::Remove(position) => {
					prop_assert!(heap.remove(position).is_err());
				},
			}

			prop_assert_eq!(heap.len(), len);
			prop_assert!(heap.is_heap());
		}
	}

	#[test]
	fn comparator_heap_property_holds_after_every_operation(ops in prop::collection::vec(heap_op(), 1..200)) {
		// pops the largest value first
		let mut heap = BinaryHeap::with_less(|a: &i32, b: &i32| a > b);
		let mut len = 0usize;

		for op in ops {
			match op {
				HeapOp::Push(value) => {
					heap.push(value);
					len += 1;
				},

				HeapOp::Pop => {
					let max = heap.iter().max().copied();

					match heap.pop() {
						Ok(popped) => {
							prop_assert_eq!(Some(popped), max);
							len -= 1;
						},

						Err(_) => {
							prop_assert_eq!(len, 0);
						},
					}
				},

				HeapOp::Remove(position) if len > 0 => {
					prop_assert!(heap.remove(position % len).is_ok());
					len -= 1;
				},

				HeapOp::Remove(position) => {
					prop_assert!(heap.remove(position).is_err());
				},
			}

			prop_assert_eq!(heap.len(), len);
			prop_assert!(heap.is_heap());
		}
	}

	#[test]
	fn cache_admission_is_correct(
		capacity in 1usize..10,
		ops in prop::collection::vec(cache_op(), 1..150)
	) {
		let cache = WeightedEvictionCache::<u8, Score>::new(capacity).unwrap();
		let all_keys = (0u8..32).collect::<Vec<_>>();

		for op in ops {
			match op {
				CacheOp::Set(key, weight) => {
					let len = cache.len();
					let existed = cache.is_exist(&key);
					let min = cache.min();

					let accepted = cache.set(key, Score(weight));

					if existed || len < capacity {
						prop_assert!(accepted);
					} else {
						let (min_key, min_value) = min.unwrap();
						prop_assert_eq!(accepted, weight >= min_value.0);

						if accepted {
							prop_assert!(!cache.is_exist(&min_key));
						}
					}

					if accepted {
						prop_assert_eq!(cache.get(&key).map(|value| value.0), Some(weight));
					} else {
						prop_assert!(!cache.is_exist(&key));
						prop_assert_eq!(cache.len(), len);
					}
				},

				CacheOp::Delete(key) => {
					cache.delete(&key);
					prop_assert!(!cache.is_exist(&key));
				},
			}

			prop_assert!(cache.len() <= cache.cap());

			let values = cache.get_multi(&all_keys);
			prop_assert_eq!(values.len(), cache.len());

			let true_min = values.values().map(|value| value.0).min();
			prop_assert_eq!(cache.min().map(|(_, value)| value.0), true_min);
		}
	}
}
