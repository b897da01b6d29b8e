mod order;

use std::slice::Iter;

use crate::error::CacheError;

pub use crate::heap::order::{Ordered, HeapOrder, Natural, LessFn};

/// An array-backed minimum-priority heap.
///
/// The root is always an element which no other element is `less` than
/// under the heap's [`HeapOrder`]. Which of several equal elements sits at
/// the root is unspecified.
#[derive(Clone, Debug)]
pub struct BinaryHeap<T, O = Natural> {
	data: Vec<T>,
	order: O,
}

impl<T> BinaryHeap<T, Natural>
where
	T: Ordered,
{
	/// Creates an empty heap ordered by the elements' [`Ordered`]
	/// implementation.
	///
	/// # Examples
	///
	/// ```
	/// use weighted_eviction_cache::{BinaryHeap, Ordered};
	///
	/// struct Score(u32);
	///
	/// impl Ordered for Score {
	/// 	fn less(&self, other: &Self) -> bool {
	/// 		self.0 < other.0
	/// 	}
	/// }
	///
	/// let mut heap = BinaryHeap::new();
	/// heap.push(Score(3));
	/// heap.push(Score(1));
	///
	/// assert_eq!(heap.top().unwrap().0, 1);
	/// ```
	#[must_use]
	pub fn new() -> Self {
		BinaryHeap::with_order(Natural)
	}

	#[must_use]
	pub fn with_capacity(capacity: usize) -> Self {
		BinaryHeap {
			data: Vec::with_capacity(capacity),
			order: Natural,
		}
	}

	/// Builds a heap in place over `data` in O(n).
	#[must_use]
	pub fn from_vec(data: Vec<T>) -> Self {
		BinaryHeap::from_vec_with_order(data, Natural)
	}
}

impl<T, F> BinaryHeap<T, LessFn<F>>
where
	F: Fn(&T, &T) -> bool,
{
	/// Creates an empty heap ordered by `less`, where `less(a, b)` returns
	/// `true` if `a` should be popped before `b`.
	///
	/// # Examples
	///
	/// ```
	/// use weighted_eviction_cache::BinaryHeap;
	///
	/// let mut heap = BinaryHeap::with_less(|a: &u32, b: &u32| a > b);
	/// heap.push(1);
	/// heap.push(7);
	///
	/// assert_eq!(heap.pop(), Ok(7));
	/// ```
	#[must_use]
	pub fn with_less(less: F) -> Self {
		BinaryHeap::with_order(LessFn::new(less))
	}

	/// Builds a heap ordered by `less` in place over `data` in O(n).
	#[must_use]
	pub fn from_vec_with_less(data: Vec<T>, less: F) -> Self {
		BinaryHeap::from_vec_with_order(data, LessFn::new(less))
	}
}

impl<T, O> BinaryHeap<T, O>
where
	O: HeapOrder<T>,
{
	#[must_use]
	pub fn with_order(order: O) -> Self {
		BinaryHeap {
			data: Vec::new(),
			order,
		}
	}

	#[must_use]
	pub fn from_vec_with_order(data: Vec<T>, order: O) -> Self {
		let mut heap = BinaryHeap {
			data,
			order,
		};

		heap.heapify();
		heap
	}

	/// Returns the number of elements in the heap.
	#[must_use]
	pub fn len(&self) -> usize {
		self.data.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn clear(&mut self) {
		self.data.clear();
	}

	/// Returns a reference to the root without removing it, or
	/// [`CacheError::EmptyHeap`] if there is nothing to return.
	pub fn top(&self) -> Result<&T, CacheError> {
		self.data.first().ok_or(CacheError::EmptyHeap)
	}

	/// Pushes `value` onto the heap in O(log n).
	pub fn push(&mut self, value: T) {
		self.data.push(value);
		self.sift_up(self.data.len() - 1);
	}

	/// Removes and returns the root in O(log n). Returns
	/// [`CacheError::EmptyHeap`] if the heap is empty.
	pub fn pop(&mut self) -> Result<T, CacheError> {
		let last = self.data
			.len()
			.checked_sub(1)
			.ok_or(CacheError::EmptyHeap)?;

		self.data.swap(0, last);

		let root = self.data
			.pop()
			.ok_or(CacheError::EmptyHeap)?;

		self.sift_down(0);

		Ok(root)
	}

	/// Removes and returns the element at `position` in O(log n). The
	/// position of an element can be found with [`BinaryHeap::position`].
	pub fn remove(&mut self, position: usize) -> Result<T, CacheError> {
		if position >= self.data.len() {
			return Err(CacheError::InvalidPosition);
		}

		let last = self.data.len() - 1;
		self.data.swap(position, last);

		let removed = self.data
			.pop()
			.ok_or(CacheError::InvalidPosition)?;

		if position < self.data.len() && !self.sift_down(position) {
			self.sift_up(position);
		}

		Ok(removed)
	}

	/// Returns the position of the first element in storage order which
	/// matches `predicate`. This is a linear scan.
	pub fn position<P>(&self, predicate: P) -> Option<usize>
	where
		P: FnMut(&T) -> bool,
	{
		self.data.iter().position(predicate)
	}

	/// Iterates over the elements in storage order, which is not sorted.
	pub fn iter(&self) -> Iter<'_, T> {
		self.data.iter()
	}

	#[must_use]
	pub fn as_slice(&self) -> &[T] {
		&self.data
	}

	/// Checks that no element is `less` than its parent.
	#[must_use]
	pub fn is_heap(&self) -> bool {
		(1..self.data.len()).all(|child| {
			let parent = (child - 1) / 2;
			!self.order.less(&self.data[child], &self.data[parent])
		})
	}

	/// Consumes the heap and returns its elements in pop order.
	#[must_use]
	pub fn into_sorted_vec(mut self) -> Vec<T> {
		let mut sorted = Vec::with_capacity(self.data.len());

		while let Ok(value) = self.pop() {
			sorted.push(value);
		}

		sorted
	}

	#[must_use]
	pub fn into_vec(self) -> Vec<T> {
		self.data
	}

	fn heapify(&mut self) {
		for position in (0..self.data.len() / 2).rev() {
			self.sift_down(position);
		}
	}

	fn sift_up(&mut self, mut child: usize) {
		while child > 0 {
			let parent = (child - 1) / 2;

			if !self.order.less(&self.data[child], &self.data[parent]) {
				break;
			}

			self.data.swap(child, parent);
			child = parent;
		}
	}

	/// Returns `true` if the element at `start` moved.
	fn sift_down(&mut self, start: usize) -> bool {
		let len = self.data.len();
		let mut parent = start;

		loop {
			let left = 2 * parent + 1;

			if left >= len {
				break;
			}

			let right = left + 1;

			let child = match right < len && self.order.less(&self.data[right], &self.data[left]) {
				true => right,
				false => left,
			};

			if !self.order.less(&self.data[child], &self.data[parent]) {
				break;
			}

			self.data.swap(parent, child);
			parent = child;
		}

		parent > start
	}
}

impl<T> Default for BinaryHeap<T, Natural>
where
	T: Ordered,
{
	fn default() -> Self {
		BinaryHeap::new()
	}
}

impl<T> From<Vec<T>> for BinaryHeap<T, Natural>
where
	T: Ordered,
{
	fn from(data: Vec<T>) -> Self {
		BinaryHeap::from_vec(data)
	}
}

impl<T> FromIterator<T> for BinaryHeap<T, Natural>
where
	T: Ordered,
{
	fn from_iter<I>(iter: I) -> Self
	where
		I: IntoIterator<Item = T>,
	{
		BinaryHeap::from_vec(iter.into_iter().collect())
	}
}
