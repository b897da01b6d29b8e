use std::fmt::{self, Debug, Formatter};

/// Implemented by element types which carry their own ordering.
///
/// `a.less(&b)` returns `true` when `a` should sit closer to the root
/// of a [`BinaryHeap`](crate::BinaryHeap) than `b`.
pub trait Ordered {
	fn less(&self, other: &Self) -> bool;
}

/// The ordering strategy a [`BinaryHeap`](crate::BinaryHeap) is built with.
/// It is fixed when the heap is constructed.
pub trait HeapOrder<T> {
	fn less(&self, a: &T, b: &T) -> bool;
}

/// Orders elements through their own [`Ordered`] implementation.
#[derive(Default, Clone, Copy, Debug)]
pub struct Natural;

/// Orders elements through an external comparator, so element types
/// need not implement [`Ordered`] themselves.
#[derive(Clone, Copy)]
pub struct LessFn<F>(F);

impl<T> HeapOrder<T> for Natural
where
	T: Ordered,
{
	fn less(&self, a: &T, b: &T) -> bool {
		Ordered::less(a, b)
	}
}

impl<F> LessFn<F> {
	pub fn new(less: F) -> Self {
		LessFn(less)
	}
}

impl<T, F> HeapOrder<T> for LessFn<F>
where
	F: Fn(&T, &T) -> bool,
{
	fn less(&self, a: &T, b: &T) -> bool {
		(self.0)(a, b)
	}
}

impl<F> Debug for LessFn<F> {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		f.write_str("LessFn")
	}
}
