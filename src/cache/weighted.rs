/// Implemented by values stored in a
/// [`WeightedEvictionCache`](crate::WeightedEvictionCache).
///
/// The cache only ever calls [`Weighted::less`] to decide admission and
/// eviction. By default `less` compares [`Weighted::weight`], but a value
/// type is free to order itself some other way.
///
/// # Examples
///
/// ```
/// use weighted_eviction_cache::Weighted;
///
/// struct Video {
/// 	views: i64,
/// 	likes: i64,
/// }
///
/// impl Weighted for Video {
/// 	fn weight(&self) -> i64 {
/// 		self.views + self.likes * 10
/// 	}
/// }
///
/// let popular = Video { views: 100, likes: 20 };
/// let obscure = Video { views: 90, likes: 0 };
///
/// assert!(obscure.less(&popular));
/// ```
pub trait Weighted {
	fn weight(&self) -> i64;

	/// Returns `true` if `self` has a lower priority than `other` and
	/// should be evicted first.
	fn less(&self, other: &Self) -> bool {
		self.weight() < other.weight()
	}
}
