use std::{
	fmt::{self, Display},
	num::NonZeroUsize,
	str::FromStr,
};

use serde::{
	Deserialize,
	de::{self, Deserializer, Visitor},
};

use crate::error::CacheError;

/// The maximum number of entries a cache may hold. Always positive.
#[derive(PartialEq, Eq, Clone, Copy, Debug)]
pub struct Capacity(NonZeroUsize);

/// Construction-time settings for a
/// [`WeightedEvictionCache`](crate::WeightedEvictionCache).
///
/// # Examples
///
/// ```
/// use weighted_eviction_cache::{CacheConfig, Capacity};
///
/// let config = CacheConfig::new(Capacity::new(128).unwrap());
/// assert_eq!(config.capacity.get(), 128);
/// ```
#[derive(PartialEq, Eq, Clone, Copy, Debug, Deserialize)]
pub struct CacheConfig {
	pub capacity: Capacity,
}

impl Capacity {
	/// Returns [`CacheError::ZeroCapacity`] if `capacity` is zero.
	pub fn new(capacity: usize) -> Result<Self, CacheError> {
		NonZeroUsize::new(capacity)
			.map(Capacity)
			.ok_or(CacheError::ZeroCapacity)
	}

	#[must_use]
	pub fn get(&self) -> usize {
		self.0.get()
	}
}

impl CacheConfig {
	#[must_use]
	pub fn new(capacity: Capacity) -> Self {
		CacheConfig {
			capacity,
		}
	}
}

impl Display for Capacity {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl FromStr for Capacity {
	type Err = CacheError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let capacity = s
			.trim()
			.parse::<usize>()
			.map_err(|_| CacheError::InvalidCapacity)?;

		Capacity::new(capacity)
	}
}

impl<'a> Deserialize<'a> for Capacity {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'a>,
	{
		deserializer.deserialize_any(CapacityVisitor)
	}
}

struct CapacityVisitor;

impl Visitor<'_> for CapacityVisitor {
	type Value = Capacity;

	fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
		formatter.write_str("a positive cache capacity")
	}

	fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E>
	where
		E: de::Error,
	{
		let capacity = usize::try_from(value)
			.map_err(|_| E::custom(CacheError::InvalidCapacity.to_string()))?;

		Capacity::new(capacity)
			.map_err(|err| E::custom(err.to_string()))
	}

	fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E>
	where
		E: de::Error,
	{
		let value = u64::try_from(value)
			.map_err(|_| E::custom(CacheError::InvalidCapacity.to_string()))?;

		self.visit_u64(value)
	}

	fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
	where
		E: de::Error,
	{
		Capacity::from_str(value)
			.map_err(|err| E::custom(err.to_string()))
	}
}
