//! Sort direction for column sorting

use std::cmp::Ordering;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
	/// Ascending order
	#[default]
	Ascending,
	/// Descending order
	Descending,
}

impl SortDirection {
	/// Returns the opposite direction
	pub fn toggle(&self) -> Self {
		match self {
			Self::Ascending => Self::Descending,
			Self::Descending => Self::Ascending,
		}
	}

	/// Orients an ascending comparison result to this direction
	pub fn apply(&self, ordering: Ordering) -> Ordering {
		match self {
			Self::Ascending => ordering,
			Self::Descending => ordering.reverse(),
		}
	}
}
