// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

/// Largest split count accepted per request, matching the administration
/// API's batch limit.
pub const DEFAULT_MAX_SPLITS: usize = 100;

/// Configuration for [`RangeSplitGenerator`](crate::RangeSplitGenerator).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeConfig {
	max_splits: usize,
	include_boundaries: bool,
}

impl RangeConfig {
	/// Create a config with default settings
	pub fn new() -> Self {
		Self {
			max_splits: DEFAULT_MAX_SPLITS,
			include_boundaries: true,
		}
	}

	/// Upper bound on `num_splits` per request
	pub fn max_splits(mut self, max_splits: usize) -> Self {
		self.max_splits = max_splits;
		self
	}

	/// Whether generated sets contain the start and end values by default
	pub fn include_boundaries(mut self, include: bool) -> Self {
		self.include_boundaries = include;
		self
	}

	pub fn get_max_splits(&self) -> usize {
		self.max_splits
	}

	pub fn get_include_boundaries(&self) -> bool {
		self.include_boundaries
	}
}

impl Default for RangeConfig {
	fn default() -> Self {
		Self::new()
	}
}
