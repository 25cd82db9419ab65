// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use splitpoint_type::{KeySchema, RangeError, RangeType, Result};

use crate::{GeneratedSplitSet, RangeConfig, RangeValidationResult, detect_range_type, generate_range_splits, validate_range_request};

/// Entry point that applies a [`RangeConfig`] to every request.
#[derive(Debug, Clone, Default)]
pub struct RangeSplitGenerator {
	config: RangeConfig,
}

impl RangeSplitGenerator {
	pub fn new(config: RangeConfig) -> Self {
		Self {
			config,
		}
	}

	pub fn config(&self) -> &RangeConfig {
		&self.config
	}

	pub fn detect(&self, column_type: &str, sample: Option<&str>) -> Result<RangeType> {
		detect_range_type(column_type, sample)
	}

	pub fn validate(&self, schema: &KeySchema, start: &str, end: &str) -> RangeValidationResult {
		validate_range_request(schema, start, end)
	}

	/// Generates splits using the configured boundary policy.
	pub fn generate(&self, range_type: RangeType, start: &str, end: &str, num_splits: usize) -> Result<GeneratedSplitSet> {
		self.generate_with(range_type, start, end, num_splits, self.config.get_include_boundaries())
	}

	pub fn generate_with(
		&self,
		range_type: RangeType,
		start: &str,
		end: &str,
		num_splits: usize,
		include_boundaries: bool,
	) -> Result<GeneratedSplitSet> {
		let maximum = self.config.get_max_splits();
		if num_splits > maximum {
			return Err(RangeError::SplitCountTooLarge {
				requested: num_splits,
				maximum,
			}
			.into());
		}

		generate_range_splits(range_type, start, end, num_splits, include_boundaries)
	}
}
