// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use splitpoint_type::{RangeError, Result};

use super::{GeneratedSplitSet, ensure_split_count, interpolate};

/// Parses both bounds as decimal `i64`, reporting both raw values on failure.
pub(crate) fn parse_bounds(start: &str, end: &str) -> Result<(i64, i64)> {
	match (start.trim().parse::<i64>(), end.trim().parse::<i64>()) {
		(Ok(start), Ok(end)) => Ok((start, end)),
		_ => Err(RangeError::InvalidNumericValue {
			start: start.to_string(),
			end: end.to_string(),
		}
		.into()),
	}
}

pub fn generate_int64_range_splits(
	start: i64,
	end: i64,
	num_splits: usize,
	include_boundaries: bool,
) -> Result<GeneratedSplitSet> {
	if start >= end {
		return Err(RangeError::RangeOrderViolation {
			start: start.to_string(),
			end: end.to_string(),
		}
		.into());
	}
	ensure_split_count(num_splits)?;

	let width = (end as i128 - start as i128) as u128;
	let interpolation = interpolate(width, num_splits, include_boundaries);

	if interpolation.offsets.is_empty() {
		return Err(RangeError::RangeTooNarrow {
			start: start.to_string(),
			end: end.to_string(),
		}
		.into());
	}

	let values = interpolation
		.offsets
		.iter()
		// offset <= width, so the sum always lands inside [start, end]
		.map(|&offset| ((start as i128 + offset as i128) as i64).to_string())
		.collect();

	let mut warnings = interpolation.warnings(num_splits);
	if !interpolation.even {
		warnings.push(format!(
			"Split spacing is uneven: range width {} is not divisible by {} intervals; values were rounded down",
			width, interpolation.intervals
		));
	}

	Ok(GeneratedSplitSet {
		values,
		warnings,
	})
}
