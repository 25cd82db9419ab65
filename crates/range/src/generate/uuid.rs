// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use splitpoint_type::{RangeError, Result, int_to_uuid, uuid_to_int};

use super::{GeneratedSplitSet, ensure_split_count, interpolate};

/// Interpolates UUIDs by treating them as unsigned 128-bit integers.
///
/// Both bounds must be canonical UUIDs. Output is lowercase canonical.
pub fn generate_uuid_range_splits(
	start: &str,
	end: &str,
	num_splits: usize,
	include_boundaries: bool,
) -> Result<GeneratedSplitSet> {
	let lower = uuid_to_int(start)?;
	let upper = uuid_to_int(end)?;

	if lower >= upper {
		return Err(RangeError::RangeOrderViolation {
			start: start.to_string(),
			end: end.to_string(),
		}
		.into());
	}
	ensure_split_count(num_splits)?;

	let interpolation = interpolate(upper - lower, num_splits, include_boundaries);
	if interpolation.offsets.is_empty() {
		return Err(RangeError::RangeTooNarrow {
			start: start.to_string(),
			end: end.to_string(),
		}
		.into());
	}

	Ok(GeneratedSplitSet {
		values: interpolation.offsets.iter().map(|&offset| int_to_uuid(lower + offset)).collect(),
		warnings: interpolation.warnings(num_splits),
	})
}
