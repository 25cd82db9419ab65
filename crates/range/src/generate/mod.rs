// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use serde::{Deserialize, Serialize};
use splitpoint_type::{RangeError, RangeType, Result};
use tracing::{debug, instrument};

pub mod int64;
pub mod uuid;

/// Smallest split count that describes a range.
pub(crate) const MIN_SPLITS: usize = 2;

/// Split values in strictly ascending order, plus advisory warnings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedSplitSet {
	pub values: Vec<String>,
	pub warnings: Vec<String>,
}

impl GeneratedSplitSet {
	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}

/// Generates `num_splits` evenly spaced values between `start` and `end`.
///
/// The bounds are parsed according to `range_type`: decimal integers for
/// [`RangeType::Int64`], canonical UUID text otherwise.
#[instrument(name = "range::generate", level = "debug", skip(start, end))]
pub fn generate_range_splits(
	range_type: RangeType,
	start: &str,
	end: &str,
	num_splits: usize,
	include_boundaries: bool,
) -> Result<GeneratedSplitSet> {
	let generated = match range_type {
		RangeType::Int64 => {
			let (start, end) = int64::parse_bounds(start, end)?;
			int64::generate_int64_range_splits(start, end, num_splits, include_boundaries)?
		}
		RangeType::StringUuid | RangeType::BytesUuid => {
			uuid::generate_uuid_range_splits(start, end, num_splits, include_boundaries)?
		}
	};

	debug!(values = generated.len(), warnings = generated.warnings.len(), "generated range splits");
	Ok(generated)
}

pub(crate) fn ensure_split_count(num_splits: usize) -> Result<()> {
	if num_splits < MIN_SPLITS {
		return Err(RangeError::SplitCountTooSmall {
			requested: num_splits,
		}
		.into());
	}
	Ok(())
}

/// Offsets from the range start, ready to be mapped back into a value domain.
#[derive(Debug)]
pub(crate) struct Interpolation {
	pub offsets: Vec<u128>,
	/// Number of intervals the range width was divided into.
	pub intervals: u128,
	/// Whether `width` was an exact multiple of `intervals`.
	pub even: bool,
	/// Points dropped because they coincided with a previous point or with
	/// the excluded start. Returned values must be strictly ascending, so
	/// duplicates are never emitted.
	pub collisions: usize,
}

impl Interpolation {
	pub fn warnings(&self, num_splits: usize) -> Vec<String> {
		let mut warnings = Vec::new();
		if self.collisions > 0 {
			warnings.push(format!(
				"Range is too narrow for {} splits; {} colliding value(s) were removed",
				num_splits, self.collisions
			));
		}
		warnings
	}
}

/// Computes `floor(width * i / intervals)` for every split index.
///
/// With boundaries, `i` runs over `0..n` against `n - 1` intervals, so the
/// first offset is `0` and the last is exactly `width`. Without boundaries,
/// `i` runs over `1..=n` against `n + 1` intervals and every offset lies
/// strictly inside the range.
///
/// The product is split into `q * i + (r * i) / intervals` with
/// `width = q * intervals + r`, which is exact and cannot overflow for any
/// realistic split count.
///
/// When `width < intervals` the step is below one, so every integer the
/// range can hold is hit and the result is built directly. Work and
/// allocation are therefore bounded by the range width rather than by
/// `num_splits`.
pub(crate) fn interpolate(width: u128, num_splits: usize, include_boundaries: bool) -> Interpolation {
	let n = num_splits as u128;
	let (intervals, steps) = if include_boundaries {
		(n - 1, 0..n)
	} else {
		(n + 1, 1..n + 1)
	};

	let quotient = width / intervals;
	let remainder = width % intervals;

	let offsets: Vec<u128> = if quotient == 0 {
		if include_boundaries {
			(0..=width).collect()
		} else {
			(1..width).collect()
		}
	} else {
		// step >= 1, so consecutive offsets are distinct
		steps.map(|i| quotient * i + remainder * i / intervals).collect()
	};

	Interpolation {
		collisions: num_splits - offsets.len(),
		offsets,
		intervals,
		even: remainder == 0,
	}
}
