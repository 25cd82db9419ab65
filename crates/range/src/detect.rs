// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use splitpoint_type::{ColumnType, RangeError, RangeType, Result, is_valid_uuid};
use tracing::instrument;

/// Length substituted for `STRING(MAX)`; a canonical UUID is 36 characters.
const STRING_MAX_LENGTH: u64 = 36;
/// Length substituted for `BYTES(MAX)`; a binary UUID is 16 bytes.
const BYTES_MAX_LENGTH: u64 = 16;

/// Determines which range encoding a key column supports.
///
/// `sample`, when given, must be a canonical UUID for `STRING` and `BYTES`
/// columns. It is ignored for `INT64`.
#[instrument(name = "range::detect", level = "trace", skip(sample))]
pub fn detect_range_type(column_type: &str, sample: Option<&str>) -> Result<RangeType> {
	let range_type = match ColumnType::parse(column_type)? {
		ColumnType::Int64 => return Ok(RangeType::Int64),
		ColumnType::String(length) => {
			ensure_uuid_capacity(column_type, length.resolve(STRING_MAX_LENGTH), STRING_MAX_LENGTH - 1)?;
			RangeType::StringUuid
		}
		ColumnType::Bytes(length) => {
			ensure_uuid_capacity(column_type, length.resolve(BYTES_MAX_LENGTH), BYTES_MAX_LENGTH - 1)?;
			RangeType::BytesUuid
		}
		ColumnType::Other(_) => {
			return Err(RangeError::UnsupportedType {
				column_type: column_type.to_string(),
			}
			.into());
		}
	};

	if let Some(sample) = sample {
		if !is_valid_uuid(sample) {
			return Err(RangeError::InvalidSampleFormat {
				value: sample.to_string(),
			}
			.into());
		}
	}

	Ok(range_type)
}

fn ensure_uuid_capacity(column_type: &str, length: u64, minimum: u64) -> Result<()> {
	if length <= minimum {
		return Err(RangeError::TypeTooShort {
			column_type: column_type.to_string(),
			length,
			minimum,
		}
		.into());
	}
	Ok(())
}
