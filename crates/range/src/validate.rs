// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use serde::{Deserialize, Serialize};
use splitpoint_type::{Error, KeySchema, RangeError, RangeType, Result, uuid_to_int};
use tracing::{debug, instrument};

use crate::{detect::detect_range_type, generate::int64};

/// Outcome of checking a range request against a key schema.
///
/// `range_type` is populated once the key column was classified, even if the
/// bounds themselves were then rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeValidationResult {
	pub is_valid: bool,
	pub range_type: Option<RangeType>,
	pub error_message: Option<String>,
}

impl RangeValidationResult {
	pub fn valid(range_type: RangeType) -> Self {
		Self {
			is_valid: true,
			range_type: Some(range_type),
			error_message: None,
		}
	}

	pub fn invalid(range_type: Option<RangeType>, error: Error) -> Self {
		Self {
			is_valid: false,
			range_type,
			error_message: Some(error.diagnostic().message),
		}
	}
}

/// Checks that a range can be split for the given key schema.
///
/// Never fails; rejections are reported through the returned result.
#[instrument(name = "range::validate", level = "debug", skip_all, fields(entity = %schema.entity_name))]
pub fn validate_range_request(schema: &KeySchema, start: &str, end: &str) -> RangeValidationResult {
	let column = match schema.key_columns.as_slice() {
		[column] => column,
		[] => {
			return RangeValidationResult::invalid(
				None,
				RangeError::NoKeyColumns {
					entity_name: schema.entity_name.clone(),
				}
				.into(),
			);
		}
		columns => {
			return RangeValidationResult::invalid(
				None,
				RangeError::CompositeKeyUnsupported {
					entity_name: schema.entity_name.clone(),
					columns: columns.len(),
				}
				.into(),
			);
		}
	};

	let range_type = match detect_range_type(&column.column_type, Some(start)) {
		Ok(range_type) => range_type,
		Err(err) => {
			debug!(column = %column.name, code = %err.code, "key column rejected");
			return RangeValidationResult::invalid(None, err);
		}
	};

	match check_bounds(range_type, start, end) {
		Ok(()) => RangeValidationResult::valid(range_type),
		Err(err) => {
			debug!(%range_type, code = %err.code, "range bounds rejected");
			RangeValidationResult::invalid(Some(range_type), err)
		}
	}
}

fn check_bounds(range_type: RangeType, start: &str, end: &str) -> Result<()> {
	let ordered = match range_type {
		RangeType::Int64 => {
			let (start, end) = int64::parse_bounds(start, end)?;
			start < end
		}
		RangeType::StringUuid | RangeType::BytesUuid => uuid_to_int(start)? < uuid_to_int(end)?,
	};

	if !ordered {
		return Err(RangeError::RangeOrderViolation {
			start: start.to_string(),
			end: end.to_string(),
		}
		.into());
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use splitpoint_testing::schema::{composite_table, int64_table, keyless_table, uuid_bytes_table, uuid_index, uuid_table};

	use super::*;

	const LOW: &str = "00000000-0000-0000-0000-000000000000";
	const HIGH: &str = "ffffffff-ffff-ffff-ffff-ffffffffffff";

	#[test]
	fn test_int64_valid() {
		let result = validate_range_request(&int64_table("Users"), "0", "1000");
		assert_eq!(result, RangeValidationResult::valid(RangeType::Int64));
	}

	#[test]
	fn test_int64_not_numeric() {
		let result = validate_range_request(&int64_table("Users"), "abc", "1000");
		assert!(!result.is_valid);
		assert_eq!(result.range_type, Some(RangeType::Int64));
		assert_eq!(result.error_message.as_deref(), Some("Invalid integer value(s): start='abc', end='1000'"));
	}

	#[test]
	fn test_int64_order() {
		for (start, end) in [("1000", "0"), ("5", "5")] {
			let result = validate_range_request(&int64_table("Users"), start, end);
			assert!(!result.is_valid);
			assert_eq!(result.range_type, Some(RangeType::Int64));
			assert_eq!(result.error_message.as_deref(), Some("Start value must be less than end value"));
		}
	}

	#[test]
	fn test_uuid_valid() {
		let result = validate_range_request(&uuid_table("Accounts"), LOW, HIGH);
		assert_eq!(result, RangeValidationResult::valid(RangeType::StringUuid));

		let result = validate_range_request(&uuid_bytes_table("Blobs"), LOW, HIGH);
		assert_eq!(result, RangeValidationResult::valid(RangeType::BytesUuid));
	}

	#[test]
	fn test_uuid_invalid_start_fails_detection() {
		let result = validate_range_request(&uuid_table("Accounts"), "nope", HIGH);
		assert!(!result.is_valid);
		assert_eq!(result.range_type, None);
		assert!(result.error_message.unwrap().contains("'nope'"));
	}

	#[test]
	fn test_uuid_invalid_end() {
		let result = validate_range_request(&uuid_table("Accounts"), LOW, "nope");
		assert!(!result.is_valid);
		assert_eq!(result.range_type, Some(RangeType::StringUuid));
		assert_eq!(
			result.error_message.as_deref(),
			Some("Value 'nope' is not a valid UUID format (expected: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)")
		);
	}

	#[test]
	fn test_uuid_order_compares_numerically() {
		let result = validate_range_request(&uuid_table("Accounts"), "BBBBBBBB-0000-0000-0000-000000000000", "aaaaaaaa-0000-0000-0000-000000000000");
		assert!(!result.is_valid);
		assert_eq!(result.error_message.as_deref(), Some("Start value must be less than end value"));
	}

	#[test]
	fn test_index_uses_its_own_key() {
		let result = validate_range_request(&uuid_index("AccountsByOwner", "Accounts"), LOW, HIGH);
		assert!(result.is_valid);
		assert_eq!(result.range_type, Some(RangeType::StringUuid));
	}

	#[test]
	fn test_composite_always_invalid() {
		for (start, end) in [("0", "100"), (LOW, HIGH), ("x", "y")] {
			let result = validate_range_request(&composite_table("Orders"), start, end);
			assert!(!result.is_valid);
			assert_eq!(result.range_type, None);
			assert_eq!(
				result.error_message.as_deref(),
				Some("Range splits are not supported for composite keys. Please add splits individually.")
			);
		}
	}

	#[test]
	fn test_no_key_columns() {
		let result = validate_range_request(&keyless_table("Heap"), "0", "100");
		assert!(!result.is_valid);
		assert_eq!(result.error_message.as_deref(), Some("No key columns found in schema"));
	}

	#[test]
	fn test_unsupported_column() {
		let schema = KeySchema::table("Events", vec![splitpoint_type::KeyColumn::new("at", "TIMESTAMP", 1)]);
		let result = validate_range_request(&schema, "0", "100");
		assert!(!result.is_valid);
		assert_eq!(result.range_type, None);
		assert!(result.error_message.unwrap().contains("'TIMESTAMP' not supported"));
	}

	#[test]
	fn test_serializes() {
		let json = serde_json::to_value(RangeValidationResult::valid(RangeType::BytesUuid)).unwrap();
		assert_eq!(json["is_valid"], true);
		assert_eq!(json["range_type"], "BYTES_UUID");
		assert!(json["error_message"].is_null());
	}
}
