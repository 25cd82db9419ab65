// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

//! Canonical UUID text and its 128-bit integer form.
//!
//! Only the hyphenated `8-4-4-4-12` form is accepted. Braced, URN and
//! dashless spellings are rejected rather than normalised, because split
//! values are compared as text downstream.

use uuid::Uuid;

use crate::{Result, error::RangeError};

const CANONICAL_LEN: usize = 36;
const DASH_POSITIONS: [usize; 4] = [8, 13, 18, 23];

/// Returns true if `value` is a canonical UUID, hex digits in any case.
pub fn is_valid_uuid(value: &str) -> bool {
	let bytes = value.as_bytes();
	if bytes.len() != CANONICAL_LEN {
		return false;
	}

	bytes.iter().enumerate().all(|(pos, &b)| {
		if DASH_POSITIONS.contains(&pos) {
			b == b'-'
		} else {
			b.is_ascii_hexdigit()
		}
	})
}

/// Interprets the 32 hex digits of a canonical UUID as a big-endian u128.
pub fn uuid_to_int(value: &str) -> Result<u128> {
	if !is_valid_uuid(value) {
		return Err(RangeError::InvalidUuidFormat {
			value: value.to_string(),
		}
		.into());
	}

	Uuid::parse_str(value).map(|uuid| uuid.as_u128()).map_err(|_| {
		RangeError::InvalidUuidFormat {
			value: value.to_string(),
		}
		.into()
	})
}

/// Renders a u128 as a lowercase, zero padded canonical UUID.
pub fn int_to_uuid(value: u128) -> String {
	Uuid::from_u128(value).hyphenated().to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	mod is_valid {
		use super::*;

		#[test]
		fn test_lowercase() {
			assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
		}

		#[test]
		fn test_uppercase() {
			assert!(is_valid_uuid("550E8400-E29B-41D4-A716-446655440000"));
		}

		#[test]
		fn test_mixed_case() {
			assert!(is_valid_uuid("550e8400-E29B-41d4-A716-446655440000"));
		}

		#[test]
		fn test_nil_and_max() {
			assert!(is_valid_uuid("00000000-0000-0000-0000-000000000000"));
			assert!(is_valid_uuid("ffffffff-ffff-ffff-ffff-ffffffffffff"));
		}

		#[test]
		fn test_generated() {
			assert!(is_valid_uuid(&Uuid::new_v4().to_string()));
		}

		#[test]
		fn test_wrong_length() {
			assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000"));
			assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-4466554400000"));
			assert!(!is_valid_uuid(""));
		}

		#[test]
		fn test_no_dashes() {
			assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
		}

		#[test]
		fn test_braces_and_urn() {
			assert!(!is_valid_uuid("{550e8400-e29b-41d4-a716-446655440000}"));
			assert!(!is_valid_uuid("urn:uuid:550e8400-e29b-41d4-a716-446655440000"));
		}

		#[test]
		fn test_non_hex() {
			assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000g"));
			assert!(!is_valid_uuid("zzzzzzzz-zzzz-zzzz-zzzz-zzzzzzzzzzzz"));
		}

		#[test]
		fn test_misplaced_dashes() {
			assert!(!is_valid_uuid("550e840-0e29b-41d4-a716-446655440000"));
			assert!(!is_valid_uuid("550e8400-e29b-41d4-a716_446655440000"));
		}

		#[test]
		fn test_whitespace() {
			assert!(!is_valid_uuid(" 550e8400-e29b-41d4-a716-44665544000"));
			assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000 "));
			assert!(!is_valid_uuid("550e8400-e29b-41d4 a716-446655440000"));
		}

		#[test]
		fn test_multibyte_same_length() {
			// 36 bytes, but not ASCII
			assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-4466554400é"));
		}
	}

	mod conversion {
		use super::*;

		#[test]
		fn test_nil_is_zero() {
			assert_eq!(uuid_to_int("00000000-0000-0000-0000-000000000000").unwrap(), 0);
		}

		#[test]
		fn test_max_is_u128_max() {
			assert_eq!(uuid_to_int("ffffffff-ffff-ffff-ffff-ffffffffffff").unwrap(), u128::MAX);
		}

		#[test]
		fn test_big_endian() {
			assert_eq!(uuid_to_int("00000000-0000-0000-0000-000000000001").unwrap(), 1);
			assert_eq!(uuid_to_int("10000000-0000-0000-0000-000000000000").unwrap(), 1u128 << 124);
		}

		#[test]
		fn test_case_insensitive() {
			assert_eq!(
				uuid_to_int("ABCDEF00-0000-0000-0000-000000000000").unwrap(),
				uuid_to_int("abcdef00-0000-0000-0000-000000000000").unwrap()
			);
		}

		#[test]
		fn test_invalid_fails() {
			let err = uuid_to_int("not-a-uuid").unwrap_err();
			assert_eq!(err.code, "RANGE_008");
			assert!(err.message.contains("'not-a-uuid'"));
		}

		#[test]
		fn test_simple_form_rejected() {
			assert!(uuid_to_int("550e8400e29b41d4a716446655440000").is_err());
		}

		#[test]
		fn test_int_to_uuid_zero_padded() {
			assert_eq!(int_to_uuid(0), "00000000-0000-0000-0000-000000000000");
			assert_eq!(int_to_uuid(255), "00000000-0000-0000-0000-0000000000ff");
			assert_eq!(int_to_uuid(u128::MAX), "ffffffff-ffff-ffff-ffff-ffffffffffff");
		}

		#[test]
		fn test_roundtrip_lowercases() {
			for original in [
				"00000000-0000-0000-0000-000000000000",
				"00000000-0000-0000-0000-000000000001",
				"12345678-1234-1234-1234-123456789ABC",
				"550E8400-e29b-41D4-a716-446655440000",
				"ffffffff-ffff-ffff-ffff-ffffffffffff",
			] {
				let value = uuid_to_int(original).unwrap();
				assert_eq!(int_to_uuid(value), original.to_lowercase());
			}
		}

		#[test]
		fn test_ordering_matches_text() {
			let a = "0fffffff-ffff-ffff-ffff-ffffffffffff";
			let b = "10000000-0000-0000-0000-000000000000";
			assert!(a < b);
			assert!(uuid_to_int(a).unwrap() < uuid_to_int(b).unwrap());
		}
	}
}
