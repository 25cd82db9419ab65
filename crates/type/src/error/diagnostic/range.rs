// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use super::{
	Diagnostic, IntoDiagnostic,
	uuid::{canonical_uuid_help, canonical_uuid_notes},
};
use crate::error::RangeError;

impl IntoDiagnostic for RangeError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			RangeError::UnsupportedType {
				column_type,
			} => Diagnostic {
				code: "RANGE_001".to_string(),
				message,
				label: Some(format!("'{}' cannot be split by range", column_type)),
				help: Some("add split points individually for this column".to_string()),
				notes: vec![
					"supported: INT64".to_string(),
					"supported: STRING(n) with n greater than 35, or STRING(MAX), holding UUIDs".to_string(),
					"supported: BYTES(n) with n greater than 15, or BYTES(MAX), holding UUIDs".to_string(),
				],
				cause: None,
			},

			RangeError::TypeTooShort {
				column_type,
				length,
				minimum,
			} => Diagnostic {
				code: "RANGE_002".to_string(),
				message,
				label: Some(format!("'{}' holds at most {} characters or bytes", column_type, length)),
				help: Some(format!("declare the column with a length of at least {}", minimum + 1)),
				notes: vec![
					"canonical UUID text is 36 characters long".to_string(),
					"a binary UUID is 16 bytes long".to_string(),
				],
				cause: None,
			},

			RangeError::MalformedTypeSyntax {
				keyword,
				column_type,
			} => Diagnostic {
				code: "RANGE_003".to_string(),
				message,
				label: Some(format!("'{}' has no length suffix", column_type)),
				help: Some(format!("expected {}(<length>) or {}(MAX)", keyword, keyword)),
				notes: vec![],
				cause: None,
			},

			RangeError::InvalidSampleFormat {
				value,
			} => Diagnostic {
				code: "RANGE_004".to_string(),
				message,
				label: Some(format!("sample value '{}' is not a UUID", value)),
				help: Some(canonical_uuid_help()),
				notes: canonical_uuid_notes(),
				cause: None,
			},

			RangeError::CompositeKeyUnsupported {
				entity_name,
				columns,
			} => Diagnostic {
				code: "RANGE_005".to_string(),
				message,
				label: Some(format!("'{}' has a composite key of {} columns", entity_name, columns)),
				help: Some("add split points for composite keys one at a time".to_string()),
				notes: vec!["range generation is only defined for single column keys".to_string()],
				cause: None,
			},

			RangeError::NoKeyColumns {
				entity_name,
			} => Diagnostic {
				code: "RANGE_006".to_string(),
				message,
				label: Some(format!("'{}' has no key columns", entity_name)),
				help: None,
				notes: vec![],
				cause: None,
			},

			RangeError::InvalidNumericValue {
				..
			} => Diagnostic {
				code: "RANGE_007".to_string(),
				message,
				label: Some("INT64 bounds must be whole numbers".to_string()),
				help: Some(format!("use integers between {} and {}", i64::MIN, i64::MAX)),
				notes: vec!["valid: 0, -42, 9223372036854775807".to_string()],
				cause: None,
			},

			RangeError::InvalidUuidFormat {
				value,
			} => Diagnostic {
				code: "RANGE_008".to_string(),
				message,
				label: Some(format!("'{}' is not a canonical UUID", value)),
				help: Some(canonical_uuid_help()),
				notes: canonical_uuid_notes(),
				cause: None,
			},

			RangeError::RangeOrderViolation {
				start,
				end,
			} => Diagnostic {
				code: "RANGE_009".to_string(),
				message,
				label: Some(format!("start '{}' is not less than end '{}'", start, end)),
				help: Some("swap the bounds or widen the range".to_string()),
				notes: vec![],
				cause: None,
			},

			RangeError::SplitCountTooSmall {
				requested,
			} => Diagnostic {
				code: "RANGE_010".to_string(),
				message,
				label: Some(format!("requested {} split(s)", requested)),
				help: Some("request two or more splits, or add a single split point directly".to_string()),
				notes: vec![],
				cause: None,
			},

			RangeError::SplitCountTooLarge {
				requested,
				maximum,
			} => Diagnostic {
				code: "RANGE_011".to_string(),
				message,
				label: Some(format!("requested {} splits", requested)),
				help: Some(format!("split the range into several requests of at most {} splits", maximum)),
				notes: vec![],
				cause: None,
			},

			RangeError::RangeTooNarrow {
				..
			} => Diagnostic {
				code: "RANGE_012".to_string(),
				message,
				label: Some("no value lies strictly between the bounds".to_string()),
				help: Some("include the boundaries or widen the range".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_codes_are_distinct() {
		let errors = vec![
			RangeError::UnsupportedType {
				column_type: "FLOAT64".to_string(),
			},
			RangeError::TypeTooShort {
				column_type: "STRING(10)".to_string(),
				length: 10,
				minimum: 35,
			},
			RangeError::MalformedTypeSyntax {
				keyword: "STRING",
				column_type: "STRING".to_string(),
			},
			RangeError::InvalidSampleFormat {
				value: "x".to_string(),
			},
			RangeError::CompositeKeyUnsupported {
				entity_name: "t".to_string(),
				columns: 2,
			},
			RangeError::NoKeyColumns {
				entity_name: "t".to_string(),
			},
			RangeError::InvalidNumericValue {
				start: "a".to_string(),
				end: "b".to_string(),
			},
			RangeError::InvalidUuidFormat {
				value: "x".to_string(),
			},
			RangeError::RangeOrderViolation {
				start: "2".to_string(),
				end: "1".to_string(),
			},
			RangeError::SplitCountTooSmall {
				requested: 1,
			},
			RangeError::SplitCountTooLarge {
				requested: 101,
				maximum: 100,
			},
			RangeError::RangeTooNarrow {
				start: "0".to_string(),
				end: "1".to_string(),
			},
		];

		let mut codes: Vec<String> = errors.into_iter().map(|e| e.into_diagnostic().code).collect();
		let total = codes.len();
		codes.sort();
		codes.dedup();
		assert_eq!(codes.len(), total);
	}

	#[test]
	fn test_message_matches_display() {
		let err = RangeError::InvalidNumericValue {
			start: "abc".to_string(),
			end: "100".to_string(),
		};
		let text = err.to_string();
		let diagnostic = err.into_diagnostic();
		assert_eq!(diagnostic.message, text);
		assert_eq!(diagnostic.message, "Invalid integer value(s): start='abc', end='100'");
	}

	#[test]
	fn test_too_short_help() {
		let diagnostic = RangeError::TypeTooShort {
			column_type: "BYTES(8)".to_string(),
			length: 8,
			minimum: 15,
		}
		.into_diagnostic();
		assert_eq!(diagnostic.message, "Column length (8) too short for UUIDs (need greater than 15)");
		assert_eq!(diagnostic.help.as_deref(), Some("declare the column with a length of at least 16"));
	}

	#[test]
	fn test_order_violation_label_names_values() {
		let diagnostic = RangeError::RangeOrderViolation {
			start: "50".to_string(),
			end: "50".to_string(),
		}
		.into_diagnostic();
		assert_eq!(diagnostic.message, "Start value must be less than end value");
		assert_eq!(diagnostic.label.as_deref(), Some("start '50' is not less than end '50'"));
	}
}
