// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Key encodings for which evenly spaced split values can be generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeType {
	#[serde(rename = "INT64")]
	Int64,
	#[serde(rename = "STRING_UUID")]
	StringUuid,
	#[serde(rename = "BYTES_UUID")]
	BytesUuid,
}

impl RangeType {
	pub fn as_str(&self) -> &'static str {
		match self {
			RangeType::Int64 => "INT64",
			RangeType::StringUuid => "STRING_UUID",
			RangeType::BytesUuid => "BYTES_UUID",
		}
	}

	pub fn is_uuid(&self) -> bool {
		matches!(self, RangeType::StringUuid | RangeType::BytesUuid)
	}
}

impl Display for RangeType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display() {
		assert_eq!(RangeType::Int64.to_string(), "INT64");
		assert_eq!(RangeType::StringUuid.to_string(), "STRING_UUID");
		assert_eq!(RangeType::BytesUuid.to_string(), "BYTES_UUID");
	}

	#[test]
	fn test_serde_names() {
		assert_eq!(serde_json::to_string(&RangeType::BytesUuid).unwrap(), "\"BYTES_UUID\"");
		let parsed: RangeType = serde_json::from_str("\"STRING_UUID\"").unwrap();
		assert_eq!(parsed, RangeType::StringUuid);
	}

	#[test]
	fn test_is_uuid() {
		assert!(!RangeType::Int64.is_uuid());
		assert!(RangeType::StringUuid.is_uuid());
		assert!(RangeType::BytesUuid.is_uuid());
	}
}
