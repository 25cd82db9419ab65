// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use std::fmt::{Display, Formatter};

use crate::{Result, error::RangeError};

/// Declared length of a `STRING(n)` or `BYTES(n)` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeLength {
	Max,
	Fixed(u64),
}

impl TypeLength {
	/// Resolves the length, substituting `max` for `MAX`.
	pub fn resolve(self, max: u64) -> u64 {
		match self {
			TypeLength::Max => max,
			TypeLength::Fixed(length) => length,
		}
	}
}

impl Display for TypeLength {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			TypeLength::Max => f.write_str("MAX"),
			TypeLength::Fixed(length) => write!(f, "{}", length),
		}
	}
}

/// A key column's declared type, as reported by the database schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnType {
	Int64,
	String(TypeLength),
	Bytes(TypeLength),
	/// Any type range generation has no arithmetic for.
	Other(String),
}

impl ColumnType {
	/// Parses a declared type such as `INT64`, `STRING(36)` or `BYTES(MAX)`.
	///
	/// Keywords are case-insensitive. Only the leading `KEYWORD(len)` is
	/// inspected, so trailing modifiers are ignored. A `STRING` or `BYTES`
	/// keyword without a parseable length fails instead of falling through to
	/// [`ColumnType::Other`].
	pub fn parse(raw: &str) -> Result<ColumnType> {
		let upper = raw.to_ascii_uppercase();

		if upper == "INT64" {
			return Ok(ColumnType::Int64);
		}
		if upper.starts_with("STRING") {
			return parse_length(raw, "STRING").map(ColumnType::String);
		}
		if upper.starts_with("BYTES") {
			return parse_length(raw, "BYTES").map(ColumnType::Bytes);
		}

		Ok(ColumnType::Other(raw.to_string()))
	}
}

fn parse_length(raw: &str, keyword: &'static str) -> Result<TypeLength> {
	let malformed = || RangeError::MalformedTypeSyntax {
		keyword,
		column_type: raw.to_string(),
	};

	// the keyword is ASCII, so slicing past it stays on a char boundary
	let rest = &raw[keyword.len()..];
	let inner = rest.strip_prefix('(').ok_or_else(malformed)?;
	let close = inner.find(')').ok_or_else(malformed)?;
	let length = &inner[..close];

	if length.eq_ignore_ascii_case("MAX") {
		return Ok(TypeLength::Max);
	}
	if length.is_empty() || !length.bytes().all(|b| b.is_ascii_digit()) {
		return Err(malformed().into());
	}

	// all digits, so the only failure left is overflow
	Ok(TypeLength::Fixed(length.parse::<u64>().unwrap_or(u64::MAX)))
}

impl Display for ColumnType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ColumnType::Int64 => f.write_str("INT64"),
			ColumnType::String(length) => write!(f, "STRING({})", length),
			ColumnType::Bytes(length) => write!(f, "BYTES({})", length),
			ColumnType::Other(raw) => f.write_str(raw),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_int64() {
		assert_eq!(ColumnType::parse("INT64").unwrap(), ColumnType::Int64);
		assert_eq!(ColumnType::parse("int64").unwrap(), ColumnType::Int64);
	}

	#[test]
	fn test_int64_is_exact() {
		assert_eq!(ColumnType::parse("INT64 NOT NULL").unwrap(), ColumnType::Other("INT64 NOT NULL".to_string()));
	}

	#[test]
	fn test_string_lengths() {
		assert_eq!(ColumnType::parse("STRING(36)").unwrap(), ColumnType::String(TypeLength::Fixed(36)));
		assert_eq!(ColumnType::parse("string(max)").unwrap(), ColumnType::String(TypeLength::Max));
		assert_eq!(ColumnType::parse("String(Max)").unwrap(), ColumnType::String(TypeLength::Max));
	}

	#[test]
	fn test_bytes_lengths() {
		assert_eq!(ColumnType::parse("BYTES(16)").unwrap(), ColumnType::Bytes(TypeLength::Fixed(16)));
		assert_eq!(ColumnType::parse("BYTES(MAX)").unwrap(), ColumnType::Bytes(TypeLength::Max));
	}

	#[test]
	fn test_trailing_text_ignored() {
		assert_eq!(
			ColumnType::parse("STRING(36) NOT NULL").unwrap(),
			ColumnType::String(TypeLength::Fixed(36))
		);
	}

	#[test]
	fn test_huge_length_saturates() {
		assert_eq!(
			ColumnType::parse("STRING(99999999999999999999999)").unwrap(),
			ColumnType::String(TypeLength::Fixed(u64::MAX))
		);
	}

	#[test]
	fn test_malformed() {
		for raw in ["STRING", "STRING()", "STRING(abc)", "STRING(36", "STRING 36", "STRING(-1)", "BYTES", "BYTESX(16)"]
		{
			let err = ColumnType::parse(raw).unwrap_err();
			assert_eq!(err.code, "RANGE_003", "{raw}");
		}
	}

	#[test]
	fn test_malformed_message() {
		let err = ColumnType::parse("STRING").unwrap_err();
		assert_eq!(err.message, "Could not parse STRING type: STRING");

		let err = ColumnType::parse("bytes[16]").unwrap_err();
		assert_eq!(err.message, "Could not parse BYTES type: bytes[16]");
	}

	#[test]
	fn test_other() {
		for raw in ["FLOAT64", "BOOL", "DATE", "TIMESTAMP", "ARRAY<INT64>", "NUMERIC", ""] {
			assert_eq!(ColumnType::parse(raw).unwrap(), ColumnType::Other(raw.to_string()));
		}
	}

	#[test]
	fn test_resolve() {
		assert_eq!(TypeLength::Max.resolve(36), 36);
		assert_eq!(TypeLength::Fixed(10).resolve(36), 10);
	}

	#[test]
	fn test_display() {
		assert_eq!(ColumnType::String(TypeLength::Max).to_string(), "STRING(MAX)");
		assert_eq!(ColumnType::Bytes(TypeLength::Fixed(16)).to_string(), "BYTES(16)");
	}
}
