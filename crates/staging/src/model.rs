// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use std::{
	fmt::{Display, Formatter},
	str::FromStr,
};

use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OperationType {
	Add,
	Delete,
}

impl OperationType {
	pub fn as_str(&self) -> &'static str {
		match self {
			OperationType::Add => "ADD",
			OperationType::Delete => "DELETE",
		}
	}
}

impl Display for OperationType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for OperationType {
	type Err = String;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("ADD") {
			Ok(OperationType::Add)
		} else if s.eq_ignore_ascii_case("DELETE") {
			Ok(OperationType::Delete)
		} else {
			Err(format!("unknown operation type '{}', expected ADD or DELETE", s))
		}
	}
}

impl ToSql for OperationType {
	fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
		Ok(ToSqlOutput::from(self.as_str()))
	}
}

impl FromSql for OperationType {
	fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
		value.as_str()?.parse().map_err(|_| FromSqlError::InvalidType)
	}
}

/// A split point to be staged.
///
/// Table splits carry the key value in `split_value`. Index splits carry it
/// in `index_key` and leave `split_value` empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewSplit {
	pub table_name: String,
	pub split_value: String,
	pub operation_type: OperationType,
	pub index_name: Option<String>,
	pub index_key: Option<String>,
}

impl NewSplit {
	pub fn table(table_name: impl Into<String>, split_value: impl Into<String>) -> Self {
		Self {
			table_name: table_name.into(),
			split_value: split_value.into(),
			operation_type: OperationType::Add,
			index_name: None,
			index_key: None,
		}
	}

	pub fn index(table_name: impl Into<String>, index_name: impl Into<String>, index_key: impl Into<String>) -> Self {
		Self {
			table_name: table_name.into(),
			split_value: String::new(),
			operation_type: OperationType::Add,
			index_name: Some(index_name.into()),
			index_key: Some(index_key.into()),
		}
	}

	pub fn operation(mut self, operation_type: OperationType) -> Self {
		self.operation_type = operation_type;
		self
	}
}

/// A split point row of the staging store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StagedSplit {
	pub id: i64,
	pub table_name: String,
	pub split_value: String,
	pub operation_type: OperationType,
	/// UTC, `YYYY-MM-DD HH:MM:SS.SSS`.
	pub created_at: String,
	pub index_name: Option<String>,
	pub index_key: Option<String>,
}
