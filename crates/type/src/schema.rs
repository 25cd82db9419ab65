// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EntityType {
	Table,
	Index,
}

impl Display for EntityType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			EntityType::Table => f.write_str("TABLE"),
			EntityType::Index => f.write_str("INDEX"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyColumn {
	pub name: String,
	/// Declared type, e.g. `INT64` or `STRING(36)`.
	pub column_type: String,
	pub ordinal_position: u32,
}

impl KeyColumn {
	pub fn new(name: impl Into<String>, column_type: impl Into<String>, ordinal_position: u32) -> Self {
		Self {
			name: name.into(),
			column_type: column_type.into(),
			ordinal_position,
		}
	}
}

/// Key layout of a table or index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeySchema {
	pub entity_name: String,
	pub entity_type: EntityType,
	pub key_columns: Vec<KeyColumn>,
	/// For indexes, the table they belong to.
	pub parent_table: Option<String>,
	/// For indexes, the primary key columns of the parent table.
	pub parent_key_columns: Option<Vec<KeyColumn>>,
}

impl KeySchema {
	pub fn table(name: impl Into<String>, key_columns: Vec<KeyColumn>) -> Self {
		Self {
			entity_name: name.into(),
			entity_type: EntityType::Table,
			key_columns,
			parent_table: None,
			parent_key_columns: None,
		}
	}

	pub fn index(
		name: impl Into<String>,
		key_columns: Vec<KeyColumn>,
		parent_table: impl Into<String>,
		parent_key_columns: Vec<KeyColumn>,
	) -> Self {
		Self {
			entity_name: name.into(),
			entity_type: EntityType::Index,
			key_columns,
			parent_table: Some(parent_table.into()),
			parent_key_columns: Some(parent_key_columns),
		}
	}

	pub fn is_composite(&self) -> bool {
		self.key_columns.len() > 1
	}
}
