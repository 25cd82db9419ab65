// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

//! Key schema fixtures shared by unit and regression tests.

use splitpoint_type::{KeyColumn, KeySchema};

pub fn int64_table(name: &str) -> KeySchema {
	KeySchema::table(name, vec![KeyColumn::new("id", "INT64", 1)])
}

pub fn uuid_table(name: &str) -> KeySchema {
	KeySchema::table(name, vec![KeyColumn::new("id", "STRING(36)", 1)])
}

pub fn uuid_bytes_table(name: &str) -> KeySchema {
	KeySchema::table(name, vec![KeyColumn::new("id", "BYTES(16)", 1)])
}

pub fn composite_table(name: &str) -> KeySchema {
	KeySchema::table(
		name,
		vec![KeyColumn::new("tenant_id", "INT64", 1), KeyColumn::new("id", "STRING(36)", 2)],
	)
}

pub fn keyless_table(name: &str) -> KeySchema {
	KeySchema::table(name, vec![])
}

/// Index keyed on a `STRING(MAX)` UUID column of `parent`.
pub fn uuid_index(name: &str, parent: &str) -> KeySchema {
	KeySchema::index(
		name,
		vec![KeyColumn::new("owner_id", "STRING(MAX)", 1)],
		parent,
		vec![KeyColumn::new("id", "INT64", 1)],
	)
}

pub fn int64_index(name: &str, parent: &str) -> KeySchema {
	KeySchema::index(
		name,
		vec![KeyColumn::new("created_at_ms", "INT64", 1)],
		parent,
		vec![KeyColumn::new("id", "INT64", 1)],
	)
}
