// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

//! SQLite backed staging store.
//!
//! Absent index names and keys are stored as empty strings so that the
//! uniqueness constraint treats table splits consistently.

use std::{sync::Arc, time::Duration};

use parking_lot::Mutex;
use rusqlite::{Connection, OptionalExtension, Row, params};
use splitpoint_type::Result;
use tracing::{debug, instrument};

use crate::{
	DbPath, StagingConfig, StagingError,
	model::{NewSplit, OperationType, StagedSplit},
};

const SCHEMA: &str = "
	CREATE TABLE IF NOT EXISTS local_splits (
		id             INTEGER PRIMARY KEY AUTOINCREMENT,
		table_name     TEXT NOT NULL,
		split_value    TEXT NOT NULL DEFAULT '',
		operation_type TEXT NOT NULL,
		index_name     TEXT NOT NULL DEFAULT '',
		index_key      TEXT NOT NULL DEFAULT '',
		created_at     TEXT NOT NULL,
		UNIQUE(table_name, split_value, index_name, index_key)
	);
";

const COLUMNS: &str = "id, table_name, split_value, operation_type, created_at, index_name, index_key";

const NOW: &str = "strftime('%Y-%m-%d %H:%M:%f', 'now')";

#[derive(Clone)]
pub struct StagingStore {
	conn: Arc<Mutex<Connection>>,
}

impl StagingStore {
	#[instrument(name = "staging::open", level = "info", skip(config), fields(db_path = ?config.path))]
	pub fn open(config: StagingConfig) -> Result<Self> {
		let conn = match config.path.resolve()? {
			DbPath::File(path) => Connection::open(path),
			DbPath::Memory => Connection::open_in_memory(),
		}
		.map_err(StagingError::storage("open database"))?;

		conn.busy_timeout(Duration::from_millis(config.busy_timeout_ms))
			.map_err(StagingError::storage("configure database"))?;
		conn.execute_batch(SCHEMA).map_err(StagingError::storage("create schema"))?;

		Ok(Self {
			conn: Arc::new(Mutex::new(conn)),
		})
	}

	pub fn in_memory() -> Result<Self> {
		Self::open(StagingConfig::in_memory())
	}

	/// Stages a split, replacing the operation of an existing row with the
	/// same key and refreshing its timestamp.
	#[instrument(name = "staging::add", level = "debug", skip(self, split), fields(table = %split.table_name, operation = %split.operation_type))]
	pub fn add(&self, split: &NewSplit) -> Result<StagedSplit> {
		let index_name = split.index_name.as_deref().unwrap_or("");
		let index_key = split.index_key.as_deref().unwrap_or("");

		let conn = self.conn.lock();
		conn.execute(
			&format!(
				"INSERT INTO local_splits (table_name, split_value, operation_type, index_name, index_key, created_at)
				 VALUES (?1, ?2, ?3, ?4, ?5, {NOW})
				 ON CONFLICT(table_name, split_value, index_name, index_key) DO UPDATE SET
				     operation_type = excluded.operation_type,
				     created_at = excluded.created_at"
			),
			params![split.table_name, split.split_value, split.operation_type, index_name, index_key],
		)
		.map_err(StagingError::storage("add split"))?;

		conn.query_row(
			&format!(
				"SELECT {COLUMNS} FROM local_splits
				 WHERE table_name = ?1 AND split_value = ?2 AND index_name = ?3 AND index_key = ?4"
			),
			params![split.table_name, split.split_value, index_name, index_key],
			from_row,
		)
		.map_err(StagingError::storage("read back split"))
	}

	pub fn get(
		&self,
		table_name: &str,
		split_value: &str,
		index_name: Option<&str>,
		index_key: Option<&str>,
	) -> Result<Option<StagedSplit>> {
		let conn = self.conn.lock();
		conn.query_row(
			&format!(
				"SELECT {COLUMNS} FROM local_splits
				 WHERE table_name = ?1 AND split_value = ?2 AND index_name = ?3 AND index_key = ?4"
			),
			params![table_name, split_value, index_name.unwrap_or(""), index_key.unwrap_or("")],
			from_row,
		)
		.optional()
		.map_err(StagingError::storage("get split"))
	}

	/// All staged splits, newest first.
	pub fn list(&self) -> Result<Vec<StagedSplit>> {
		let conn = self.conn.lock();
		let mut stmt = conn
			.prepare(&format!("SELECT {COLUMNS} FROM local_splits ORDER BY created_at DESC, id DESC"))
			.map_err(StagingError::storage("list splits"))?;

		stmt.query_map([], from_row)
			.and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
			.map_err(StagingError::storage("list splits"))
	}

	pub fn list_by_operation(&self, operation_type: OperationType) -> Result<Vec<StagedSplit>> {
		let conn = self.conn.lock();
		let mut stmt = conn
			.prepare(&format!(
				"SELECT {COLUMNS} FROM local_splits WHERE operation_type = ?1 ORDER BY created_at DESC, id DESC"
			))
			.map_err(StagingError::storage("list splits"))?;

		stmt.query_map(params![operation_type], from_row)
			.and_then(|rows| rows.collect::<rusqlite::Result<Vec<_>>>())
			.map_err(StagingError::storage("list splits"))
	}

	/// Returns whether a row was removed.
	#[instrument(name = "staging::remove", level = "debug", skip(self))]
	pub fn remove(&self, id: i64) -> Result<bool> {
		let removed = self
			.conn
			.lock()
			.execute("DELETE FROM local_splits WHERE id = ?1", params![id])
			.map_err(StagingError::storage("remove split"))?;
		Ok(removed > 0)
	}

	pub fn remove_by_value(
		&self,
		table_name: &str,
		split_value: &str,
		index_name: Option<&str>,
		index_key: Option<&str>,
	) -> Result<bool> {
		let removed = self
			.conn
			.lock()
			.execute(
				"DELETE FROM local_splits
				 WHERE table_name = ?1 AND split_value = ?2 AND index_name = ?3 AND index_key = ?4",
				params![table_name, split_value, index_name.unwrap_or(""), index_key.unwrap_or("")],
			)
			.map_err(StagingError::storage("remove split"))?;
		Ok(removed > 0)
	}

	/// Removes all staged splits, or only those of one operation type.
	/// Returns the number of rows removed.
	#[instrument(name = "staging::clear", level = "debug", skip(self))]
	pub fn clear(&self, operation_type: Option<OperationType>) -> Result<usize> {
		let conn = self.conn.lock();
		let removed = match operation_type {
			Some(operation_type) => {
				conn.execute("DELETE FROM local_splits WHERE operation_type = ?1", params![operation_type])
			}
			None => conn.execute("DELETE FROM local_splits", []),
		}
		.map_err(StagingError::storage("clear splits"))?;

		debug!(removed, "cleared staged splits");
		Ok(removed)
	}
}

fn from_row(row: &Row<'_>) -> rusqlite::Result<StagedSplit> {
	let non_empty = |value: String| (!value.is_empty()).then_some(value);

	Ok(StagedSplit {
		id: row.get(0)?,
		table_name: row.get(1)?,
		split_value: row.get(2)?,
		operation_type: row.get(3)?,
		created_at: row.get(4)?,
		index_name: non_empty(row.get(5)?),
		index_key: non_empty(row.get(6)?),
	})
}
