// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use std::path::{Path, PathBuf};

use splitpoint_type::Result;

use crate::StagingError;

/// File name used when the configured path is a directory.
const DEFAULT_DB_FILE: &str = "staging.db";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DbPath {
	File(PathBuf),
	Memory,
}

impl DbPath {
	/// Directories (paths without an extension) get `staging.db` appended
	/// and are created along with any missing parents.
	pub(crate) fn resolve(&self) -> Result<DbPath> {
		match self {
			DbPath::Memory => Ok(DbPath::Memory),
			DbPath::File(path) => Ok(DbPath::File(resolve_file(path)?)),
		}
	}
}

fn resolve_file(path: &Path) -> Result<PathBuf> {
	let (dir, file) = if path.extension().is_none() {
		(Some(path), path.join(DEFAULT_DB_FILE))
	} else {
		(path.parent(), path.to_path_buf())
	};

	if let Some(dir) = dir.filter(|dir| !dir.as_os_str().is_empty()) {
		std::fs::create_dir_all(dir).map_err(StagingError::storage("create directory"))?;
	}
	Ok(file)
}

/// Configuration for [`StagingStore`](crate::StagingStore).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagingConfig {
	pub path: DbPath,
	/// Milliseconds to wait on a locked database before failing.
	pub busy_timeout_ms: u64,
}

impl StagingConfig {
	pub fn new(path: impl AsRef<Path>) -> Self {
		Self {
			path: DbPath::File(path.as_ref().to_path_buf()),
			busy_timeout_ms: 5_000,
		}
	}

	pub fn in_memory() -> Self {
		Self {
			path: DbPath::Memory,
			busy_timeout_ms: 5_000,
		}
	}

	pub fn busy_timeout_ms(mut self, millis: u64) -> Self {
		self.busy_timeout_ms = millis;
		self
	}
}

#[cfg(test)]
mod tests {
	use splitpoint_testing::tempdir::temp_dir;

	use super::*;

	#[test]
	fn test_directory_gets_default_file() {
		temp_dir(|temp_path| {
			let dir = temp_path.join("splits");
			let resolved = DbPath::File(dir.clone()).resolve().unwrap();

			assert_eq!(resolved, DbPath::File(dir.join("staging.db")));
			assert!(dir.is_dir());
			Ok(())
		})
		.expect("test failed");
	}

	#[test]
	fn test_file_kept_and_parent_created() {
		temp_dir(|temp_path| {
			let file = temp_path.join("nested").join("custom.db");
			let resolved = DbPath::File(file.clone()).resolve().unwrap();

			assert_eq!(resolved, DbPath::File(file));
			assert!(temp_path.join("nested").is_dir());
			Ok(())
		})
		.expect("test failed");
	}

	#[test]
	fn test_directory_creation_failure_is_reported() {
		temp_dir(|temp_path| {
			let blocker = temp_path.join("occupied");
			std::fs::write(&blocker, b"")?;

			let err = DbPath::File(blocker.join("staging")).resolve().unwrap_err();
			assert_eq!(err.code, "STAGING_001");
			assert!(err.message.starts_with("Staging store failed to create directory"));
			Ok(())
		})
		.expect("test failed");
	}

	#[test]
	fn test_relative_file_without_parent() {
		assert_eq!(DbPath::File(PathBuf::from("local.db")).resolve().unwrap(), DbPath::File(PathBuf::from("local.db")));
	}

	#[test]
	fn test_builder() {
		let config = StagingConfig::in_memory().busy_timeout_ms(10);
		assert_eq!(config.path, DbPath::Memory);
		assert_eq!(config.busy_timeout_ms, 10);
	}
}
