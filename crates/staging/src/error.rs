// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use splitpoint_type::{Diagnostic, EntityType, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StagingError {
	#[error("Staging store failed to {operation}: {reason}")]
	Storage {
		operation: &'static str,
		reason: String,
	},

	#[error("{entity_type} '{entity_name}' not found")]
	SchemaNotFound {
		entity_type: EntityType,
		entity_name: String,
	},
}

impl StagingError {
	/// Adapter for `map_err` on rusqlite and filesystem results.
	pub(crate) fn storage<E: std::fmt::Display>(operation: &'static str) -> impl FnOnce(E) -> Error {
		move |err| {
			Error::from(StagingError::Storage {
				operation,
				reason: err.to_string(),
			})
		}
	}
}

impl IntoDiagnostic for StagingError {
	fn into_diagnostic(self) -> Diagnostic {
		let message = self.to_string();
		match self {
			StagingError::Storage {
				operation,
				..
			} => Diagnostic {
				code: "STAGING_001".to_string(),
				message,
				label: Some(format!("while trying to {}", operation)),
				help: Some("check that the staging database file is writable and not locked".to_string()),
				notes: vec![],
				cause: None,
			},

			StagingError::SchemaNotFound {
				entity_type,
				entity_name,
			} => Diagnostic {
				code: "STAGING_002".to_string(),
				message,
				label: Some(format!("no key schema for {} '{}'", entity_type, entity_name)),
				help: Some(match entity_type {
					EntityType::Table => "check the table name".to_string(),
					EntityType::Index => "check the index name and its parent table".to_string(),
				}),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<StagingError> for Error {
	fn from(err: StagingError) -> Self {
		Error(err.into_diagnostic())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_storage_code() {
		let err: Error = StagingError::Storage {
			operation: "add split",
			reason: "disk I/O error".to_string(),
		}
		.into();
		assert_eq!(err.code, "STAGING_001");
		assert_eq!(err.message, "Staging store failed to add split: disk I/O error");
	}

	#[test]
	fn test_schema_not_found_code() {
		let err: Error = StagingError::SchemaNotFound {
			entity_type: EntityType::Index,
			entity_name: "UsersByEmail".to_string(),
		}
		.into();
		assert_eq!(err.code, "STAGING_002");
		assert_eq!(err.message, "INDEX 'UsersByEmail' not found");
	}

	#[test]
	fn test_renders() {
		let err = splitpoint_type::error!(StagingError::SchemaNotFound {
			entity_type: EntityType::Table,
			entity_name: "Users".to_string(),
		});
		assert!(err.to_string().starts_with("error[STAGING_002]: TABLE 'Users' not found"));
	}
}
