// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use std::collections::HashMap;

use splitpoint_type::{EntityType, KeySchema, Result};

use crate::StagingError;

/// Looks up the key layout of a table or index.
///
/// Implemented by the database administration client; the in-memory
/// [`StaticSchemaSource`] serves tests and offline use.
pub trait KeySchemaSource {
	fn key_schema(&self, entity_name: &str, entity_type: EntityType) -> Result<KeySchema>;
}

#[derive(Debug, Clone, Default)]
pub struct StaticSchemaSource {
	schemas: HashMap<(EntityType, String), KeySchema>,
}

impl StaticSchemaSource {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with(mut self, schema: KeySchema) -> Self {
		self.insert(schema);
		self
	}

	pub fn insert(&mut self, schema: KeySchema) {
		self.schemas.insert((schema.entity_type, schema.entity_name.clone()), schema);
	}
}

impl KeySchemaSource for StaticSchemaSource {
	fn key_schema(&self, entity_name: &str, entity_type: EntityType) -> Result<KeySchema> {
		self.schemas.get(&(entity_type, entity_name.to_string())).cloned().ok_or_else(|| {
			StagingError::SchemaNotFound {
				entity_type,
				entity_name: entity_name.to_string(),
			}
			.into()
		})
	}
}

impl<T: KeySchemaSource + ?Sized> KeySchemaSource for &T {
	fn key_schema(&self, entity_name: &str, entity_type: EntityType) -> Result<KeySchema> {
		(**self).key_schema(entity_name, entity_type)
	}
}
