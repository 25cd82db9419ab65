// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use serde::{Deserialize, Serialize};
use splitpoint_range::{RangeSplitGenerator, RangeValidationResult};
use splitpoint_type::EntityType;
use tracing::{info, instrument, warn};

use crate::{KeySchemaSource, NewSplit, StagingStore};

fn default_include_boundaries() -> bool {
	true
}

/// Request to stage evenly spaced splits over a key range of a table, or of
/// one of its indexes when `index_name` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSplitRequest {
	pub table_name: String,
	pub start_value: String,
	pub end_value: String,
	pub num_splits: usize,
	#[serde(default = "default_include_boundaries")]
	pub include_boundaries: bool,
	#[serde(default)]
	pub index_name: Option<String>,
}

impl RangeSplitRequest {
	pub fn new(
		table_name: impl Into<String>,
		start_value: impl Into<String>,
		end_value: impl Into<String>,
		num_splits: usize,
	) -> Self {
		Self {
			table_name: table_name.into(),
			start_value: start_value.into(),
			end_value: end_value.into(),
			num_splits,
			include_boundaries: true,
			index_name: None,
		}
	}

	pub fn on_index(mut self, index_name: impl Into<String>) -> Self {
		self.index_name = Some(index_name.into());
		self
	}

	pub fn include_boundaries(mut self, include: bool) -> Self {
		self.include_boundaries = include;
		self
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSplitOutcome {
	pub success: bool,
	pub message: String,
	pub generated_values: Vec<String>,
	pub splits_created: usize,
	pub warnings: Vec<String>,
	pub errors: Vec<String>,
}

impl RangeSplitOutcome {
	fn failed(message: impl Into<String>) -> Self {
		let message = message.into();
		Self {
			success: false,
			errors: vec![message.clone()],
			message,
			..Self::default()
		}
	}
}

/// Generates splits for `request` and stages each as a pending `ADD`.
///
/// Individual store failures are collected and do not stop the remaining
/// values from being staged. The outcome succeeds only when at least one
/// split was created and nothing failed.
#[instrument(name = "staging::stage_range", level = "info", skip_all, fields(
	table = %request.table_name,
	index = ?request.index_name,
	num_splits = request.num_splits
))]
pub fn stage_range_splits(
	store: &StagingStore,
	source: &impl KeySchemaSource,
	generator: &RangeSplitGenerator,
	request: &RangeSplitRequest,
) -> RangeSplitOutcome {
	let (entity_name, entity_type) = match &request.index_name {
		Some(index_name) => (index_name.as_str(), EntityType::Index),
		None => (request.table_name.as_str(), EntityType::Table),
	};

	let schema = match source.key_schema(entity_name, entity_type) {
		Ok(schema) => schema,
		Err(err) => {
			warn!(code = %err.code, "key schema lookup failed");
			let reason = err.diagnostic().message;
			return RangeSplitOutcome {
				message: format!("Failed to get entity schema: {}", reason),
				..RangeSplitOutcome::failed(reason)
			};
		}
	};

	let range_type = match generator.validate(&schema, &request.start_value, &request.end_value) {
		RangeValidationResult {
			is_valid: true,
			range_type: Some(range_type),
			..
		} => range_type,
		RangeValidationResult {
			error_message,
			..
		} => {
			return match error_message {
				Some(message) => RangeSplitOutcome::failed(message),
				None => RangeSplitOutcome {
					message: "Validation failed".to_string(),
					..RangeSplitOutcome::default()
				},
			};
		}
	};

	let generated = match generator.generate_with(
		range_type,
		&request.start_value,
		&request.end_value,
		request.num_splits,
		request.include_boundaries,
	) {
		Ok(generated) => generated,
		Err(err) => return RangeSplitOutcome::failed(err.diagnostic().message),
	};

	for warning in &generated.warnings {
		warn!(%warning, "range split warning");
	}

	let mut errors = Vec::new();
	let mut splits_created = 0;

	for value in &generated.values {
		let split = match &request.index_name {
			Some(index_name) => NewSplit::index(&request.table_name, index_name, value),
			None => NewSplit::table(&request.table_name, value),
		};

		match store.add(&split) {
			Ok(_) => splits_created += 1,
			Err(err) => {
				let message = format!("Failed to add split '{}': {}", value, err.message);
				tracing::error!("{}", message);
				errors.push(message);
			}
		}
	}

	info!(created = splits_created, generated = generated.values.len(), "staged range splits");

	RangeSplitOutcome {
		success: splits_created > 0 && errors.is_empty(),
		message: format!("Created {} of {} split points", splits_created, generated.values.len()),
		generated_values: generated.values,
		splits_created,
		warnings: generated.warnings,
		errors,
	}
}
