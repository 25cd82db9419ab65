// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use serde::Serialize;
use serde_json::json;
use splitpoint_range::{GeneratedSplitSet, RangeType, RangeValidationResult};
use splitpoint_staging::{RangeSplitOutcome, StagedSplit};
use splitpoint_type::{Result, error, error::diagnostic::internal::internal};

/// Writes command results to stdout as plain text or JSON. Warnings in text
/// mode go to stderr so stdout stays machine readable.
pub struct Output {
	json: bool,
}

impl Output {
	pub fn new(json: bool) -> Self {
		Self {
			json,
		}
	}

	fn print_json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
		let rendered = serde_json::to_string_pretty(value).map_err(|e| error!(internal(e.to_string())))?;
		println!("{}", rendered);
		Ok(())
	}

	pub fn range_type(&self, range_type: RangeType) -> Result<()> {
		if self.json {
			return self.print_json(&json!({ "range_type": range_type }));
		}
		println!("{}", range_type);
		Ok(())
	}

	pub fn validation(&self, result: &RangeValidationResult) -> Result<()> {
		if self.json {
			return self.print_json(result);
		}
		match (&result.range_type, &result.error_message) {
			(Some(range_type), None) => println!("valid: {}", range_type),
			(_, Some(message)) => println!("invalid: {}", message),
			(None, None) => println!("invalid"),
		}
		Ok(())
	}

	pub fn generated(&self, range_type: RangeType, generated: &GeneratedSplitSet) -> Result<()> {
		if self.json {
			return self.print_json(&json!({
				"range_type": range_type,
				"values": generated.values,
				"warnings": generated.warnings,
			}));
		}
		for warning in &generated.warnings {
			eprintln!("warning: {}", warning);
		}
		for value in &generated.values {
			println!("{}", value);
		}
		Ok(())
	}

	pub fn staged(&self, outcome: &RangeSplitOutcome) -> Result<()> {
		if self.json {
			return self.print_json(outcome);
		}
		for warning in &outcome.warnings {
			eprintln!("warning: {}", warning);
		}
		for err in &outcome.errors {
			eprintln!("error: {}", err);
		}
		println!("{}", outcome.message);
		Ok(())
	}

	pub fn splits(&self, splits: &[StagedSplit]) -> Result<()> {
		if self.json {
			return self.print_json(splits);
		}
		for split in splits {
			match (&split.index_name, &split.index_key) {
				(Some(index_name), index_key) => println!(
					"{}\t{}\t{}\t{}\t{}\t{}",
					split.id,
					split.operation_type,
					split.table_name,
					index_name,
					index_key.as_deref().unwrap_or(""),
					split.created_at
				),
				(None, _) => println!(
					"{}\t{}\t{}\t\t{}\t{}",
					split.id, split.operation_type, split.table_name, split.split_value, split.created_at
				),
			}
		}
		Ok(())
	}

	pub fn removed(&self, id: i64, removed: bool) -> Result<()> {
		if self.json {
			return self.print_json(&json!({ "id": id, "removed": removed }));
		}
		if removed {
			println!("removed split {}", id);
		} else {
			eprintln!("split {} not found", id);
		}
		Ok(())
	}

	pub fn cleared(&self, removed: usize) -> Result<()> {
		if self.json {
			return self.print_json(&json!({ "removed": removed }));
		}
		println!("removed {} split(s)", removed);
		Ok(())
	}
}
