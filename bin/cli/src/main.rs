// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod output;

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};
use splitpoint_range::{DEFAULT_MAX_SPLITS, RangeConfig, RangeSplitGenerator};
use splitpoint_staging::{
	OperationType, RangeSplitRequest, StagingConfig, StagingStore, StaticSchemaSource, stage_range_splits,
};
use splitpoint_type::{KeyColumn, KeySchema, Result};
use tracing_subscriber::EnvFilter;

use crate::output::Output;

#[derive(Parser)]
#[command(name = "splitpoint")]
#[command(about = "Generate and stage evenly spaced split points for INT64 and UUID keys", long_about = None)]
#[command(version)]
struct Cli {
	/// Log filter, e.g. `debug` or `splitpoint_staging=trace`. Overrides RUST_LOG.
	#[arg(long, global = true)]
	log_level: Option<String>,

	/// Print results as JSON.
	#[arg(long, global = true, default_value_t = false)]
	json: bool,

	#[command(subcommand)]
	command: Command,
}

#[derive(Subcommand)]
enum Command {
	/// Classify a declared column type, e.g. `STRING(36)`.
	Detect {
		column_type: String,

		/// Sample key value that must be a canonical UUID for STRING and BYTES columns.
		#[arg(long)]
		sample: Option<String>,
	},

	/// Check whether a range can be split for a single-column key.
	Validate {
		/// Declared type of the key column.
		#[arg(long = "type")]
		column_type: String,

		#[arg(long, allow_hyphen_values = true)]
		start: String,

		#[arg(long, allow_hyphen_values = true)]
		end: String,
	},

	/// Print evenly spaced split values between two bounds.
	Generate {
		#[arg(long = "type")]
		column_type: String,

		#[arg(long, allow_hyphen_values = true)]
		start: String,

		#[arg(long, allow_hyphen_values = true)]
		end: String,

		#[arg(long)]
		splits: usize,

		/// Only produce values strictly between start and end.
		#[arg(long, default_value_t = false)]
		exclude_boundaries: bool,

		#[arg(long, default_value_t = DEFAULT_MAX_SPLITS)]
		max_splits: usize,
	},

	/// Generate split values and stage them as pending ADD operations.
	Stage {
		/// Staging database file, or a directory to hold `staging.db`.
		#[arg(long)]
		db: PathBuf,

		#[arg(long)]
		table: String,

		/// Stage index splits for this index of the table.
		#[arg(long)]
		index: Option<String>,

		/// Declared type of the table or index key column.
		#[arg(long = "type")]
		column_type: String,

		#[arg(long, allow_hyphen_values = true)]
		start: String,

		#[arg(long, allow_hyphen_values = true)]
		end: String,

		#[arg(long)]
		splits: usize,

		#[arg(long, default_value_t = false)]
		exclude_boundaries: bool,
	},

	/// List staged splits, newest first.
	List {
		#[arg(long)]
		db: PathBuf,

		/// Only list ADD or DELETE operations.
		#[arg(long)]
		operation: Option<OperationType>,
	},

	/// Remove a staged split by id.
	Remove {
		#[arg(long)]
		db: PathBuf,

		id: i64,
	},

	/// Remove all staged splits, or all of one operation type.
	Clear {
		#[arg(long)]
		db: PathBuf,

		#[arg(long)]
		operation: Option<OperationType>,
	},
}

fn main() -> ExitCode {
	let cli = Cli::parse();
	init_logging(cli.log_level.as_deref());

	let output = Output::new(cli.json);
	match run(cli.command, &output) {
		Ok(true) => ExitCode::SUCCESS,
		Ok(false) => ExitCode::FAILURE,
		Err(err) => {
			eprintln!("{}", err);
			ExitCode::FAILURE
		}
	}
}

fn init_logging(level: Option<&str>) {
	let filter = match level {
		Some(level) => EnvFilter::new(level),
		None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
	};

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}

/// Single-column key schema for the entity named on the command line.
fn key_schema(entity_name: &str, column_type: &str, parent_table: Option<&str>) -> KeySchema {
	let columns = vec![KeyColumn::new("key", column_type, 1)];
	match parent_table {
		Some(parent) => KeySchema::index(entity_name, columns, parent, vec![]),
		None => KeySchema::table(entity_name, columns),
	}
}

/// Returns whether the command succeeded.
fn run(command: Command, output: &Output) -> Result<bool> {
	match command {
		Command::Detect {
			column_type,
			sample,
		} => {
			let generator = RangeSplitGenerator::default();
			let range_type = generator.detect(&column_type, sample.as_deref())?;
			output.range_type(range_type)?;
			Ok(true)
		}

		Command::Validate {
			column_type,
			start,
			end,
		} => {
			let generator = RangeSplitGenerator::default();
			let result = generator.validate(&key_schema("range", &column_type, None), &start, &end);
			output.validation(&result)?;
			Ok(result.is_valid)
		}

		Command::Generate {
			column_type,
			start,
			end,
			splits,
			exclude_boundaries,
			max_splits,
		} => {
			let generator = RangeSplitGenerator::new(RangeConfig::new().max_splits(max_splits));
			let range_type = generator.detect(&column_type, Some(start.as_str()))?;
			let generated = generator.generate_with(range_type, &start, &end, splits, !exclude_boundaries)?;
			output.generated(range_type, &generated)?;
			Ok(true)
		}

		Command::Stage {
			db,
			table,
			index,
			column_type,
			start,
			end,
			splits,
			exclude_boundaries,
		} => {
			let store = StagingStore::open(StagingConfig::new(db))?;

			let schema = match &index {
				Some(index) => key_schema(index, &column_type, Some(table.as_str())),
				None => key_schema(&table, &column_type, None),
			};
			let source = StaticSchemaSource::new().with(schema);

			let mut request = RangeSplitRequest::new(table, start, end, splits).include_boundaries(!exclude_boundaries);
			if let Some(index) = index {
				request = request.on_index(index);
			}

			let outcome = stage_range_splits(&store, &source, &RangeSplitGenerator::default(), &request);
			output.staged(&outcome)?;
			Ok(outcome.success)
		}

		Command::List {
			db,
			operation,
		} => {
			let store = StagingStore::open(StagingConfig::new(db))?;
			let splits = match operation {
				Some(operation) => store.list_by_operation(operation)?,
				None => store.list()?,
			};
			output.splits(&splits)?;
			Ok(true)
		}

		Command::Remove {
			db,
			id,
		} => {
			let store = StagingStore::open(StagingConfig::new(db))?;
			let removed = store.remove(id)?;
			output.removed(id, removed)?;
			Ok(removed)
		}

		Command::Clear {
			db,
			operation,
		} => {
			let store = StagingStore::open(StagingConfig::new(db))?;
			let removed = store.clear(operation)?;
			output.cleared(removed)?;
			Ok(true)
		}
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn test_cli_definition() {
		Cli::command().debug_assert();
	}

	#[test]
	fn test_parse_generate() {
		let cli = Cli::try_parse_from([
			"splitpoint",
			"--json",
			"generate",
			"--type",
			"INT64",
			"--start",
			"0",
			"--end",
			"100",
			"--splits",
			"5",
		])
		.unwrap();

		assert!(cli.json);
		match cli.command {
			Command::Generate {
				splits,
				exclude_boundaries,
				max_splits,
				..
			} => {
				assert_eq!(splits, 5);
				assert!(!exclude_boundaries);
				assert_eq!(max_splits, 100);
			}
			_ => panic!("expected generate"),
		}
	}

	#[test]
	fn test_parse_operation_filter() {
		let cli = Cli::try_parse_from(["splitpoint", "clear", "--db", "/tmp/x.db", "--operation", "delete"]).unwrap();
		match cli.command {
			Command::Clear {
				operation,
				..
			} => assert_eq!(operation, Some(OperationType::Delete)),
			_ => panic!("expected clear"),
		}
	}

	#[test]
	fn test_index_schema() {
		let schema = key_schema("UsersByEmail", "STRING(MAX)", Some("Users"));
		assert_eq!(schema.parent_table.as_deref(), Some("Users"));
		assert_eq!(schema.key_columns.len(), 1);
	}
}
