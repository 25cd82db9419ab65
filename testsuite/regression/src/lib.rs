// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

//! Script runner for the regression suite.
//!
//! Each script gets a fresh in-memory staging store. Library errors are
//! rendered into the output as `error[CODE]: message`; malformed script
//! commands fail the test instead.

use std::{collections::HashMap, error::Error, fmt::Write as _, str::FromStr};

use goldenscript::Command;
use splitpoint_range::{RangeConfig, RangeSplitGenerator, RangeValidationResult};
use splitpoint_staging::{
	NewSplit, OperationType, RangeSplitRequest, StagedSplit, StagingStore, StaticSchemaSource, stage_range_splits,
};
use splitpoint_type::{KeyColumn, KeySchema};

pub struct SplitRunner {
	store: StagingStore,
	generator: RangeSplitGenerator,
}

impl SplitRunner {
	pub fn new() -> Result<Self, Box<dyn Error>> {
		Ok(Self {
			store: StagingStore::in_memory()?,
			generator: RangeSplitGenerator::new(RangeConfig::new()),
		})
	}
}

impl goldenscript::Runner for SplitRunner {
	fn run(&mut self, command: &Command) -> Result<String, Box<dyn Error>> {
		let mut args = Args::new(command);
		let mut output = String::new();

		match command.name.as_str() {
			// detect TYPE [sample=VALUE]
			"detect" => {
				let column_type = args.positional()?;
				let sample = args.optional("sample");
				args.finish()?;

				match self.generator.detect(&column_type, sample.as_deref()) {
					Ok(range_type) => writeln!(output, "{}", range_type)?,
					Err(err) => writeln!(output, "error[{}]: {}", err.code, err.message)?,
				}
			}

			// validate type=TYPE start=VALUE end=VALUE
			"validate" => {
				let schema = single_key_table(&args.required("type")?);
				let start = args.required("start")?;
				let end = args.required("end")?;
				args.finish()?;

				write_validation(&mut output, &self.generator.validate(&schema, &start, &end))?;
			}

			// generate type=TYPE start=VALUE end=VALUE splits=N [boundaries=BOOL] [max=N]
			"generate" => {
				let column_type = args.required("type")?;
				let start = args.required("start")?;
				let end = args.required("end")?;
				let splits = args.required_parse::<usize>("splits")?;
				let boundaries = args.optional_parse::<bool>("boundaries")?.unwrap_or(true);
				let generator = match args.optional_parse::<usize>("max")? {
					Some(max) => RangeSplitGenerator::new(RangeConfig::new().max_splits(max)),
					None => self.generator.clone(),
				};
				args.finish()?;

				let generated = generator
					.detect(&column_type, Some(start.as_str()))
					.and_then(|range_type| generator.generate_with(range_type, &start, &end, splits, boundaries));

				match generated {
					Ok(generated) => {
						for value in &generated.values {
							writeln!(output, "{}", value)?;
						}
						for warning in &generated.warnings {
							writeln!(output, "warning: {}", warning)?;
						}
					}
					Err(err) => writeln!(output, "error[{}]: {}", err.code, err.message)?,
				}
			}

			// stage table=NAME [index=NAME] type=TYPE start=VALUE end=VALUE splits=N [boundaries=BOOL]
			"stage" => {
				let table = args.required("table")?;
				let index = args.optional("index");
				let column_type = args.required("type")?;
				let start = args.required("start")?;
				let end = args.required("end")?;
				let splits = args.required_parse::<usize>("splits")?;
				let boundaries = args.optional_parse::<bool>("boundaries")?.unwrap_or(true);
				args.finish()?;

				let columns = vec![KeyColumn::new("key", column_type, 1)];
				let mut request =
					RangeSplitRequest::new(&table, start, end, splits).include_boundaries(boundaries);
				let schema = match index {
					Some(index) => {
						request = request.on_index(&index);
						KeySchema::index(index, columns, table, vec![])
					}
					None => KeySchema::table(table, columns),
				};
				let source = StaticSchemaSource::new().with(schema);

				let outcome = stage_range_splits(&self.store, &source, &self.generator, &request);
				writeln!(output, "{}", outcome.message)?;
				for warning in &outcome.warnings {
					writeln!(output, "warning: {}", warning)?;
				}
				for err in &outcome.errors {
					writeln!(output, "error: {}", err)?;
				}
			}

			// add table=NAME [value=VALUE] [index=NAME key=VALUE] [operation=ADD|DELETE]
			"add" => {
				let table = args.required("table")?;
				let value = args.optional("value").unwrap_or_default();
				let index = args.optional("index");
				let key = args.optional("key");
				let operation = args.optional_parse::<OperationType>("operation")?.unwrap_or(OperationType::Add);
				args.finish()?;

				let split = match (index, key) {
					(Some(index), Some(key)) => NewSplit::index(table, index, key),
					(None, None) => NewSplit::table(table, value),
					_ => return Err("index and key must be given together".into()),
				};
				write_split(&mut output, &self.store.add(&split.operation(operation))?)?;
			}

			// list [operation=ADD|DELETE]
			"list" => {
				let operation = args.optional_parse::<OperationType>("operation")?;
				args.finish()?;

				let splits = match operation {
					Some(operation) => self.store.list_by_operation(operation)?,
					None => self.store.list()?,
				};
				if splits.is_empty() {
					writeln!(output, "no splits")?;
				}
				for split in &splits {
					write_split(&mut output, split)?;
				}
			}

			// remove ID
			"remove" => {
				let id = args.positional()?.parse::<i64>()?;
				args.finish()?;

				let removed = self.store.remove(id)?;
				writeln!(output, "{}", if removed { "removed" } else { "not found" })?;
			}

			// remove_value table=NAME [value=VALUE] [index=NAME key=VALUE]
			"remove_value" => {
				let table = args.required("table")?;
				let value = args.optional("value").unwrap_or_default();
				let index = args.optional("index");
				let key = args.optional("key");
				args.finish()?;

				let removed = self.store.remove_by_value(&table, &value, index.as_deref(), key.as_deref())?;
				writeln!(output, "{}", if removed { "removed" } else { "not found" })?;
			}

			// clear [operation=ADD|DELETE]
			"clear" => {
				let operation = args.optional_parse::<OperationType>("operation")?;
				args.finish()?;

				writeln!(output, "removed {} split(s)", self.store.clear(operation)?)?;
			}

			name => return Err(format!("invalid command {name}").into()),
		}

		Ok(output)
	}
}

fn single_key_table(column_type: &str) -> KeySchema {
	KeySchema::table("range", vec![KeyColumn::new("key", column_type, 1)])
}

fn write_validation(output: &mut String, result: &RangeValidationResult) -> std::fmt::Result {
	let range_type = result.range_type.map(|t| t.to_string()).unwrap_or_else(|| "-".to_string());
	match &result.error_message {
		None => writeln!(output, "valid range_type={}", range_type),
		Some(message) => writeln!(output, "invalid range_type={}: {}", range_type, message),
	}
}

/// Ids are left out: an upsert may consume an autoincrement value, so they
/// are only stable in scripts without conflicting adds.
fn write_split(output: &mut String, split: &StagedSplit) -> std::fmt::Result {
	match (&split.index_name, &split.index_key) {
		(Some(index_name), Some(index_key)) => writeln!(
			output,
			"{} {} index={} key={}",
			split.operation_type, split.table_name, index_name, index_key
		),
		_ => writeln!(output, "{} {} value={}", split.operation_type, split.table_name, split.split_value),
	}
}

/// Named and positional arguments of a script command.
struct Args {
	named: HashMap<String, String>,
	positional: Vec<String>,
}

impl Args {
	fn new(command: &Command) -> Self {
		let mut named = HashMap::new();
		let mut positional = Vec::new();
		for arg in &command.args {
			match &arg.key {
				Some(key) => {
					named.insert(key.clone(), arg.value.clone());
				}
				None => positional.push(arg.value.clone()),
			}
		}
		positional.reverse();

		Self {
			named,
			positional,
		}
	}

	fn positional(&mut self) -> Result<String, Box<dyn Error>> {
		self.positional.pop().ok_or_else(|| "missing positional argument".into())
	}

	fn optional(&mut self, key: &str) -> Option<String> {
		self.named.remove(key)
	}

	fn required(&mut self, key: &str) -> Result<String, Box<dyn Error>> {
		self.optional(key).ok_or_else(|| format!("missing argument {key}").into())
	}

	fn optional_parse<T>(&mut self, key: &str) -> Result<Option<T>, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		self.optional(key)
			.map(|value| value.parse::<T>().map_err(|e| format!("invalid {key}={value}: {e}").into()))
			.transpose()
	}

	fn required_parse<T>(&mut self, key: &str) -> Result<T, Box<dyn Error>>
	where
		T: FromStr,
		T::Err: std::fmt::Display,
	{
		self.optional_parse(key)?.ok_or_else(|| format!("missing argument {key}").into())
	}

	fn finish(self) -> Result<(), Box<dyn Error>> {
		if let Some(key) = self.named.keys().next() {
			return Err(format!("unexpected argument {key}").into());
		}
		if let Some(value) = self.positional.last() {
			return Err(format!("unexpected argument {value}").into());
		}
		Ok(())
	}
}
