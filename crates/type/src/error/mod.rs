// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use std::{
	fmt::{Display, Formatter},
	ops::{Deref, DerefMut},
};

pub mod diagnostic;
mod r#macro;

use diagnostic::{Diagnostic, IntoDiagnostic, render::DefaultRenderer};

#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Diagnostic);

impl Deref for Error {
	type Target = Diagnostic;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

impl DerefMut for Error {
	fn deref_mut(&mut self) -> &mut Self::Target {
		&mut self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		let out = DefaultRenderer::render_string(&self.0);
		f.write_str(out.as_str())
	}
}

impl Error {
	pub fn diagnostic(self) -> Diagnostic {
		self.0
	}
}

impl std::error::Error for Error {}

impl From<RangeError> for Error {
	fn from(err: RangeError) -> Self {
		Error(err.into_diagnostic())
	}
}

/// Input validation failures of range split generation.
///
/// Every message is shown to end users verbatim, so each variant names the
/// offending value and the expected format.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RangeError {
	#[error(
		"Column type '{column_type}' not supported. Supported: INT64, STRING(>35) with UUIDs, BYTES(>15) with UUIDs."
	)]
	UnsupportedType {
		column_type: String,
	},

	#[error("Column length ({length}) too short for UUIDs (need greater than {minimum})")]
	TypeTooShort {
		column_type: String,
		length: u64,
		minimum: u64,
	},

	#[error("Could not parse {keyword} type: {column_type}")]
	MalformedTypeSyntax {
		keyword: &'static str,
		column_type: String,
	},

	#[error("Value '{value}' is not a valid UUID format (expected: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)")]
	InvalidSampleFormat {
		value: String,
	},

	#[error("Range splits are not supported for composite keys. Please add splits individually.")]
	CompositeKeyUnsupported {
		entity_name: String,
		columns: usize,
	},

	#[error("No key columns found in schema")]
	NoKeyColumns {
		entity_name: String,
	},

	#[error("Invalid integer value(s): start='{start}', end='{end}'")]
	InvalidNumericValue {
		start: String,
		end: String,
	},

	#[error("Value '{value}' is not a valid UUID format (expected: xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx)")]
	InvalidUuidFormat {
		value: String,
	},

	#[error("Start value must be less than end value")]
	RangeOrderViolation {
		start: String,
		end: String,
	},

	#[error("Number of splits must be at least 2")]
	SplitCountTooSmall {
		requested: usize,
	},

	#[error("Number of splits must be at most {maximum}")]
	SplitCountTooLarge {
		requested: usize,
		maximum: usize,
	},

	#[error("Range between '{start}' and '{end}' has no room for interior split values")]
	RangeTooNarrow {
		start: String,
		end: String,
	},
}
