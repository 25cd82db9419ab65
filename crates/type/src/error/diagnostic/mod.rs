// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use serde::{Deserialize, Serialize};

pub mod internal;
pub mod range;
pub mod render;
pub mod uuid;

/// A user facing description of a failure.
///
/// `code` is stable and meant for programmatic matching, `message` is the
/// text shown to the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
	pub code: String,
	pub message: String,
	pub label: Option<String>,
	pub help: Option<String>,
	pub notes: Vec<String>,
	pub cause: Option<Box<Diagnostic>>,
}

pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

impl IntoDiagnostic for Diagnostic {
	fn into_diagnostic(self) -> Diagnostic {
		self
	}
}

impl Diagnostic {
	pub fn with_cause(mut self, cause: Diagnostic) -> Self {
		self.cause = Some(Box::new(cause));
		self
	}
}
