// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

use super::Diagnostic;

pub fn internal(reason: impl Into<String>) -> Diagnostic {
	let reason = reason.into();
	Diagnostic {
		code: "INTERNAL_001".to_string(),
		message: format!("internal error: {}", reason),
		label: None,
		help: Some("this is a bug, please report it together with the input that triggered it".to_string()),
		notes: vec![],
		cause: None,
	}
}
