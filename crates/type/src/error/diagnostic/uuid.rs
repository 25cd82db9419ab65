// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

pub(crate) const EXPECTED_FORMAT: &str = "xxxxxxxx-xxxx-xxxx-xxxx-xxxxxxxxxxxx";

pub(crate) fn canonical_uuid_help() -> String {
	format!("use the canonical hyphenated form {} (e.g., 550e8400-e29b-41d4-a716-446655440000)", EXPECTED_FORMAT)
}

pub(crate) fn canonical_uuid_notes() -> Vec<String> {
	vec![
		"valid: 550e8400-e29b-41d4-a716-446655440000".to_string(),
		"valid: 00000000-0000-0000-0000-000000000000".to_string(),
		"braces, urn:uuid: prefixes and dashless forms are rejected".to_string(),
	]
}
