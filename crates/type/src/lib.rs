// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod error;
pub mod schema;
pub mod value;

pub use error::{Error, RangeError, diagnostic::{Diagnostic, IntoDiagnostic}};
pub use schema::{EntityType, KeyColumn, KeySchema};
pub use value::{
	column_type::{ColumnType, TypeLength},
	range_type::RangeType,
	uuid::{int_to_uuid, is_valid_uuid, uuid_to_int},
};

pub type Result<T> = std::result::Result<T, Error>;
