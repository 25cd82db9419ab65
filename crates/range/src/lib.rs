// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

//! Range split generation.
//!
//! Given a single column key and two boundary values, this crate classifies
//! the column's encoding, validates the bounds and interpolates evenly spaced
//! split values between them. All operations are pure and may be called
//! concurrently.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod detect;
mod generate;
mod generator;
mod validate;

pub use config::{DEFAULT_MAX_SPLITS, RangeConfig};
pub use detect::detect_range_type;
pub use generate::{
	GeneratedSplitSet, generate_range_splits, int64::generate_int64_range_splits,
	uuid::generate_uuid_range_splits,
};
pub use generator::RangeSplitGenerator;
pub use splitpoint_type::{RangeType, int_to_uuid, is_valid_uuid, uuid_to_int};
pub use validate::{RangeValidationResult, validate_range_request};
