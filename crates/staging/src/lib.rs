// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

//! Local staging of split point operations.
//!
//! Split points are collected in a SQLite database as pending `ADD` or
//! `DELETE` operations before they are applied to the database.

#![cfg_attr(not(debug_assertions), deny(warnings))]

mod config;
mod error;
mod model;
mod schema;
mod stage;
mod store;

pub use config::{DbPath, StagingConfig};
pub use error::StagingError;
pub use model::{NewSplit, OperationType, StagedSplit};
pub use schema::{KeySchemaSource, StaticSchemaSource};
pub use stage::{RangeSplitOutcome, RangeSplitRequest, stage_range_splits};
pub use store::StagingStore;
