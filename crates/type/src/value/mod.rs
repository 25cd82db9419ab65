// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

pub mod column_type;
pub mod range_type;
pub mod uuid;
