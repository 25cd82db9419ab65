// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

pub mod schema;
pub mod tempdir;
