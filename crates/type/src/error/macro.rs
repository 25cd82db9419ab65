// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Splitpoint

/// Builds an [`Error`](crate::error::Error) from anything that converts into a
/// diagnostic.
#[macro_export]
macro_rules! error {
	($diagnostic:expr) => {
		$crate::error::Error($crate::error::diagnostic::IntoDiagnostic::into_diagnostic($diagnostic))
	};
}

/// Returns early with an [`Error`](crate::error::Error).
#[macro_export]
macro_rules! return_error {
	($diagnostic:expr) => {
		return Err($crate::error!($diagnostic))
	};
}

#[cfg(test)]
mod tests {
	use crate::{Error, RangeError, error::diagnostic::internal::internal};

	fn fails() -> crate::Result<()> {
		return_error!(RangeError::NoKeyColumns {
			entity_name: "Users".to_string()
		});
	}

	#[test]
	fn test_error_from_range_error() {
		let err: Error = error!(RangeError::SplitCountTooSmall {
			requested: 1
		});
		assert_eq!(err.code, "RANGE_010");
	}

	#[test]
	fn test_error_from_diagnostic() {
		let err: Error = error!(internal("boom"));
		assert_eq!(err.code, "INTERNAL_001");
		assert_eq!(err.message, "internal error: boom");
	}

	#[test]
	fn test_return_error() {
		let err = fails().unwrap_err();
		assert_eq!(err.code, "RANGE_006");
	}
}
