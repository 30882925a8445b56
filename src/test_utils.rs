// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons.
//!
//! Viewport math goes through several float operations, so exact equality is
//! too strict for most assertions.

pub use approx::assert_abs_diff_eq;
