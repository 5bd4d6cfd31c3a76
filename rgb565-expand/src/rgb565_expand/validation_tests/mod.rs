// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! End-to-end validation tests for `rgb565-expand`.
//!
//! ## Tier 1: Unit Tests (in module files)
//! - **Location**: Embedded in [`decoder`], [`rewriter`], [`processor`]
//! - **Input**: Minimal hardcoded strings
//! - **Examples**: Single macros, malformed variants, missing files
//!
//! ## Tier 2: End-to-End Tests
//! - **Location**: [`complete_file_tests`]
//! - **Input**: Complete C headers in `test_data/complete_file/input`, compared byte
//!   for byte against `test_data/complete_file/expected_output`
//!
//! [`complete_file_tests`]: complete_file_tests
//! [`decoder`]: crate::rgb565_expand::decoder
//! [`rewriter`]: crate::rgb565_expand::rewriter
//! [`processor`]: crate::rgb565_expand::processor

#[cfg(any(test, doc))]
mod complete_file_tests;
