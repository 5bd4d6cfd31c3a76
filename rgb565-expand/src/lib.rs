// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

//! # R3BL RGB565 Expand
//!
//! Rewrite packed 16-bit color macros in C/C++ headers into expanded three-component
//! macro calls.
//!
//! ## rgb565-expand
//!
//! A small command line tool that reads a header file, finds every
//! `COLOR(0xHHHH)` macro whose argument is a packed RGB565 value, and replaces it with
//! `COLOR(0xRR, 0xGG, 0xBB)` where each component is the raw bit-field value.
//!
//! ### What It Does
//!
//! **Before:**
//! ```c
//! { COLOR(0xFFFF), COLOR(0xF800), COLOR(0x07E0), COLOR(0x001F) }
//! ```
//!
//! **After:**
//! ```c
//! { COLOR(0x1F, 0x3F, 0x1F), COLOR(0x1F, 0x00, 0x00), COLOR(0x00, 0x3F, 0x00), COLOR(0x00, 0x00, 0x1F) }
//! ```
//!
//! The fields are **not** rescaled to 8 bits. Red and blue stay in `0..=0x1F`, green
//! stays in `0..=0x3F`.
//!
//! Anything that is not exactly `COLOR(0x` + 4 hex digits + `)` is copied through
//! untouched, so running the tool over its own output is a no-op.
//!
//! ### Usage Examples
//!
//! **Convert `gbcolors.h` into `gbcolors.h2`** (the defaults):
//! ```bash
//! rgb565-expand
//! ```
//!
//! **Explicit paths**:
//! ```bash
//! rgb565-expand ext/palette.h ext/palette_expanded.h
//! ```
//!
//! **Check without writing** (exits with code 1 if there is anything to convert):
//! ```bash
//! rgb565-expand --check ext/palette.h
//! ```
//!
//! **Dry run with debug logging**:
//! ```bash
//! rgb565-expand --dry-run --verbose ext/palette.h
//! ```
//!
//! ### Library Usage
//!
//! ```
//! use r3bl_rgb565_expand::rgb565_expand::convert_colors;
//!
//! let out = convert_colors("foo COLOR(0x001F) bar")?;
//! assert_eq!(out, "foo COLOR(0x00, 0x00, 0x1F) bar");
//! # Ok::<(), r3bl_rgb565_expand::rgb565_expand::ConvertError>(())
//! ```
//!
//! ### Architecture
//!
//! **Module structure:**
//! - `src/lib.rs` - Library root
//! - `src/bin/rgb565-expand.rs` - Binary entry point
//! - `src/rgb565_expand/` - Tool implementation
//!   - `cli_arg.rs` - CLI argument parsing
//!   - `decoder.rs` - Decode a packed value and render the expanded call
//!   - `rewriter.rs` - Single pass scanner that replaces every match
//!   - `processor.rs` - Read, transform, write
//!   - `error.rs` - Error types and diagnostics
//!   - `types.rs` - Type definitions
//!   - `ui_str.rs` - User-facing messages
//! - `src/common/` - Shared utilities
//!   - `tracing_init.rs` - Logging setup

// Attach all modules.
pub mod common;
pub mod rgb565_expand;

// Re-export commonly used items.
pub use common::*;
