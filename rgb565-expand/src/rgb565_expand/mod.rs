// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Packed RGB565 color macro expansion.
//!
//! [`decoder`] turns 4 hex digits into an expanded call, [`rewriter`] applies it to
//! every match in a document, and [`processor`] does the file I/O around it.

pub mod cli_arg;
pub mod decoder;
pub mod error;
pub mod processor;
pub mod rewriter;
pub mod types;
pub mod ui_str;

#[cfg(test)]
pub mod validation_tests;

// Re-export public API for flat module interface (like cmdr/).
pub use cli_arg::*;
pub use decoder::*;
pub use error::*;
pub use processor::*;
pub use rewriter::*;
pub use types::*;
pub use ui_str::*;
