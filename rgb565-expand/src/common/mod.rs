// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Shared utilities across all build tools.

pub mod tracing_init;

pub use tracing_init::*;
