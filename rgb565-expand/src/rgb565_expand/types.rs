// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Type definitions for rgb565-expand.

use std::path::PathBuf;

pub const DEFAULT_INPUT_PATH: &str = "gbcolors.h";
pub const DEFAULT_OUTPUT_PATH: &str = "gbcolors.h2";

/// Options for a single conversion run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Don't write, only report whether the input needs converting.
    pub check_only: bool,
    /// Don't write, only report how many macros would be converted.
    pub dry_run: bool,
    pub verbose: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            input_path: PathBuf::from(DEFAULT_INPUT_PATH),
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            check_only: false,
            dry_run: false,
            verbose: false,
        }
    }
}

impl ConvertOptions {
    /// Whether this run is allowed to touch the output path.
    #[must_use]
    pub fn writes_output(&self) -> bool { !self.check_only && !self.dry_run }
}

/// Result of converting one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionReport {
    pub input_path: PathBuf,
    pub output_path: PathBuf,
    /// Number of packed color macros that were (or would be) expanded.
    pub replacements: usize,
    /// Whether the output file was written.
    pub written: bool,
}

impl ConversionReport {
    #[must_use]
    pub fn new(options: &ConvertOptions) -> Self {
        Self {
            input_path: options.input_path.clone(),
            output_path: options.output_path.clone(),
            replacements: 0,
            written: false,
        }
    }

    pub fn mark_written(&mut self) { self.written = true; }

    #[must_use]
    pub fn needs_conversion(&self) -> bool { self.replacements > 0 }
}
