// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Command-line argument parsing for rgb565-expand.

use crate::rgb565_expand::types::{ConvertOptions, DEFAULT_INPUT_PATH,
                                  DEFAULT_OUTPUT_PATH};
use clap::Parser;
use std::path::PathBuf;

/// Expand packed RGB565 `COLOR(0xHHHH)` macros into `COLOR(0xRR, 0xGG, 0xBB)` calls.
#[derive(Debug, Parser)]
#[command(
    name = "rgb565-expand",
    about = "Expand packed RGB565 COLOR(0xHHHH) macros into three-component calls",
    long_about = "Reads INPUT, replaces every COLOR(0xHHHH) macro (exactly 4 hex digits) \
                  with COLOR(0xRR, 0xGG, 0xBB) using the raw 5/6/5 bit-field values, and \
                  writes the result to OUTPUT.\n\n\
                  Everything else in the file is copied through unchanged.",
    version
)]
pub struct CLIArg {
    /// Check whether INPUT contains packed colors, without writing OUTPUT
    #[arg(long, short = 'c', conflicts_with = "dry_run")]
    pub check: bool,

    /// Report how many macros would be converted, without writing OUTPUT
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Source file to read
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Destination file to create or overwrite
    #[arg(value_name = "OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,
}

impl CLIArg {
    /// Convert CLI arguments to [`ConvertOptions`].
    #[must_use]
    pub fn to_convert_options(&self) -> ConvertOptions {
        ConvertOptions {
            input_path: self.input.clone(),
            output_path: self.output.clone(),
            check_only: self.check,
            dry_run: self.dry_run,
            verbose: self.verbose,
        }
    }
}
