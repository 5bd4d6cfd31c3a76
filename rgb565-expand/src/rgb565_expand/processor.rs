// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Read a file, expand its packed colors, and write the result.

use crate::rgb565_expand::{ConversionReport, ConvertError, ConvertOptions,
                           ConvertResult, convert_colors_with_count};
use tracing::{debug, info};

/// Runs the read, transform, write chain for one input and output path.
#[derive(Debug)]
pub struct FileProcessor {
    options: ConvertOptions,
}

impl FileProcessor {
    /// Create a new file processor with the given options.
    #[must_use]
    pub fn new(options: ConvertOptions) -> Self { Self { options } }

    #[must_use]
    pub fn options(&self) -> &ConvertOptions { &self.options }

    /// Convert the input file.
    ///
    /// The whole input is rewritten in memory before the output is opened, so a decode
    /// failure never leaves a partial output file behind. A failure while writing may.
    ///
    /// # Errors
    ///
    /// - [`ConvertError::Read`] if the input can't be read as UTF-8 text.
    /// - [`ConvertError::Parse`] if a matched hex group fails to decode.
    /// - [`ConvertError::Write`] if the output can't be written.
    pub fn process_file(&self) -> ConvertResult<ConversionReport> {
        let options = &self.options;
        let mut report = ConversionReport::new(options);

        debug!(input = %options.input_path.display(), "Reading input file");
        let source = std::fs::read_to_string(&options.input_path).map_err(|source| {
            ConvertError::Read {
                path: options.input_path.clone(),
                source,
            }
        })?;

        let (converted, replacements) = convert_colors_with_count(&source)?;
        report.replacements = replacements;
        debug!(replacements, "Expanded packed colors");

        if !options.writes_output() {
            debug!("Check or dry-run mode, skipping write");
            return Ok(report);
        }

        std::fs::write(&options.output_path, converted).map_err(|source| {
            ConvertError::Write {
                path: options.output_path.clone(),
                source,
            }
        })?;
        report.mark_written();
        info!(output = %options.output_path.display(), replacements, "Wrote output file");

        Ok(report)
    }
}
