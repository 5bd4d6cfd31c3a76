// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Error types for decoding, rewriting, and file I/O.

use miette::Diagnostic;
use std::{io, num::ParseIntError, path::PathBuf};

pub type ConvertResult<T> = Result<T, ConvertError>;

/// Every failure aborts the whole run. Nothing here is recovered locally.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum ConvertError {
    /// A matched hex group did not parse as a 16-bit integer.
    #[error("Failed to parse packed color value `{digits}` as hexadecimal")]
    #[diagnostic(
        code(r3bl_rgb565_expand::parse),
        help("Packed colors must be exactly 4 hex digits, eg: COLOR(0xF800)")
    )]
    Parse {
        digits: String,
        #[source]
        source: ParseIntError,
    },

    /// The input file is missing, unreadable, or not valid UTF-8.
    #[error("Failed to read input file `{}`", .path.display())]
    #[diagnostic(
        code(r3bl_rgb565_expand::read),
        help("Check that the input path exists and contains UTF-8 text")
    )]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The output path could not be created or written.
    #[error("Failed to write output file `{}`", .path.display())]
    #[diagnostic(
        code(r3bl_rgb565_expand::write),
        help("Check that the output directory exists and is writable")
    )]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
