// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! User-facing strings and messages.

use std::path::Path;

pub const ERROR_PREFIX: &str = "Error";
pub const CHECK_MODE_NEEDS_CONVERSION: &str =
    "Input contains packed colors. Run without --check to convert them.";

/// Confirmation printed after a successful write.
#[must_use]
pub fn format_saved(output_path: &Path) -> String {
    format!("Converted file saved to: {}", output_path.display())
}

/// Summary printed in dry-run mode.
#[must_use]
pub fn format_dry_run(input_path: &Path, replacements: usize) -> String {
    format!(
        "Dry-run mode: {replacements} packed color(s) in {} would be converted",
        input_path.display()
    )
}

/// Summary printed in check mode when there is nothing to convert.
#[must_use]
pub fn format_check_clean(input_path: &Path) -> String {
    format!("No packed colors found in {}", input_path.display())
}
