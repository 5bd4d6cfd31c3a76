// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Complete file validation tests for rgb565-expand.
//!
//! These tests run whole header files through the rewriter and the file processor, and
//! compare against the expected output fixtures.

#[cfg(test)]
mod tests {
    use crate::rgb565_expand::{ConvertOptions, FileProcessor, convert_colors,
                               convert_colors_with_count};
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    const PALETTE_INPUT: &str =
        include_str!("test_data/complete_file/input/sample_palette_header.h");
    const PALETTE_EXPECTED: &str =
        include_str!("test_data/complete_file/expected_output/sample_palette_header.h");
    const NO_COLORS_INPUT: &str =
        include_str!("test_data/complete_file/input/sample_no_colors.h");

    /// Every packed macro in the header is expanded, everything else is untouched.
    #[test]
    fn test_palette_header_matches_expected_output() {
        let (converted, replacements) = convert_colors_with_count(PALETTE_INPUT).unwrap();
        assert_eq!(replacements, 25);
        assert_eq!(converted, PALETTE_EXPECTED);
    }

    /// Line structure, including the trailing newline, is preserved.
    #[test]
    fn test_palette_header_keeps_line_structure() {
        let converted = convert_colors(PALETTE_INPUT).unwrap();
        assert_eq!(converted.lines().count(), PALETTE_INPUT.lines().count());
        assert!(converted.ends_with('\n'));
        assert!(converted.contains("COLOR(0x123) COLOR(0x12345) COLOR(0xGGGG)"));
    }

    /// Running the tool over its own output changes nothing.
    #[test]
    fn test_expected_output_is_a_fixed_point() {
        let (converted, replacements) =
            convert_colors_with_count(PALETTE_EXPECTED).unwrap();
        assert_eq!(replacements, 0);
        assert_eq!(converted, PALETTE_EXPECTED);
    }

    /// Files with no packed colors are left unchanged.
    #[test]
    fn test_no_colors_unchanged() {
        assert_eq!(convert_colors(NO_COLORS_INPUT).unwrap(), NO_COLORS_INPUT);
    }

    /// End-to-end: read the fixture from disk, write the converted file, compare.
    #[test]
    fn test_end_to_end_file_conversion() {
        let temp_dir = TempDir::new().unwrap();
        let input_path = temp_dir.path().join("gbcolors.h");
        let output_path = temp_dir.path().join("gbcolors.h2");
        fs::write(&input_path, PALETTE_INPUT).unwrap();

        let processor = FileProcessor::new(ConvertOptions {
            input_path: input_path.clone(),
            output_path: output_path.clone(),
            ..Default::default()
        });
        let report = processor.process_file().unwrap();

        assert!(report.written);
        assert_eq!(report.replacements, 25);
        assert_eq!(fs::read_to_string(&output_path).unwrap(), PALETTE_EXPECTED);
        assert_eq!(fs::read_to_string(&input_path).unwrap(), PALETTE_INPUT);
    }

    /// Converting in place is allowed since the input is read fully before writing.
    #[test]
    fn test_in_place_conversion() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("gbcolors.h");
        fs::write(&path, PALETTE_INPUT).unwrap();

        let processor = FileProcessor::new(ConvertOptions {
            input_path: path.clone(),
            output_path: path.clone(),
            ..Default::default()
        });
        processor.process_file().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), PALETTE_EXPECTED);
    }
}
