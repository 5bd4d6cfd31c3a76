// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Replace every packed `COLOR(0xHHHH)` macro in a document with its expanded form.
//!
//! This is a single left to right scan. At each occurrence of [`PACKED_COLOR_PREFIX`]
//! the [`parse_packed_color`] parser tries to recognize a whole token. A match is
//! replaced with the output of [`rgb565_to_rgb_components`]. Anything else (including
//! `COLOR(0x123)`, `COLOR(0x12345)`, and already expanded calls) is copied through
//! byte for byte.

use crate::rgb565_expand::{ConvertResult, rgb565_to_rgb_components};
use nom::{IResult, Parser,
          bytes::complete::{tag, take_while_m_n},
          sequence::delimited};
use tracing::trace;

pub const PACKED_COLOR_PREFIX: &str = "COLOR(0x";
pub const PACKED_COLOR_SUFFIX: &str = ")";
pub const PACKED_COLOR_DIGIT_COUNT: usize = 4;

/// Recognize `COLOR(0x` + exactly 4 hex digits + `)` at the start of `input`.
///
/// Returns the remainder and the 4 digits.
///
/// # Errors
///
/// Returns a [`nom::Err`] if `input` does not start with a packed color token.
pub fn parse_packed_color(input: &str) -> IResult<&str, &str> {
    delimited(
        tag(PACKED_COLOR_PREFIX),
        take_while_m_n(
            PACKED_COLOR_DIGIT_COUNT,
            PACKED_COLOR_DIGIT_COUNT,
            helper_fns::match_is_hex_digit,
        ),
        tag(PACKED_COLOR_SUFFIX),
    )
    .parse(input)
}

mod helper_fns {
    /// Used by [`nom::bytes::complete::take_while_m_n`], items are taken from the
    /// input as long as this returns `true`.
    pub fn match_is_hex_digit(c: char) -> bool { c.is_ascii_hexdigit() }
}

/// Convert every packed color macro in `text`.
///
/// # Example
///
/// Input: `foo COLOR(0x001F) bar`
/// Output: `foo COLOR(0x00, 0x00, 0x1F) bar`
///
/// # Errors
///
/// Returns the first decode error. No partial output is returned.
pub fn convert_colors(text: &str) -> ConvertResult<String> {
    convert_colors_with_count(text).map(|(converted, _)| converted)
}

/// Same as [`convert_colors`], and also returns how many macros were replaced.
///
/// # Errors
///
/// Returns the first decode error. No partial output is returned.
pub fn convert_colors_with_count(text: &str) -> ConvertResult<(String, usize)> {
    let mut acc = String::with_capacity(text.len() + text.len() / 4);
    let mut replacements = 0;
    let mut rest = text;

    while let Some(offset) = rest.find(PACKED_COLOR_PREFIX) {
        let (verbatim, candidate) = rest.split_at(offset);
        acc.push_str(verbatim);

        match parse_packed_color(candidate) {
            Ok((remainder, digits)) => {
                let expanded = rgb565_to_rgb_components(digits)?;
                trace!(%digits, %expanded, "Expanded packed color");
                acc.push_str(&expanded);
                replacements += 1;
                rest = remainder;
            }
            Err(_) => {
                // The prefix starts with an ASCII byte, so index 1 is a char boundary.
                let (head, tail) = candidate.split_at(1);
                acc.push_str(head);
                rest = tail;
            }
        }
    }

    acc.push_str(rest);
    Ok((acc, replacements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use test_case::test_case;

    #[test]
    fn test_parse_packed_color() {
        assert_eq!(parse_packed_color("COLOR(0xF81F), x"), Ok((", x", "F81F")));
    }

    #[test_case("COLOR(0x123)"; "too few digits")]
    #[test_case("COLOR(0x12345)"; "too many digits")]
    #[test_case("COLOR(0xGGGG)"; "non hex digits")]
    #[test_case("COLOR(0X1234)"; "uppercase x")]
    #[test_case(" COLOR(0x1234)"; "not at start")]
    fn test_parse_packed_color_rejects(input: &str) {
        assert!(parse_packed_color(input).is_err());
    }

    #[test_case("foo COLOR(0x001F) bar", "foo COLOR(0x00, 0x00, 0x1F) bar"; "single match")]
    #[test_case(
        "COLOR(0xF800) and COLOR(0x07E0)",
        "COLOR(0x1F, 0x00, 0x00) and COLOR(0x00, 0x3F, 0x00)";
        "two matches"
    )]
    #[test_case(
        "COLOR(0x0000)COLOR(0xffff)",
        "COLOR(0x00, 0x00, 0x00)COLOR(0x1F, 0x3F, 0x1F)";
        "adjacent matches"
    )]
    #[test_case("COLOR(0xCOLOR(0x001F)", "COLOR(0xCOLOR(0x00, 0x00, 0x1F)"; "match after broken prefix")]
    #[test_case("↯ COLOR(0xFFFF) ↯", "↯ COLOR(0x1F, 0x3F, 0x1F) ↯"; "multibyte neighbors")]
    fn test_convert_colors(input: &str, expected: &str) {
        assert_eq!(convert_colors(input).unwrap(), expected);
    }

    #[test_case("no match here"; "plain text")]
    #[test_case(""; "empty")]
    #[test_case("COLOR(0x123) COLOR(0x12345) COLOR(0xGGGG)"; "malformed variants")]
    #[test_case("COLOR(0x1F, 0x3F, 0x1F)"; "already expanded")]
    #[test_case("color(0x1234) COLOR(0X1234)"; "wrong case")]
    #[test_case("trailing COLOR(0x"; "prefix at end")]
    #[test_case("trailing COLOR(0x12"; "truncated digits at end")]
    fn test_convert_colors_leaves_text_untouched(input: &str) {
        assert_eq!(convert_colors(input).unwrap(), input);
    }

    #[test]
    fn test_convert_colors_with_count() {
        let input = "{ COLOR(0xFFFF), COLOR(0x123), COLOR(0x8410) }\n";
        let (converted, count) = convert_colors_with_count(input).unwrap();
        assert_eq!(count, 2);
        assert_eq!(
            converted,
            "{ COLOR(0x1F, 0x3F, 0x1F), COLOR(0x123), COLOR(0x10, 0x20, 0x10) }\n"
        );
    }

    #[test]
    fn test_convert_colors_is_idempotent() {
        let once = convert_colors("a COLOR(0x7BEF)\r\nb COLOR(0x0841)\n").unwrap();
        let twice = convert_colors(&once).unwrap();
        assert_eq!(once, twice);
    }
}
