// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Decode a packed RGB565 value into its three bit-fields, and render them as an
//! expanded `COLOR(0xRR, 0xGG, 0xBB)` call.
//!
//! | Field | Bits     | Range         |
//! |-------|----------|---------------|
//! | red   | 15 .. 11 | `0x00..=0x1F` |
//! | green | 10 .. 5  | `0x00..=0x3F` |
//! | blue  | 4 .. 0   | `0x00..=0x1F` |
//!
//! The fields are passed through at their native width. They are not scaled up to
//! `0..=0xFF`.

use crate::rgb565_expand::{ConvertError, ConvertResult};
use std::fmt::{self, Display};

pub const RED_SHIFT: u16 = 11;
pub const GREEN_SHIFT: u16 = 5;
pub const RED_MASK: u16 = 0x1F;
pub const GREEN_MASK: u16 = 0x3F;
pub const BLUE_MASK: u16 = 0x1F;

/// A packed 16-bit color value.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Rgb565(pub u16);

impl From<u16> for Rgb565 {
    fn from(value: u16) -> Self { Self(value) }
}

impl Rgb565 {
    /// Parse hex digits (case insensitive, no `0x` prefix) into a packed value.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::Parse`] if `digits` is not a valid base 16 `u16`.
    pub fn from_hex_str(digits: &str) -> ConvertResult<Self> {
        u16::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|source| ConvertError::Parse {
                digits: digits.to_string(),
                source,
            })
    }

    /// Extract the raw bit-fields.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn components(self) -> RgbComponents {
        // Every field is masked to at most 6 bits, so it always fits in a u8.
        RgbComponents {
            red: ((self.0 >> RED_SHIFT) & RED_MASK) as u8,
            green: ((self.0 >> GREEN_SHIFT) & GREEN_MASK) as u8,
            blue: (self.0 & BLUE_MASK) as u8,
        }
    }
}

/// The three separated fields of an [`Rgb565`] value. [`Display`] renders the
/// expanded macro call.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct RgbComponents {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl RgbComponents {
    /// Put the fields back into their bit positions. Bits outside each field's mask are
    /// dropped.
    #[must_use]
    pub fn pack(self) -> Rgb565 {
        let red = u16::from(self.red) & RED_MASK;
        let green = u16::from(self.green) & GREEN_MASK;
        let blue = u16::from(self.blue) & BLUE_MASK;
        Rgb565((red << RED_SHIFT) | (green << GREEN_SHIFT) | blue)
    }
}

impl Display for RgbComponents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "COLOR(0x{:02X}, 0x{:02X}, 0x{:02X})",
            self.red, self.green, self.blue
        )
    }
}

/// Decode 4 hex digits and render the expanded call.
///
/// # Example
///
/// Input: `"F800"`
/// Output: `"COLOR(0x1F, 0x00, 0x00)"`
///
/// # Errors
///
/// Returns [`ConvertError::Parse`] if `hex_value` is not valid hexadecimal.
pub fn rgb565_to_rgb_components(hex_value: &str) -> ConvertResult<String> {
    Ok(Rgb565::from_hex_str(hex_value)?.components().to_string())
}
