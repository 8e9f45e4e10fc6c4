//! Cell styling types
//!
//! - [`CellStyle`] - The visual attributes a conditional format applies
//! - [`Color`] - RGB colour representation

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// RGB colour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create an RGB color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b }
    }

    /// Create from a hex string (e.g., "#FF0000" or "FF0000")
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Color { r, g, b })
    }

    /// Look up one of the named colours spreadsheet writers commonly accept
    pub fn from_name(name: &str) -> Option<Self> {
        let color = match name.to_ascii_lowercase().as_str() {
            "black" => Self::BLACK,
            "blue" => Self::BLUE,
            "brown" => Self::rgb(0x80, 0x00, 0x00),
            "cyan" => Self::rgb(0x00, 0xFF, 0xFF),
            "gray" | "grey" => Self::GRAY,
            "green" => Self::rgb(0x00, 0x80, 0x00),
            "lime" => Self::rgb(0x00, 0xFF, 0x00),
            "magenta" => Self::rgb(0xFF, 0x00, 0xFF),
            "navy" => Self::rgb(0x00, 0x00, 0x80),
            "orange" => Self::rgb(0xFF, 0x66, 0x00),
            "pink" => Self::rgb(0xFF, 0x00, 0xFF),
            "purple" => Self::rgb(0x80, 0x00, 0x80),
            "red" => Self::RED,
            "silver" => Self::rgb(0xC0, 0xC0, 0xC0),
            "white" => Self::WHITE,
            "yellow" => Self::rgb(0xFF, 0xFF, 0x00),
            _ => return None,
        };
        Some(color)
    }

    /// Pack as `0xRRGGBB`
    pub fn to_rgb_u32(&self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Convert to hex string (without # prefix)
    pub fn to_hex(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::from_hex(s)
            .or_else(|| Self::from_name(s))
            .ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.to_hex())
    }
}

/// Visual attributes applied to cells matched by a conditional format
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CellStyle {
    /// Background fill colour
    pub background: Option<Color>,
    /// Font colour
    pub font_color: Option<Color>,
    /// Bold font
    pub bold: bool,
}

impl CellStyle {
    /// Create an empty style
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the background fill colour
    pub fn background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }

    /// Set the font colour
    pub fn font_color(mut self, color: Color) -> Self {
        self.font_color = Some(color);
        self
    }

    /// Set bold
    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = bold;
        self
    }
}
