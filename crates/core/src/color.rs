//! RGB colors and the shared deck palette.

use serde::Serialize;
use std::fmt;

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a color from its components.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Upper-case hex form used by `<a:srgbClr val="..."/>`.
    pub fn hex(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// The palette every deck draws from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Theme {
    /// Blue: titles.
    pub primary: Rgb,
    /// Green: success and first rules.
    pub secondary: Rgb,
    /// Orange: accents.
    pub accent: Rgb,
    /// Red: anomaly and security sections.
    pub warning: Rgb,
    /// Dark grey: body text on the title slide.
    pub dark: Rgb,
    /// Light grey: title slide background.
    pub light: Rgb,
}

impl Theme {
    /// The certification palette.
    pub const CERTIFICATION: Theme = Theme {
        primary: Rgb::new(59, 130, 246),
        secondary: Rgb::new(16, 185, 129),
        accent: Rgb::new(245, 158, 11),
        warning: Rgb::new(239, 68, 68),
        dark: Rgb::new(31, 41, 55),
        light: Rgb::new(249, 250, 251),
    };
}

impl Default for Theme {
    fn default() -> Self {
        Self::CERTIFICATION
    }
}
