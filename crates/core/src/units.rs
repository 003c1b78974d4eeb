//! Length and font-size units used by DrawingML.
//!
//! Positions and extents are stored in English Metric Units (EMU):
//! 914 400 per inch and 12 700 per point. Font sizes are stored in points
//! and written as hundredths of a point.

use serde::Serialize;
use std::ops::{Add, Sub};

/// EMUs per inch.
pub const EMU_PER_INCH: i64 = 914_400;

/// EMUs per typographic point.
pub const EMU_PER_POINT: i64 = 12_700;

/// A length in English Metric Units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
pub struct Emu(pub i64);

impl Emu {
    /// Zero length.
    pub const ZERO: Emu = Emu(0);

    /// Raw EMU value.
    pub fn get(self) -> i64 {
        self.0
    }

    /// Value in inches (lossy).
    pub fn as_inches(self) -> f64 {
        self.0 as f64 / EMU_PER_INCH as f64
    }
}

impl Add for Emu {
    type Output = Emu;

    fn add(self, rhs: Emu) -> Emu {
        Emu(self.0 + rhs.0)
    }
}

impl Sub for Emu {
    type Output = Emu;

    fn sub(self, rhs: Emu) -> Emu {
        Emu(self.0 - rhs.0)
    }
}

/// Convert inches to EMU, rounding to the nearest unit.
pub fn inches(value: f64) -> Emu {
    Emu((value * EMU_PER_INCH as f64).round() as i64)
}

/// Convert points to EMU, rounding to the nearest unit.
pub fn points(value: f64) -> Emu {
    Emu((value * EMU_PER_POINT as f64).round() as i64)
}

/// A font size in points.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct FontSize(pub f64);

impl FontSize {
    /// Size in hundredths of a point, as DrawingML's `sz` attribute expects.
    pub fn hundredths(self) -> u32 {
        (self.0 * 100.0).round().max(0.0) as u32
    }
}

/// Shorthand for a font size in points.
pub fn pt(value: f64) -> FontSize {
    FontSize(value)
}

/// A rectangle on the slide: offset and extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Bounds {
    pub x: Emu,
    pub y: Emu,
    pub width: Emu,
    pub height: Emu,
}

impl Bounds {
    /// Build bounds from raw EMU values.
    pub fn new(x: Emu, y: Emu, width: Emu, height: Emu) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build bounds from inches.
    pub fn inches(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::new(inches(x), inches(y), inches(width), inches(height))
    }
}

/// Slide dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SlideSize {
    pub width: Emu,
    pub height: Emu,
}

impl SlideSize {
    /// 10 in x 7.5 in, the classic 4:3 default.
    pub const STANDARD_4_3: SlideSize = SlideSize {
        width: Emu(9_144_000),
        height: Emu(6_858_000),
    };

    /// 13.333 in x 7.5 in widescreen.
    pub const WIDESCREEN_16_9: SlideSize = SlideSize {
        width: Emu(12_192_000),
        height: Emu(6_858_000),
    };

    /// The whole slide as bounds.
    pub fn full(self) -> Bounds {
        Bounds::new(Emu::ZERO, Emu::ZERO, self.width, self.height)
    }
}

impl Default for SlideSize {
    fn default() -> Self {
        Self::STANDARD_4_3
    }
}
