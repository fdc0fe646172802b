// src/color.rs

//! Packed ARGB pixels and the bit-mask transforms that operate on them.
//!
//! A pixel is a `u32` laid out most-significant byte first:
//! alpha (bits 31-24), red (23-16), green (15-8), blue (7-0).

const ALPHA_MASK: u32 = 0xFF00_0000;
const RED_MASK: u32 = 0x00FF_0000;
const GREEN_MASK: u32 = 0x0000_FF00;
const BLUE_MASK: u32 = 0x0000_00FF;

/// Argb pixel: as a u32, `0xAARRGGBB` regardless of platform endianness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct Argb(pub u32);

impl Argb {
    /// Creates a new ARGB pixel from component values.
    #[inline]
    pub fn new(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self(u32::from_be_bytes([a, r, g, b]))
    }

    #[inline]
    pub fn a(self) -> u8 {
        self.0.to_be_bytes()[0]
    }
    #[inline]
    pub fn r(self) -> u8 {
        self.0.to_be_bytes()[1]
    }
    #[inline]
    pub fn g(self) -> u8 {
        self.0.to_be_bytes()[2]
    }
    #[inline]
    pub fn b(self) -> u8 {
        self.0.to_be_bytes()[3]
    }
}

impl From<u32> for Argb {
    #[inline]
    fn from(v: u32) -> Argb {
        Argb(v)
    }
}

impl From<Argb> for u32 {
    #[inline]
    fn from(px: Argb) -> u32 {
        px.0
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r(), self.g(), self.b())
    }
}

// =============================================================================
// Pixel transforms
// =============================================================================

/// Inverts the color channels and forces alpha to fully opaque.
#[inline]
pub fn invert(v: u32) -> u32 {
    (u32::MAX - v) | ALPHA_MASK
}

/// Keeps alpha and red, zeroes green and blue.
#[inline]
pub fn red(v: u32) -> u32 {
    v & (ALPHA_MASK | RED_MASK)
}

/// Keeps alpha and green, zeroes red and blue.
#[inline]
pub fn green(v: u32) -> u32 {
    v & (ALPHA_MASK | GREEN_MASK)
}

/// Keeps alpha and blue, zeroes red and green.
#[inline]
pub fn blue(v: u32) -> u32 {
    v & (ALPHA_MASK | BLUE_MASK)
}
