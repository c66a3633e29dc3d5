//! Normalized RGB colors

use serde::{Deserialize, Serialize};

use crate::Float;

/// RGB color with each channel in `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rgb<T> {
    pub red: T,
    pub green: T,
    pub blue: T,
}

impl<T: Float> Rgb<T> {
    pub const BLACK: Self = Self { red: T::ZERO, green: T::ZERO, blue: T::ZERO };
    pub const WHITE: Self = Self { red: T::ONE, green: T::ONE, blue: T::ONE };

    pub fn new(red: T, green: T, blue: T) -> Self {
        Self { red, green, blue }
    }

    /// Decode a packed `0xRRGGBB` integer; anything above the low three bytes is ignored
    pub fn decode(code: u32) -> Self {
        let channel = |shift: u32| T::from_f64(((code >> shift) & 0xff) as f64) / T::from_f64(255.0);
        Self {
            red: channel(16),
            green: channel(8),
            blue: channel(0),
        }
    }

    /// Pack back into `0xRRGGBB`, clamping each channel to `[0, 1]`
    pub fn encode(&self) -> u32 {
        let byte = |c: T| (c.to_f64().clamp(0.0, 1.0) * 255.0).round() as u32;
        (byte(self.red) << 16) | (byte(self.green) << 8) | byte(self.blue)
    }

    pub fn to_array(self) -> [T; 3] {
        [self.red, self.green, self.blue]
    }
}

/// Free-function form of [`Rgb::decode`]
#[inline]
pub fn decode_rgb<T: Float>(code: u32) -> Rgb<T> {
    Rgb::decode(code)
}
