/*
 *  display/color.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  24-bit color values as they appear in configuration
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};
use serde::{Deserialize, Serialize};

/// Packed 0xRRGGBB color
///
/// Configuration files carry colors as plain integers (`0xFF0000` in YAML is
/// read as an int), this wraps them and converts to the panel color type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HexColor(pub u32);

impl HexColor {
    /// Largest value that fits in 24 bits
    pub const MAX: u32 = 0x00FF_FFFF;

    pub const WHITE: HexColor = HexColor(0xFFFFFF);
    pub const RED: HexColor = HexColor(0xFF0000);
    /// Dark gray used for the face backgrounds
    pub const FACE: HexColor = HexColor(0x202020);

    /// True when the value has no bits above 0xFFFFFF
    pub fn is_valid(&self) -> bool {
        self.0 <= Self::MAX
    }

    pub fn red(&self) -> u8 {
        ((self.0 >> 16) & 0xFF) as u8
    }

    pub fn green(&self) -> u8 {
        ((self.0 >> 8) & 0xFF) as u8
    }

    pub fn blue(&self) -> u8 {
        (self.0 & 0xFF) as u8
    }

    /// Convert to the embedded-graphics 24-bit color
    pub fn to_rgb888(&self) -> Rgb888 {
        Rgb888::new(self.red(), self.green(), self.blue())
    }
}

impl From<HexColor> for Rgb888 {
    fn from(c: HexColor) -> Self {
        c.to_rgb888()
    }
}

impl From<Rgb888> for HexColor {
    fn from(c: Rgb888) -> Self {
        HexColor((u32::from(c.r()) << 16) | (u32::from(c.g()) << 8) | u32::from(c.b()))
    }
}

impl std::fmt::Display for HexColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}
