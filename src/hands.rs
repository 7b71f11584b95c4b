/*
 *  hands.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Clock hand triangles
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

use embedded_graphics::prelude::Point;
use log::trace;

use crate::clock::{DIAL_UNITS, HandKind};
use crate::display::color::HexColor;
use crate::display::shapes::{Shape, filled_triangle};
use crate::geometry::{FULL_TURN_DEG, Rotate};

/// Geometry and color of one kind of hand, shared by all faces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSpec {
    pub kind: HandKind,
    /// Width of the triangle base at the face origin
    pub base_width: u32,
    /// Distance from the origin to the tip
    pub length: u32,
    pub color: HexColor,
}

impl HandSpec {
    /// Triangle for this hand at `origin`, pointing at `time_offset`
    pub fn shape(&self, origin: Point, time_offset: f64) -> Shape {
        make_hand(origin, self.base_width, self.length, time_offset, self.color)
    }
}

/// The three hand specs used on every face
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HandSet {
    pub hour: HandSpec,
    pub minute: HandSpec,
    pub second: HandSpec,
}

impl HandSet {
    /// Default hands for a panel `width` pixels wide
    ///
    /// Lengths scale with the width: second w/4, minute w/6, hour w/8.
    pub fn for_width(width: u32) -> Self {
        Self {
            hour: HandSpec {
                kind: HandKind::Hour,
                base_width: 5,
                length: width / 8,
                color: HexColor::WHITE,
            },
            minute: HandSpec {
                kind: HandKind::Minute,
                base_width: 5,
                length: width / 6,
                color: HexColor::WHITE,
            },
            second: HandSpec {
                kind: HandKind::Second,
                base_width: 3,
                length: width / 4,
                color: HexColor::RED,
            },
        }
    }

    pub fn get(&self, kind: HandKind) -> &HandSpec {
        match kind {
            HandKind::Hour => &self.hour,
            HandKind::Minute => &self.minute,
            HandKind::Second => &self.second,
        }
    }
}

/// Rotation in degrees for a position on the 60-unit dial
pub fn dial_angle(time_offset: f64) -> f64 {
    FULL_TURN_DEG * time_offset / DIAL_UNITS
}

/// Corners of a hand: left base, right base, tip
///
/// The hand is built pointing straight up from `origin` and then turned
/// clockwise by the dial angle of `time_offset`. Sizes beyond `i32::MAX`
/// saturate, so an oversized hand still points away from the origin.
pub fn hand_vertices(origin: Point, base_width: u32, length: u32, time_offset: f64) -> [Point; 3] {
    let half_base = i32::try_from(base_width / 2).unwrap_or(i32::MAX);
    let length = i32::try_from(length).unwrap_or(i32::MAX);
    let angle = dial_angle(time_offset);

    let a = Point::new(origin.x.saturating_sub(half_base), origin.y).rotated(angle, origin);
    let b = Point::new(origin.x.saturating_add(half_base), origin.y).rotated(angle, origin);
    let c = Point::new(origin.x, origin.y.saturating_sub(length)).rotated(angle, origin);

    [a, b, c]
}

/// Filled and outlined hand triangle in `color`
pub fn make_hand(origin: Point, base_width: u32, length: u32, time_offset: f64, color: HexColor) -> Shape {
    let [a, b, c] = hand_vertices(origin, base_width, length, time_offset);
    trace!("hand at {:?} t={:.4}: {:?} {:?} {:?}", origin, time_offset, a, b, c);
    filled_triangle(a.x, a.y, b.x, b.y, c.x, c.y, color, color)
}
