/*
 *  geometry.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Integer point rotation for clock hand geometry
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

//! Rotation of integer screen points about an arbitrary center.
//!
//! Screen space has y growing downward, so a positive angle turns a point
//! clockwise on the panel. Results are truncated toward zero, never rounded.

use embedded_graphics::prelude::Point;

/// Degrees in a full turn.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Rotation about a center, returning a new point.
pub trait Rotate {
    /// Rotate `self` by `degrees` about `center`.
    fn rotated(self, degrees: f64, center: Point) -> Self;
}

impl Rotate for Point {
    fn rotated(self, degrees: f64, center: Point) -> Self {
        rotate(self, degrees, center)
    }
}

/// Rotate `point` by `degrees` about `center`, truncating both coordinates.
///
/// The angle is reduced into [0, 360) first so whole turns come back exact.
pub fn rotate(point: Point, degrees: f64, center: Point) -> Point {
    let turn = degrees.rem_euclid(FULL_TURN_DEG);
    if turn == 0.0 {
        return point;
    }

    let (s, c) = turn.to_radians().sin_cos();
    let dx = f64::from(point.x - center.x);
    let dy = f64::from(point.y - center.y);

    let x_new = dx * c - dy * s;
    let y_new = dx * s + dy * c;

    Point::new(
        (x_new + f64::from(center.x)) as i32,
        (y_new + f64::from(center.y)) as i32,
    )
}
