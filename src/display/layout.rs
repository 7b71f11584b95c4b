/*
 *  display/layout.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Quadrant layout for the four clock faces
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

use crate::display::traits::DisplayCapabilities;

/// Number of clock faces on the panel
pub const FACE_COUNT: usize = 4;

/// Identifies one of the four faces, row-major from the top-left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FaceId(usize);

impl FaceId {
    pub const ALL: [FaceId; FACE_COUNT] = [FaceId(0), FaceId(1), FaceId(2), FaceId(3)];

    /// Zero-based position in row-major order
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for FaceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "face{}", self.0 + 1)
    }
}

/// Face origins and radius for a 2x2 grid of clocks
///
/// Each origin sits at the center of its quadrant; the radius is a quarter
/// of the display width. All arithmetic is integer floor division.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceLayout {
    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,

    /// Face centers: top-left, top-right, bottom-left, bottom-right
    pub origins: [Point; FACE_COUNT],

    /// Radius of every face background
    pub radius: u32,
}

impl FaceLayout {
    /// Lay out four faces on a `width` x `height` panel
    ///
    /// Coordinates saturate at `i32::MAX` for panels wider than screen space.
    pub fn new(width: u32, height: u32) -> Self {
        let coord = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
        let (qx, qy) = (coord(width / 4), coord(height / 4));
        let (rx, ry) = (qx.saturating_add(coord(width / 2)), qy.saturating_add(coord(height / 2)));

        Self {
            width,
            height,
            origins: [
                Point::new(qx, qy),
                Point::new(rx, qy),
                Point::new(qx, ry),
                Point::new(rx, ry),
            ],
            radius: width / 4,
        }
    }

    /// Layout for the given display capabilities
    pub fn for_display(caps: &DisplayCapabilities) -> Self {
        Self::new(caps.width, caps.height)
    }

    /// Origin of one face
    pub fn origin(&self, face: FaceId) -> Point {
        self.origins[face.index()]
    }

    /// Faces paired with their origins, in slot order
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, Point)> + '_ {
        FaceId::ALL.into_iter().map(move |f| (f, self.origin(f)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_240x240() {
        let layout = FaceLayout::new(240, 240);
        assert_eq!(
            layout.origins,
            [Point::new(60, 60), Point::new(180, 60), Point::new(60, 180), Point::new(180, 180)]
        );
        assert_eq!(layout.radius, 60);
    }

    #[test]
    fn test_layout_uses_floor_division() {
        let layout = FaceLayout::new(250, 130);
        // 250/4 = 62, 250/2 = 125, 130/4 = 32, 130/2 = 65
        assert_eq!(
            layout.origins,
            [Point::new(62, 32), Point::new(187, 32), Point::new(62, 97), Point::new(187, 97)]
        );
        assert_eq!(layout.radius, 62);
    }

    #[test]
    fn test_layout_saturates_on_huge_panel() {
        let layout = FaceLayout::new(u32::MAX, u32::MAX);
        let [tl, tr, bl, br] = layout.origins;
        assert_eq!(tl, Point::new(i32::MAX / 2, i32::MAX / 2));
        assert_eq!(tr, Point::new(i32::MAX, i32::MAX / 2));
        assert_eq!(bl, Point::new(i32::MAX / 2, i32::MAX));
        assert_eq!(br, Point::new(i32::MAX, i32::MAX));
    }

    #[test]
    fn test_layout_for_display() {
        let caps = DisplayCapabilities { width: 320, height: 240, name: "test" };
        let layout = FaceLayout::for_display(&caps);
        assert_eq!(layout.width, 320);
        assert_eq!(layout.origin(FaceId::ALL[3]), Point::new(240, 180));
    }

    #[test]
    fn test_faces_in_row_major_order() {
        let layout = FaceLayout::new(240, 240);
        let ids: Vec<String> = layout.faces().map(|(f, _)| f.to_string()).collect();
        assert_eq!(ids, ["face1", "face2", "face3", "face4"]);
    }
}
