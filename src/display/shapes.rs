/*
 *  display/shapes.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Filled shape primitives held by a surface
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

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, PrimitiveStyle, PrimitiveStyleBuilder, Styled, Triangle};

use crate::display::color::HexColor;

/// A styled primitive the surface can hold in a slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Circle(Styled<Circle, PrimitiveStyle<Rgb888>>),
    Triangle(Styled<Triangle, PrimitiveStyle<Rgb888>>),
}

impl Shape {
    /// Triangle corners, `None` for circles
    pub fn vertices(&self) -> Option<[Point; 3]> {
        match self {
            Shape::Triangle(t) => Some(t.primitive.vertices),
            Shape::Circle(_) => None,
        }
    }

    /// Fill color of the shape
    pub fn fill_color(&self) -> Option<Rgb888> {
        match self {
            Shape::Circle(c) => c.style.fill_color,
            Shape::Triangle(t) => t.style.fill_color,
        }
    }
}

impl Drawable for Shape {
    type Color = Rgb888;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        match self {
            Shape::Circle(c) => c.draw(target),
            Shape::Triangle(t) => t.draw(target),
        }
    }
}

fn fill_and_outline(fill: HexColor, outline: HexColor) -> PrimitiveStyle<Rgb888> {
    PrimitiveStyleBuilder::new()
        .fill_color(fill.to_rgb888())
        .stroke_color(outline.to_rgb888())
        .stroke_width(1)
        .build()
}

/// Filled circle centered on (`cx`, `cy`)
///
/// A radius of `r` covers `2r + 1` pixels across, so the center pixel is
/// exactly on the given coordinate.
pub fn filled_circle(cx: i32, cy: i32, radius: u32, fill: HexColor, outline: HexColor) -> Shape {
    let diameter = radius * 2 + 1;
    Shape::Circle(
        Circle::with_center(Point::new(cx, cy), diameter).into_styled(fill_and_outline(fill, outline)),
    )
}

/// Filled triangle through three integer vertices
#[allow(clippy::too_many_arguments)]
pub fn filled_triangle(
    x1: i32,
    y1: i32,
    x2: i32,
    y2: i32,
    x3: i32,
    y3: i32,
    fill: HexColor,
    outline: HexColor,
) -> Shape {
    Shape::Triangle(
        Triangle::new(Point::new(x1, y1), Point::new(x2, y2), Point::new(x3, y3))
            .into_styled(fill_and_outline(fill, outline)),
    )
}
