/*
 *  display/surface.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Shape lists and the panel-backed surface
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
use embedded_graphics::prelude::*;
use log::trace;

use crate::display::error::SurfaceError;
use crate::display::shapes::Shape;
use crate::display::traits::{DisplayDriver, Surface};

/// Bounded, ordered list of shapes
///
/// Holds no pixels; drawing replays every shape in slot order.
#[derive(Debug, Clone)]
pub struct ShapeList {
    shapes: Vec<Shape>,
    max_slots: usize,
}

impl ShapeList {
    /// Create an empty list that accepts at most `max_slots` shapes
    pub fn new(max_slots: usize) -> Self {
        Self { shapes: Vec::with_capacity(max_slots), max_slots }
    }

    /// Draw every shape, lowest slot first
    pub fn draw<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb888>,
    {
        for shape in &self.shapes {
            shape.draw(target)?;
        }
        Ok(())
    }
}

impl Surface for ShapeList {
    fn append(&mut self, shape: Shape) -> Result<usize, SurfaceError> {
        if self.shapes.len() >= self.max_slots {
            return Err(SurfaceError::Full { max_slots: self.max_slots });
        }
        self.shapes.push(shape);
        Ok(self.shapes.len() - 1)
    }

    fn replace(&mut self, slot: usize, shape: Shape) -> Result<(), SurfaceError> {
        let len = self.shapes.len();
        let entry = self
            .shapes
            .get_mut(slot)
            .ok_or(SurfaceError::SlotOutOfRange { slot, len })?;
        *entry = shape;
        Ok(())
    }

    fn get(&self, slot: usize) -> Option<&Shape> {
        self.shapes.get(slot)
    }

    fn len(&self) -> usize {
        self.shapes.len()
    }
}

/// Shape list bound to a panel
///
/// `present` clears the panel framebuffer to black, redraws the whole list and
/// flushes, so a replaced slot never leaves stale pixels behind.
pub struct DisplaySurface<D> {
    shapes: ShapeList,
    driver: D,
    frames: u64,
}

impl<D> DisplaySurface<D>
where
    D: DisplayDriver + DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    pub fn new(driver: D, max_slots: usize) -> Self {
        Self {
            shapes: ShapeList::new(max_slots),
            driver,
            frames: 0,
        }
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn into_driver(self) -> D {
        self.driver
    }
}

impl<D> Surface for DisplaySurface<D>
where
    D: DisplayDriver + DrawTarget<Color = Rgb888>,
    D::Error: core::fmt::Debug,
{
    fn append(&mut self, shape: Shape) -> Result<usize, SurfaceError> {
        self.shapes.append(shape)
    }

    fn replace(&mut self, slot: usize, shape: Shape) -> Result<(), SurfaceError> {
        self.shapes.replace(slot, shape)
    }

    fn get(&self, slot: usize) -> Option<&Shape> {
        self.shapes.get(slot)
    }

    fn len(&self) -> usize {
        self.shapes.len()
    }

    fn present(&mut self) -> Result<(), SurfaceError> {
        DrawTarget::clear(&mut self.driver, Rgb888::BLACK)
            .map_err(|e| SurfaceError::Draw(format!("{:?}", e)))?;
        self.shapes
            .draw(&mut self.driver)
            .map_err(|e| SurfaceError::Draw(format!("{:?}", e)))?;
        DisplayDriver::flush(&mut self.driver)?;
        self.frames += 1;
        trace!("presented frame {} ({} shapes)", self.frames, self.shapes.len());
        Ok(())
    }
}
