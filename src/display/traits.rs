/*
 *  display/traits.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Core trait definitions for the panel and the shape surface
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

use crate::display::error::{DisplayError, SurfaceError};
use crate::display::shapes::Shape;

/// Display capabilities and metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayCapabilities {
    /// Display width in pixels
    pub width: u32,

    /// Display height in pixels
    pub height: u32,

    /// Human readable panel name for logging
    pub name: &'static str,
}

/// Minimal panel abstraction - every display driver implements this
///
/// Drawing goes through `embedded_graphics::DrawTarget`, which drivers
/// implement directly on themselves; this trait covers the lifecycle.
pub trait DisplayDriver {
    /// Returns the capabilities of this display
    fn capabilities(&self) -> &DisplayCapabilities;

    /// Returns the display dimensions as (width, height)
    fn dimensions(&self) -> (u32, u32) {
        let caps = self.capabilities();
        (caps.width, caps.height)
    }

    /// Initialize the display hardware
    fn init(&mut self) -> Result<(), DisplayError>;

    /// Push the current framebuffer to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;

    /// Blank the framebuffer
    fn clear(&mut self) -> Result<(), DisplayError>;
}

/// Ordered list of shapes with in-place replacement by slot index
///
/// Slots are handed out by `append` in insertion order, starting at 0, and
/// stay stable for the lifetime of the surface. Later slots draw over
/// earlier ones.
pub trait Surface {
    /// Add a shape at the end of the list, returning its slot
    fn append(&mut self, shape: Shape) -> Result<usize, SurfaceError>;

    /// Swap the shape held in `slot`
    fn replace(&mut self, slot: usize, shape: Shape) -> Result<(), SurfaceError>;

    /// Shape currently held in `slot`
    fn get(&self, slot: usize) -> Option<&Shape>;

    /// Number of occupied slots
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Make the current list visible; surfaces without a panel do nothing
    fn present(&mut self) -> Result<(), SurfaceError> {
        Ok(())
    }
}
