/*
 *  display/mod.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Display subsystem - panels, shapes and the slot surface
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

// Core trait definitions
pub mod traits;
pub mod error;
pub mod color;

// Primitives and the surface that holds them
pub mod shapes;
pub mod surface;

// Display drivers
pub mod drivers;

// Face placement
pub mod layout;

// Re-exports for convenience
pub use traits::{DisplayDriver, DisplayCapabilities, Surface};
pub use error::{DisplayError, SurfaceError};
pub use color::HexColor;
pub use shapes::{Shape, filled_circle, filled_triangle};
pub use surface::{ShapeList, DisplaySurface};
pub use layout::{FaceLayout, FaceId, FACE_COUNT};
pub use drivers::VirtualPanel;
