/*
 *  display/error.rs
 *
 *  QuadClock - four faces, one heartbeat
 *  (c) 2020-26 Stuart Hunter
 *
 *  Error types for the panel and the shape surface
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

use thiserror::Error;

/// Errors raised by a display driver
#[derive(Debug, Error)]
pub enum DisplayError {
    /// Hardware initialization failed
    #[error("Display initialization failed: {0}")]
    InitializationFailed(String),

    /// Pushing the framebuffer to the panel failed
    #[error("Display flush failed: {0}")]
    FlushFailed(String),

    /// Writing the framebuffer image to disk failed
    #[error("Snapshot write failed: {0}")]
    SnapshotFailed(#[from] std::io::Error),
}

/// Errors raised by a shape surface
///
/// Any of these is fatal to the animation; there is no degraded rendering.
#[derive(Debug, Error)]
pub enum SurfaceError {
    /// `append` past the capacity given at creation
    #[error("Surface is full ({max_slots} slots)")]
    Full { max_slots: usize },

    /// `replace` on a slot that was never appended
    #[error("Slot {slot} out of range (surface holds {len})")]
    SlotOutOfRange { slot: usize, len: usize },

    /// A primitive failed to rasterize into the target
    #[error("Drawing error: {0}")]
    Draw(String),

    /// The underlying panel rejected the frame
    #[error(transparent)]
    Display(#[from] DisplayError),
}
